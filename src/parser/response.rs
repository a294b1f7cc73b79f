//! Response side of the debug output.
//!
//! The response segment starts at the first inbound line and stops at the
//! *last* `read N bytes` line. Chunked bodies print several read progress
//! lines; only the final one marks the end of the response.

use super::debug_output::decode_payload;
use super::schema::Response;
use super::trace::{Segment, SegmentLine, Trace};
use crate::utils::config::{INBOUND_MARKER, READING_MARKER, READ_MARKER};
use crate::utils::error::ParseError;
use log::debug;
use std::ops::Range;

/// Locate the response segment.
///
/// The end is the *last* `read ` line, searching backward from the end of
/// the trace. Without one, the segment runs to the end of the trace.
pub fn locate_response(trace: &Trace<'_>) -> Result<Range<usize>, ParseError> {
    let start = trace.first_index_of(INBOUND_MARKER).ok_or_else(|| {
        ParseError::MalformedTrace(format!("no line starts with {:?}", INBOUND_MARKER))
    })?;

    let end = match trace.last_index_of(READ_MARKER) {
        Some(end) if end <= start => {
            return Err(ParseError::MalformedTrace(format!(
                "last {:?} line ({}) comes before the response on line {}",
                READ_MARKER,
                end + 1,
                start + 1
            )));
        }
        Some(end) => end,
        None => {
            debug!("No {:?} line found, response runs to end of trace", READ_MARKER);
            trace.len()
        }
    };

    Ok(start..end)
}

/// Reduce a response segment into a [`Response`]
///
/// # Errors
/// * `ParseError::MalformedTrace` - status line is not `PROTOCOL STATUS MESSAGE...`,
///   or there are no header lines
/// * `ParseError::PayloadDecode` - body is present but not JSON
pub fn reduce_response(segment: &Segment<'_>) -> Result<Response, ParseError> {
    let lines: Vec<SegmentLine> = segment
        .lines()
        .filter(|line| !line.text.is_empty())
        .collect();

    let status_line = lines
        .first()
        .ok_or_else(|| ParseError::MalformedTrace("response segment is empty".to_string()))?;

    let (protocol, status, message) = split_status_line(&status_line.text)?;

    let headers: Vec<String> = lines[1..]
        .iter()
        .take_while(|line| progress_bytes(line, READING_MARKER, " bytes...").is_none())
        .map(|line| line.text.clone())
        .collect();

    if headers.is_empty() {
        return Err(ParseError::MalformedTrace(
            "response has no header lines".to_string(),
        ));
    }

    // Body starts after the status line, the headers and the first "reading" line
    let body_start = (headers.len() + 2).min(lines.len());
    let payload_text: String = lines[body_start..]
        .iter()
        .filter(|line| !is_progress_line(line))
        .map(|line| line.text.as_str())
        .collect();

    debug!(
        "Response: {} {} with {} headers, {} payload bytes",
        status,
        message,
        headers.len(),
        payload_text.len()
    );

    Ok(Response {
        protocol,
        status,
        message,
        headers,
        payload: decode_payload(&payload_text)?,
    })
}

/// Progress lines are printed by the client itself, never prefixed with the
/// inbound marker: `reading N bytes...` before a chunk, `read N bytes` after.
fn is_progress_line(line: &SegmentLine<'_>) -> bool {
    progress_bytes(line, READING_MARKER, " bytes...").is_some()
        || progress_bytes(line, READ_MARKER, " bytes").is_some()
}

/// Byte count of an unmarked `<prefix><digits><suffix>` line, matched on the
/// raw text so quoted body lines are never mistaken for progress.
fn progress_bytes(line: &SegmentLine<'_>, prefix: &str, suffix: &str) -> Option<u64> {
    if line.marked {
        return None;
    }

    let digits = line
        .raw
        .trim_end_matches('\r')
        .strip_prefix(prefix)?
        .trim_start_matches(' ')
        .strip_suffix(suffix)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn split_status_line(line: &str) -> Result<(String, String, String), ParseError> {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(protocol), Some(status)) => {
            let message = tokens.collect::<Vec<_>>().join(" ");
            if message.is_empty() {
                return Err(ParseError::MalformedTrace(format!(
                    "status line {:?} has no reason phrase",
                    line
                )));
            }
            Ok((protocol.to_string(), status.to_string(), message))
        }
        _ => Err(ParseError::MalformedTrace(format!(
            "status line {:?} is not PROTOCOL STATUS MESSAGE",
            line
        ))),
    }
}
