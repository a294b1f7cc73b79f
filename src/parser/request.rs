//! Request side of the debug output.
//!
//! The request segment starts at the first outbound line and stops at the
//! first inbound line.

use super::debug_output::decode_payload;
use super::schema::Request;
use super::trace::{Segment, Trace};
use crate::utils::config::{INBOUND_MARKER, OUTBOUND_MARKER};
use crate::utils::error::ParseError;
use log::debug;
use std::ops::Range;

/// Locate the request segment.
///
/// The end is the *first* inbound line, searching forward, so the segment
/// never runs past the start of the response.
pub fn locate_request(trace: &Trace<'_>) -> Result<Range<usize>, ParseError> {
    let start = trace.first_index_of(OUTBOUND_MARKER).ok_or_else(|| {
        ParseError::MalformedTrace(format!("no line starts with {:?}", OUTBOUND_MARKER))
    })?;

    let end = trace.first_index_of(INBOUND_MARKER).ok_or_else(|| {
        ParseError::MalformedTrace(format!("no line starts with {:?}", INBOUND_MARKER))
    })?;

    if end <= start {
        return Err(ParseError::MalformedTrace(format!(
            "response starts on line {} before the request on line {}",
            end + 1,
            start + 1
        )));
    }

    Ok(start..end)
}

/// Reduce a request segment into a [`Request`]
///
/// # Errors
/// * `ParseError::MalformedTrace` - request line is not `METHOD PATH PROTOCOL`,
///   or there are no header lines
/// * `ParseError::PayloadDecode` - body is present but not JSON
pub fn reduce_request(segment: &Segment<'_>) -> Result<Request, ParseError> {
    let lines: Vec<String> = segment.lines().map(|line| line.text).collect();

    let request_line = lines
        .first()
        .ok_or_else(|| ParseError::MalformedTrace("request segment is empty".to_string()))?;

    let (method, path, protocol) = split_request_line(request_line)?;

    let headers: Vec<String> = lines[1..]
        .iter()
        .take_while(|line| !line.is_empty())
        .cloned()
        .collect();

    if headers.is_empty() {
        return Err(ParseError::MalformedTrace(
            "request has no header lines".to_string(),
        ));
    }

    // Skips the request line and headers; the blank separator adds nothing
    let payload_text: String = lines[headers.len() + 1..].concat();

    debug!(
        "Request: {} {} with {} headers, {} payload bytes",
        method,
        path,
        headers.len(),
        payload_text.len()
    );

    Ok(Request {
        method,
        path,
        protocol,
        headers,
        payload: decode_payload(&payload_text)?,
    })
}

fn split_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [method, path, protocol] => Ok((
            method.to_string(),
            path.to_string(),
            protocol.to_string(),
        )),
        _ => Err(ParseError::MalformedTrace(format!(
            "request line {:?} is not METHOD PATH PROTOCOL",
            line
        ))),
    }
}
