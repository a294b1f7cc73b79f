//! Main parser for Net::HTTP debug output.
//!
//! Splits raw debug output into a request segment and a response segment and
//! reduces each one into a structured record.

use super::request::{locate_request, reduce_request};
use super::response::{locate_response, reduce_response};
use super::schema::{ParseResult, Request, Response};
use super::trace::Trace;
use crate::utils::config::{INBOUND_MARKER, OUTBOUND_MARKER};
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;

/// Debug output of one request/response exchange, split into lines
#[derive(Debug, Clone)]
pub struct DebugOutput<'a> {
    trace: Trace<'a>,
}

impl<'a> DebugOutput<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            trace: Trace::new(raw),
        }
    }

    /// Parse both sides of the exchange
    pub fn parse(&self) -> Result<ParseResult, ParseError> {
        Ok(ParseResult {
            request: self.parse_request()?,
            response: self.parse_response()?,
        })
    }

    pub fn parse_request(&self) -> Result<Request, ParseError> {
        let range = locate_request(&self.trace)?;
        debug!("Request segment: lines {}..{}", range.start + 1, range.end);
        reduce_request(&self.trace.segment(range, OUTBOUND_MARKER))
    }

    pub fn parse_response(&self) -> Result<Response, ParseError> {
        let range = locate_response(&self.trace)?;
        debug!("Response segment: lines {}..{}", range.start + 1, range.end);
        reduce_response(&self.trace.segment(range, INBOUND_MARKER))
    }
}

/// Parse raw debug output
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Text written by `Net::HTTP#set_debug_output` for one exchange
///
/// # Returns
/// Request and response records
///
/// # Errors
/// * `ParseError::MalformedTrace` - Markers missing or a segment has an unexpected shape
/// * `ParseError::PayloadDecode` - A non-empty body is not valid JSON
pub fn parse_debug_output(raw: &str) -> Result<ParseResult, ParseError> {
    debug!("Parsing {} bytes of debug output", raw.len());
    DebugOutput::new(raw).parse()
}

/// Decode reconstructed body text; empty text means no body
pub(crate) fn decode_payload(text: &str) -> Result<Option<Value>, ParseError> {
    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(text)?))
}
