//! Debug output parsing and schema definitions.
//!
//! This module handles:
//! - Splitting raw debug output into lines and segments
//! - Reducing the request and response segments
//! - Decoding JSON payloads
//! - Defining output schema

pub mod debug_output;
pub mod request;
pub mod response;
pub mod schema;
pub mod trace;

// Re-export main types
pub use debug_output::{parse_debug_output, DebugOutput};
pub use schema::{ParseResult, Request, Response};
pub use trace::{clean_line, Segment, SegmentLine, Trace};
