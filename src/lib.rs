//! HTTP Debug Output
//!
//! Turns the trace printed by Ruby's `Net::HTTP#set_debug_output` into
//! structured request and response records.
//!
//! ```
//! use http_debug_output::parse_debug_output;
//!
//! let raw = "<- \"GET /x HTTP/1.1\r\nHost: a\r\n\r\n\"\n\
//!            -> \"HTTP/1.1 200 OK\r\n\"\n\
//!            -> \"Host: a\r\n\"\n\
//!            -> \"\r\n\"\n\
//!            reading 2 bytes...\n\
//!            -> \"{}\"\n\
//!            read 2 bytes";
//!
//! let result = parse_debug_output(raw).unwrap();
//! assert_eq!(result.request.method, "GET");
//! assert_eq!(result.response.status, "200");
//! ```
//!
//! The `http-debug-output` binary wraps the parser for use on log files.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{parse_debug_output, DebugOutput, ParseResult, Request, Response};
pub use utils::error::ParseError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
