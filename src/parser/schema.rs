//! Output schema definitions for parsed debug output.
//!
//! These are the records handed back to callers and written as JSON by the CLI.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level result: one request and the response it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub request: Request,
    pub response: Response,
}

/// Request sent by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (e.g., "GET")
    pub method: String,

    /// Request target as written on the request line
    pub path: String,

    /// Protocol version (e.g., "HTTP/1.1")
    pub protocol: String,

    /// Header lines in wire order, duplicates kept
    pub headers: Vec<String>,

    /// Decoded JSON body, `None` when no body was sent
    #[serde(default)]
    pub payload: Option<Value>,
}

/// Response received from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub protocol: String,

    /// Status code, kept as text (e.g., "404")
    pub status: String,

    /// Reason phrase (e.g., "Not Found")
    pub message: String,

    pub headers: Vec<String>,

    #[serde(default)]
    pub payload: Option<Value>,
}

impl Request {
    /// Value of the first header named `name`, compared case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

impl Response {
    /// Value of the first header named `name`, compared case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [String], name: &str) -> Option<&'a str> {
    headers.iter().find_map(|line| {
        line.split_once(':').and_then(|(key, value)| {
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    })
}
