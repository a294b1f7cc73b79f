//! Output writers for parse results.
//!
//! This module handles presenting results:
//! - JSON (pretty and compact), to files or strings
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_result, result_to_string, write_result};
pub use summary::format_summary;
