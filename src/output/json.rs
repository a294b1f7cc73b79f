//! JSON result output writer.
//!
//! Writes ParseResult structs to JSON files or strings.

use crate::parser::schema::ParseResult;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a parse result to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `result` - Parsed request/response to write
/// * `output_path` - Path to output JSON file
/// * `compact` - Write on a single line instead of pretty printing
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_result(
    result: &ParseResult,
    output_path: impl AsRef<Path>,
    compact: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing result to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    let written = if compact {
        serde_json::to_writer(writer, result)
    } else {
        serde_json::to_writer_pretty(writer, result)
    };
    written.map_err(OutputError::SerializationFailed)?;

    info!(
        "Result written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a parse result to a string
pub fn result_to_string(result: &ParseResult, compact: bool) -> Result<String, OutputError> {
    let text = if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    };
    text.map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a parse result from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_result(input_path: impl AsRef<Path>) -> Result<ParseResult, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading result from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let result: ParseResult =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Result loaded: {} {} -> {}",
        result.request.method, result.request.path, result.response.status
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Request, Response};
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn create_test_result() -> ParseResult {
        ParseResult {
            request: Request {
                method: "POST".to_string(),
                path: "/posts".to_string(),
                protocol: "HTTP/1.1".to_string(),
                headers: vec!["Content-Type: application/json".to_string()],
                payload: Some(json!({"title": "foo"})),
            },
            response: Response {
                protocol: "HTTP/1.1".to_string(),
                status: "201".to_string(),
                message: "Created".to_string(),
                headers: vec!["Content-Length: 2".to_string()],
                payload: None,
            },
        }
    }

    #[test]
    fn test_write_and_read_result() {
        let result = create_test_result();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_result(&result, path, false).unwrap();
        let loaded = read_result(path).unwrap();

        assert_eq!(loaded, result);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let result = create_test_result();
        let text = result_to_string(&result, true).unwrap();

        assert!(!text.contains('\n'));
        assert!(text.contains("\"payload\":null"));
    }

    #[test]
    fn test_pretty_output_is_multi_line() {
        let text = result_to_string(&create_test_result(), false).unwrap();
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/result.json");

        write_result(&create_test_result(), &nested_path, true).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_result_rejects_other_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), r#"{"version": "1.0.0"}"#).unwrap();

        assert!(matches!(
            read_result(temp_file.path()),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
