use crate::output::{format_summary, read_result};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a result JSON file
pub fn validate_result_file(file_path: &Path) -> Result<()> {
    println!("Validating result: {}", file_path.display());

    let result = read_result(file_path)?;

    println!("✓ Valid result JSON");
    println!("{}", format_summary(&result));

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("HTTP Debug Output Result Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  request: object");
        println!("    method: string       - HTTP method (e.g., 'GET')");
        println!("    path: string         - Request target");
        println!("    protocol: string     - Protocol version (e.g., 'HTTP/1.1')");
        println!("    headers: array       - Header lines in wire order");
        println!("    payload: any?        - Decoded JSON body, null if none");
        println!("  response: object");
        println!("    protocol: string     - Protocol version");
        println!("    status: string       - Status code (e.g., '200')");
        println!("    message: string      - Reason phrase (e.g., 'OK')");
        println!("    headers: array       - Header lines in wire order");
        println!("    payload: any?        - Decoded JSON body, null if none");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("HTTP Debug Output v{}", crate::VERSION);
    println!("Result Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Parses Net::HTTP debug output into request and response records.");
}
