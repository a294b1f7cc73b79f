//! Parse command implementation.
//!
//! The parse command:
//! 1. Reads debug output from a file or stdin
//! 2. Parses it into request and response records
//! 3. Writes the result as JSON to a file or stdout

use crate::output::{format_summary, result_to_string, write_result};
use crate::parser::{parse_debug_output, ParseResult};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// File holding the debug output (None = stdin)
    pub input: Option<PathBuf>,

    /// Output path for the JSON result (None = stdout)
    pub output: Option<PathBuf>,

    /// Write JSON on a single line
    pub compact: bool,

    /// Print a text summary (stderr when the JSON goes to stdout)
    pub print_summary: bool,
}

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read failures
/// * Malformed debug output or non-JSON payloads
/// * File write errors
pub fn execute_parse(args: ParseArgs) -> Result<()> {
    let start_time = Instant::now();

    let raw = read_input(args.input.as_deref())?;
    debug!("Read {} bytes of debug output", raw.len());

    let result = parse_debug_output(&raw).context("Failed to parse debug output")?;

    info!(
        "Parsed {} {} -> {} {}",
        result.request.method, result.request.path, result.response.status, result.response.message
    );

    match &args.output {
        Some(path) => {
            write_result(&result, path, args.compact).context("Failed to write result JSON")?;
            info!("✓ Result written to: {}", path.display());
        }
        None => {
            let json = result_to_string(&result, args.compact)
                .context("Failed to serialize result")?;
            println!("{}", json);
        }
    }

    if args.print_summary {
        let report = summary_report(&result);
        if summary_to_stderr(&args) {
            eprintln!("{}", report);
        } else {
            println!("{}", report);
        }
    }

    let elapsed = start_time.elapsed();
    debug!("Parse completed in {:.3}s", elapsed.as_secs_f64());

    Ok(())
}

/// Banner-wrapped text summary of a parse result
fn summary_report(result: &ParseResult) -> String {
    let rule = "=".repeat(80);
    format!(
        "\n{rule}\nDEBUG OUTPUT SUMMARY\n{rule}\n{}\n{rule}",
        format_summary(result)
    )
}

/// stdout carries the JSON when no output file is given and must stay parseable
fn summary_to_stderr(args: &ParseArgs) -> bool {
    args.output.is_none()
}

/// Read debug output from a file, or from stdin when no path is given
///
/// **Private** - internal helper for execute_parse
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            info!("Reading debug output from: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            info!("Reading debug output from stdin");
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read debug output from stdin")?;
            Ok(raw)
        }
    }
}

/// Validate parse arguments
///
/// **Public** - can be called before execute_parse for early validation
pub fn validate_args(args: &ParseArgs) -> Result<()> {
    if let Some(input) = &args.input {
        if input.as_os_str().is_empty() {
            anyhow::bail!("Input path cannot be empty");
        }

        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        if !input.is_file() {
            anyhow::bail!("Input path is not a file: {}", input.display());
        }
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }

        if output.is_dir() {
            anyhow::bail!("Output path is a directory: {}", output.display());
        }

        if args.input.as_ref() == Some(output) {
            anyhow::bail!("Output path must differ from the input path");
        }
    }

    Ok(())
}
