//! HTTP Debug Output CLI
//!
//! Parses the trace printed by `Net::HTTP#set_debug_output` and emits the
//! request and response as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use http_debug_output::commands::{
    display_schema, display_version, execute_parse, validate_args, validate_result_file, ParseArgs,
};

/// HTTP Debug Output - structured view of Net::HTTP debug traces
#[derive(Parser, Debug)]
#[command(name = "http-debug-output")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse debug output into request/response JSON
    Parse {
        /// File holding the debug output (reads stdin if omitted)
        #[arg(short, long, env = "HTTP_DEBUG_OUTPUT_FILE")]
        input: Option<PathBuf>,

        /// Output path for the JSON result (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a result JSON file
    Validate {
        /// Path to result JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; keep them quiet by default so stdout stays valid JSON
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
            summary,
        } => {
            let args = ParseArgs {
                input,
                output,
                compact,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_result_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
