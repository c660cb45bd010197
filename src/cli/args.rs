//! Command line argument parsing for the brickseek CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// brickseek - query understanding and ranking for LEGO catalog search
#[derive(Parser, Debug, Clone)]
#[command(name = "brickseek")]
#[command(about = "Query understanding and result ranking for LEGO catalog search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BrickseekArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BrickseekArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a query and print the extracted intent
    Analyze(AnalyzeArgs),

    /// Print the candidate queries generated for a query
    Expand(ExpandArgs),

    /// Search a JSONL catalog file and print ranked results
    Search(SearchArgs),
}

/// Arguments for query analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for query expansion
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for searching a local catalog
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the catalog file (JSONL, one record per line)
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog_file: PathBuf,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to print
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Fan out candidate queries across threads
    #[arg(long)]
    pub parallel: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
