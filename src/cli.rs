//! CLI interface for cv-rater

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-rater")]
#[command(about = "Terminal client for ATS compatibility scoring of CVs")]
#[command(
    long_about = "Upload a CV to an analysis service and view its ATS compatibility score, category breakdown, and feedback in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a CV and display its analysis
    Analyze {
        /// Path to the CV file (PDF, DOC, DOCX), or - to read from stdin
        file: PathBuf,

        /// File name to report when reading from stdin
        #[arg(long)]
        file_name: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the analysis to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Print the final score without the counting animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Fetch a previous analysis by id
    Fetch {
        /// Analysis id returned by a prior upload
        id: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the analysis to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Print the final score without the counting animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Check whether the analysis service is reachable
    Health,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
