//! Defines the command-line interface for the application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "max-finder",
    version,
    about = "Print the maximum of the integers found in a line of input."
)]
pub struct Cli {
    /// Read the line from the first line of this file. [default: reads from stdin]
    #[arg(short, long, value_name = "FILE_PATH")]
    pub file: Option<PathBuf>,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also report the tokens that were not valid integers.
    #[arg(long)]
    pub show_rejected: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable result line, preceded by a prompt.
    Text,
    /// A single JSON object on stdout.
    Json,
}
