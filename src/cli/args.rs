//! Command line argument parsing for the abjad CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Abjad - letter values and elements of Arabic text
#[derive(Parser, Debug, Clone)]
#[command(name = "abjad")]
#[command(about = "Abjad letter-value sums and elemental classification for Arabic text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AbjadArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ABJAD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the reference tables (overrides the config file)
    #[arg(long, value_name = "DIR", env = "ABJAD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AbjadArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Break a single word down into letter values and elements
    Word(WordArgs),

    /// Summarize every word of a text
    Text(TextArgs),

    /// Break a word or text down into spirit/mind/self values
    Triad(TriadArgs),

    /// Write the per-word summary of a text as CSV
    Export(ExportArgs),

    /// Show where each reference table was loaded from
    Tables,
}

/// Arguments for single-word analysis
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// The word to analyze ("-" reads stdin)
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for multi-word analysis
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// The text to analyze ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Treat the whole text as one word instead of summarizing word by word
    #[arg(long)]
    pub whole: bool,
}

/// Arguments for triad analysis
#[derive(Parser, Debug, Clone)]
pub struct TriadArgs {
    /// The word or text to analyze ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also show the triad reference table
    #[arg(long)]
    pub show_table: bool,
}

/// Arguments for CSV export
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// The text to summarize ("-" reads stdin)
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
