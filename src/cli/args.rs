//! Command line argument parsing for the Remez CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remez - gematria calculator and Torah corpus search
#[derive(Parser, Debug, Clone)]
#[command(name = "remez")]
#[command(about = "A gematria calculator and Torah corpus search tool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RemezArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RemezArgs {
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

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the gematria value of a text
    Encode(EncodeArgs),

    /// Search a corpus for matches of a value
    Search(SearchArgs),

    /// Scan a corpus for word trends
    Trend(TrendArgs),

    /// List the section catalog
    Sections(SectionsArgs),
}

/// Arguments for encoding
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// Hebrew text or a literal number
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus JSON file (bucketed database or verse array)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Query: Hebrew text or a literal number
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Bridge mode: search for the gap between QUERY and this target
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Apply the ±1 Colel tolerance
    #[arg(short = 'c', long)]
    pub colel: bool,

    /// Keep only single-word phrase matches
    #[arg(short = 's', long)]
    pub single_word: bool,

    /// Restrict results to one named section
    #[arg(long, value_name = "SECTION")]
    pub section: Option<String>,

    /// Maximum number of results to print
    #[arg(short, long, default_value = "25")]
    pub limit: usize,
}

/// Arguments for trend scanning
#[derive(Parser, Debug, Clone)]
pub struct TrendArgs {
    /// Path to the corpus JSON file (verse array)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Words to track
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Include valid grammatical prefixes when matching
    #[arg(short, long)]
    pub prefixes: bool,

    /// Sampling stride for the chart series
    #[arg(long, default_value = "50")]
    pub stride: usize,

    /// Emit the occurrence list as CSV instead of the normal output
    #[arg(long)]
    pub csv: bool,
}

/// Arguments for listing sections
#[derive(Parser, Debug, Clone)]
pub struct SectionsArgs {
    /// Only sections whose verse count equals this value
    #[arg(long, value_name = "VALUE")]
    pub verse_count: Option<u64>,
}
