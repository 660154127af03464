//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RemezArgs};
use crate::error::Result;
use crate::gematria::Value;
use crate::search::MatchResult;

/// Result structure for the encode command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeOutput {
    pub input: String,
    pub value: Value,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub targets: Vec<Value>,
    pub total: usize,
    pub results: Vec<MatchResult>,
}

/// One row of the sections listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SectionRow {
    pub name: String,
    pub book: String,
    pub start: (u32, u32),
    pub end: (u32, u32),
    pub verse_count: Value,
}

/// Summary of a trend scan.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendOutput {
    pub words: Vec<String>,
    pub sample_points: usize,
    pub matching_verses: usize,
    pub totals_by_book: Vec<(String, u64)>,
    pub total: u64,
}

/// Serialize a value as JSON, pretty-printed when requested.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Print a result either as JSON or via the provided human formatter.
pub fn emit<T: Serialize, F: FnOnce(&T)>(args: &RemezArgs, value: &T, human: F) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", to_json(value, args.pretty)?),
        OutputFormat::Human => human(value),
    }
    Ok(())
}

/// Render one match result as a single human-readable line.
pub fn format_match(result: &MatchResult) -> String {
    match result {
        MatchResult::Standard {
            entry,
            matched_value,
            exact,
        } => {
            let marker = if *exact { "=" } else { "~" };
            let kind = if entry.is_verse { "verse" } else { "phrase" };
            format!(
                "{marker} {matched_value:>6}  [{kind}]  {}  ({})  {}",
                entry.phrase, entry.reference, entry.context_en
            )
        }
        MatchResult::Structural {
            section,
            matched_value,
        } => format!(
            "= {matched_value:>6}  [section]  Parshat {} contains exactly {} verses",
            section.name, section.verse_count
        ),
    }
}
