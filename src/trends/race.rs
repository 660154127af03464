//! Word race frames.
//!
//! The "race" view animates cumulative word counts over the corpus. Frames
//! are normally consumed from a precomputed JSON dataset; they can also be
//! regenerated offline from a corpus by re-running the scanner's counting
//! logic with exact and prefixed counts accumulated in one pass.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::corpus::Verse;
use crate::error::Result;
use crate::trends::scanner::TrendScanner;

/// One contender's standing within a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceEntry {
    /// The word being raced.
    pub name: String,
    /// Cumulative exact-match count.
    pub exact: u64,
    /// Cumulative count including valid grammatical prefixes.
    pub prefix: u64,
}

/// One animation frame: every contender's standing at a sample point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceFrame {
    /// Frame label (the sampled verse's reference).
    pub label: String,
    /// Standings, in the word list's order.
    pub data: Vec<RaceEntry>,
}

/// Load precomputed race frames from JSON.
pub fn load_race_frames<R: Read>(reader: R) -> Result<Vec<RaceFrame>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Regenerate race frames from a corpus: one frame per sample point, with
/// exact and prefixed counts accumulated in a single pass each.
pub fn build_race_frames<S: AsRef<str>>(
    corpus: &[Verse],
    words: &[S],
    stride: usize,
) -> Vec<RaceFrame> {
    let scanner = TrendScanner::with_stride(stride);
    let exact = scanner.scan(corpus, words, false);
    let prefixed = scanner.scan(corpus, words, true);

    // Both reports share the same sample grid and word list by construction.
    exact
        .series
        .iter()
        .zip(&prefixed.series)
        .map(|(exact_point, prefix_point)| RaceFrame {
            label: exact_point.reference.clone(),
            data: exact
                .words
                .iter()
                .enumerate()
                .map(|(slot, word)| RaceEntry {
                    name: word.clone(),
                    exact: exact_point.counts[slot],
                    prefix: prefix_point.counts[slot],
                })
                .collect(),
        })
        .collect()
}
