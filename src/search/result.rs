//! Match results.

use serde::{Deserialize, Serialize};

use crate::catalog::SectionRecord;
use crate::corpus::CorpusEntry;
use crate::gematria::Value;

/// One search result, tagged by kind.
///
/// Results are constructed fresh per search and discarded on the next one;
/// entries are cloned out of the index, which stays immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchResult {
    /// A lexical match from the value index.
    Standard {
        /// The matched corpus entry.
        entry: CorpusEntry,
        /// The value this entry actually matched (may be a tolerance
        /// neighbor of the requested value).
        matched_value: Value,
        /// Whether `matched_value` equals the request's primary target.
        exact: bool,
    },
    /// A structural match: a section whose verse count equals the value.
    Structural {
        /// The matched section.
        section: SectionRecord,
        /// The value the section's verse count matched. Always exact.
        matched_value: Value,
    },
}

impl MatchResult {
    /// The value this result matched.
    pub fn matched_value(&self) -> Value {
        match self {
            MatchResult::Standard { matched_value, .. } => *matched_value,
            MatchResult::Structural { matched_value, .. } => *matched_value,
        }
    }

    /// Whether this result matched the request's primary target value.
    /// Structural matches are always exact.
    pub fn is_exact(&self) -> bool {
        match self {
            MatchResult::Standard { exact, .. } => *exact,
            MatchResult::Structural { .. } => true,
        }
    }

    /// The reference string shown for this result, when it has one.
    /// Structural matches describe corpus shape, not a verse address.
    pub fn reference(&self) -> Option<&str> {
        match self {
            MatchResult::Standard { entry, .. } => Some(&entry.reference),
            MatchResult::Structural { .. } => None,
        }
    }
}
