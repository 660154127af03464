//! Search request values.
//!
//! A search is described entirely by an immutable [`SearchRequest`] passed to
//! the engine — never by ambient view state. Builder-style setters mirror the
//! toggles the hosting application exposes.

use crate::gematria::Value;

/// What the search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Match entries whose value equals the primary value.
    Standard {
        /// The primary target value.
        value: Value,
    },
    /// Match entries whose value bridges the gap between two values:
    /// the effective target is `|base - target|`.
    Bridge {
        /// The base value (e.g. the names).
        base: Value,
        /// The goal value (e.g. "mazel tov").
        target: Value,
    },
}

/// Section scope for a standard search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionScope {
    /// No scoping: the entire corpus.
    #[default]
    All,
    /// Restrict standard matches to one named section.
    Section(String),
}

/// An immutable search request.
///
/// Tolerance and section scope apply to standard mode only; bridge mode
/// intentionally ignores both (preserved upstream restriction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Standard or bridge search.
    pub mode: SearchMode,
    /// Apply the ±1 Colel tolerance (standard mode only).
    pub tolerance: bool,
    /// Drop whole verses and multi-word phrases.
    pub single_word_only: bool,
    /// Section scope (standard mode only).
    pub scope: SectionScope,
}

impl SearchRequest {
    /// Create a standard-mode request for one value.
    pub fn standard(value: Value) -> Self {
        SearchRequest {
            mode: SearchMode::Standard { value },
            tolerance: false,
            single_word_only: false,
            scope: SectionScope::All,
        }
    }

    /// Create a bridge-mode request between two values.
    pub fn bridge(base: Value, target: Value) -> Self {
        SearchRequest {
            mode: SearchMode::Bridge { base, target },
            tolerance: false,
            single_word_only: false,
            scope: SectionScope::All,
        }
    }

    /// Enable or disable the ±1 Colel tolerance.
    pub fn tolerance(mut self, tolerance: bool) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Keep only single-word phrase entries.
    pub fn single_word_only(mut self, single_word_only: bool) -> Self {
        self.single_word_only = single_word_only;
        self
    }

    /// Restrict standard matches to a named section.
    pub fn in_section<S: Into<String>>(mut self, name: S) -> Self {
        self.scope = SectionScope::Section(name.into());
        self
    }

    /// The exact value this request is primarily after: the primary value in
    /// standard mode, the absolute gap in bridge mode.
    pub fn primary_target(&self) -> Value {
        match self.mode {
            SearchMode::Standard { value } => value,
            SearchMode::Bridge { base, target } => base.abs_diff(target),
        }
    }

    /// The ordered set of values to query. Zero never appears; an empty set
    /// means the search short-circuits to no results.
    pub fn target_values(&self) -> Vec<Value> {
        match self.mode {
            SearchMode::Standard { value } => {
                if value == 0 {
                    return Vec::new();
                }
                if self.tolerance {
                    // Primary first: result groups stay in query order.
                    [Some(value), value.checked_sub(1), value.checked_add(1)]
                        .into_iter()
                        .flatten()
                        .filter(|&v| v > 0)
                        .collect()
                } else {
                    vec![value]
                }
            }
            SearchMode::Bridge { base, target } => {
                let gap = base.abs_diff(target);
                if gap == 0 { Vec::new() } else { vec![gap] }
            }
        }
    }
}
