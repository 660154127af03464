//! The match engine.
//!
//! [`MatchEngine::search`] resolves a [`SearchRequest`] against the value
//! index and the section catalog:
//!
//! 1. compute the target value set (primary, ±1 neighbors, or bridge gap;
//!    zero is never queried);
//! 2. per value: bucket lookup, single-word filtering, tagging as standard
//!    matches; in standard mode, structural matches for sections whose verse
//!    count equals the value, ordered before the standard matches of that
//!    value's group;
//! 3. section-scope filtering of standard matches (standard mode only;
//!    structural matches are never scope-filtered).
//!
//! The engine never errors: an absent bucket, a malformed reference, or a
//! missing index all yield empty results. Grouping by matched value and
//! paging are display concerns left to the caller.

use crate::catalog::{SectionCatalog, SectionRecord};
use crate::index::ValueIndex;
use crate::search::request::{SearchMode, SearchRequest, SectionScope};
use crate::search::result::MatchResult;

/// Stateless search orchestrator over an index and a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Create a new match engine.
    pub fn new() -> Self {
        MatchEngine
    }

    /// Execute a search request.
    pub fn search(
        &self,
        request: &SearchRequest,
        index: &ValueIndex,
        catalog: &SectionCatalog,
    ) -> Vec<MatchResult> {
        let targets = request.target_values();
        if targets.is_empty() {
            return Vec::new();
        }

        let is_standard = matches!(request.mode, SearchMode::Standard { .. });
        let primary = request.primary_target();
        let scope = self.resolve_scope(request, catalog);

        let mut results = Vec::new();
        for &value in &targets {
            // Structural matches lead their value group.
            if is_standard {
                for section in catalog.with_verse_count(value) {
                    results.push(MatchResult::Structural {
                        section: section.clone(),
                        matched_value: value,
                    });
                }
            }

            for entry in index.lookup(value) {
                if request.single_word_only && (entry.is_verse || !entry.is_single_word()) {
                    continue;
                }
                if let Some(section) = scope {
                    if !section.contains_ref(&entry.reference) {
                        continue;
                    }
                }
                results.push(MatchResult::Standard {
                    entry: entry.clone(),
                    matched_value: value,
                    exact: value == primary,
                });
            }
        }
        results
    }

    /// The section to scope standard matches to, if any. Bridge mode ignores
    /// scope, and a name absent from the catalog leaves the search unscoped
    /// rather than erroring.
    fn resolve_scope<'a>(
        &self,
        request: &SearchRequest,
        catalog: &'a SectionCatalog,
    ) -> Option<&'a SectionRecord> {
        if !matches!(request.mode, SearchMode::Standard { .. }) {
            return None;
        }
        match &request.scope {
            SectionScope::All => None,
            SectionScope::Section(name) => catalog.by_name(name),
        }
    }
}
