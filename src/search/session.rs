//! Debounced search sessions.
//!
//! Repeated searches are debounced logically, not by halting workers: each
//! issued request carries a monotonically increasing generation number, and
//! only a result whose ticket still matches the session's latest generation
//! is surfaced. Issuing a new ticket invalidates every outstanding one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::SectionCatalog;
use crate::index::ValueIndex;
use crate::search::engine::MatchEngine;
use crate::search::request::SearchRequest;
use crate::search::result::MatchResult;

/// A claim on "the latest search". Stale tickets are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Generation counter shared by all requests of one search surface.
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: AtomicU64,
}

impl SearchSession {
    /// Create a new session.
    pub fn new() -> Self {
        SearchSession::default()
    }

    /// Issue a ticket for a new request, invalidating all earlier tickets.
    pub fn issue(&self) -> SearchTicket {
        SearchTicket {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Whether a ticket is still the latest issued.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Run a search under a ticket. Returns `None` — surfacing nothing —
    /// when the ticket went stale, whether before or during the search.
    pub fn run(
        &self,
        ticket: &SearchTicket,
        request: &SearchRequest,
        engine: &MatchEngine,
        index: &ValueIndex,
        catalog: &SectionCatalog,
    ) -> Option<Vec<MatchResult>> {
        if !self.is_current(ticket) {
            return None;
        }
        let results = engine.search(request, index, catalog);
        if !self.is_current(ticket) {
            return None;
        }
        Some(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let session = SearchSession::new();
        let first = session.issue();
        let second = session.issue();

        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
    }

    #[test]
    fn test_stale_ticket_yields_no_results() {
        let session = SearchSession::new();
        let engine = MatchEngine::new();
        let index = ValueIndex::default();
        let catalog = SectionCatalog::torah();

        let stale = session.issue();
        let current = session.issue();

        let request = SearchRequest::standard(611);
        assert!(
            session
                .run(&stale, &request, &engine, &index, &catalog)
                .is_none()
        );
        assert!(
            session
                .run(&current, &request, &engine, &index, &catalog)
                .is_some()
        );
    }

    #[test]
    fn test_generations_increase_monotonically() {
        let session = SearchSession::new();
        let a = session.issue();
        let b = session.issue();
        let c = session.issue();
        assert!(a.generation < b.generation && b.generation < c.generation);
    }
}
