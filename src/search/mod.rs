//! Search: requests, the match engine, results, and debounced sessions.
//!
//! The flow is request/response: the caller encodes its input, builds an
//! immutable [`SearchRequest`], and hands it to [`MatchEngine::search`]
//! together with the value index and the section catalog. The engine returns
//! a tagged, deduplicated list of [`MatchResult`] grouped per matched value.
//! [`SearchSession`] adds generation-counter debouncing on top for callers
//! that issue overlapping requests.

pub mod engine;
pub mod request;
pub mod result;
pub mod session;

pub use engine::MatchEngine;
pub use request::{SearchMode, SearchRequest, SectionScope};
pub use result::MatchResult;
pub use session::{SearchSession, SearchTicket};
