//! # Remez
//!
//! A gematria calculator and Torah corpus search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Gematria encoding with the standard letter weights
//! - Value-indexed corpus search with Colel (±1) tolerance
//! - Bridge search between two values
//! - Structural matches against the fixed section catalog
//! - Word trend scanning with grammatical-prefix matching

pub mod catalog;
pub mod cli;
pub mod common;
pub mod corpus;
pub mod error;
pub mod gematria;
pub mod index;
pub mod search;
pub mod trends;

pub mod prelude {
    //! Convenience re-exports for common use.
    pub use crate::catalog::{SectionCatalog, SectionRecord, VerseRef};
    pub use crate::corpus::{CorpusEntry, CorpusStore, RawCorpus, Verse};
    pub use crate::error::{RemezError, Result};
    pub use crate::gematria::{Value, encode};
    pub use crate::index::ValueIndex;
    pub use crate::search::{MatchEngine, MatchResult, SearchRequest, SearchSession};
    pub use crate::trends::{TrendReport, TrendScanner};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
