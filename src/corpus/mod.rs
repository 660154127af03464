//! Corpus data model and loading.
//!
//! The corpus is a read-only reference data set supplied by the hosting
//! application as static JSON, in one of two shapes:
//!
//! - a pre-bucketed object keyed by stringified gematria value → list of
//!   [`CorpusEntry`] (the standard-match database);
//! - an ordered array of [`Verse`] records (the raw text corpus), each of
//!   which is encoded on load.
//!
//! Both shapes are accepted transparently (see [`RawCorpus`]). Once loaded
//! and indexed, nothing here is ever mutated; concurrent readers need no
//! locking.

pub mod entry;
pub mod loader;
pub mod store;

pub use entry::{CorpusEntry, RawCorpus, Verse};
pub use loader::{load_raw_corpus, read_raw_corpus};
pub use store::{CorpusStore, LoadState};
