//! Word trend scanning over the ordered corpus.
//!
//! [`TrendScanner`] walks the full verse corpus once, counting occurrences
//! of one or more literal words (optionally allowing a closed set of
//! grammatical prefixes), and produces two things in a single pass:
//!
//! - a sampled cumulative time series for charting ([`SamplePoint`]);
//! - a verse-level occurrence list for table display and export
//!   ([`OccurrenceRecord`]).
//!
//! Identical corpus and inputs always yield identical output.

pub mod breakdown;
pub mod race;
pub mod scanner;

pub use breakdown::{BOOKS, BookBreakdown, occurrences_to_csv};
pub use race::{RaceEntry, RaceFrame, build_race_frames, load_race_frames};
pub use scanner::{
    DEFAULT_STRIDE, OccurrenceRecord, SamplePoint, TrendReport, TrendScanner, VALID_PREFIXES,
};
