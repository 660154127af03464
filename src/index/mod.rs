//! The value index: gematria value → corpus entries sharing that value.
//!
//! This is the lexical half of the match engine's data. Buckets are built
//! once from a [`RawCorpus`] — directly for the pre-bucketed shape, or by
//! encoding every verse for the raw shape — and never mutated afterwards, so
//! concurrent lookups are safe without locking. Corpus order is preserved
//! within each bucket.

use ahash::AHashMap;

use crate::corpus::entry::{CorpusEntry, RawCorpus, Verse};
use crate::gematria::{self, Value};

/// An immutable mapping from gematria value to the entries sharing it.
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    buckets: AHashMap<Value, Vec<CorpusEntry>>,
    entry_count: usize,
}

impl ValueIndex {
    /// Build an index from a raw corpus. Idempotent: rebuilding from the same
    /// raw corpus reproduces identical bucket contents and order.
    pub fn build(raw: &RawCorpus) -> ValueIndex {
        match raw {
            RawCorpus::Bucketed(map) => Self::from_bucketed(map),
            RawCorpus::Verses(verses) => Self::from_verses(verses),
        }
    }

    fn from_bucketed(map: &AHashMap<String, Vec<CorpusEntry>>) -> ValueIndex {
        let mut buckets: AHashMap<Value, Vec<CorpusEntry>> = AHashMap::new();
        let mut entry_count = 0;
        for (key, entries) in map {
            // Non-numeric keys cannot be queried; skip rather than fail.
            let Ok(value) = key.parse::<Value>() else {
                continue;
            };
            entry_count += entries.len();
            buckets.entry(value).or_default().extend(entries.iter().cloned());
        }
        ValueIndex {
            buckets,
            entry_count,
        }
    }

    fn from_verses(verses: &[Verse]) -> ValueIndex {
        let mut buckets: AHashMap<Value, Vec<CorpusEntry>> = AHashMap::new();
        for verse in verses {
            let value = gematria::encode(&verse.text);
            buckets.entry(value).or_default().push(CorpusEntry {
                phrase: verse.text.clone(),
                reference: verse.reference.clone(),
                context_en: verse.english_text.clone().unwrap_or_default(),
                is_verse: true,
                original: verse.original_text.clone(),
            });
        }
        ValueIndex {
            entry_count: verses.len(),
            buckets,
        }
    }

    /// Look up all entries whose value equals `value`.
    ///
    /// Absent keys yield an empty slice, never an error.
    pub fn lookup(&self, value: Value) -> &[CorpusEntry] {
        self.buckets.get(&value).map_or(&[], Vec::as_slice)
    }

    /// Total number of indexed entries.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of distinct values in the index.
    pub fn value_count(&self) -> usize {
        self.buckets.len()
    }

    /// Export the index back to the pre-bucketed raw shape.
    ///
    /// `build(to_raw_form())` reproduces this index exactly (round-trip
    /// stability of the index shape).
    pub fn to_raw_form(&self) -> RawCorpus {
        let map = self
            .buckets
            .iter()
            .map(|(value, entries)| (value.to_string(), entries.clone()))
            .collect();
        RawCorpus::Bucketed(map)
    }

    /// Index integrity check: every entry whose phrase re-encodes to a value
    /// other than its bucket key is reported.
    ///
    /// A non-empty result means the source corpus or loader is inconsistent;
    /// this is a diagnostic, never a panic. Pre-bucketed phrase databases may
    /// legitimately key multi-word phrases under curated values, so callers
    /// decide what to do with the report.
    pub fn verify(&self) -> Vec<(Value, CorpusEntry)> {
        let mut violations = Vec::new();
        for (&value, entries) in &self.buckets {
            for entry in entries {
                if gematria::encode(&entry.phrase) != value {
                    violations.push((value, entry.clone()));
                }
            }
        }
        violations
    }
}
