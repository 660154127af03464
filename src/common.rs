//! Common-values reference table.
//!
//! A static mapping from gematria value to human-readable notes ("613 is
//! also the number of commandments"), consumed from a JSON object keyed by
//! stringified value. Pure lookup, no computation.

use std::io::Read;

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::Result;
use crate::gematria::Value;

/// The loaded table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "AHashMap<String, Vec<String>>")]
pub struct CommonValues {
    notes: AHashMap<Value, Vec<String>>,
}

impl From<AHashMap<String, Vec<String>>> for CommonValues {
    fn from(raw: AHashMap<String, Vec<String>>) -> Self {
        let notes = raw
            .into_iter()
            .filter_map(|(key, notes)| key.parse::<Value>().ok().map(|value| (value, notes)))
            .collect();
        CommonValues { notes }
    }
}

impl CommonValues {
    /// Load the table from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<CommonValues> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Notes for a value. Zero and absent values yield nothing.
    pub fn lookup(&self, value: Value) -> &[String] {
        if value == 0 {
            return &[];
        }
        self.notes.get(&value).map_or(&[], Vec::as_slice)
    }

    /// Number of values with notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let json = r#"{
            "613": ["The number of commandments"],
            "26": ["The Tetragrammaton"],
            "0": ["never shown"]
        }"#;
        let table = CommonValues::from_reader(json.as_bytes()).unwrap();

        assert_eq!(table.lookup(613), ["The number of commandments"]);
        assert_eq!(table.lookup(26).len(), 1);
        assert!(table.lookup(7).is_empty());
        assert!(table.lookup(0).is_empty());
    }

    #[test]
    fn test_non_numeric_keys_are_skipped() {
        let json = r#"{"613": ["ok"], "not-a-number": ["dropped"]}"#;
        let table = CommonValues::from_reader(json.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
