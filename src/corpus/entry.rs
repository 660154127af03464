//! Corpus entry and verse records.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A phrase or whole verse in the standard-match database.
///
/// Immutable after load. JSON field names follow the upstream data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// The literal Hebrew phrase text.
    pub phrase: String,

    /// Verse address, formatted as `"<Book> <chapter>:<verse>"`.
    #[serde(rename = "ref")]
    pub reference: String,

    /// English gloss/context string.
    #[serde(default)]
    pub context_en: String,

    /// Whether this entry is a whole verse rather than a phrase.
    #[serde(rename = "isVerse", default)]
    pub is_verse: bool,

    /// Original (undelimited) text, used only for whole-verse display.
    #[serde(rename = "original_he", default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

impl CorpusEntry {
    /// Create a phrase entry.
    pub fn phrase<S: Into<String>>(phrase: S, reference: S, context_en: S) -> Self {
        CorpusEntry {
            phrase: phrase.into(),
            reference: reference.into(),
            context_en: context_en.into(),
            is_verse: false,
            original: None,
        }
    }

    /// Whether the phrase holds a single word (no internal space).
    pub fn is_single_word(&self) -> bool {
        !self.phrase.contains(' ')
    }
}

/// One verse of the raw ordered corpus.
///
/// Serde aliases cover the compact upstream keys (`r`, `b`, `t`, `o`, `e`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse address, formatted as `"<Book> <chapter>:<verse>"`.
    #[serde(alias = "r")]
    pub reference: String,

    /// Parent book name.
    #[serde(alias = "b", default)]
    pub book: String,

    /// Delimited Hebrew text used for matching.
    #[serde(alias = "t")]
    pub text: String,

    /// Original (undelimited) text used for display, if present.
    #[serde(alias = "o", default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,

    /// English translation, if present.
    #[serde(
        alias = "e",
        alias = "text_en",
        alias = "translation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub english_text: Option<String>,
}

impl Verse {
    /// The text to show for this verse: the original form when present,
    /// otherwise the delimited matching text.
    pub fn display_text(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

/// The two accepted corpus shapes.
///
/// Deserialized untagged: a JSON object is the pre-bucketed database, a JSON
/// array is the raw verse corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCorpus {
    /// Stringified value → entries sharing that value.
    Bucketed(AHashMap<String, Vec<CorpusEntry>>),
    /// Ordered verse list, encoded on load.
    Verses(Vec<Verse>),
}

impl RawCorpus {
    /// Number of entries or verses carried by this corpus.
    pub fn len(&self) -> usize {
        match self {
            RawCorpus::Bucketed(buckets) => buckets.values().map(Vec::len).sum(),
            RawCorpus::Verses(verses) => verses.len(),
        }
    }

    /// Check if the corpus carries no data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
