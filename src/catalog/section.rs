//! Section records and range membership.

use serde::{Deserialize, Serialize};

use crate::catalog::reference::VerseRef;
use crate::gematria::Value;

/// A named, fixed contiguous range of verses within one book, with a
/// precomputed verse count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section name (e.g. "Noach").
    pub name: String,

    /// Parent book name (e.g. "Genesis").
    pub book: String,

    /// Start address, inclusive: (chapter, verse).
    pub start: (u32, u32),

    /// End address, inclusive: (chapter, verse).
    pub end: (u32, u32),

    /// Total number of verses in the section.
    pub verse_count: Value,
}

impl SectionRecord {
    /// Create a new section record.
    pub fn new<S: Into<String>>(
        name: S,
        book: S,
        start: (u32, u32),
        end: (u32, u32),
        verse_count: Value,
    ) -> Self {
        SectionRecord {
            name: name.into(),
            book: book.into(),
            start,
            end,
            verse_count,
        }
    }

    /// Test whether a parsed reference falls inside this section.
    ///
    /// Book comparison is case-sensitive and exact; the address comparison is
    /// inclusive lexicographic (chapter, then verse) integer ordering.
    pub fn contains(&self, reference: &VerseRef) -> bool {
        if reference.book != self.book {
            return false;
        }
        let address = reference.address();
        self.start <= address && address <= self.end
    }

    /// Test a raw reference string against this section. Unparseable
    /// references fail closed.
    pub fn contains_ref(&self, reference: &str) -> bool {
        match VerseRef::parse(reference) {
            Some(parsed) => self.contains(&parsed),
            None => false,
        }
    }
}
