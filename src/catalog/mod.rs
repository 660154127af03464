//! Section catalog: the fixed table of Torah reading sections (parshas).
//!
//! A [`SectionRecord`] names a contiguous range of verses within one book,
//! with a precomputed verse count. The catalog serves two roles:
//!
//! - a user-facing scope filter (restrict search results to one section), via
//!   [`SectionRecord::contains`];
//! - a second class of match: a value "matches" a section structurally when
//!   it equals the section's verse count.
//!
//! The table is static, ordered, loaded once, and never mutated at runtime.

pub mod reference;
pub mod section;
mod torah;

pub use reference::VerseRef;
pub use section::SectionRecord;

use crate::gematria::Value;

/// The ordered, immutable catalog of sections.
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    sections: Vec<SectionRecord>,
}

impl SectionCatalog {
    /// Build a catalog from an explicit section list (test corpora).
    pub fn new(sections: Vec<SectionRecord>) -> Self {
        SectionCatalog { sections }
    }

    /// The reference catalog: the 54 Torah parshas.
    pub fn torah() -> Self {
        SectionCatalog {
            sections: torah::parsha_records(),
        }
    }

    /// All sections, in canonical reading order.
    pub fn sections(&self) -> &[SectionRecord] {
        &self.sections
    }

    /// Look up a section by name (case-sensitive exact match).
    pub fn by_name(&self, name: &str) -> Option<&SectionRecord> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// All sections whose verse count equals `value` (structural matches).
    pub fn with_verse_count(&self, value: Value) -> impl Iterator<Item = &SectionRecord> {
        self.sections
            .iter()
            .filter(move |s| s.verse_count == value)
    }

    /// Number of sections in the catalog.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torah_catalog_has_54_sections() {
        assert_eq!(SectionCatalog::torah().len(), 54);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = SectionCatalog::torah();
        let noach = catalog.by_name("Noach").unwrap();
        assert_eq!(noach.book, "Genesis");
        assert_eq!(noach.start, (6, 9));
        assert_eq!(noach.end, (11, 32));
        assert_eq!(noach.verse_count, 153);

        assert!(catalog.by_name("noach").is_none());
        assert!(catalog.by_name("Atlantis").is_none());
    }

    #[test]
    fn test_with_verse_count() {
        let catalog = SectionCatalog::torah();

        // Two parshas share 153 verses: Noach and Vayishlach.
        let hits: Vec<_> = catalog.with_verse_count(153).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Noach");
        assert_eq!(hits[1].name, "Vayishlach");

        // 613 is not the verse count of any section.
        assert_eq!(catalog.with_verse_count(613).count(), 0);
    }
}
