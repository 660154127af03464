//! Per-book aggregation and CSV export of trend occurrences.

use ahash::AHashMap;

use crate::trends::scanner::TrendReport;

/// The five books, as (English name, transliterated Hebrew name) pairs, in
/// canonical order.
pub const BOOKS: [(&str, &str); 5] = [
    ("Genesis", "Bereshit"),
    ("Exodus", "Shemot"),
    ("Leviticus", "Vayikra"),
    ("Numbers", "Bamidbar"),
    ("Deuteronomy", "Devarim"),
];

/// Occurrence totals per book, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookBreakdown {
    /// (English book name, total occurrences), in canonical book order.
    pub totals: Vec<(String, u64)>,
    /// Sum of all per-book totals.
    pub total: u64,
}

impl BookBreakdown {
    /// Aggregate a trend report's occurrences by book.
    ///
    /// Occurrences in books outside the canonical five are ignored, matching
    /// the fixed breakdown table.
    pub fn from_report(report: &TrendReport) -> BookBreakdown {
        let mut by_book: AHashMap<&str, u64> = AHashMap::new();
        for occurrence in &report.occurrences {
            *by_book.entry(occurrence.book.as_str()).or_default() += occurrence.count;
        }

        let totals: Vec<(String, u64)> = BOOKS
            .iter()
            .map(|&(english, _)| {
                (
                    english.to_string(),
                    by_book.get(english).copied().unwrap_or(0),
                )
            })
            .collect();
        let total = totals.iter().map(|(_, n)| n).sum();
        BookBreakdown { totals, total }
    }
}

/// Serialize a report's occurrence list as CSV text.
///
/// Columns match the export table: Reference, Book, Word Found, Occurrences
/// in Verse, Text. The text field is quoted, with inner quotes doubled.
pub fn occurrences_to_csv(report: &TrendReport) -> String {
    let mut out = String::from("Reference,Book,Word Found,Occurrences in Verse,Text\n");
    for occurrence in &report.occurrences {
        let text = occurrence.text.replace('"', "\"\"");
        out.push_str(&format!(
            "{},{},{},{},\"{}\"\n",
            occurrence.reference, occurrence.book, occurrence.word, occurrence.count, text
        ));
    }
    out
}
