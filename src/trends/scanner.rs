//! The trend scanner.

use serde::{Deserialize, Serialize};

use crate::corpus::Verse;

/// Default sampling stride: every 50th verse becomes a chart point.
pub const DEFAULT_STRIDE: usize = 50;

/// The closed list of valid grammatical prefixes for prefixed matching.
/// A token matches a word with prefix only when its head is exactly one of
/// these; this is not substring matching.
pub const VALID_PREFIXES: [&str; 10] = ["ו", "ב", "כ", "ל", "מ", "וב", "וכ", "ול", "ומ", "ש"];

/// One chart sample: cumulative per-word counts after a given verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Index of the sampled verse in the corpus.
    pub index: usize,
    /// Reference label of the sampled verse.
    pub reference: String,
    /// Book of the sampled verse.
    pub book: String,
    /// Cumulative match counts, parallel to [`TrendReport::words`].
    pub counts: Vec<u64>,
}

/// One verse that matched a word at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// Verse reference.
    pub reference: String,
    /// Parent book.
    pub book: String,
    /// Display text (original form when present).
    pub text: String,
    /// The word that matched.
    pub word: String,
    /// Number of matches within this verse.
    pub count: u64,
}

/// The scanner's output: the sampled series plus the occurrence list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// The effective word list (empty input words are skipped); sample-point
    /// counts are parallel to this list.
    pub words: Vec<String>,
    /// Sampled cumulative series, in corpus order.
    pub series: Vec<SamplePoint>,
    /// Matching verses, in corpus order (word order within a verse follows
    /// the word list).
    pub occurrences: Vec<OccurrenceRecord>,
}

/// Windowed, sampled scanner over the ordered corpus.
#[derive(Debug, Clone, Copy)]
pub struct TrendScanner {
    stride: usize,
}

impl Default for TrendScanner {
    fn default() -> Self {
        TrendScanner {
            stride: DEFAULT_STRIDE,
        }
    }
}

impl TrendScanner {
    /// Create a scanner with the default stride.
    pub fn new() -> Self {
        TrendScanner::default()
    }

    /// Create a scanner with a custom stride. A stride of 0 is treated as 1.
    pub fn with_stride(stride: usize) -> Self {
        TrendScanner {
            stride: stride.max(1),
        }
    }

    /// Scan the corpus for the given words in one pass.
    ///
    /// Every Nth verse becomes a sample point; the final verse is always
    /// force-included so the tail of the last section stays visible in the
    /// series even when it is short of a full stride. Counts accumulate per
    /// word and never decrease.
    pub fn scan<S: AsRef<str>>(
        &self,
        corpus: &[Verse],
        words: &[S],
        allow_prefixes: bool,
    ) -> TrendReport {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let mut report = TrendReport {
            series: Vec::new(),
            occurrences: Vec::new(),
            words,
        };
        if corpus.is_empty() {
            return report;
        }

        let mut totals = vec![0u64; report.words.len()];
        for (index, verse) in corpus.iter().enumerate() {
            let tokens: Vec<&str> = verse.text.split_whitespace().collect();
            for (slot, word) in report.words.iter().enumerate() {
                let count = tokens
                    .iter()
                    .filter(|token| token_matches(token, word, allow_prefixes))
                    .count() as u64;
                if count > 0 {
                    totals[slot] += count;
                    report.occurrences.push(OccurrenceRecord {
                        reference: verse.reference.clone(),
                        book: verse.book.clone(),
                        text: verse.display_text().to_string(),
                        word: word.clone(),
                        count,
                    });
                }
            }

            let is_sample = index % self.stride == 0;
            let is_forced_tail = index == corpus.len() - 1 && !is_sample;
            if is_sample || is_forced_tail {
                report.series.push(SamplePoint {
                    index,
                    reference: verse.reference.clone(),
                    book: verse.book.clone(),
                    counts: totals.clone(),
                });
            }
        }
        report
    }
}

/// Token match predicate: equal outright, or — with prefixes allowed — a
/// valid grammatical prefix followed by the word.
fn token_matches(token: &str, word: &str, allow_prefixes: bool) -> bool {
    if token == word {
        return true;
    }
    if allow_prefixes && token.len() > word.len() && token.ends_with(word) {
        let head = &token[..token.len() - word.len()];
        return VALID_PREFIXES.contains(&head);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(reference: &str, book: &str, text: &str) -> Verse {
        Verse {
            reference: reference.to_string(),
            book: book.to_string(),
            text: text.to_string(),
            original_text: None,
            english_text: None,
        }
    }

    fn corpus() -> Vec<Verse> {
        vec![
            verse("Genesis 1:1", "Genesis", "משה לא כאן"),
            verse("Genesis 1:2", "Genesis", "ומשה עלה"),
            verse("Exodus 2:10", "Exodus", "משה משה שלום"),
        ]
    }

    #[test]
    fn test_sample_grid_with_forced_tail() {
        let scanner = TrendScanner::with_stride(2);
        let report = scanner.scan(&corpus(), &["משה"], false);

        let indices: Vec<usize> = report.series.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_forced_tail_when_not_on_grid() {
        let scanner = TrendScanner::with_stride(2);
        let four = vec![
            verse("Genesis 1:1", "Genesis", "א"),
            verse("Genesis 1:2", "Genesis", "ב"),
            verse("Genesis 1:3", "Genesis", "ג"),
            verse("Genesis 1:4", "Genesis", "ד"),
        ];
        let report = scanner.scan(&four, &["א"], false);

        let indices: Vec<usize> = report.series.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_cumulative_counts_never_decrease() {
        let scanner = TrendScanner::with_stride(1);
        let report = scanner.scan(&corpus(), &["משה"], true);

        let counts: Vec<u64> = report.series.iter().map(|p| p.counts[0]).collect();
        assert_eq!(counts, vec![1, 2, 4]);
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_exact_matching_ignores_prefixed_tokens() {
        let scanner = TrendScanner::with_stride(1);
        let report = scanner.scan(&corpus(), &["משה"], false);

        let total = report.series.last().unwrap().counts[0];
        assert_eq!(total, 3); // "ומשה" does not count
    }

    #[test]
    fn test_prefix_matching_uses_closed_list() {
        assert!(token_matches("ומשה", "משה", true));
        assert!(token_matches("ובמשה", "משה", true));
        assert!(!token_matches("ומשה", "משה", false));
        // "שמ" is not a valid prefix head.
        assert!(!token_matches("שממשה", "משה", true));
        // Arbitrary substring containment never matches.
        assert!(!token_matches("משהו", "משה", true));
    }

    #[test]
    fn test_occurrences_in_corpus_order() {
        let scanner = TrendScanner::with_stride(2);
        let report = scanner.scan(&corpus(), &["משה"], true);

        let refs: Vec<&str> = report
            .occurrences
            .iter()
            .map(|o| o.reference.as_str())
            .collect();
        assert_eq!(refs, vec!["Genesis 1:1", "Genesis 1:2", "Exodus 2:10"]);
        assert_eq!(report.occurrences[2].count, 2);
    }

    #[test]
    fn test_multiple_words_share_one_sample_grid() {
        let scanner = TrendScanner::with_stride(2);
        let report = scanner.scan(&corpus(), &["משה", "שלום"], false);

        assert_eq!(report.words.len(), 2);
        for point in &report.series {
            assert_eq!(point.counts.len(), 2);
        }
        assert_eq!(report.series.last().unwrap().counts, vec![3, 1]);
    }

    #[test]
    fn test_empty_words_are_skipped() {
        let scanner = TrendScanner::with_stride(2);
        let report = scanner.scan(&corpus(), &["", "משה"], false);
        assert_eq!(report.words, vec!["משה"]);
        assert_eq!(report.series.last().unwrap().counts.len(), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let scanner = TrendScanner::new();
        let report = scanner.scan(&[], &["משה"], false);
        assert!(report.series.is_empty());
        assert!(report.occurrences.is_empty());
    }

    #[test]
    fn test_determinism() {
        let scanner = TrendScanner::with_stride(2);
        let a = scanner.scan(&corpus(), &["משה"], true);
        let b = scanner.scan(&corpus(), &["משה"], true);
        assert_eq!(a, b);
    }
}
