//! The gematria encoder.
//!
//! [`encode`] maps a text string to its gematria value. Input is classified
//! once into one of two cases ([`EncoderInput`]): an all-ASCII-digit string is
//! a numeric literal and yields its integer value directly; anything else is
//! treated as Hebrew text — the maqaf separator is normalized to a space,
//! characters outside the Hebrew consonant block are discarded, and the
//! remaining letter weights are summed.
//!
//! Encoding is a pure function of the input: no side effects, no errors, and
//! always a value ≥ 0. Zero is the sentinel for "no value / empty input".

use crate::gematria::alphabet::{self, MAQAF};

/// A gematria value. Zero means "no value yet".
pub type Value = u64;

/// Classification of encoder input, resolved once per string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderInput {
    /// An all-ASCII-digit string; its value is the literal integer.
    Numeric(Value),
    /// Anything else; encoded letter by letter.
    Hebrew(String),
}

impl EncoderInput {
    /// Classify a string.
    ///
    /// An all-digit string that overflows [`Value`] is not treated as numeric;
    /// it falls through to the Hebrew case, where the digits are stripped and
    /// the value is 0 (fails closed rather than erroring).
    pub fn classify(text: &str) -> EncoderInput {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = text.parse::<Value>() {
                return EncoderInput::Numeric(value);
            }
        }
        EncoderInput::Hebrew(text.to_string())
    }
}

/// Compute the gematria value of a text string.
///
/// # Examples
///
/// ```
/// use remez::gematria::encode;
///
/// assert_eq!(encode("תורה"), 611); // ת400 + ו6 + ר200 + ה5
/// assert_eq!(encode("40"), 40);
/// ```
pub fn encode(text: &str) -> Value {
    match EncoderInput::classify(text) {
        EncoderInput::Numeric(value) => value,
        EncoderInput::Hebrew(text) => encode_hebrew(&text),
    }
}

/// Sum letter weights over the Hebrew characters of `text`.
fn encode_hebrew(text: &str) -> Value {
    text.chars()
        .map(|c| if c == MAQAF { ' ' } else { c })
        .filter(|&c| alphabet::is_hebrew_letter(c))
        .map(alphabet::letter_weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), 0);
    }

    #[test]
    fn test_numeric_shortcut() {
        assert_eq!(encode("613"), 613);
        assert_eq!(encode("0"), 0);
        assert_eq!(encode("40"), 40);
    }

    #[test]
    fn test_numeric_matches_parse() {
        for s in ["1", "26", "304805", "9999"] {
            assert_eq!(encode(s), s.parse::<u64>().unwrap());
        }
    }

    #[test]
    fn test_torah_is_611() {
        assert_eq!(encode("תורה"), 611);
    }

    #[test]
    fn test_final_forms() {
        assert_eq!(encode("ך"), 20);
        assert_eq!(encode("כ"), 20);
        assert_eq!(encode("ך"), encode("כ"));
    }

    #[test]
    fn test_maqaf_normalized_to_space() {
        // "כל־ישראל" encodes the same as "כל ישראל"
        assert_eq!(encode("כל\u{05BE}ישראל"), encode("כל ישראל"));
    }

    #[test]
    fn test_non_hebrew_is_dropped() {
        assert_eq!(encode("abc!?"), 0);
        assert_eq!(encode("תורה!"), 611);
        assert_eq!(encode("  תורה  "), 611);
    }

    #[test]
    fn test_mixed_digits_and_letters_are_not_numeric() {
        // Not all-digit, so the digits are stripped on the Hebrew path.
        assert_eq!(encode("613א"), 1);
    }

    #[test]
    fn test_overflowing_digit_string_fails_closed() {
        assert_eq!(encode("99999999999999999999999999"), 0);
    }

    #[test]
    fn test_classify_dispatch() {
        assert_eq!(EncoderInput::classify("613"), EncoderInput::Numeric(613));
        assert_eq!(
            EncoderInput::classify("תורה"),
            EncoderInput::Hebrew("תורה".to_string())
        );
    }
}
