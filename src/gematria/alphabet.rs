//! The fixed Hebrew letter alphabet and its gematria weights.
//!
//! Weights follow the standard (mispar hechrachi) scheme: units for א..ט,
//! tens for י..צ, hundreds for ק..ת. The five final forms (ך ם ן ף ץ) map to
//! the same weight as their base forms. The table is total over the Hebrew
//! consonant block U+05D0..=U+05EA and immutable for the process lifetime.

/// First code point of the Hebrew consonant block (א).
pub const HEBREW_BLOCK_START: char = '\u{05D0}';

/// Last code point of the Hebrew consonant block (ת).
pub const HEBREW_BLOCK_END: char = '\u{05EA}';

/// The maqaf (Hebrew hyphen, U+05BE), treated as a word separator.
pub const MAQAF: char = '\u{05BE}';

/// Weights indexed by offset from U+05D0. The block interleaves the final
/// forms with their base forms, so this cannot be computed from the offset
/// alone.
const WEIGHTS: [u64; 27] = [
    1,   // א
    2,   // ב
    3,   // ג
    4,   // ד
    5,   // ה
    6,   // ו
    7,   // ז
    8,   // ח
    9,   // ט
    10,  // י
    20,  // ך (final kaf)
    20,  // כ
    30,  // ל
    40,  // ם (final mem)
    40,  // מ
    50,  // ן (final nun)
    50,  // נ
    60,  // ס
    70,  // ע
    80,  // ף (final pe)
    80,  // פ
    90,  // ץ (final tsadi)
    90,  // צ
    100, // ק
    200, // ר
    300, // ש
    400, // ת
];

/// Check whether a character is a Hebrew consonant (including final forms).
pub fn is_hebrew_letter(c: char) -> bool {
    (HEBREW_BLOCK_START..=HEBREW_BLOCK_END).contains(&c)
}

/// Get the gematria weight of a character.
///
/// Returns 0 for any character outside the alphabet — unknown input is
/// dropped, never an error.
pub fn letter_weight(c: char) -> u64 {
    if is_hebrew_letter(c) {
        WEIGHTS[(c as usize) - (HEBREW_BLOCK_START as usize)]
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_letters() {
        assert_eq!(letter_weight('א'), 1);
        assert_eq!(letter_weight('ה'), 5);
        assert_eq!(letter_weight('ט'), 9);
    }

    #[test]
    fn test_tens_and_hundreds() {
        assert_eq!(letter_weight('י'), 10);
        assert_eq!(letter_weight('צ'), 90);
        assert_eq!(letter_weight('ק'), 100);
        assert_eq!(letter_weight('ת'), 400);
    }

    #[test]
    fn test_final_forms_share_base_weight() {
        assert_eq!(letter_weight('ך'), letter_weight('כ'));
        assert_eq!(letter_weight('ם'), letter_weight('מ'));
        assert_eq!(letter_weight('ן'), letter_weight('נ'));
        assert_eq!(letter_weight('ף'), letter_weight('פ'));
        assert_eq!(letter_weight('ץ'), letter_weight('צ'));
    }

    #[test]
    fn test_non_hebrew_is_zero() {
        assert_eq!(letter_weight('a'), 0);
        assert_eq!(letter_weight('7'), 0);
        assert_eq!(letter_weight(MAQAF), 0);
        assert_eq!(letter_weight(' '), 0);
    }

    #[test]
    fn test_block_is_total() {
        for c in HEBREW_BLOCK_START..=HEBREW_BLOCK_END {
            assert!(letter_weight(c) > 0, "no weight for {c}");
        }
    }
}
