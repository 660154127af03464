//! Verse reference parsing.
//!
//! Corpus entries identify their verse with a string of the exact shape
//! `"<Book words> <chapter>:<verse>"`, e.g. `"Genesis 7:5"`. Parsing follows
//! that fixed grammar and fails closed: a string that does not match yields
//! no reference, which downstream filters treat as "not in section".

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One or more alphabetic/space book tokens, a space, integer chapter,
    /// colon, integer verse. Anchored at both ends.
    static ref REF_PATTERN: Regex =
        Regex::new(r"^([A-Za-z\s]+) (\d+):(\d+)$").expect("reference pattern is valid");
}

/// A parsed verse address: book plus integer chapter and verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRef {
    /// Book name, as it appears in the reference string.
    pub book: String,
    /// Chapter number (1-based).
    pub chapter: u32,
    /// Verse number (1-based).
    pub verse: u32,
}

impl VerseRef {
    /// Parse a reference string. Returns `None` for anything that does not
    /// match the grammar exactly, including chapter/verse numbers too large
    /// for `u32`.
    pub fn parse(reference: &str) -> Option<VerseRef> {
        let captures = REF_PATTERN.captures(reference)?;
        let chapter = captures[2].parse::<u32>().ok()?;
        let verse = captures[3].parse::<u32>().ok()?;
        Some(VerseRef {
            book: captures[1].to_string(),
            chapter,
            verse,
        })
    }

    /// The (chapter, verse) address, ordered lexicographically by integer
    /// comparison.
    pub fn address(&self) -> (u32, u32) {
        (self.chapter, self.verse)
    }
}
