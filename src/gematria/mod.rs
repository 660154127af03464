//! Gematria value encoding.
//!
//! This module turns Hebrew text into its gematria value: the sum of fixed
//! per-letter weights over the 22 Hebrew consonants (final letter forms carry
//! the same weight as their base forms). Purely numeric input bypasses letter
//! encoding entirely so users can type a target number directly.
//!
//! # Examples
//!
//! ```
//! use remez::gematria::encode;
//!
//! assert_eq!(encode("תורה"), 611);
//! assert_eq!(encode("613"), 613);
//! assert_eq!(encode(""), 0);
//! ```

pub mod alphabet;
pub mod encoder;

pub use alphabet::letter_weight;
pub use encoder::{EncoderInput, Value, encode};
