//! Character and word parsers built from [`kette`] combinators.
//!
//! These are small, ready to use recognizers for ASCII letters, digits, whitespace and words, and
//! serve as examples of composing parsers with `kette`.
#![warn(missing_docs)]
mod chars;
mod word;

pub use chars::{character, digit, lowercase, uppercase, whitespace};
pub use word::{word, word_recursive, words, MAX_RECURSIVE_WORD_LEN};
