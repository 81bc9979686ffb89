use std::fmt;

use thiserror::Error;

/// The failure produced when a parser does not match its input.
///
/// There is only this one kind of parse failure. Running out of input is reported the same way as
/// any other mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset of the failure.
    ///
    /// The offset is relative to the input passed to the parser that returned this error. Every
    /// combinator re-bases the offsets of its constituents, so the outermost caller can always
    /// interpret it against the input it supplied.
    pub offset: usize,
    /// The error message.
    pub msg: String,
}

impl SyntaxError {
    /// Creates a syntax error at `offset`.
    pub fn new(offset: usize, msg: impl Into<String>) -> Self {
        Self {
            offset,
            msg: msg.into(),
        }
    }

    /// Returns the same error with its offset moved forward by `consumed` bytes.
    #[inline]
    pub fn shifted(self, consumed: usize) -> Self {
        Self {
            offset: self.offset + consumed,
            msg: self.msg,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.offset, self.msg)
    }
}

impl std::error::Error for SyntaxError {}

/// An error while constructing a parser.
///
/// These are configuration mistakes of the caller and are reported before any input is parsed.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The pattern passed to a recognizer is not a valid regular expression.
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// The error reported by the regex compiler.
        #[source]
        source: regex::Error,
    },
    /// [`choice`][crate::choice] was called without any alternatives.
    #[error("choice requires at least one parser")]
    EmptyChoice,
}
