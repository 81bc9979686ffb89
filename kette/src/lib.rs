//! Kette is a small parser-combinator library for string input.
//!
//! A [`Parser`] consumes a prefix of its input and returns a [`Parsed`] value: either the parsed
//! value together with the remaining input, or a [`SyntaxError`] with the byte offset at which
//! matching could not continue and a message.
//!
//! Parsers are built from recognizers, which match a regular expression at the start of the input,
//! and four combinators:
//!
//! * [`and_then`] parses two things in sequence,
//! * [`or_else`] tries an alternative on the same input when the first parser failed,
//! * [`map`] transforms the value of a successful parse, and
//! * [`choice`] tries a list of alternatives in order.
//!
//! Everything else, like [`keep_left`] and [`keep_right`], is built from these.
//!
//! ## Failure offsets
//!
//! The offset of a failure is always relative to the input passed to the parser that returned it.
//! When a sequence fails in its second part, the offset reported by the second parser is moved
//! forward by the length of the input consumed by the first part, so that nested combinators
//! point at the right place in the input of the outermost parser:
//!
//! ```rust
//! # use kette::*;
//! let letter = matching("[a-z]")?;
//! let digit = matching("[0-9]")?;
//! let coordinate = and_then(letter, digit);
//!
//! assert_eq!(coordinate.parse("a9x"), Success(("a".to_owned(), "9".to_owned()), "x"));
//! assert_eq!(
//!     coordinate.parse("ab"),
//!     Failure(SyntaxError::new(1, "Error: Could not match /[0-9]/"))
//! );
//! # Ok::<(), BuildError>(())
//! ```
//!
//! When both sides of an alternation fail, the failure of the first alternative is reported.
//!
//! Failed parses can be shown to a user with the helpers in [`report`].

#![warn(missing_docs)]
mod combinators;
mod error;
mod parsed;
mod parser;
pub mod report;

pub use combinators::{
    and_then, choice, end_of_input, from_regex, keep_left, keep_right, map, matching,
    matching_with_error, or_else, or_else_with_error,
};
pub use error::{BuildError, SyntaxError};
pub use parsed::Parsed;
pub use parser::Parser;
pub use report::display_error;

pub use Parsed::*;
