//! Recognizers and the combinators that compose them.
//!
//! Every function here has a method or operator counterpart on [`Parser`]. The free functions
//! read better when building parsers from lists, the methods when chaining.
use regex::Regex;
use tracing::{debug, trace};

use crate::{BuildError, Failure, Parsed, Parser, Success};

/// Returns a parser which recognizes `pattern` at the start of its input.
///
/// On success the parsed value is the matched text. On failure the offset is always `0`, with the
/// message `Error: Could not match /<pattern>/`.
///
/// A pattern that can match the empty string succeeds without consuming input. Such a parser must
/// not be used in a construct that repeats until no more input is consumed.
pub fn matching(pattern: &str) -> Result<Parser<String>, BuildError> {
    matching_with_error(pattern, format!("Error: Could not match /{pattern}/"))
}

/// Variant of [`matching`] which fails with the message `msg`.
pub fn matching_with_error(
    pattern: &str,
    msg: impl Into<String>,
) -> Result<Parser<String>, BuildError> {
    let regex =
        Regex::new(&format!("^(?:{pattern})")).map_err(|source| BuildError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
    debug!(pattern, "compiled recognizer");
    Ok(from_regex(regex, msg))
}

/// Returns a parser which recognizes an already compiled `regex` at the start of its input.
///
/// The regex does not need to be anchored, but unanchored regexes are searched through the whole
/// input before a mismatch is reported, so anchoring with `^` is much faster.
pub fn from_regex(regex: Regex, msg: impl Into<String>) -> Parser<String> {
    let msg = msg.into();
    Parser::new(move |input| match regex.find(input) {
        // Leftmost search, so a match at 0 is found whenever one exists.
        Some(found) if found.start() == 0 => {
            Success(found.as_str().to_owned(), &input[found.end()..])
        }
        _ => Parsed::fail(0, msg.as_str()),
    })
}

/// Returns a parser which only succeeds on empty input.
pub fn end_of_input() -> Parser<()> {
    Parser::new(|input| {
        if input.is_empty() {
            Success((), input)
        } else {
            Parsed::fail(0, "Error: Expected end of input")
        }
    })
}

/// Sequence: parses `first` and then `second` on the remaining input.
///
/// A failure of `second` is re-based so that its offset is relative to the input of the combined
/// parser, i.e. it is moved forward by the number of bytes `first` consumed.
pub fn and_then<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<(A, B)> {
    Parser::new(move |input| match first.parse(input) {
        Success(a, rest) => {
            let consumed = input.len() - rest.len();
            second.parse(rest).map(|b| (a, b)).shifted(consumed)
        }
        Failure(err) => Failure(err),
    })
}

/// Alternation: parses `first` or, if that fails, `second` on the same input.
///
/// When both fail, the failure of `first` is returned, even if `second` got further into the
/// input.
pub fn or_else<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    Parser::new(move |input| {
        first.parse(input).or_parse(|| {
            trace!("first alternative failed, trying second");
            second.parse(input)
        })
    })
}

/// Variant of [`or_else`] which fails with the message `msg` at the offset of `first`'s failure.
pub fn or_else_with_error<T: 'static>(
    first: Parser<T>,
    second: Parser<T>,
    msg: impl Into<String>,
) -> Parser<T> {
    or_else(first, second).with_error(msg)
}

/// Transform: applies `f` to the value of a successful parse.
///
/// The remaining input and failures are passed through unchanged. `f` cannot fail.
pub fn map<T: 'static, U: 'static, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Parser::new(move |input| parser.parse(input).map(&f))
}

/// Choice: tries the `parsers` in order and returns the first success.
///
/// This is [`or_else`] folded over the list from the left, so when all alternatives fail, the
/// failure of the first one is returned. An empty list is rejected with
/// [`BuildError::EmptyChoice`].
pub fn choice<T: 'static>(
    parsers: impl IntoIterator<Item = Parser<T>>,
) -> Result<Parser<T>, BuildError> {
    let parsers: Vec<_> = parsers.into_iter().collect();
    debug!(alternatives = parsers.len(), "building choice");
    let mut parsers = parsers.into_iter();
    let first = parsers.next().ok_or(BuildError::EmptyChoice)?;
    Ok(parsers.fold(first, or_else))
}

/// Parses `first` and then `second`, keeping only the value of `first`.
pub fn keep_left<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<A> {
    map(and_then(first, second), |(left, _)| left)
}

/// Parses `first` and then `second`, keeping only the value of `second`.
pub fn keep_right<A: 'static, B: 'static>(first: Parser<A>, second: Parser<B>) -> Parser<B> {
    map(and_then(first, second), |(_, right)| right)
}
