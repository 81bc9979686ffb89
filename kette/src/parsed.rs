use crate::SyntaxError;

/// Return type of every parser.
///
/// A parser either matches a prefix of its input, returning the parsed value together with the
/// remaining input, or fails with a [`SyntaxError`] that points at the offset where matching could
/// not continue.
///
/// The remaining input of a `Success` is always a suffix of the input that was passed to the
/// parser. A parser that consumes nothing returns the input unchanged.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<'a, T> {
    /// A successfully parsed value and the unconsumed rest of the input.
    Success(T, &'a str),
    /// The input did not match.
    ///
    /// The error offset is relative to the input of the parser that returned this value.
    Failure(SyntaxError),
}

use Parsed::{Failure, Success};

impl<'a, T> Parsed<'a, T> {
    /// Shorthand for `Failure(SyntaxError::new(offset, msg))`.
    #[inline]
    pub fn fail(offset: usize, msg: impl Into<String>) -> Self {
        Failure(SyntaxError::new(offset, msg))
    }

    /// Returns whether the parser matched.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(..))
    }

    /// Returns whether the parser failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns the unconsumed input of a successful parse.
    #[inline]
    pub fn rest(&self) -> Option<&'a str> {
        match self {
            Success(_, rest) => Some(rest),
            Failure(_) => None,
        }
    }

    /// Returns the error of a failed parse.
    #[inline]
    pub fn failure(&self) -> Option<&SyntaxError> {
        match self {
            Success(..) => None,
            Failure(err) => Some(err),
        }
    }

    /// Number of bytes of `input` consumed by a successful parse.
    ///
    /// `input` must be the input this result was produced from.
    #[inline]
    pub fn consumed(&self, input: &str) -> Option<usize> {
        self.rest().map(|rest| input.len() - rest.len())
    }

    /// Replaces a successfully parsed value with the value returned when applying `f` to it.
    ///
    /// The remaining input and any failure are returned unchanged.
    #[inline]
    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Parsed<'a, T2> {
        match self {
            Success(value, rest) => Success(f(value), rest),
            Failure(err) => Failure(err),
        }
    }

    /// Replaces a failure with the error returned when applying `f` to it.
    #[inline]
    pub fn map_failure(self, f: impl FnOnce(SyntaxError) -> SyntaxError) -> Self {
        match self {
            Failure(err) => Failure(f(err)),
            success => success,
        }
    }

    /// Moves the offset of a failure forward by `consumed` bytes.
    ///
    /// Used when the result was produced from a suffix of the input that starts `consumed` bytes
    /// into the input the caller is interested in.
    #[inline]
    pub fn shifted(self, consumed: usize) -> Self {
        self.map_failure(|err| err.shifted(consumed))
    }

    /// Tries a different parser when this one failed.
    ///
    /// If the alternative fails too, this failure is kept. The alternative is expected to run on
    /// the same input as the parser that produced `self`.
    #[inline]
    pub fn or_parse(self, parse: impl FnOnce() -> Parsed<'a, T>) -> Parsed<'a, T> {
        match self {
            Failure(err) => match parse() {
                Failure(_) => Failure(err),
                success => success,
            },
            success => success,
        }
    }

    /// Converts into a plain [`Result`], so that `?` can be used on parse results.
    #[inline]
    pub fn into_result(self) -> Result<(T, &'a str), SyntaxError> {
        self.into()
    }
}

impl<'a, T> From<Parsed<'a, T>> for Result<(T, &'a str), SyntaxError> {
    #[inline]
    fn from(parsed: Parsed<'a, T>) -> Self {
        match parsed {
            Success(value, rest) => Ok((value, rest)),
            Failure(err) => Err(err),
        }
    }
}

impl<'a, T> From<Result<(T, &'a str), SyntaxError>> for Parsed<'a, T> {
    #[inline]
    fn from(res: Result<(T, &'a str), SyntaxError>) -> Self {
        match res {
            Ok((value, rest)) => Success(value, rest),
            Err(err) => Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword<'a>(input: &'a str, keyword: &'static str) -> Parsed<'a, ()> {
        input
            .strip_prefix(keyword)
            .map(|rest| ((), rest.trim_start_matches(' ')))
            .ok_or_else(|| SyntaxError::new(0, format!("expected {keyword}")))
            .into()
    }

    fn number(input: &str) -> Parsed<'_, i64> {
        let digits = input.bytes().take_while(u8::is_ascii_digit).count();
        match input[..digits].parse() {
            Ok(value) => Success(value, input[digits..].trim_start_matches(' ')),
            Err(_) => Parsed::fail(0, "expected number"),
        }
    }

    fn entry(input: &str) -> Parsed<'_, Option<i64>> {
        number(input)
            .map(Some)
            .or_parse(|| keyword(input, "none").map(|_| None))
    }

    fn entries(input: &str) -> Result<(Vec<Option<i64>>, &str), SyntaxError> {
        let (_, mut rest) = keyword(input, "begin").into_result()?;
        let mut values = vec![];
        loop {
            match entry(rest) {
                Success(value, next) => {
                    values.push(value);
                    rest = next;
                }
                Failure(_) => break,
            }
        }
        let consumed = input.len() - rest.len();
        let (_, rest) = keyword(rest, "end").shifted(consumed).into_result()?;
        Ok((values, rest))
    }

    #[test]
    fn parsing() {
        assert_eq!(entries(""), Err(SyntaxError::new(0, "expected begin")));
        assert_eq!(entries("begin"), Err(SyntaxError::new(5, "expected end")));
        assert_eq!(
            entries("begin 1 none x"),
            Err(SyntaxError::new(13, "expected end"))
        );
        assert_eq!(entries("begin end"), Ok((vec![], "")));
        assert_eq!(
            entries("begin 1 none 23 end tail"),
            Ok((vec![Some(1), None, Some(23)], "tail"))
        );
    }

    #[test]
    fn or_parse_keeps_first_failure() {
        let first: Parsed<()> = Parsed::fail(3, "first");
        assert_eq!(
            first.or_parse(|| Parsed::fail(7, "second")),
            Parsed::fail(3, "first")
        );
        let first: Parsed<()> = Parsed::fail(3, "first");
        assert_eq!(first.or_parse(|| Success((), "x")), Success((), "x"));
    }

    #[test]
    fn accessors() {
        let input = "abc";
        let parsed = Success('a', &input[1..]);
        assert!(parsed.is_success());
        assert_eq!(parsed.rest(), Some("bc"));
        assert_eq!(parsed.consumed(input), Some(1));
        assert_eq!(parsed.failure(), None);

        let failed: Parsed<char> = Parsed::fail(0, "nope").shifted(2);
        assert!(failed.is_failure());
        assert_eq!(failed.rest(), None);
        assert_eq!(failed.failure(), Some(&SyntaxError::new(2, "nope")));
    }
}
