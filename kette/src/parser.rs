use std::{
    fmt,
    ops::{Add, BitOr, Mul, Shr, Sub},
    sync::Arc,
};

use crate::{combinators, Parsed};

type ParserFn<T> = Arc<dyn for<'a> Fn(&'a str) -> Parsed<'a, T> + Send + Sync>;

/// A parser producing values of type `T`.
///
/// This is a cheaply clonable handle to a parsing function. Parsers hold no mutable state, so the
/// same parser can be used any number of times, including concurrently from multiple threads.
///
/// Parsers are built from the recognizers and combinators of this crate, or from any function or
/// closure with a matching signature using [`Parser::new`].
pub struct Parser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Parser<T> {
    /// Wraps a parsing function.
    ///
    /// The function must return a [`Success`][Parsed::Success] whose remaining input is a suffix
    /// of its argument, and failure offsets that lie within its argument.
    pub fn new<F>(parse: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Parsed<'a, T> + Send + Sync + 'static,
    {
        Parser {
            parser: Arc::new(parse),
        }
    }

    /// Runs the parser on `input`.
    #[inline]
    pub fn parse<'a>(&self, input: &'a str) -> Parsed<'a, T> {
        (self.parser)(input)
    }
}

impl<T: 'static> Parser<T> {
    /// Method form of [`and_then`][crate::and_then].
    pub fn and_then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        combinators::and_then(self, other)
    }

    /// Method form of [`or_else`][crate::or_else].
    pub fn or_else(self, other: Parser<T>) -> Parser<T> {
        combinators::or_else(self, other)
    }

    /// Method form of [`or_else_with_error`][crate::or_else_with_error].
    pub fn or_else_with_error(self, other: Parser<T>, msg: impl Into<String>) -> Parser<T> {
        combinators::or_else_with_error(self, other, msg)
    }

    /// Method form of [`map`][crate::map].
    pub fn map<U: 'static, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        combinators::map(self, f)
    }

    /// Method form of [`keep_left`][crate::keep_left].
    pub fn keep_left<U: 'static>(self, other: Parser<U>) -> Parser<T> {
        combinators::keep_left(self, other)
    }

    /// Method form of [`keep_right`][crate::keep_right].
    pub fn keep_right<U: 'static>(self, other: Parser<U>) -> Parser<U> {
        combinators::keep_right(self, other)
    }

    /// Replaces the message of any failure with `msg`, keeping the failure offset.
    pub fn with_error(self, msg: impl Into<String>) -> Parser<T> {
        let msg = msg.into();
        Parser::new(move |input| {
            self.parse(input).map_failure(|mut err| {
                err.msg.clone_from(&msg);
                err
            })
        })
    }

    /// Method form of [`display_error`][crate::report::display_error].
    pub fn display_error(self) -> Parser<T> {
        crate::report::display_error(self)
    }
}

/// `+` for sequence: `a + b` parses `(A, B)`.
impl<T: 'static, U: 'static> Add<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;

    fn add(self, rhs: Parser<U>) -> Self::Output {
        self.and_then(rhs)
    }
}

/// `-` for keep left: `a - b` parses both and keeps `A`.
impl<T: 'static, U: 'static> Sub<Parser<U>> for Parser<T> {
    type Output = Parser<T>;

    fn sub(self, rhs: Parser<U>) -> Self::Output {
        self.keep_left(rhs)
    }
}

/// `*` for keep right: `a * b` parses both and keeps `B`.
impl<T: 'static, U: 'static> Mul<Parser<U>> for Parser<T> {
    type Output = Parser<U>;

    fn mul(self, rhs: Parser<U>) -> Self::Output {
        self.keep_right(rhs)
    }
}

/// `|` for alternation: `a | b` parses `A` or, failing that, `B`.
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or_else(rhs)
    }
}

/// `>>` for map: `a >> f` parses `A` and applies `f`.
impl<T: 'static, U: 'static, F> Shr<F> for Parser<T>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = Parser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}
