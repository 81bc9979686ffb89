//! Word parsers.
//!
//! [`word`] is a single recognizer. [`word_recursive`] builds the same kind of parser out of
//! [`character`] and [`whitespace`] by recursion, which is slower but shows how the combinators
//! nest and how failure offsets travel through them.
use kette::{
    and_then, keep_left, map, matching_with_error, or_else_with_error, Failure, Parsed, Parser,
    Success,
};
use once_cell::sync::Lazy;
use tracing::trace;

use crate::chars::{builtin, character, whitespace};

const WORD_ERROR: &str = "Error: Could not match word";

static WORD: Lazy<Parser<String>> = Lazy::new(|| {
    matching_with_error("[a-zA-Z]+", WORD_ERROR)
        .unwrap_or_else(|err| panic!("built-in pattern failed to compile: {err}"))
});

static OPTIONAL_WHITESPACE: Lazy<Parser<String>> = Lazy::new(|| builtin(r"\s*"));

/// Longest word accepted by [`word_recursive`].
pub const MAX_RECURSIVE_WORD_LEN: usize = 256;

/// Builds the parser for the letter at position `depth` (starting at 1) of a word.
///
/// The next level is only built when the input reaches it.
fn word_recursive_level(depth: usize) -> Parser<String> {
    let next = Parser::new(move |input| {
        if depth >= MAX_RECURSIVE_WORD_LEN {
            return Parsed::fail(0, WORD_ERROR);
        }
        word_recursive_level(depth + 1).parse(input)
    });
    or_else_with_error(
        keep_left(character(), whitespace()),
        map(and_then(character(), next), |(first, rest)| first + &rest),
        WORD_ERROR,
    )
}

/// Parses a non-empty run of ASCII letters.
///
/// Fails with `Error: Could not match word`.
pub fn word() -> Parser<String> {
    WORD.clone()
}

/// Parses ASCII letters up to and including the following whitespace.
///
/// The parsed value contains only the letters. A word must be terminated by whitespace, so a word
/// at the very end of the input is rejected. When the input does not continue as expected, the
/// failure is reported after the first letter, as the alternatives tried for the first letter
/// take precedence over those of the deeper levels.
///
/// Every letter adds a level of nested parser calls, so the recursion is cut off after
/// [`MAX_RECURSIVE_WORD_LEN`] letters and longer words are rejected with the usual word error.
/// Use [`word`] for input of unknown length.
pub fn word_recursive() -> Parser<String> {
    word_recursive_level(1)
}

/// Parses a whitespace separated list of words.
///
/// Leading and trailing whitespace is skipped. The whole input has to consist of words, so on
/// success the remaining input is empty.
pub fn words() -> Parser<Vec<String>> {
    let token = keep_left(word(), OPTIONAL_WHITESPACE.clone());
    let leading = OPTIONAL_WHITESPACE.clone();
    Parser::new(move |input| {
        let mut rest = match leading.parse(input) {
            Success(_, rest) => rest,
            Failure(err) => return Failure(err),
        };
        let mut words = vec![];
        while !rest.is_empty() {
            match token.parse(rest) {
                Success(word, next) => {
                    words.push(word);
                    rest = next;
                }
                Failure(err) => return Failure(err.shifted(input.len() - rest.len())),
            }
        }
        trace!(count = words.len(), "parsed words");
        Success(words, rest)
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kette::SyntaxError;

    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn single_recognizer() {
        assert_eq!(word().parse("hello world"), Success("hello".to_owned(), " world"));
        assert_eq!(word().parse("Hi!"), Success("Hi".to_owned(), "!"));
        assert_eq!(
            word().parse(" hello"),
            Failure(SyntaxError::new(0, WORD_ERROR))
        );
    }

    #[test]
    fn recursive_formulation() {
        assert_eq!(
            word_recursive().parse("hello world"),
            Success("hello".to_owned(), "world")
        );
        assert_eq!(word_recursive().parse("a  b"), Success("a".to_owned(), "b"));
        assert_matches!(
            word_recursive().parse("hello"),
            Failure(SyntaxError { offset: 1, msg }) if msg == WORD_ERROR
        );
        assert_matches!(
            word_recursive().parse("h"),
            Failure(SyntaxError { offset: 1, .. })
        );
        assert_eq!(
            word_recursive().parse("1abc"),
            Failure(SyntaxError::new(0, WORD_ERROR))
        );
        assert_eq!(
            word_recursive().parse(""),
            Failure(SyntaxError::new(0, WORD_ERROR))
        );
    }

    #[test]
    fn recursive_and_single_agree_on_terminated_words() {
        for input in ["a ", "abc def", "Mixed\tCase", "x\ny"] {
            let single = keep_left(word(), whitespace()).parse(input);
            assert_eq!(word_recursive().parse(input), single, "input {input:?}");
        }
    }

    #[test]
    fn recursive_depth_is_bounded() {
        let longest = "a".repeat(MAX_RECURSIVE_WORD_LEN);
        assert_eq!(
            word_recursive().parse(&format!("{longest} rest")),
            Success(longest, "rest")
        );

        for len in [MAX_RECURSIVE_WORD_LEN + 1, 5000, 100_000] {
            let input = format!("{} ", "a".repeat(len));
            assert_matches!(
                word_recursive().parse(&input),
                Failure(SyntaxError { offset: 1, msg }) if msg == WORD_ERROR
            );
            assert_matches!(word().parse(&input), Success(parsed, " ") if parsed.len() == len);
        }
    }

    #[test]
    fn word_lists() {
        assert_eq!(words().parse(""), Success(vec![], ""));
        assert_eq!(
            words().parse("  the quick\tbrown fox "),
            Success(strings(&["the", "quick", "brown", "fox"]), "")
        );
        assert_eq!(
            words().parse("the quick 8rown fox"),
            Failure(SyntaxError::new(10, WORD_ERROR))
        );
        assert_eq!(
            words().parse("ab1"),
            Failure(SyntaxError::new(2, WORD_ERROR))
        );
    }
}
