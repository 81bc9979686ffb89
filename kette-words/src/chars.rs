//! Single character and whitespace recognizers.
use kette::{matching, or_else_with_error, Parser};
use once_cell::sync::Lazy;

/// Compiles one of the fixed patterns of this crate.
pub(crate) fn builtin(pattern: &str) -> Parser<String> {
    matching(pattern).unwrap_or_else(|err| panic!("built-in pattern failed to compile: {err}"))
}

static LOWERCASE: Lazy<Parser<String>> = Lazy::new(|| builtin("[a-z]"));
static UPPERCASE: Lazy<Parser<String>> = Lazy::new(|| builtin("[A-Z]"));
static DIGIT: Lazy<Parser<String>> = Lazy::new(|| builtin("[0-9]"));
static WHITESPACE: Lazy<Parser<String>> = Lazy::new(|| builtin(r"\s+"));
static CHARACTER: Lazy<Parser<String>> = Lazy::new(|| {
    or_else_with_error(lowercase(), uppercase(), "Error: Could not match character")
});

/// Parses a single ASCII lowercase letter.
pub fn lowercase() -> Parser<String> {
    LOWERCASE.clone()
}

/// Parses a single ASCII uppercase letter.
pub fn uppercase() -> Parser<String> {
    UPPERCASE.clone()
}

/// Parses a single ASCII letter of either case.
///
/// Fails with `Error: Could not match character`.
pub fn character() -> Parser<String> {
    CHARACTER.clone()
}

/// Parses a single decimal digit.
pub fn digit() -> Parser<String> {
    DIGIT.clone()
}

/// Parses a non-empty run of whitespace.
pub fn whitespace() -> Parser<String> {
    WHITESPACE.clone()
}

#[cfg(test)]
mod tests {
    use kette::{Failure, Success, SyntaxError};

    use super::*;

    #[test]
    fn letters() {
        assert_eq!(lowercase().parse("ab"), Success("a".to_owned(), "b"));
        assert!(lowercase().parse("Ab").is_failure());
        assert_eq!(uppercase().parse("Ab"), Success("A".to_owned(), "b"));
        assert_eq!(character().parse("Zz"), Success("Z".to_owned(), "z"));
        assert_eq!(character().parse("zZ"), Success("z".to_owned(), "Z"));
        assert_eq!(
            character().parse("9"),
            Failure(SyntaxError::new(0, "Error: Could not match character"))
        );
    }

    #[test]
    fn digits_and_whitespace() {
        assert_eq!(digit().parse("42"), Success("4".to_owned(), "2"));
        assert_eq!(
            digit().parse("x"),
            Failure(SyntaxError::new(0, "Error: Could not match /[0-9]/"))
        );
        assert_eq!(whitespace().parse(" \t\nx"), Success(" \t\n".to_owned(), "x"));
        assert!(whitespace().parse("x").is_failure());
    }
}
