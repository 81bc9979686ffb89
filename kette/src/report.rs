//! Human readable reporting of parse failures.
//!
//! Failures only carry a byte offset. The reporter shows a window of the input around that offset
//! with a marker pointing at the failure, which is usually enough to spot the problem without
//! translating offsets into lines and columns.
use tracing::{debug, warn};

use crate::{Failure, Parser, SyntaxError};

/// Where [`display_error_with`] sends rendered failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Sink {
    /// Print to the standard error stream.
    #[default]
    Stderr,
    /// Emit a `WARN` level [`tracing`] event.
    Tracing,
}

/// Configuration options for failure reporting.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Config {
    /// Number of characters of input shown on each side of the failure offset.
    pub context: usize,
    /// Destination of rendered failures.
    pub sink: Sink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: 10,
            sink: Sink::Stderr,
        }
    }
}

impl Config {
    /// Sets the number of characters shown on each side of the failure offset.
    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// Sets the destination of rendered failures.
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }
}

/// Renders `err` against the `input` it was produced from.
///
/// The output consists of the message and offset, followed by up to `context` characters before
/// and after the offset, and a line with a `^` under the character at the offset.
/// Control characters in the window are shown as spaces so that the marker stays aligned.
pub fn render_failure(input: &str, err: &SyntaxError, context: usize) -> String {
    let mut offset = err.offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }

    let start = input[..offset]
        .char_indices()
        .rev()
        .take(context)
        .last()
        .map_or(offset, |(index, _)| index);
    let end = input[offset..]
        .char_indices()
        .nth(context)
        .map_or(input.len(), |(index, _)| offset + index);

    let printable = |c: char| if c.is_control() { ' ' } else { c };
    let window: String = input[start..end].chars().map(printable).collect();
    let marker = " ".repeat(input[start..offset].chars().count());

    format!(
        "{} (at offset {})\n  | {window}\n  | {marker}^",
        err.msg, err.offset
    )
}

/// Wraps `parser` so that failures are printed to stderr.
///
/// The result of `parser` is returned unchanged. See [`render_failure`] for the output format.
pub fn display_error<T: 'static>(parser: Parser<T>) -> Parser<T> {
    display_error_with(parser, Config::default())
}

/// Variant of [`display_error`] using the given [`Config`].
pub fn display_error_with<T: 'static>(parser: Parser<T>, config: Config) -> Parser<T> {
    Parser::new(move |input| {
        let parsed = parser.parse(input);
        if let Failure(err) = &parsed {
            report(input, err, &config);
        }
        parsed
    })
}

fn report(input: &str, err: &SyntaxError, config: &Config) {
    debug!(offset = err.offset, "reporting parse failure");
    let rendered = render_failure(input, err, config.context);
    match config.sink {
        Sink::Stderr => eprintln!("{rendered}"),
        Sink::Tracing => warn!(offset = err.offset, "{rendered}"),
    }
}
