//! Structured errors for roman numeral parsing.

use std::fmt;

use thiserror::Error;

/// Stable category of a roman numeral parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input exceeded the parser's `max_input_length`.
    #[error("input too long ({length} > {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// Input is not a roman numeral (this includes empty input when
    /// `empty_as_zero` is off).
    #[error("invalid roman number")]
    InvalidFormat,
}

/// Error returned by the roman numeral parser.
///
/// Renders as `roman::<func>: "<input>": <cause>`; the quoted segment is
/// omitted for empty input and oversized input is never echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    func: &'static str,
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(func: &'static str, input: impl Into<String>, kind: ParseErrorKind) -> Self {
        ParseError {
            func,
            input: input.into(),
            kind,
        }
    }

    pub fn func(&self) -> &'static str {
        self.func
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.is_empty() {
            write!(f, "roman::{}: {}", self.func, self.kind)
        } else {
            write!(f, "roman::{}: {:?}: {}", self.func, self.input, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}
