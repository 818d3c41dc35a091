//! Structured errors for UUID parsing.

use std::fmt;

use thiserror::Error;

/// Stable category of a UUID parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input exceeded the parser's `max_input_length`.
    #[error("input too long ({length} > {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// Input is in URN form but the parser's `allow_urn` rule is off.
    #[error("urn format disabled")]
    UrnDisabled,

    /// A byte at a digit position is not a hex digit (upper-case hex also
    /// lands here when `allow_upper_case` is off).
    #[error("{}", digit_message(*.0))]
    InvalidDigit(u8),

    /// Wrong length, misplaced hyphens, or a malformed URN prefix.
    #[error("invalid format")]
    InvalidFormat,
}

fn digit_message(digit: u8) -> String {
    if digit.is_ascii_graphic() {
        format!("invalid digit '{}' (U+{:04X})", digit as char, digit)
    } else {
        format!("invalid digit U+{digit:04X}")
    }
}

/// Error returned by the UUID parser.
///
/// Renders as `uuid::<func>: "<input>": <cause>`; the quoted segment is
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
            write!(f, "uuid::{}: {}", self.func, self.kind)
        } else {
            write!(f, "uuid::{}: {:?}: {}", self.func, self.input, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}
