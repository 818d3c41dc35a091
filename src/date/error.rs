//! Structured errors for date parsing, binary decoding and filters.

use std::fmt;

use thiserror::Error;

use super::date::Date;

/// Stable category of a date parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input exceeded the parser's `max_input_length`.
    #[error("input too long ({length} > {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// A basic-form (`YYYYMMDD`) input was given with `allow_basic` off.
    #[error("basic form disabled")]
    BasicFormDisabled,

    /// The input matched the grammar but names no existing calendar date.
    #[error("invalid calendar date")]
    InvalidDate,

    /// Input does not match the date grammar.
    #[error("invalid date")]
    InvalidFormat,
}

/// Error returned by the date parser.
///
/// Renders as `date::<func>: "<input>": <cause>`; the quoted segment is
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
            write!(f, "date::{}: {}", self.func, self.kind)
        } else {
            write!(f, "date::{}: {:?}: {}", self.func, self.input, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned by [`Date::from_bytes`](super::Date::from_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinaryError {
    /// Wrong payload length; the codec is fixed-width.
    #[error("invalid length: expected 7 instead of {0}")]
    InvalidLength(usize),

    /// Unknown leading version byte.
    #[error("unsupported version: expected 1 instead of {0}")]
    UnsupportedVersion(u8),

    /// Decoded fields name no existing calendar date.
    #[error("invalid calendar date")]
    InvalidDate,
}

/// Error returned by [`Filter::from_to`](super::Filter::from_to) for an
/// inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid from or to: {from} > {to}")]
pub struct FilterError {
    pub from: Date,
    pub to: Date,
}
