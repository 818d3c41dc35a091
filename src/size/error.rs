//! Structured errors for byte-size construction and parsing.

use std::fmt;

use thiserror::Error;

/// Error returned by [`Size::new`](super::Size::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewError {
    /// The unit is not a known byte-size unit (for the value 0 this also
    /// covers units too big for `u64`).
    #[error("invalid unit {0:?}")]
    InvalidUnit(String),

    /// The value times the unit factor overflows `u64`.
    #[error("value {value} with unit {unit:?} is not suitable for u64")]
    InvalidValue { value: u64, unit: String },
}

/// Stable category of a byte-size parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input exceeded the parser's `max_input_length`.
    #[error("input too long ({length} > {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// Input carries a unit but the parser's `allow_unit` rule is off.
    #[error("unit disabled")]
    UnitDisabled,

    /// Input is not a number with an optional unit.
    #[error("unable to parse")]
    InvalidFormat,

    /// The number parsed but the unit or the combination did not.
    #[error(transparent)]
    New(#[from] NewError),
}

/// Error returned by the byte-size parser.
///
/// Renders as `size::<func>: "<input>": <cause>`; the quoted segment is
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
            write!(f, "size::{}: {}", self.func, self.kind)
        } else {
            write!(f, "size::{}: {:?}: {}", self.func, self.input, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}
