//! Structured errors for version parsing, validation and formatting.

use std::fmt;

use thiserror::Error;

/// Stable category of a parse failure.
///
/// Match on this (via [`ParseError::kind`]) rather than on rendered
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input exceeded the parser's `max_input_length`.
    #[error("input too long ({length} > {limit})")]
    InputTooLong { length: usize, limit: usize },

    /// A tag (`v`-prefixed) input was given to a plain-only parser.
    #[error("tag form not allowed")]
    TagFormNotAllowed,

    /// A plain input was given to a tag-only parser.
    #[error("expected tag form")]
    ExpectedTagForm,

    /// The major field does not fit into `u64`.
    #[error("invalid major")]
    InvalidMajor,

    /// The minor field does not fit into `u64`.
    #[error("invalid minor")]
    InvalidMinor,

    /// The patch field does not fit into `u64`.
    #[error("invalid patch")]
    InvalidPatch,

    /// Input does not match the version grammar at all. Deliberately not
    /// field-specific.
    #[error("invalid version")]
    InvalidFormat,
}

/// Error returned by the version parsers.
///
/// Renders as `semver::<func>: "<input>": <cause>`. The quoted input
/// segment is omitted when the input is empty, and oversized input is
/// never echoed back.
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

    /// Name of the parse entry point that rejected the input.
    pub fn func(&self) -> &'static str {
        self.func
    }

    /// The offending input; empty when it was withheld or itself empty.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Stable failure category.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.is_empty() {
            write!(f, "semver::{}: {}", self.func, self.kind)
        } else {
            write!(f, "semver::{}: {:?}: {}", self.func, self.input, self.kind)
        }
    }
}

impl std::error::Error for ParseError {}

/// Returned by [`Ver::validate`](crate::semver::Ver::validate) when a
/// directly constructed value carries malformed components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidityError {
    #[error("invalid pre-release")]
    PreRelease,

    #[error("invalid build")]
    Build,
}

/// Returned by custom [`Formatter`](crate::semver::Formatter)
/// implementations. The canonical formatter never produces one.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}
