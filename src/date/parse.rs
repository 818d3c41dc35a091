//! Date parser: ISO 8601 extended and basic forms.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::date::Date;
use super::error::{ParseError, ParseErrorKind};

/// Default input ceiling in bytes; raise it above 10 to accept years
/// beyond 9999.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 10;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^([0-9]{4,9})-?(1[0-2]|0[0-9])-?(3[01]|[0-2][0-9])$").expect("date grammar")
});

/// Configurable date parser.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Longest accepted input in bytes; `0` disables the ceiling.
    pub max_input_length: usize,
    /// Accept the basic form (`YYYYMMDD`) in addition to the extended
    /// form (`YYYY-MM-DD`).
    pub allow_basic: bool,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            allow_basic: true,
        }
    }
}

impl Parser {
    /// Parses `input` according to this configuration.
    pub fn parse(&self, input: &str) -> Result<Date, ParseError> {
        self.parse_as("parse", input)
    }

    fn parse_as(&self, func: &'static str, input: &str) -> Result<Date, ParseError> {
        let result = self.run(func, input);
        if let Err(err) = &result {
            trace!(%err, "date input rejected");
        }
        result
    }

    fn run(&self, func: &'static str, input: &str) -> Result<Date, ParseError> {
        let len = input.len();
        if len == 0 {
            return Err(ParseError::new(func, "", ParseErrorKind::InvalidFormat));
        }
        if self.max_input_length != 0 && len > self.max_input_length {
            return Err(ParseError::new(
                func,
                "",
                ParseErrorKind::InputTooLong {
                    length: len,
                    limit: self.max_input_length,
                },
            ));
        }

        let caps = DATE
            .captures(input)
            .ok_or_else(|| ParseError::new(func, input, ParseErrorKind::InvalidFormat))?;

        // The grammar leaves separator placement ambiguous; rule out the
        // mixed forms YYYY-MMDD and YYYYMM-DD here.
        let b = input.as_bytes();
        let day_sep = b[len - 3] == b'-';
        if day_sep || b[len - 5] == b'-' {
            if !day_sep || b[len - 6] != b'-' {
                return Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat));
            }
        } else if !self.allow_basic {
            return Err(ParseError::new(func, input, ParseErrorKind::BasicFormDisabled));
        }

        // capture widths guarantee these fit
        let year: i32 = caps[1].parse().expect("year digits fit i32");
        let month: u32 = caps[2].parse().expect("month digits fit u32");
        let day: u32 = caps[3].parse().expect("day digits fit u32");

        Date::from_ymd(year, month, day)
            .ok_or_else(|| ParseError::new(func, input, ParseErrorKind::InvalidDate))
    }
}

/// Parses `input` with the default configuration.
pub fn parse(input: &str) -> Result<Date, ParseError> {
    Parser::default().parse_as("parse", input)
}
