//! UUID parser.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::id::{ID_LENGTH, Id, URN_PREFIX};

/// Default input ceiling in bytes; covers the URN form exactly.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 45;

// Byte offset of each hex pair in the hyphenated form.
const STARTS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Configurable UUID parser.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Longest accepted input in bytes; `0` disables the ceiling.
    pub max_input_length: usize,
    /// Accept the `urn:uuid:` form.
    pub allow_urn: bool,
    /// Accept upper-case hex digits.
    pub allow_upper_case: bool,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            allow_urn: true,
            allow_upper_case: true,
        }
    }
}

impl Parser {
    /// Parses the canonical hyphenated form or, when `allow_urn` is on,
    /// the URN form with a case-insensitive prefix.
    pub fn parse(&self, input: &str) -> Result<Id, ParseError> {
        self.parse_as("parse", input)
    }

    fn parse_as(&self, func: &'static str, input: &str) -> Result<Id, ParseError> {
        let result = self.run(func, input);
        if let Err(err) = &result {
            trace!(%err, "uuid input rejected");
        }
        result
    }

    fn run(&self, func: &'static str, input: &str) -> Result<Id, ParseError> {
        let len = input.len();
        if self.max_input_length != 0 && len > self.max_input_length {
            // oversized input is withheld from the error
            return Err(ParseError::new(
                func,
                "",
                ParseErrorKind::InputTooLong {
                    length: len,
                    limit: self.max_input_length,
                },
            ));
        }

        let bytes = input.as_bytes();
        let offset = if len == ID_LENGTH {
            0
        } else if len == ID_LENGTH + URN_PREFIX.len() {
            if !self.allow_urn {
                return Err(ParseError::new(func, input, ParseErrorKind::UrnDisabled));
            }
            if !bytes[..URN_PREFIX.len()].eq_ignore_ascii_case(URN_PREFIX.as_bytes()) {
                return Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat));
            }
            URN_PREFIX.len()
        } else {
            return Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat));
        };

        if bytes[offset + 8] != b'-'
            || bytes[offset + 13] != b'-'
            || bytes[offset + 18] != b'-'
            || bytes[offset + 23] != b'-'
        {
            return Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat));
        }

        let mut halves = [0u64; 2];
        for (i, start) in STARTS.into_iter().enumerate() {
            for j in 0..2 {
                let digit = bytes[offset + start + j];
                let value = parse_digit(digit, self.allow_upper_case).ok_or_else(|| {
                    ParseError::new(func, input, ParseErrorKind::InvalidDigit(digit))
                })?;
                let bit = 124 - (i * 2 + j) * 4;
                halves[bit >> 6] |= value << (bit & 0x3f);
            }
        }
        Ok(Id {
            higher: halves[1],
            lower: halves[0],
        })
    }
}

fn parse_digit(digit: u8, allow_upper_case: bool) -> Option<u64> {
    match digit {
        b'0'..=b'9' => Some(u64::from(digit - b'0')),
        b'a'..=b'f' => Some(u64::from(digit - b'a' + 10)),
        b'A'..=b'F' if allow_upper_case => Some(u64::from(digit - b'A' + 10)),
        _ => None,
    }
}

/// Parses `input` with the default configuration.
pub fn parse(input: &str) -> Result<Id, ParseError> {
    Parser::default().parse_as("parse", input)
}
