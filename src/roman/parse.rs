//! Roman numeral parser.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::number::Number;

/// Default input ceiling in bytes.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 128;

// Each group accepts the short form (IV, IX) and the long run (IIII);
// parse_group sorts out which one matched.
static ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)^(M*)(D?C{0,4}|CD|CM)(L?X{0,4}|XL|XC)(V?I{0,4}|IV|IX)$")
        .expect("roman grammar")
});

// (unit value, five-symbol, ten-symbol) per capture group
const GROUPS: [(u64, u8, u8); 3] = [(100, b'D', b'M'), (10, b'L', b'C'), (1, b'V', b'X')];

/// Configurable roman numeral parser.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Longest accepted input in bytes; `0` disables the ceiling.
    pub max_input_length: usize,
    /// Treat empty input as zero instead of rejecting it.
    pub empty_as_zero: bool,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            empty_as_zero: true,
        }
    }
}

impl Parser {
    /// Parses `input`, case-insensitively, accepting short and long forms.
    pub fn parse(&self, input: &str) -> Result<Number, ParseError> {
        self.parse_as("parse", input)
    }

    /// Checks `input` against the grammar without computing a value.
    pub fn valid(&self, input: &str) -> Result<(), ParseError> {
        let func = "valid";
        match self.check_length(func, input)? {
            Empty::Yes => Ok(()),
            Empty::No => {
                if ROMAN.is_match(input) {
                    Ok(())
                } else {
                    Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat))
                }
            }
        }
    }

    fn parse_as(&self, func: &'static str, input: &str) -> Result<Number, ParseError> {
        let result = self.run(func, input);
        if let Err(err) = &result {
            trace!(%err, "roman numeral input rejected");
        }
        result
    }

    fn run(&self, func: &'static str, input: &str) -> Result<Number, ParseError> {
        if self.check_length(func, input)? == Empty::Yes {
            return Ok(Number(0));
        }
        let caps = ROMAN
            .captures(input)
            .ok_or_else(|| ParseError::new(func, input, ParseErrorKind::InvalidFormat))?;

        let mut decimal = caps[1].len() as u64 * 1000;
        for (i, (unit, five, ten)) in GROUPS.iter().enumerate() {
            decimal += parse_group(caps[i + 2].as_bytes(), *unit, *five, *ten);
        }
        Ok(Number(decimal))
    }

    fn check_length(&self, func: &'static str, input: &str) -> Result<Empty, ParseError> {
        let len = input.len();
        if len == 0 {
            if self.empty_as_zero {
                return Ok(Empty::Yes);
            }
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
        Ok(Empty::No)
    }
}

#[derive(PartialEq)]
enum Empty {
    Yes,
    No,
}

fn parse_group(s: &[u8], unit: u64, five: u8, ten: u8) -> u64 {
    let len = s.len() as u64;
    if len == 0 {
        return 0;
    }
    // leading five-symbol: V, VI, ..., VIIII
    if s[0].to_ascii_uppercase() == five {
        return (4 + len) * unit;
    }
    if len == 1 {
        return unit;
    }
    // subtractive pairs: IV / IX
    if s[1].to_ascii_uppercase() == five {
        return 4 * unit;
    }
    if s[1].to_ascii_uppercase() == ten {
        return 9 * unit;
    }
    // plain run: II, III, IIII
    len * unit
}

/// Parses `input` with the default configuration.
pub fn parse(input: &str) -> Result<Number, ParseError> {
    Parser::default().parse_as("parse", input)
}

/// Checks `input` with the default configuration.
pub fn valid(input: &str) -> Result<(), ParseError> {
    Parser::default().valid(input)
}
