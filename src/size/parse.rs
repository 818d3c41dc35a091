//! Byte-size parser.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::size::Size;

/// Default input ceiling in bytes.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 128;

const NBSP: char = '\u{a0}';

/// Configurable byte-size parser.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Longest accepted input in bytes; `0` disables the ceiling.
    pub max_input_length: usize,
    /// Accept a unit after the number. When off, input with a unit is
    /// rejected with [`ParseErrorKind::UnitDisabled`].
    pub allow_unit: bool,
    /// Accept the JSON string form in [`Parser::deserialize`]. The plain
    /// number form is always accepted.
    pub allow_json_string: bool,
    /// Accept the JSON object form in [`Parser::deserialize`].
    pub allow_json_object: bool,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            allow_unit: true,
            allow_json_string: true,
            allow_json_object: true,
        }
    }
}

impl Parser {
    /// Parses a number with an optional unit, e.g. `10 MB` or `1024`.
    ///
    /// Spaces around and inside the number are ignored; underscores and
    /// non-breaking spaces are allowed as digit group separators after the
    /// first digit.
    pub fn parse(&self, input: &str) -> Result<Size, ParseError> {
        self.parse_as("parse", input)
    }

    fn parse_as(&self, func: &'static str, input: &str) -> Result<Size, ParseError> {
        let result = self.run(func, input);
        if let Err(err) = &result {
            trace!(%err, "byte size input rejected");
        }
        result
    }

    fn run(&self, func: &'static str, input: &str) -> Result<Size, ParseError> {
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

        let (number, unit) = prepare_number(input);
        if number.is_empty() {
            return Err(ParseError::new(func, input, ParseErrorKind::InvalidFormat));
        }
        let value: u64 = number
            .parse()
            .map_err(|_| ParseError::new(func, input, ParseErrorKind::InvalidFormat))?;

        if unit.is_empty() {
            return Ok(Size(value));
        }
        if !self.allow_unit {
            return Err(ParseError::new(func, input, ParseErrorKind::UnitDisabled));
        }
        Size::new(value, unit).map_err(|err| ParseError::new(func, input, err.into()))
    }
}

// Collects the digits, skipping spaces anywhere and '_'/NBSP after the
// first digit; whatever follows is the unit.
fn prepare_number(input: &str) -> (String, &str) {
    let mut number = String::new();
    for (i, c) in input.char_indices() {
        if c == ' ' {
            continue;
        }
        if !number.is_empty() && (c == '_' || c == NBSP) {
            continue;
        }
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        return (number, input[i..].trim_end_matches(' '));
    }
    (number, "")
}

/// Parses `input` with the default configuration.
pub fn parse(input: &str) -> Result<Size, ParseError> {
    Parser::default().parse_as("parse", input)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::error::NewError;
    use super::*;

    #[rstest]
    #[case("0", 0)]
    #[case("1024", 1024)]
    #[case(" 1024 ", 1024)]
    #[case("10 000 000", 10_000_000)]
    #[case("10_000_000", 10_000_000)]
    #[case("10\u{a0}000\u{a0}000", 10_000_000)]
    #[case("1024B", 1024)]
    #[case("10 MB", 10_000_000)]
    #[case("10MiB", 10 * 1024 * 1024)]
    #[case("10_MiB", 10 * 1024 * 1024)]
    #[case("1 kB ", 1000)]
    #[case("0 ZB", 0)]
    fn accepted(#[case] input: &str, #[case] bytes: u64) {
        assert_eq!(parse(input).unwrap(), Size(bytes));
    }

    #[rstest]
    #[case("")]
    #[case("MB")] // no number
    #[case("_10")] // separator before first digit
    #[case("ten")]
    #[case("-10")]
    #[case("18446744073709551616")] // u64::MAX + 1
    fn rejected_format(#[case] input: &str) {
        assert_eq!(parse(input).unwrap_err().kind(), &ParseErrorKind::InvalidFormat);
    }

    #[test]
    fn rejected_unit() {
        let err = parse("10 bogus").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::New(NewError::InvalidUnit("bogus".to_owned()))
        );
        assert_eq!(err.to_string(), "size::parse: \"10 bogus\": invalid unit \"bogus\"");

        let err = parse("16 EiB").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::New(NewError::InvalidValue {
                value: 16,
                unit: "EiB".to_owned(),
            })
        );
    }

    #[test]
    fn unit_rule() {
        let plain = Parser {
            allow_unit: false,
            ..Parser::default()
        };
        assert_eq!(plain.parse("1024").unwrap(), Size(1024));
        assert_eq!(
            plain.parse("1 KiB").unwrap_err().kind(),
            &ParseErrorKind::UnitDisabled
        );
    }

    #[test]
    fn input_ceiling() {
        let long = "1".repeat(129);
        let err = parse(&long).unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::InputTooLong { length: 129, limit: 128 }
        );
        assert_eq!(err.input(), "");
        assert_eq!(err.to_string(), "size::parse: input too long (129 > 128)");
    }

    #[test]
    fn empty_error_rendering() {
        assert_eq!(parse("").unwrap_err().to_string(), "size::parse: unable to parse");
    }
}
