//! Version parser: input ceiling, surface-form gating, field validation.

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::grammar::{SEMVER, TAG_PREFIX};
use super::version::Ver;

/// Default input ceiling in bytes, see [`Parser::max_input_length`].
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1024;

/// Surface forms a parser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Form {
    /// Plain version only, e.g. `1.2.3`.
    Plain,
    /// Tag form only, e.g. `v1.2.3`.
    Tag,
    /// Either surface form.
    #[default]
    Any,
}

/// Configurable version parser.
///
/// An explicit strategy value: construct one to tune limits or accepted
/// forms, or use [`parse`], [`parse_version`] and [`parse_tag`] which
/// delegate to the default configuration.
#[derive(Debug, Clone)]
pub struct Parser {
    /// Longest accepted input in bytes; `0` disables the ceiling. The
    /// "input too long" error deliberately omits the oversized input.
    pub max_input_length: usize,
    /// Surface forms to accept.
    pub form: Form,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            form: Form::Any,
        }
    }
}

impl Parser {
    /// Parses `input` according to this configuration.
    pub fn parse(&self, input: &str) -> Result<Ver, ParseError> {
        self.parse_as("parse", input)
    }

    fn parse_as(&self, func: &'static str, input: &str) -> Result<Ver, ParseError> {
        let result = self.run(func, input);
        if let Err(err) = &result {
            trace!(%err, "version input rejected");
        }
        result
    }

    fn run(&self, func: &'static str, input: &str) -> Result<Ver, ParseError> {
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

        let body = match input.strip_prefix(TAG_PREFIX) {
            Some(rest) => {
                if self.form == Form::Plain {
                    return Err(ParseError::new(func, input, ParseErrorKind::TagFormNotAllowed));
                }
                rest
            }
            None => {
                if self.form == Form::Tag {
                    return Err(ParseError::new(func, input, ParseErrorKind::ExpectedTagForm));
                }
                input
            }
        };

        let caps = SEMVER
            .captures(body)
            .ok_or_else(|| ParseError::new(func, input, ParseErrorKind::InvalidFormat))?;

        // The grammar guarantees digit runs; only u64 overflow can fail here.
        let major = caps[1]
            .parse()
            .map_err(|_| ParseError::new(func, input, ParseErrorKind::InvalidMajor))?;
        let minor = caps[2]
            .parse()
            .map_err(|_| ParseError::new(func, input, ParseErrorKind::InvalidMinor))?;
        let patch = caps[3]
            .parse()
            .map_err(|_| ParseError::new(func, input, ParseErrorKind::InvalidPatch))?;

        Ok(Ver {
            major,
            minor,
            patch,
            pre_release: caps.get(4).map(|m| m.as_str().to_owned()).unwrap_or_default(),
            build: caps.get(5).map(|m| m.as_str().to_owned()).unwrap_or_default(),
        })
    }
}

/// Parses `input` as a plain version; the tag form is rejected.
pub fn parse_version(input: &str) -> Result<Ver, ParseError> {
    Parser {
        form: Form::Plain,
        ..Parser::default()
    }
    .parse_as("parse_version", input)
}

/// Parses `input` as a tag, e.g. `v1.2.3`; the plain form is rejected.
pub fn parse_tag(input: &str) -> Result<Ver, ParseError> {
    Parser {
        form: Form::Tag,
        ..Parser::default()
    }
    .parse_as("parse_tag", input)
}

/// Parses `input` as either surface form.
pub fn parse(input: &str) -> Result<Ver, ParseError> {
    Parser::default().parse_as("parse", input)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ver(major: u64, minor: u64, patch: u64, pre: &str, build: &str) -> Ver {
        Ver::new(major, minor, patch)
            .with_pre_release(pre)
            .with_build(build)
    }

    #[rstest]
    #[case("0.0.0", ver(0, 0, 0, "", ""))]
    #[case("1.2.3", ver(1, 2, 3, "", ""))]
    #[case("1.2.3-x", ver(1, 2, 3, "x", ""))]
    #[case("1.2.3+y", ver(1, 2, 3, "", "y"))]
    #[case("1.2.3-x+y", ver(1, 2, 3, "x", "y"))]
    #[case("1.0.0-alpha.1+exp.sha.5114f85", ver(1, 0, 0, "alpha.1", "exp.sha.5114f85"))]
    #[case("18446744073709551615.0.0", ver(u64::MAX, 0, 0, "", ""))]
    fn plain_form(#[case] input: &str, #[case] expected: Ver) {
        assert_eq!(parse_version(input).unwrap(), expected);
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("v0.0.0", ver(0, 0, 0, "", ""))]
    #[case("v1.2.3-x+y", ver(1, 2, 3, "x", "y"))]
    fn tag_form(#[case] input: &str, #[case] expected: Ver) {
        assert_eq!(parse_tag(input).unwrap(), expected);
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("01.2.3")] // leading zero
    #[case("1.2.3-")]
    #[case("1.2.3-alpha..1")]
    #[case("1.2.3-01")]
    #[case("1.2.3+")]
    #[case("vv1.2.3")]
    #[case(" 1.2.3")]
    fn grammar_mismatch(#[case] input: &str) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::InvalidFormat);
    }

    #[test]
    fn form_gating() {
        let err = parse_version("v1.2.3").unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::TagFormNotAllowed);
        assert_eq!(err.to_string(), "semver::parse_version: \"v1.2.3\": tag form not allowed");

        let err = parse_tag("1.2.3").unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::ExpectedTagForm);
        assert_eq!(err.to_string(), "semver::parse_tag: \"1.2.3\": expected tag form");
    }

    #[rstest]
    #[case(
        "1000000000000000000000000000000.2.3",
        ParseErrorKind::InvalidMajor
    )]
    #[case(
        "1.2000000000000000000000000000000.3",
        ParseErrorKind::InvalidMinor
    )]
    #[case(
        "1.2.3000000000000000000000000000000",
        ParseErrorKind::InvalidPatch
    )]
    fn field_overflow(#[case] input: &str, #[case] kind: ParseErrorKind) {
        let err = parse_version(input).unwrap_err();
        assert_eq!(err.kind(), &kind);
        assert_eq!(err.input(), input);
    }

    #[test]
    fn empty_input_renders_without_quoted_segment() {
        let err = parse("").unwrap_err();
        assert_eq!(err.to_string(), "semver::parse: invalid version");
    }

    #[test]
    fn input_ceiling() {
        let parser = Parser {
            max_input_length: 5,
            ..Parser::default()
        };
        assert!(parser.parse("1.2.3").is_ok()); // exactly at the limit
        let err = parser.parse("11.2.3").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::InputTooLong { length: 6, limit: 5 }
        );
        assert_eq!(err.to_string(), "semver::parse: input too long (6 > 5)");
        assert_eq!(err.input(), "");

        let unlimited = Parser {
            max_input_length: 0,
            ..Parser::default()
        };
        assert!(unlimited.parse("11.2.3").is_ok());
    }

    #[test]
    fn parsed_values_are_valid() {
        let v = parse("1.2.3-rc.1+build.01").unwrap();
        assert_eq!(v.validate(), Ok(()));
    }
}
