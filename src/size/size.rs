//! The byte-size value type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{NewError, ParseError};
use super::format::{Format, format};
use super::parse::{self, Parser};
use super::units;

/// A size in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(pub u64);

impl Size {
    /// Builds a size from a value and a unit, checking for overflow.
    ///
    /// The empty unit means bytes. The oversized units (`ZB`, `YB`, `ZiB`,
    /// `YiB`) are accepted only for the value 0.
    pub fn new(value: u64, unit: &str) -> Result<Size, NewError> {
        if value == 0 {
            if !units::accepts_zero(unit) {
                return Err(NewError::InvalidUnit(unit.to_owned()));
            }
            return Ok(Size(0));
        }
        if unit.is_empty() {
            return Ok(Size(value));
        }
        let factor = units::factor(unit).ok_or_else(|| NewError::InvalidUnit(unit.to_owned()))?;
        value
            .checked_mul(factor)
            .map(Size)
            .ok_or_else(|| NewError::InvalidValue {
                value,
                unit: unit.to_owned(),
            })
    }

    /// The size in bytes.
    pub fn bytes(self) -> u64 {
        self.0
    }

    /// The biggest binary unit that represents the value without rounding.
    ///
    /// `Size(1024)` shortens to `(1, "KiB")` but `Size(1025)` stays
    /// `(1025, "B")`.
    pub fn shorten(self) -> (u64, &'static str) {
        if self.0 == 0 {
            return (0, units::BYTE);
        }
        let mut value = self.0;
        for unit in units::SHORTEN_UNITS {
            if value & 0x3ff != 0 {
                return (value, unit);
            }
            value >>= 10;
        }
        (value, units::EXBIBYTE)
    }

    /// The byte count as a plain decimal string, without a unit.
    pub fn bytes_string(self) -> String {
        self.0.to_string()
    }

    /// Shortened form with 3-digit grouping, e.g. `10 000 000 B`.
    pub fn pretty_string(self) -> String {
        format(self, Format::PRETTY)
    }

    /// Like [`Size::pretty_string`] with `&nbsp;` in place of spaces.
    pub fn pretty_html(self) -> String {
        format(self, Format::PRETTY | Format::HTML)
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Size {
        Size(bytes)
    }
}

impl From<Size> for u64 {
    fn from(s: Size) -> u64 {
        s.0
    }
}

impl fmt::Display for Size {
    /// Shortened value and unit, e.g. `10KiB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self, Format::default()))
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Size, ParseError> {
        parse::parse(s)
    }
}

impl Serialize for Size {
    /// Serializes in object form, e.g. `{"value":10,"unit":"KiB"}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (value, unit) = self.shorten();
        let mut s = serializer.serialize_struct("Size", 2)?;
        s.serialize_field("value", &value)?;
        s.serialize_field("unit", unit)?;
        s.end()
    }
}

impl Parser {
    /// Deserializes a size with this configuration.
    ///
    /// The plain number form is always accepted; `allow_json_string` and
    /// `allow_json_object` gate the string and object forms, and string
    /// content goes through [`Parser::parse`] so the text rules apply.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        &self,
        deserializer: D,
    ) -> Result<Size, D::Error> {
        deserializer.deserialize_any(SizeVisitor { parser: self })
    }
}

struct SizeVisitor<'a> {
    parser: &'a Parser,
}

impl<'de> Visitor<'de> for SizeVisitor<'_> {
    type Value = Size;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte count, a size string, or a value/unit object")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Size, E> {
        Ok(Size(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Size, E> {
        u64::try_from(value).map(Size).map_err(|_| {
            E::invalid_value(de::Unexpected::Signed(value), &"a non-negative byte count")
        })
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Size, E> {
        if !self.parser.allow_json_string {
            return Err(E::custom("string form disabled"));
        }
        self.parser.parse(value).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Size, A::Error> {
        if !self.parser.allow_json_object {
            return Err(de::Error::custom("object form disabled"));
        }
        let mut value: Option<u64> = None;
        let mut unit: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::custom("duplicated value key"));
                    }
                    value = Some(map.next_value()?);
                }
                "unit" => {
                    if unit.is_some() {
                        return Err(de::Error::custom("duplicated unit key"));
                    }
                    unit = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let value = value.ok_or_else(|| de::Error::custom("missing value key"))?;
        let unit = unit.ok_or_else(|| de::Error::custom("missing unit key"))?;
        Size::new(value, &unit).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Size {
    /// Accepts a plain byte count, a string with an optional unit, or an
    /// object with case-insensitive `value` and `unit` keys, all with the
    /// default [`Parser`] configuration.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Size, D::Error> {
        Parser::default().deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "", 0)]
    #[case(0, "YiB", 0)]
    #[case(10, "", 10)]
    #[case(1, "B", 1)]
    #[case(1, "kB", 1000)]
    #[case(1, "KiB", 1024)]
    #[case(10, "MiB", 10 * 1024 * 1024)]
    #[case(2, "EiB", 2 << 60)]
    fn new_accepted(#[case] value: u64, #[case] unit: &str, #[case] bytes: u64) {
        assert_eq!(Size::new(value, unit).unwrap(), Size(bytes));
    }

    #[test]
    fn new_rejects_unknown_unit() {
        assert_eq!(
            Size::new(1, "bytes").unwrap_err(),
            NewError::InvalidUnit("bytes".to_owned())
        );
        // oversized units carry no value
        assert_eq!(
            Size::new(1, "ZB").unwrap_err(),
            NewError::InvalidUnit("ZB".to_owned())
        );
        assert_eq!(
            Size::new(0, "bogus").unwrap_err().to_string(),
            "invalid unit \"bogus\""
        );
    }

    #[test]
    fn new_rejects_overflow() {
        let err = Size::new(16, "EiB").unwrap_err();
        assert_eq!(
            err,
            NewError::InvalidValue {
                value: 16,
                unit: "EiB".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "value 16 with unit \"EiB\" is not suitable for u64"
        );
    }

    #[rstest]
    #[case(0, 0, "B")]
    #[case(1023, 1023, "B")]
    #[case(1024, 1, "KiB")]
    #[case(1025, 1025, "B")]
    #[case(10 * 1024 * 1024, 10, "MiB")]
    #[case(1 << 60, 1, "EiB")]
    #[case(4 << 60, 4, "EiB")]
    fn shorten(#[case] bytes: u64, #[case] value: u64, #[case] unit: &str) {
        assert_eq!(Size(bytes).shorten(), (value, unit));
    }

    #[test]
    fn display_and_bytes_string() {
        assert_eq!(Size(0).to_string(), "0B");
        assert_eq!(Size(10 * 1024).to_string(), "10KiB");
        assert_eq!(Size(1025).to_string(), "1025B");
        assert_eq!(Size(1025).bytes_string(), "1025");
    }

    #[test]
    fn serialize_object_form() {
        assert_eq!(
            serde_json::to_string(&Size(1024)).unwrap(),
            r#"{"value":1,"unit":"KiB"}"#
        );
        assert_eq!(
            serde_json::to_string(&Size(1025)).unwrap(),
            r#"{"value":1025,"unit":"B"}"#
        );
    }

    #[rstest]
    #[case("1024", 1024)]
    #[case("\"10 MB\"", 10_000_000)]
    #[case(r#"{"value":1,"unit":"KiB"}"#, 1024)]
    #[case(r#"{"UNIT":"KiB","Value":2}"#, 2048)] // keys are case-insensitive
    #[case(r#"{"value":1,"unit":"KiB","comment":{"nested":[1,2]}}"#, 1024)]
    fn deserialize_forms(#[case] json: &str, #[case] bytes: u64) {
        assert_eq!(serde_json::from_str::<Size>(json).unwrap(), Size(bytes));
    }

    #[rstest]
    #[case("-1")]
    #[case(r#"{"value":1}"#)] // missing unit key
    #[case(r#"{"unit":"KiB"}"#)] // missing value key
    #[case(r#"{"value":1,"VALUE":2,"unit":"B"}"#)] // duplicated value key
    #[case(r#"{"value":1,"unit":"B","Unit":"B"}"#)] // duplicated unit key
    #[case(r#"{"value":1,"unit":"bogus"}"#)]
    #[case("\"ten\"")]
    fn deserialize_rejected(#[case] json: &str) {
        assert!(serde_json::from_str::<Size>(json).is_err());
    }

    #[test]
    fn json_form_gating() {
        let no_string = Parser {
            allow_json_string: false,
            ..Parser::default()
        };
        let mut de = serde_json::Deserializer::from_str("\"10 MB\"");
        let err = no_string.deserialize(&mut de).unwrap_err();
        assert!(err.to_string().contains("string form disabled"), "{err}");
        let mut de = serde_json::Deserializer::from_str("1024");
        assert_eq!(no_string.deserialize(&mut de).unwrap(), Size(1024));

        let no_object = Parser {
            allow_json_object: false,
            ..Parser::default()
        };
        let mut de = serde_json::Deserializer::from_str(r#"{"value":1,"unit":"KiB"}"#);
        let err = no_object.deserialize(&mut de).unwrap_err();
        assert!(err.to_string().contains("object form disabled"), "{err}");
        let mut de = serde_json::Deserializer::from_str("\"1 KiB\"");
        assert_eq!(no_object.deserialize(&mut de).unwrap(), Size(1024));
    }

    #[test]
    fn json_string_form_applies_text_rules() {
        let plain = Parser {
            allow_unit: false,
            ..Parser::default()
        };
        let mut de = serde_json::Deserializer::from_str("\"1 KiB\"");
        assert!(plain.deserialize(&mut de).is_err());
        let mut de = serde_json::Deserializer::from_str("\"1024\"");
        assert_eq!(plain.deserialize(&mut de).unwrap(), Size(1024));
    }

    #[test]
    fn round_trip() {
        for bytes in [0, 1, 999, 1024, 123_456_789, u64::MAX] {
            let json = serde_json::to_string(&Size(bytes)).unwrap();
            assert_eq!(serde_json::from_str::<Size>(&json).unwrap(), Size(bytes));
        }
    }
}
