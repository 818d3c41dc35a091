//! The roman numeral value type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use super::format::{Format, format};
use super::parse;

/// A roman numeral, stored as its decimal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(pub u64);

impl Number {
    /// The decimal value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Number {
        Number(value)
    }
}

impl From<Number> for u64 {
    fn from(n: Number) -> u64 {
        n.0
    }
}

impl fmt::Display for Number {
    /// Short upper-case form; zero renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self, Format::default()))
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Number, ParseError> {
        parse::parse(s)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a roman numeral string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Number, E> {
                parse::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NumberVisitor)
    }
}
