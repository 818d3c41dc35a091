//! The UUID value type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use super::format::{Format, format};
use super::parse;

/// Prefix of the URN form.
pub const URN_PREFIX: &str = "urn:uuid:";

/// Length of the canonical hyphenated form in bytes.
pub const ID_LENGTH: usize = 36;

/// An RFC 4122 UUID, stored as two 64-bit halves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id {
    pub higher: u64,
    pub lower: u64,
}

impl Id {
    /// The version field, in range 0-15.
    pub fn version(self) -> u8 {
        ((self.higher >> 12) & 0xf) as u8
    }

    /// The variant field as the count of leading variant bits, in
    /// range 0-3. RFC 4122 UUIDs report 1.
    pub fn variant(self) -> u8 {
        if self.lower & 0x8000_0000_0000_0000 == 0 {
            return 0;
        }
        if self.lower & 0x4000_0000_0000_0000 == 0 {
            return 1;
        }
        if self.lower & 0x2000_0000_0000_0000 == 0 {
            return 2;
        }
        3
    }

    /// The URN form, e.g. `urn:uuid:00000000-0000-0000-0000-000000000000`.
    pub fn urn(self) -> String {
        format(self, Format::URN)
    }

    /// The value as a single 128-bit integer, higher half first.
    pub fn as_u128(self) -> u128 {
        (u128::from(self.higher) << 64) | u128::from(self.lower)
    }
}

impl From<u128> for Id {
    fn from(value: u128) -> Id {
        Id {
            higher: (value >> 64) as u64,
            lower: value as u64,
        }
    }
}

impl From<Id> for u128 {
    fn from(id: Id) -> u128 {
        id.as_u128()
    }
}

impl fmt::Display for Id {
    /// Canonical lowercase hyphenated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(*self, Format::default()))
    }
}

impl FromStr for Id {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Id, ParseError> {
        parse::parse(s)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Id, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a UUID string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Id, E> {
                parse::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}
