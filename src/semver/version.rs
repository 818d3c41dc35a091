//! The version value type and its derived-value operations.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{ParseError, ValidityError};
use super::format::{Format, Formatter, format, format_into};
use super::grammar;
use super::parse;

/// Zero version in string form.
pub const ZERO_STRING: &str = "0.0.0";

/// Zero version in tag form.
pub const ZERO_STRING_TAG: &str = "v0.0.0";

/// A semantic version: `major.minor.patch` core plus optional pre-release
/// and build components.
///
/// The core triple totally orders versions; pre-release refines the order
/// (see [`Ver::compare`]) and build metadata never takes part in it. An
/// empty `pre_release` or `build` means the component is absent.
///
/// Values obtained from a parser are valid by construction. Directly
/// constructed values may carry components the grammar rejects; call
/// [`Ver::validate`] before trusting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build: String,
}

impl Ver {
    /// Creates a version core without pre-release or build.
    pub fn new(major: u64, minor: u64, patch: u64) -> Ver {
        Ver {
            major,
            minor,
            patch,
            ..Ver::default()
        }
    }

    /// Returns the version with the given pre-release component.
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Ver {
        self.pre_release = pre_release.into();
        self
    }

    /// Returns the version with the given build component.
    pub fn with_build(mut self, build: impl Into<String>) -> Ver {
        self.build = build.into();
        self
    }

    /// Checks the pre-release and build components against their grammars.
    pub fn validate(&self) -> Result<(), ValidityError> {
        if !self.pre_release.is_empty() && !grammar::is_pre_release(&self.pre_release) {
            return Err(ValidityError::PreRelease);
        }
        if !self.build.is_empty() && !grammar::is_build(&self.build) {
            return Err(ValidityError::Build);
        }
        Ok(())
    }

    /// True for `0.0.0` without pre-release and build.
    pub fn is_zero(&self) -> bool {
        *self == Ver::default()
    }

    /// The bare `major.minor.patch` with pre-release and build stripped.
    pub fn core(&self) -> Ver {
        Ver::new(self.major, self.minor, self.patch)
    }

    /// Next major version: minor and patch zeroed, pre-release and build
    /// cleared.
    ///
    /// # Panics
    ///
    /// Panics on `u64` overflow. A version counter past `u64::MAX` is a
    /// programming error upstream, not a runtime condition.
    pub fn next_major(&self) -> Ver {
        match self.major.checked_add(1) {
            Some(major) => Ver::new(major, 0, 0),
            None => panic!("semver: major overflow on next_major"),
        }
    }

    /// Next minor version: patch zeroed, pre-release and build cleared.
    ///
    /// # Panics
    ///
    /// Panics on `u64` overflow, see [`Ver::next_major`].
    pub fn next_minor(&self) -> Ver {
        match self.minor.checked_add(1) {
            Some(minor) => Ver::new(self.major, minor, 0),
            None => panic!("semver: minor overflow on next_minor"),
        }
    }

    /// Next patch version: pre-release and build cleared.
    ///
    /// # Panics
    ///
    /// Panics on `u64` overflow, see [`Ver::next_major`].
    pub fn next_patch(&self) -> Ver {
        match self.patch.checked_add(1) {
            Some(patch) => Ver::new(self.major, self.minor, patch),
            None => panic!("semver: patch overflow on next_patch"),
        }
    }

    /// Tag form rendering, e.g. `v1.2.3`.
    pub fn to_tag_string(&self) -> String {
        format(self, Format::TAG)
    }

    /// Renders with `formatter`, falling back to the canonical rendering
    /// if the custom formatter errors. Display helpers therefore never
    /// fail.
    pub fn format_with(&self, formatter: &dyn Formatter, flags: Format) -> String {
        let mut buf = String::new();
        if formatter.format(&mut buf, self, flags).is_err() {
            buf.clear();
            format_into(&mut buf, self, flags);
        }
        buf
    }
}

impl fmt::Display for Ver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, Format::default()))
    }
}

impl FromStr for Ver {
    type Err = ParseError;

    /// Accepts both surface forms with the default parser configuration.
    fn from_str(s: &str) -> Result<Ver, ParseError> {
        parse::parse(s)
    }
}

impl Serialize for Ver {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ver {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Ver, D::Error> {
        struct VerVisitor;

        impl Visitor<'_> for VerVisitor {
            type Value = Ver;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a semantic version string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Ver, E> {
                parse::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VerVisitor)
    }
}
