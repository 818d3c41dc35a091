//! Total-order comparison per semver precedence rules.
//!
//! Convention used throughout: `a.compare(&b) == Ordering::Less` means `a`
//! precedes `b`, and `compare_pre_release(a, b)` orders `a` relative to
//! `b`. Build metadata never takes part in precedence.

use std::cmp::Ordering;

use super::error::ParseError;
use super::parse::{parse, parse_tag, parse_version};
use super::version::Ver;

impl Ver {
    /// Compares by precedence: major, minor, patch, then pre-release via
    /// [`compare_pre_release`]. Build metadata is ignored, so two versions
    /// differing only in build compare equal.
    ///
    /// `Ord` is deliberately not implemented: precedence ignores build
    /// while `Eq` does not.
    pub fn compare(&self, other: &Ver) -> Ordering {
        self.compare_by(other, compare_pre_release)
    }

    /// Like [`Ver::compare`] with an injected pre-release ordering.
    pub fn compare_by<F>(&self, other: &Ver, pre_release: F) -> Ordering
    where
        F: FnOnce(&str, &str) -> Ordering,
    {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| pre_release(&self.pre_release, &other.pre_release))
    }

    /// The later of the two versions; `self` wins ties.
    pub fn latest(self, other: Ver) -> Ver {
        if self.compare(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

/// Orders pre-release components per semver §11.
///
/// Absence of a pre-release sorts after any pre-release. Otherwise the two
/// strings are walked to their first divergence; a strict prefix (fewer
/// fields, all preceding fields equal) sorts first, and diverging suffixes
/// resolve numerically when both are digit runs (leading zeros trimmed)
/// and lexically otherwise.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let (ab, bb) = (a.as_bytes(), b.as_bytes());
    let n = ab.iter().zip(bb).take_while(|(x, y)| x == y).count();
    if n == ab.len() && n == bb.len() {
        return Ordering::Equal;
    }
    if n == ab.len() {
        return Ordering::Less;
    }
    if n == bb.len() {
        return Ordering::Greater;
    }
    compare_suffix(&ab[n..], &bb[n..])
}

fn compare_suffix(a: &[u8], b: &[u8]) -> Ordering {
    if is_digits(a) && is_digits(b) {
        let (a, b) = (trim_zeros(a), trim_zeros(b));
        return a.len().cmp(&b.len()).then_with(|| a.cmp(b));
    }
    a.cmp(b)
}

fn is_digits(s: &[u8]) -> bool {
    s.iter().all(u8::is_ascii_digit)
}

fn trim_zeros(mut s: &[u8]) -> &[u8] {
    while let [b'0', rest @ ..] = s {
        s = rest;
    }
    s
}

/// Parses both inputs as plain versions and compares them.
pub fn compare_version(a: &str, b: &str) -> Result<Ordering, ParseError> {
    Ok(parse_version(a)?.compare(&parse_version(b)?))
}

/// Parses both inputs as tags and compares them.
pub fn compare_tag(a: &str, b: &str) -> Result<Ordering, ParseError> {
    Ok(parse_tag(a)?.compare(&parse_tag(b)?))
}

/// Parses both inputs as either surface form and compares them.
pub fn compare(a: &str, b: &str) -> Result<Ordering, ParseError> {
    Ok(parse(a)?.compare(&parse(b)?))
}

/// The later of two plain version strings.
pub fn latest_version(a: &str, b: &str) -> Result<Ver, ParseError> {
    Ok(parse_version(a)?.latest(parse_version(b)?))
}

/// The later of two tag strings.
pub fn latest_tag(a: &str, b: &str) -> Result<Ver, ParseError> {
    Ok(parse_tag(a)?.latest(parse_tag(b)?))
}

/// The later of two strings in either surface form.
pub fn latest(a: &str, b: &str) -> Result<Ver, ParseError> {
    Ok(parse(a)?.latest(parse(b)?))
}
