//! Canonical rendering of versions.

use std::fmt::Write;
use std::ops::BitOr;

use super::error::FormatError;
use super::grammar::TAG_PREFIX;
use super::version::Ver;

/// Formatter flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format(u32);

impl Format {
    /// Emit the `v` tag marker.
    pub const TAG: Format = Format(1);

    /// True if every flag in `other` is set in `self`.
    pub fn contains(self, other: Format) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Format {
    type Output = Format;

    fn bitor(self, rhs: Format) -> Format {
        Format(self.0 | rhs.0)
    }
}

/// Appends the canonical rendering of `v` to `buf`.
///
/// Always succeeds; appending to a caller-supplied buffer allows prefix
/// composition without extra allocation. Pre-release and build are
/// emitted verbatim, without re-validation.
pub fn format_into(buf: &mut String, v: &Ver, flags: Format) {
    if flags.contains(Format::TAG) {
        buf.push(TAG_PREFIX);
    }
    let _ = write!(buf, "{}.{}.{}", v.major, v.minor, v.patch);
    if !v.pre_release.is_empty() {
        buf.push('-');
        buf.push_str(&v.pre_release);
    }
    if !v.build.is_empty() {
        buf.push('+');
        buf.push_str(&v.build);
    }
}

/// Renders `v` to a fresh string.
pub fn format(v: &Ver, flags: Format) -> String {
    let mut buf = String::new();
    format_into(&mut buf, v, flags);
    buf
}

/// Pluggable rendering strategy.
///
/// The canonical implementation is total; custom implementations may
/// reject values they cannot render, in which case
/// [`Ver::format_with`](crate::semver::Ver::format_with) falls back to the
/// canonical rendering.
pub trait Formatter {
    fn format(&self, buf: &mut String, v: &Ver, flags: Format) -> Result<(), FormatError>;
}

/// The canonical rendering as a [`Formatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, buf: &mut String, v: &Ver, flags: Format) -> Result<(), FormatError> {
        format_into(buf, v, flags);
        Ok(())
    }
}
