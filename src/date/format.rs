//! Date rendering.

use std::fmt::Write;
use std::ops::BitOr;

use super::date::Date;

/// Formatter flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format(u32);

impl Format {
    /// Emit the basic form without separators, e.g. `20220102`.
    pub const BASIC: Format = Format(1);

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

/// Appends the rendering of `d` to `buf`; extended form by default.
/// Always succeeds.
pub fn format_into(buf: &mut String, d: &Date, flags: Format) {
    let result = if flags.contains(Format::BASIC) {
        write!(buf, "{:04}{:02}{:02}", d.year(), d.month(), d.day())
    } else {
        write!(buf, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
    };
    let _ = result;
}

/// Renders `d` to a fresh string.
pub fn format(d: &Date, flags: Format) -> String {
    let mut buf = String::new();
    format_into(&mut buf, d, flags);
    buf
}
