//! UUID rendering.

use std::fmt::Write;
use std::ops::BitOr;

use super::id::{Id, URN_PREFIX};

/// Formatter flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format(u32);

impl Format {
    /// Emit the URN form, e.g.
    /// `urn:uuid:00000000-0000-0000-0000-000000000000`.
    pub const URN: Format = Format(1);

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

/// Appends the lowercase hyphenated rendering of `id` to `buf`.
/// Always succeeds.
pub fn format_into(buf: &mut String, id: Id, flags: Format) {
    if flags.contains(Format::URN) {
        buf.push_str(URN_PREFIX);
    }
    let result = write!(
        buf,
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        id.higher >> 32,
        (id.higher >> 16) & 0xffff,
        id.higher & 0xffff,
        id.lower >> 48,
        id.lower & 0xffff_ffff_ffff,
    );
    let _ = result;
}

/// Renders `id` to a fresh string.
pub fn format(id: Id, flags: Format) -> String {
    let mut buf = String::new();
    format_into(&mut buf, id, flags);
    buf
}
