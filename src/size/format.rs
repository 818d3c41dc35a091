//! Byte-size formatting.

use super::size::Size;

/// Formatting flags; the default emits the shortened value and unit with
/// no separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format(u32);

impl Format {
    /// Separate 3-digit groups and the unit with spaces, e.g.
    /// `10 000 000 B`.
    pub const PRETTY: Format = Format(1);
    /// Emit separators as `&nbsp;` so the output is safe for HTML.
    /// Only meaningful together with [`Format::PRETTY`].
    pub const HTML: Format = Format(1 << 1);

    pub fn contains(self, other: Format) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Format {
    type Output = Format;

    fn bitor(self, rhs: Format) -> Format {
        Format(self.0 | rhs.0)
    }
}

/// Appends the shortened form of `size` to `buf`.
pub fn format_into(buf: &mut String, size: Size, flags: Format) {
    let (value, unit) = size.shorten();
    let digits = value.to_string();
    let offset = 3 - digits.len() % 3;
    for (i, digit) in digits.bytes().enumerate() {
        buf.push(digit as char);
        // separators land after every 3-digit group, including between
        // the number and the unit
        if (i + offset) % 3 == 2 {
            push_separator(buf, flags);
        }
    }
    buf.push_str(unit);
}

/// Formats the shortened form of `size`.
pub fn format(size: Size, flags: Format) -> String {
    let mut buf = String::new();
    format_into(&mut buf, size, flags);
    buf
}

fn push_separator(buf: &mut String, flags: Format) {
    if !flags.contains(Format::PRETTY) {
        return;
    }
    if flags.contains(Format::HTML) {
        buf.push_str("&nbsp;");
    } else {
        buf.push(' ');
    }
}
