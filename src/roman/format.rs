//! Roman numeral formatting.

use super::number::Number;

const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Formatting flags; the default emits the short upper-case form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format(u32);

impl Format {
    /// Long form of 4 (`IV` becomes `IIII`).
    pub const LONG_4: Format = Format(1);
    /// Long form of 40 (`XL` becomes `XXXX`).
    pub const LONG_40: Format = Format(1 << 1);
    /// Long form of 400 (`CD` becomes `CCCC`).
    pub const LONG_400: Format = Format(1 << 2);
    /// Long form of 9 (`IX` becomes `VIIII`).
    pub const LONG_9: Format = Format(1 << 3);
    /// Long form of 90 (`XC` becomes `LXXXX`).
    pub const LONG_90: Format = Format(1 << 4);
    /// Long form of 900 (`CM` becomes `DCCCC`).
    pub const LONG_900: Format = Format(1 << 5);
    /// Lower-case output.
    pub const LOWER_CASE: Format = Format(1 << 6);

    /// All long-4 forms.
    pub const LONG_4X: Format = Format(Format::LONG_4.0 | Format::LONG_40.0 | Format::LONG_400.0);
    /// All long-9 forms.
    pub const LONG_9X: Format = Format(Format::LONG_9.0 | Format::LONG_90.0 | Format::LONG_900.0);
    /// All long forms.
    pub const LONG: Format = Format(Format::LONG_4X.0 | Format::LONG_9X.0);

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

/// Appends `n` in roman notation to `buf`. Zero appends nothing.
pub fn format_into(buf: &mut String, n: Number, flags: Format) {
    let start = buf.len();
    let value = n.value();
    if value != 0 {
        for _ in 0..value / 1000 {
            buf.push('M');
        }
        let rest = value % 1000;
        buf.push_str(hundreds((rest / 100) as usize, flags));
        buf.push_str(tens((rest / 10 % 10) as usize, flags));
        buf.push_str(units((rest % 10) as usize, flags));
    }
    if flags.contains(Format::LOWER_CASE) {
        buf[start..].make_ascii_lowercase();
    }
}

/// Formats `n` in roman notation.
pub fn format(n: Number, flags: Format) -> String {
    let mut buf = String::new();
    format_into(&mut buf, n, flags);
    buf
}

fn hundreds(value: usize, flags: Format) -> &'static str {
    if value == 4 && flags.contains(Format::LONG_400) {
        return "CCCC";
    }
    if value == 9 && flags.contains(Format::LONG_900) {
        return "DCCCC";
    }
    HUNDREDS[value]
}

fn tens(value: usize, flags: Format) -> &'static str {
    if value == 4 && flags.contains(Format::LONG_40) {
        return "XXXX";
    }
    if value == 9 && flags.contains(Format::LONG_90) {
        return "LXXXX";
    }
    TENS[value]
}

fn units(value: usize, flags: Format) -> &'static str {
    if value == 4 && flags.contains(Format::LONG_4) {
        return "IIII";
    }
    if value == 9 && flags.contains(Format::LONG_9) {
        return "VIIII";
    }
    UNITS[value]
}
