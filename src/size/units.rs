//! Byte-size unit names and factors.

/// A byte.
pub const BYTE: &str = "B";

/// 1000^1 bytes.
pub const KILOBYTE: &str = "kB";
/// 1000^2 bytes.
pub const MEGABYTE: &str = "MB";
/// 1000^3 bytes.
pub const GIGABYTE: &str = "GB";
/// 1000^4 bytes.
pub const TERABYTE: &str = "TB";
/// 1000^5 bytes.
pub const PETABYTE: &str = "PB";
/// 1000^6 bytes.
pub const EXABYTE: &str = "EB";
/// 1000^7 bytes; exceeds `u64`, so only the value 0 is accepted.
pub const ZETTABYTE: &str = "ZB";
/// 1000^8 bytes; exceeds `u64`, so only the value 0 is accepted.
pub const YOTTABYTE: &str = "YB";

/// 1024^1 bytes.
pub const KIBIBYTE: &str = "KiB";
/// 1024^2 bytes.
pub const MEBIBYTE: &str = "MiB";
/// 1024^3 bytes.
pub const GIBIBYTE: &str = "GiB";
/// 1024^4 bytes.
pub const TEBIBYTE: &str = "TiB";
/// 1024^5 bytes.
pub const PEBIBYTE: &str = "PiB";
/// 1024^6 bytes.
pub const EXBIBYTE: &str = "EiB";
/// 1024^7 bytes; exceeds `u64`, so only the value 0 is accepted.
pub const ZEBIBYTE: &str = "ZiB";
/// 1024^8 bytes; exceeds `u64`, so only the value 0 is accepted.
pub const YOBIBYTE: &str = "YiB";

pub(crate) const SHORTEN_UNITS: [&str; 6] =
    [BYTE, KIBIBYTE, MEBIBYTE, GIBIBYTE, TEBIBYTE, PEBIBYTE];

/// Byte multiplier of `unit`, or `None` for unknown units and units that
/// do not fit in `u64`.
pub(crate) fn factor(unit: &str) -> Option<u64> {
    Some(match unit {
        BYTE => 1,
        KILOBYTE => 1_000,
        MEGABYTE => 1_000_000,
        GIGABYTE => 1_000_000_000,
        TERABYTE => 1_000_000_000_000,
        PETABYTE => 1_000_000_000_000_000,
        EXABYTE => 1_000_000_000_000_000_000,
        KIBIBYTE => 1 << 10,
        MEBIBYTE => 1 << 20,
        GIBIBYTE => 1 << 30,
        TEBIBYTE => 1 << 40,
        PEBIBYTE => 1 << 50,
        EXBIBYTE => 1 << 60,
        _ => return None,
    })
}

/// Units accepted for the value 0, including the oversized ones.
pub(crate) fn accepts_zero(unit: &str) -> bool {
    matches!(
        unit,
        "" | BYTE
            | KILOBYTE
            | MEGABYTE
            | GIGABYTE
            | TERABYTE
            | PETABYTE
            | EXABYTE
            | ZETTABYTE
            | YOTTABYTE
            | KIBIBYTE
            | MEBIBYTE
            | GIBIBYTE
            | TEBIBYTE
            | PEBIBYTE
            | EXBIBYTE
            | ZEBIBYTE
            | YOBIBYTE
    )
}
