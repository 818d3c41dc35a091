//! Fixed-width binary codec for dates.
//!
//! Wire layout: `[version:1][year:4 big-endian][month:1][day:1]`, seven
//! bytes total, version byte currently fixed at 1.

use super::date::Date;
use super::error::BinaryError;

pub(crate) const BINARY_VERSION: u8 = 1;

/// Encoded length in bytes.
pub const BINARY_LENGTH: usize = 7;

impl Date {
    /// Encodes the date; never fails.
    pub fn to_bytes(&self) -> [u8; BINARY_LENGTH] {
        let y = self.year().to_be_bytes();
        [
            BINARY_VERSION,
            y[0],
            y[1],
            y[2],
            y[3],
            self.month() as u8,
            self.day() as u8,
        ]
    }

    /// Decodes a date produced by [`Date::to_bytes`].
    ///
    /// Unsupported version and wrong length are distinct errors; the
    /// version byte is checked first so that a future version with a
    /// different width reports the right problem.
    pub fn from_bytes(data: &[u8]) -> Result<Date, BinaryError> {
        match data {
            [] => Err(BinaryError::InvalidLength(0)),
            [version, ..] if *version != BINARY_VERSION => {
                Err(BinaryError::UnsupportedVersion(*version))
            }
            [_, y0, y1, y2, y3, month, day] => {
                let year = i32::from_be_bytes([*y0, *y1, *y2, *y3]);
                Date::from_ymd(year, u32::from(*month), u32::from(*day))
                    .ok_or(BinaryError::InvalidDate)
            }
            _ => Err(BinaryError::InvalidLength(data.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(2022, 1, 2)]
    #[case(1, 1, 1)]
    #[case(9999, 12, 31)]
    fn round_trip(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        let d = Date::from_ymd(year, month, day).unwrap();
        assert_eq!(Date::from_bytes(&d.to_bytes()).unwrap(), d);
    }

    #[test]
    fn wire_layout() {
        let d = Date::from_ymd(2022, 1, 2).unwrap();
        assert_eq!(d.to_bytes(), [1, 0, 0, 0x07, 0xe6, 1, 2]);
    }

    #[test]
    fn decode_errors() {
        assert_eq!(Date::from_bytes(&[]), Err(BinaryError::InvalidLength(0)));
        assert_eq!(
            Date::from_bytes(&[2, 0, 0, 0, 0, 1, 1]),
            Err(BinaryError::UnsupportedVersion(2))
        );
        assert_eq!(
            Date::from_bytes(&[1, 0, 0, 0, 1]),
            Err(BinaryError::InvalidLength(5))
        );
        assert_eq!(
            Date::from_bytes(&[1, 0, 0, 0, 1, 1, 1, 1]),
            Err(BinaryError::InvalidLength(8))
        );
        assert_eq!(
            Date::from_bytes(&[1, 0, 0, 0x07, 0xe6, 2, 30]),
            Err(BinaryError::InvalidDate)
        );
    }
}
