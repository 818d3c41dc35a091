//! The date value type and calendar arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use super::format::{Format, format};
use super::parse;

/// A calendar date.
///
/// Always holds an existing calendar date; the zero value is 0001-01-01.
/// Ordering follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    // field order carries the derived ordering
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date, returning `None` for non-existent calendar dates
    /// (month 0, February 30, years outside chrono's range).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Date> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date::from)
    }

    /// Today in the local time zone.
    pub fn today() -> Date {
        Date::from(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        u32::from(self.month)
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        u32::from(self.day)
    }

    /// True for the zero date 0001-01-01.
    pub fn is_zero(&self) -> bool {
        *self == Date::default()
    }

    /// The same date as a [`chrono::NaiveDate`].
    pub fn to_naive(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day())
            .expect("Date holds a valid calendar date")
    }

    /// Adds years, months and days in that order, each component may be
    /// negative. Returns `None` when the result leaves chrono's range or
    /// falls before 0001-01-01; negative years have no text form, so
    /// staying at or after the zero date keeps every reachable value
    /// round-trippable.
    pub fn add(&self, years: i32, months: i32, days: i64) -> Option<Date> {
        let mut d = self.to_naive();
        let total_months = i64::from(years) * 12 + i64::from(months);
        d = if total_months >= 0 {
            d.checked_add_months(Months::new(u32::try_from(total_months).ok()?))?
        } else {
            d.checked_sub_months(Months::new(u32::try_from(-total_months).ok()?))?
        };
        d = if days >= 0 {
            d.checked_add_days(Days::new(days as u64))?
        } else {
            d.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        let result = Date::from(d);
        if result.year < 1 {
            return None;
        }
        Some(result)
    }

    /// Count of whole days from `other` to `self`; negative when `self`
    /// is earlier.
    pub fn days_between(&self, other: &Date) -> i64 {
        self.to_naive()
            .signed_duration_since(other.to_naive())
            .num_days()
    }
}

impl Default for Date {
    fn default() -> Date {
        Date {
            year: 1,
            month: 1,
            day: 1,
        }
    }
}

impl From<NaiveDate> for Date {
    /// Conversion is lossless, but a date before year 1 renders with a
    /// leading sign that the parser does not accept; such values do not
    /// round-trip through text.
    fn from(d: NaiveDate) -> Date {
        Date {
            year: d.year(),
            month: d.month() as u8,
            day: d.day() as u8,
        }
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> NaiveDate {
        d.to_naive()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, Format::default()))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Date, ParseError> {
        parse::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        struct DateVisitor;

        impl Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO 8601 date string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
                parse::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}
