//! Fixed calendar date value type.
//!
//! A [`Date`] is a year/month/day triple with no time-of-day and no time
//! zone. Text forms follow ISO 8601: extended (`2022-01-02`) by default,
//! basic (`20220102`) unless disabled. A compact 7-byte binary codec and
//! an inclusive from/to [`Filter`] round out the module. Calendar
//! arithmetic is backed by [`chrono`].
//!
//! ```
//! use valuekit::date::{parse, Date};
//!
//! let d = parse("2022-01-02").unwrap();
//! assert_eq!(d, Date::from_ymd(2022, 1, 2).unwrap());
//! assert_eq!(d.to_string(), "2022-01-02");
//! assert_eq!(Date::from_bytes(&d.to_bytes()).unwrap(), d);
//! ```

#[allow(clippy::module_inception)]
mod date;

mod binary;
mod error;
mod filter;
mod format;
mod parse;

pub use binary::BINARY_LENGTH;
pub use date::Date;
pub use error::{BinaryError, FilterError, ParseError, ParseErrorKind};
pub use filter::Filter;
pub use format::{Format, format, format_into};
pub use parse::{DEFAULT_MAX_INPUT_LENGTH, Parser, parse};
