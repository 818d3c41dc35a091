//! Byte-size value type.
//!
//! [`Size`] stores a byte count and converts to and from human-readable
//! forms with decimal (`kB`, `MB`, ...) and binary (`KiB`, `MiB`, ...)
//! units. Construction via [`Size::new`] checks for `u64` overflow, and
//! [`Size::shorten`] picks the biggest binary unit that loses nothing.
//!
//! JSON deserialization accepts a plain number, a string, or a
//! `{"value": 10, "unit": "KiB"}` object; the string and object forms can
//! be disabled through [`Parser::deserialize`]. Serialization always
//! emits the object form.
//!
//! ```
//! use valuekit::size::{parse, Size};
//!
//! assert_eq!(parse("10 MB").unwrap(), Size(10_000_000));
//! assert_eq!(Size::new(10, "KiB").unwrap(), Size(10240));
//! assert_eq!(Size(10240).to_string(), "10KiB");
//! assert_eq!(Size(10240).pretty_string(), "10 KiB");
//! ```

mod error;
mod format;
mod parse;
#[allow(clippy::module_inception)]
mod size;
mod units;

pub use error::{NewError, ParseError, ParseErrorKind};
pub use format::{Format, format, format_into};
pub use parse::{DEFAULT_MAX_INPUT_LENGTH, Parser, parse};
pub use size::Size;
pub use units::{
    BYTE, EXABYTE, EXBIBYTE, GIBIBYTE, GIGABYTE, KIBIBYTE, KILOBYTE, MEBIBYTE, MEGABYTE, PEBIBYTE,
    PETABYTE, TEBIBYTE, TERABYTE, YOBIBYTE, YOTTABYTE, ZEBIBYTE, ZETTABYTE,
};
