//! Roman numeral value type.
//!
//! [`Number`] wraps a decimal `u64` and converts to and from roman
//! notation. Parsing is case-insensitive and accepts both short (`IX`)
//! and long (`VIIII`) forms; formatting emits short forms unless told
//! otherwise via [`Format`] flags. Zero renders as the empty string and,
//! by default, the empty string parses back to zero.
//!
//! ```
//! use valuekit::roman::{parse, Number};
//!
//! assert_eq!(parse("MMXXII").unwrap(), Number(2022));
//! assert_eq!(parse("viiii").unwrap(), Number(9));
//! assert_eq!(Number(9).to_string(), "IX");
//! ```

mod error;
mod format;
mod number;
mod parse;

pub use error::{ParseError, ParseErrorKind};
pub use format::{Format, format, format_into};
pub use number::Number;
pub use parse::{DEFAULT_MAX_INPUT_LENGTH, Parser, parse, valid};
