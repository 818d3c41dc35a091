//! UUID value type (RFC 4122).
//!
//! [`Id`] stores the 128-bit value as two `u64` halves. Parsing accepts
//! the canonical hyphenated form and the `urn:uuid:` form; formatting
//! emits lowercase hex, with [`Format::URN`] for the URN form.
//! [`Id::random`] generates version-4, variant-1 values.
//!
//! ```
//! use valuekit::uuid::{parse, Id};
//!
//! let id = parse("ed7059f3-8044-4f2a-81aa-b959b33c7777").unwrap();
//! assert_eq!(id.version(), 4);
//! assert_eq!(id.variant(), 1);
//! assert_eq!(id.urn(), "urn:uuid:ed7059f3-8044-4f2a-81aa-b959b33c7777");
//! ```

mod error;
mod format;
mod id;
mod parse;
mod random;

pub use error::{ParseError, ParseErrorKind};
pub use format::{Format, format, format_into};
pub use id::{ID_LENGTH, Id, URN_PREFIX};
pub use parse::{DEFAULT_MAX_INPUT_LENGTH, Parser, parse};
