//! Semantic version value type.
//!
//! Implements the grammar, precedence rules and surface forms of
//! [Semantic Versioning 2.0](https://semver.org/): a plain form (`1.2.3`)
//! and a tag form (`v1.2.3`), optional pre-release and build components,
//! and the §11 precedence ordering in which build metadata never counts.
//!
//! # Modules
//!
//! - [`Ver`]: the value type plus derived-version constructors
//! - [`Parser`]/[`parse`]/[`parse_version`]/[`parse_tag`]: text → [`Ver`]
//! - [`compare_pre_release`]: the pre-release precedence walk
//! - [`format_into`]/[`Formatter`]: [`Ver`] → text
//!
//! ```
//! use valuekit::semver::{parse, Ver};
//!
//! let v = parse("v1.2.3-rc.1+build.5").unwrap();
//! assert_eq!(v, Ver::new(1, 2, 3).with_pre_release("rc.1").with_build("build.5"));
//! assert_eq!(v.to_string(), "1.2.3-rc.1+build.5");
//! assert!(v.compare(&Ver::new(1, 2, 3)).is_lt());
//! ```

mod compare;
mod error;
mod format;
mod grammar;
mod parse;
mod version;

pub use compare::{
    compare, compare_pre_release, compare_tag, compare_version, latest, latest_tag, latest_version,
};
pub use error::{FormatError, ParseError, ParseErrorKind, ValidityError};
pub use format::{DefaultFormatter, Format, Formatter, format, format_into};
pub use grammar::{TAG_PREFIX, is_build, is_pre_release};
pub use parse::{DEFAULT_MAX_INPUT_LENGTH, Form, Parser, parse, parse_tag, parse_version};
pub use version::{Ver, ZERO_STRING, ZERO_STRING_TAG};
