//! Small value-type libraries sharing one parse → validate → format pipeline.
//!
//! Each module owns a single value type with a fixed regular-expression
//! grammar, a configurable [`semver::Parser`]-style parser, a flag-driven
//! formatter and text (plus, for dates, binary) marshaling:
//!
//! - [`semver`]: semantic version `Ver` with tag (`v`-prefixed) surface form
//! - [`date`]: fixed calendar `Date` (ISO 8601 extended and basic forms)
//! - [`roman`]: roman numeral `Number`
//! - [`size`]: byte count `Size` with decimal and binary units
//! - [`uuid`]: RFC 4122 `Id`
//!
//! Parsers are explicit strategy values: construct one to tune input limits
//! or rule flags, or use the module-level free functions which delegate to
//! the default configuration. Formatting never fails; parse errors are
//! structured values with a stable [`kind`](semver::ParseError::kind) and a
//! `"<module>::<func>: \"<input>\": <cause>"` rendering.

pub mod date;
pub mod roman;
pub mod semver;
pub mod size;
pub mod uuid;
