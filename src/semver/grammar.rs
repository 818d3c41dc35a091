//! Fixed surface grammar for semantic versions.
//!
//! Pure predicates over text; no state, no side effects. The version core
//! is three dot-separated non-negative decimals without leading zeros.
//! Pre-release identifiers are numeric (no leading zero) or alphanumeric
//! (at least one non-digit); build identifiers additionally allow
//! arbitrary digit runs.

use std::sync::LazyLock;

use regex::Regex;

/// Marks the tag surface form, e.g. `v1.2.3`.
pub const TAG_PREFIX: char = 'v';

const NUM_IDENT: &str = "0|[1-9][0-9]*";
const ALPHANUM_IDENT: &str = "[0-9A-Za-z-]*[A-Za-z-][0-9A-Za-z-]*";

fn pre_release_pattern() -> String {
    let ident = format!("(?:(?:{ALPHANUM_IDENT})|(?:{NUM_IDENT}))");
    format!("{ident}(?:\\.{ident})*")
}

fn build_pattern() -> String {
    let ident = format!("(?:(?:{ALPHANUM_IDENT})|[0-9]+)");
    format!("{ident}(?:\\.{ident})*")
}

/// Full grammar: core, optional `-pre-release`, optional `+build`.
/// Capture groups: major, minor, patch, pre-release, build.
pub(crate) static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    let core = format!("({NUM_IDENT})\\.({NUM_IDENT})\\.({NUM_IDENT})");
    let pattern = format!(
        "^{core}(?:-({pre}))?(?:\\+({build}))?$",
        pre = pre_release_pattern(),
        build = build_pattern(),
    );
    Regex::new(&pattern).expect("semver grammar")
});

static PRE_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", pre_release_pattern())).expect("pre-release grammar")
});

static BUILD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", build_pattern())).expect("build grammar"));

/// True if `s` is a valid pre-release component, e.g. `rc.1`.
pub fn is_pre_release(s: &str) -> bool {
    PRE_RELEASE.is_match(s)
}

/// True if `s` is a valid build component, e.g. `build.05`.
pub fn is_build(s: &str) -> bool {
    BUILD.is_match(s)
}
