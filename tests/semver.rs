use std::cmp::Ordering;

use rstest::rstest;
use valuekit::semver::{
    Form, Format, FormatError, Formatter, Parser, Ver, compare, parse, parse_tag, parse_version,
};

#[rstest]
#[case("0.0.0")]
#[case("1.2.3")]
#[case("1.2.3-x+y")]
#[case("1.0.0-alpha.1")]
#[case("10.20.30-rc.1+build.5")]
#[case("1.0.0+20130313144700")]
fn round_trip_preserves_text(#[case] input: &str) {
    let v = parse(input).unwrap();
    assert_eq!(v.to_string(), input);
    assert_eq!(parse(&v.to_string()).unwrap(), v);
}

#[test]
fn round_trip_tag_form() {
    let v = parse("v1.2.3-rc.1").unwrap();
    assert_eq!(v.to_tag_string(), "v1.2.3-rc.1");
    assert_eq!(parse(&v.to_tag_string()).unwrap(), v);
}

const ORDERED: [&str; 12] = [
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.1.0",
    "2.0.0-0.1.2.3.4", // pre-release of the next core sorts before it
    "2.0.0",
];

#[test]
fn precedence_chain_is_strictly_increasing() {
    let versions: Vec<Ver> = ORDERED.iter().map(|s| s.parse().unwrap()).collect();
    for (i, a) in versions.iter().enumerate() {
        for (j, b) in versions.iter().enumerate() {
            let expected = i.cmp(&j);
            assert_eq!(a.compare(b), expected, "{a} vs {b}");
            // antisymmetry
            assert_eq!(b.compare(a), expected.reverse(), "{b} vs {a}");
        }
    }
}

#[test]
fn build_metadata_is_ignored_in_ordering() {
    let a = Ver::new(1, 0, 0).with_build("build1");
    let b = Ver::new(1, 0, 0).with_build("build2");
    assert_eq!(a.compare(&b), Ordering::Equal);
    assert_eq!(compare("1.0.0+x", "v1.0.0+y").unwrap(), Ordering::Equal);
}

#[test]
fn pre_release_sorts_before_release() {
    let pre = Ver::new(1, 0, 0).with_pre_release("alfa.1");
    let plain = Ver::new(1, 0, 0);
    assert_eq!(pre.compare(&plain), Ordering::Less);
}

#[test]
fn input_ceiling_boundary() {
    let parser = Parser {
        max_input_length: 5,
        ..Parser::default()
    };
    assert!(parser.parse("1.2.3").is_ok());
    let err = parser.parse("1.22.3").unwrap_err();
    assert_eq!(err.to_string(), "semver::parse: input too long (6 > 5)");
    assert_eq!(err.input(), "");
}

#[test]
fn form_gating() {
    assert_eq!(
        parse_version("v1.2.3").unwrap_err().to_string(),
        "semver::parse_version: \"v1.2.3\": tag form not allowed"
    );
    assert_eq!(
        parse_tag("1.2.3").unwrap_err().to_string(),
        "semver::parse_tag: \"1.2.3\": expected tag form"
    );
    assert_eq!(parse("1.2.3").unwrap(), parse("v1.2.3").unwrap());

    let tag_only = Parser {
        form: Form::Tag,
        ..Parser::default()
    };
    assert!(tag_only.parse("v1.2.3").is_ok());
}

#[test]
fn plain_form_scenario() {
    let v = parse_version("1.2.3-x+y").unwrap();
    assert_eq!(v, Ver::new(1, 2, 3).with_pre_release("x").with_build("y"));
    assert_eq!(v.to_string(), "1.2.3-x+y");
}

#[test]
fn zero_tag_scenario() {
    let v = parse("v0.0.0").unwrap();
    assert!(v.is_zero());
    assert_eq!(v.to_tag_string(), "v0.0.0");
}

#[test]
fn empty_input_is_invalid_version() {
    let err = parse("").unwrap_err();
    assert!(err.to_string().contains("invalid version"), "{err}");
}

#[test]
fn next_major_scenario() {
    assert_eq!(Ver::new(1, 0, 0).next_major(), Ver::new(2, 0, 0));
}

#[test]
fn injected_pre_release_ordering() {
    // reversed ordering flips the §11 rule that pre-releases sort first
    let a: Ver = "1.0.0-alpha".parse().unwrap();
    let b: Ver = "1.0.0".parse().unwrap();
    assert_eq!(
        a.compare_by(&b, |x, y| valuekit::semver::compare_pre_release(x, y).reverse()),
        Ordering::Greater
    );
}

struct BracketFormatter;

impl Formatter for BracketFormatter {
    fn format(&self, buf: &mut String, ver: &Ver, _flags: Format) -> Result<(), FormatError> {
        buf.push_str(&format!("[{}.{}.{}]", ver.major, ver.minor, ver.patch));
        Ok(())
    }
}

#[test]
fn custom_formatter_injection() {
    let v = Ver::new(1, 2, 3);
    assert_eq!(v.format_with(&BracketFormatter, Format::default()), "[1.2.3]");
}

#[test]
fn serde_uses_canonical_text() {
    let v: Ver = "1.2.3-rc.1+b.2".parse().unwrap();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "\"1.2.3-rc.1+b.2\"");
    assert_eq!(serde_json::from_str::<Ver>(&json).unwrap(), v);
    assert!(serde_json::from_str::<Ver>("\"1.2\"").is_err());
}
