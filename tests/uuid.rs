use rstest::rstest;
use valuekit::uuid::{Format, Id, ParseErrorKind, Parser, format, parse};

const SAMPLE: Id = Id {
    higher: 0xed70_59f3_8044_4f2a,
    lower: 0x81aa_b959_b33c_7777,
};

#[rstest]
#[case("ed7059f3-8044-4f2a-81aa-b959b33c7777")]
#[case("ED7059F3-8044-4F2A-81AA-B959B33C7777")]
#[case("urn:uuid:ed7059f3-8044-4f2a-81aa-b959b33c7777")]
#[case("URN:UUID:ed7059f3-8044-4f2a-81aa-b959b33c7777")]
fn parse_accepted(#[case] input: &str) {
    assert_eq!(parse(input).unwrap(), SAMPLE);
}

#[test]
fn round_trip() {
    assert_eq!(parse(&SAMPLE.to_string()).unwrap(), SAMPLE);
    assert_eq!(parse(&SAMPLE.urn()).unwrap(), SAMPLE);
    assert_eq!(format(SAMPLE, Format::URN), SAMPLE.urn());
}

#[test]
fn digit_errors_name_the_byte() {
    let err = parse("ed7059f3-8044-4f2a-81aa-b959b33c777g").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::InvalidDigit(b'g'));
    assert!(err.to_string().ends_with("invalid digit 'g' (U+0067)"));
}

#[rstest]
#[case("")]
#[case("ed7059f3-8044-4f2a-81aa")]
#[case("ed7059f3-8044-4f2a-81aa-b959b33c7777-0")]
#[case("ed7059f3_8044-4f2a-81aa-b959b33c7777")]
#[case("urn:uuuu:ed7059f3-8044-4f2a-81aa-b959b33c7777")]
fn format_rejections(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err().kind(), &ParseErrorKind::InvalidFormat);
}

#[test]
fn rules() {
    let strict = Parser {
        allow_urn: false,
        allow_upper_case: false,
        ..Parser::default()
    };
    assert_eq!(
        strict.parse("ed7059f3-8044-4f2a-81aa-b959b33c7777").unwrap(),
        SAMPLE
    );
    assert_eq!(
        strict
            .parse("urn:uuid:ed7059f3-8044-4f2a-81aa-b959b33c7777")
            .unwrap_err()
            .kind(),
        &ParseErrorKind::UrnDisabled
    );
    assert_eq!(
        strict
            .parse("ED7059F3-8044-4f2a-81aa-b959b33c7777")
            .unwrap_err()
            .kind(),
        &ParseErrorKind::InvalidDigit(b'E')
    );
}

#[test]
fn version_and_variant() {
    assert_eq!(SAMPLE.version(), 4);
    assert_eq!(SAMPLE.variant(), 1);
    assert_eq!(Id::default().version(), 0);
}

#[test]
fn random_ids_are_v4() {
    let a = Id::random();
    let b = Id::random();
    assert_eq!(a.version(), 4);
    assert_eq!(a.variant(), 1);
    assert_ne!(a, b);
    assert_eq!(parse(&a.to_string()).unwrap(), a);
}

#[test]
fn serde_round_trip() {
    let json = serde_json::to_string(&SAMPLE).unwrap();
    assert_eq!(json, "\"ed7059f3-8044-4f2a-81aa-b959b33c7777\"");
    assert_eq!(serde_json::from_str::<Id>(&json).unwrap(), SAMPLE);
}
