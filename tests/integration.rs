//! Integration tests: J1 round trip, coercion edge cases, validation ordering and
//! stream decoding through the public API.

use chrono::NaiveDate;
use metro2::frame::{decode_stream, encode_compliant};
use metro2::{verify_layouts, ErrorKind, J1Segment, RecordError, Segment, SegmentKind};

fn j1_line(generation: &str, ssn: &str, birth: &str, telephone: &str) -> String {
    format!(
        "J1 {:<25}{:<20}{:<20}{:<1}{}{}{}1   ",
        "SMITH-JONES", "ROBERT", "", generation, ssn, birth, telephone
    )
}

fn scenario_line() -> String {
    j1_line(" ", "999999999", "01151980", "2125551234")
}

#[test]
fn test_layouts_verify_at_startup() {
    assert_eq!(verify_layouts(), Ok(()));
}

#[test]
fn test_j1_scenario_round_trip() {
    let line = scenario_line();
    assert_eq!(line.len(), 100);

    let mut j1 = J1Segment::new();
    assert_eq!(j1.decode(&line), Ok(100));
    assert_eq!(j1.surname, "SMITH-JONES");
    assert_eq!(j1.first_name, "ROBERT");
    assert_eq!(j1.generation_code, "");
    assert_eq!(j1.social_security_number, 999_999_999);
    assert_eq!(j1.date_birth, NaiveDate::from_ymd_opt(1980, 1, 15));
    assert_eq!(j1.telephone_number, 2_125_551_234);
    assert_eq!(j1.ecoa_code, "1");
    assert_eq!(j1.describe(), "J1 Segment - Associated Consumer (Same Address)");

    assert_eq!(j1.validate(), Ok(()));
    assert_eq!(j1.encode(), line);
}

#[test]
fn test_validate_is_idempotent_and_pure() {
    let j1 = J1Segment::parse(&j1_line("X", "123456789", "01151980", "2125551234")).expect("parse");
    let before = j1.clone();
    let first = j1.validate();
    let second = j1.validate();
    assert_eq!(first, second);
    assert_eq!(j1, before);
}

#[test]
fn test_generation_code_values() {
    let bad = J1Segment::parse(&j1_line("X", "123456789", "01151980", "2125551234")).expect("parse");
    let err = bad.validate().expect_err("X is not a generation code");
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert_eq!(err.field(), Some("generation_code"));
    assert!(err.to_string().contains("J1"));

    let good = J1Segment::parse(&j1_line("J", "123456789", "01151980", "2125551234")).expect("parse");
    assert_eq!(good.validate(), Ok(()));
}

#[test]
fn test_sentinel_ssn_without_birth_date_is_missing() {
    for sentinel in ["999999999", "000000000"] {
        let j1 = J1Segment::parse(&j1_line(" ", sentinel, "00000000", "2125551234")).expect("parse");
        assert_eq!(j1.date_birth, None);
        let err = j1.validate().expect_err("no identity reported");
        assert_eq!(err.kind(), Some(ErrorKind::MissingRequired));
        assert_eq!(j1.encode(), j1_line(" ", sentinel, "00000000", "2125551234"));
    }
}

#[test]
fn test_birth_date_calendar() {
    let mut j1 = J1Segment::new();
    let err = j1
        .decode(&j1_line(" ", "123456789", "02302020", "2125551234"))
        .expect_err("February 30");
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert_eq!(err.field(), Some("date_birth"));
    assert_eq!(j1, J1Segment::new());

    assert_eq!(j1.decode(&j1_line(" ", "123456789", "02292020", "2125551234")), Ok(100));
    assert_eq!(j1.date_birth, NaiveDate::from_ymd_opt(2020, 2, 29));
}

#[test]
fn test_non_digit_ssn_is_format_error() {
    let err = J1Segment::parse(&j1_line(" ", "12345678A", "01151980", "2125551234")).expect_err("letter");
    assert_eq!(err.kind(), Some(ErrorKind::InvalidFormat));
    assert_eq!(err.field(), Some("social_security_number"));
    assert!(err.is_record_local());
}

#[test]
fn test_short_line_consumes_nothing() {
    let mut j1 = J1Segment::parse(&scenario_line()).expect("parse");
    let before = j1.clone();
    let line = scenario_line();
    let short = &line[..99];
    assert_eq!(
        j1.decode(short),
        Err(RecordError::Length {
            record: "J1",
            expected: 100,
            found: 99
        })
    );
    assert_eq!(j1, before);
}

#[test]
fn test_encode_width_for_every_record_type() {
    for kind in SegmentKind::ALL {
        let line = match kind {
            SegmentKind::Header => metro2::HeaderRecord::new().encode(),
            SegmentKind::Base => metro2::BaseSegment::new().encode(),
            SegmentKind::J1 => J1Segment::new().encode(),
            SegmentKind::J2 => metro2::J2Segment::new().encode(),
            SegmentKind::K1 => metro2::K1Segment::new().encode(),
            SegmentKind::K2 => metro2::K2Segment::new().encode(),
            SegmentKind::K3 => metro2::K3Segment::new().encode(),
            SegmentKind::K4 => metro2::K4Segment::new().encode(),
            SegmentKind::L1 => metro2::L1Segment::new().encode(),
            SegmentKind::N1 => metro2::N1Segment::new().encode(),
            SegmentKind::Trailer => metro2::TrailerRecord::new().encode(),
        };
        assert_eq!(line.chars().count(), kind.width(), "{}", kind.name());
    }
}

#[test]
fn test_oversized_values_are_fitted_on_encode() {
    let mut j1 = J1Segment::parse(&scenario_line()).expect("parse");
    j1.surname = "A-VERY-LONG-SURNAME-THAT-DOES-NOT-FIT".into();
    j1.telephone_number = 12_125_551_234;
    let line = j1.encode();
    assert_eq!(line.len(), 100);
    assert_eq!(&line[3..28], "A-VERY-LONG-SURNAME-THAT-");
    assert_eq!(&line[86..96], "2125551234");
}

#[test]
fn test_stream_keeps_compliant_records() {
    let good = scenario_line();
    let bad = j1_line("X", "123456789", "01151980", "2125551234");
    let input = format!("{}\n{}\n{}\n", good, bad, good);

    let result = decode_stream::<J1Segment>(&input, true);
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.removed.len(), 1);
    assert_eq!(result.removed[0].byte_range, (101, 201));
    assert_eq!(result.removed[0].error.field(), Some("generation_code"));
    assert_eq!(encode_compliant(&result), format!("{}\n{}\n", good, good));
}
