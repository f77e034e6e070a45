//! Type coercion between fixed-width column text and [`TypedValue`].
//!
//! Decode enforces the character class of each kind; encode pads to the exact column
//! width (text left-justified and blank-filled, numbers right-justified and zero-filled,
//! absent dates zero-filled). For every value produced by a successful [`decode`],
//! `decode(kind, &encode(kind, &v, len)) == Ok(v)`.

use crate::error::Fault;
use crate::layout::{DateFormat, FieldKind};
use crate::value::TypedValue;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Decode one column.
pub fn decode(kind: FieldKind, raw: &str) -> Result<TypedValue, Fault> {
    match kind {
        FieldKind::Text => decode_text(raw).map(TypedValue::Text),
        FieldKind::EnumCode => decode_text(raw).map(TypedValue::Code),
        FieldKind::NumericText { .. } => decode_numeric(raw).map(TypedValue::Integer),
        FieldKind::Date(DateFormat::MonthDayYear) => decode_date(raw).map(TypedValue::Date),
        FieldKind::Date(DateFormat::Timestamp) => decode_timestamp(raw).map(TypedValue::Timestamp),
    }
}

/// Encode one column to exactly `length` characters. A value whose variant does not
/// match `kind` encodes as the kind's empty fill.
pub fn encode(kind: FieldKind, value: &TypedValue, length: usize) -> String {
    match (kind, value) {
        (FieldKind::Text | FieldKind::EnumCode, TypedValue::Text(s) | TypedValue::Code(s)) => {
            pad_right(s, length)
        }
        (FieldKind::NumericText { .. }, TypedValue::Integer(n)) => pad_left_zeros(*n, length),
        (FieldKind::Date(DateFormat::MonthDayYear), TypedValue::Date(Some(d))) => {
            fit(format_date(*d), length)
        }
        (FieldKind::Date(DateFormat::Timestamp), TypedValue::Timestamp(Some(t))) => {
            fit(format_timestamp(*t), length)
        }
        (FieldKind::Text | FieldKind::EnumCode, _) => " ".repeat(length),
        (FieldKind::NumericText { .. } | FieldKind::Date(_), _) => "0".repeat(length),
    }
}

/// True when `value` is the empty value of its kind: blank text, zero, an absent
/// date, or (for sentinel columns) an all-nines fill of `length` digits.
pub fn is_absent(kind: FieldKind, value: &TypedValue, length: usize) -> bool {
    match value {
        TypedValue::Text(s) | TypedValue::Code(s) => s.trim().is_empty(),
        TypedValue::Integer(0) => true,
        TypedValue::Integer(n) => match kind {
            FieldKind::NumericText {
                absent_sentinel: true,
            } => Some(*n) == all_nines(length),
            _ => false,
        },
        TypedValue::Date(d) => d.is_none(),
        TypedValue::Timestamp(t) => t.is_none(),
    }
}

/// The integer `99..9` with `length` digits, if it fits in an `i64`.
pub fn all_nines(length: usize) -> Option<i64> {
    let exp = u32::try_from(length).ok()?;
    10i64.checked_pow(exp).map(|p| p - 1)
}

fn decode_text(raw: &str) -> Result<String, Fault> {
    if let Some((i, c)) = raw.char_indices().find(|(_, c)| !is_printable(*c)) {
        return Err(Fault::invalid_format(format!(
            "character {:?} at column offset {} is not printable ASCII",
            c, i
        )));
    }
    Ok(raw.trim_end_matches(' ').to_string())
}

fn is_printable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

fn decode_numeric(raw: &str) -> Result<i64, Fault> {
    require_digits(raw)?;
    raw.parse::<i64>()
        .map_err(|_| Fault::invalid_value(format!("{:?} does not fit in 64 bits", raw)))
}

fn require_digits(raw: &str) -> Result<(), Fault> {
    if raw.is_empty() {
        return Err(Fault::invalid_format("empty numeric column"));
    }
    match raw.chars().position(|c| !c.is_ascii_digit()) {
        None => Ok(()),
        Some(i) => Err(Fault::invalid_format(format!(
            "{:?} has a non-digit at column offset {}",
            raw, i
        ))),
    }
}

/// Parse fixed-position digits (caller has checked they are ASCII digits).
fn digits(raw: &str, from: usize, len: usize) -> u32 {
    raw.as_bytes()[from..from + len]
        .iter()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn decode_date(raw: &str) -> Result<Option<NaiveDate>, Fault> {
    require_digits(raw)?;
    if raw.len() != DateFormat::MonthDayYear.width() {
        return Err(Fault::invalid_format(format!("{:?} is not MMDDYYYY", raw)));
    }
    if raw.bytes().all(|b| b == b'0') {
        return Ok(None);
    }
    calendar_date(raw).map(Some)
}

fn calendar_date(raw: &str) -> Result<NaiveDate, Fault> {
    let (month, day, year) = (digits(raw, 0, 2), digits(raw, 2, 2), digits(raw, 4, 4));
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(|| Fault::invalid_value(format!("{:?} is not a calendar date", &raw[..8])))
}

fn decode_timestamp(raw: &str) -> Result<Option<NaiveDateTime>, Fault> {
    require_digits(raw)?;
    if raw.len() != DateFormat::Timestamp.width() {
        return Err(Fault::invalid_format(format!("{:?} is not MMDDYYYYHHMMSS", raw)));
    }
    if raw.bytes().all(|b| b == b'0') {
        return Ok(None);
    }
    let date = calendar_date(raw)?;
    let (hour, minute, second) = (digits(raw, 8, 2), digits(raw, 10, 2), digits(raw, 12, 2));
    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| Fault::invalid_value(format!("{:?} is not a time of day", &raw[8..])))?;
    Ok(Some(date.and_time(time)))
}

fn format_date(d: NaiveDate) -> String {
    if !(0..=9999).contains(&d.year()) {
        return "0".repeat(DateFormat::MonthDayYear.width());
    }
    format!("{:02}{:02}{:04}", d.month(), d.day(), d.year())
}

fn format_timestamp(t: NaiveDateTime) -> String {
    if !(0..=9999).contains(&t.year()) {
        return "0".repeat(DateFormat::Timestamp.width());
    }
    format!(
        "{}{:02}{:02}{:02}",
        format_date(t.date()),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Left-justify, blank-fill, truncate to `length` characters.
fn pad_right(s: &str, length: usize) -> String {
    let mut out: String = s.chars().take(length).collect();
    let n = out.chars().count();
    out.extend(std::iter::repeat(' ').take(length - n));
    out
}

/// Right-justify and zero-fill the magnitude; keeps the low-order `length` digits.
fn pad_left_zeros(n: i64, length: usize) -> String {
    let digits = n.unsigned_abs().to_string();
    if digits.len() >= length {
        digits[digits.len() - length..].to_string()
    } else {
        format!("{}{}", "0".repeat(length - digits.len()), digits)
    }
}

fn fit(s: String, length: usize) -> String {
    if s.len() == length {
        s
    } else {
        pad_right(&s, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const TEXT: FieldKind = FieldKind::Text;
    const NUMERIC: FieldKind = FieldKind::NumericText {
        absent_sentinel: false,
    };
    const SENTINEL: FieldKind = FieldKind::NumericText {
        absent_sentinel: true,
    };
    const DATE: FieldKind = FieldKind::Date(DateFormat::MonthDayYear);
    const STAMP: FieldKind = FieldKind::Date(DateFormat::Timestamp);

    #[test]
    fn text_trims_trailing_blanks_only() {
        assert_eq!(decode(TEXT, "  SMITH   "), Ok(TypedValue::Text("  SMITH".into())));
        assert_eq!(encode(TEXT, &TypedValue::Text("  SMITH".into()), 10), "  SMITH   ");
    }

    #[test]
    fn text_rejects_non_printable() {
        let err = decode(TEXT, "AB\tC").expect_err("tab");
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
        let err = decode(TEXT, "JOSÉ").expect_err("non-ascii");
        assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }

    #[test]
    fn text_encode_truncates() {
        assert_eq!(encode(TEXT, &TypedValue::Text("ABCDEFG".into()), 4), "ABCD");
        assert_eq!(encode(TEXT, &TypedValue::Text(String::new()), 3), "   ");
    }

    #[test]
    fn enum_code_accepts_any_printable_text() {
        assert_eq!(decode(FieldKind::EnumCode, "X"), Ok(TypedValue::Code("X".into())));
        assert_eq!(decode(FieldKind::EnumCode, " "), Ok(TypedValue::Code(String::new())));
    }

    #[test]
    fn numeric_rejects_non_digits() {
        for raw in ["12A4", " 123", "12-3", ""] {
            let err = decode(NUMERIC, raw).expect_err(raw);
            assert_eq!(err.kind, ErrorKind::InvalidFormat, "{:?}", raw);
        }
    }

    #[test]
    fn numeric_zero_pads_and_keeps_leading_zeros_round_trip() {
        assert_eq!(decode(NUMERIC, "000123"), Ok(TypedValue::Integer(123)));
        assert_eq!(encode(NUMERIC, &TypedValue::Integer(123), 6), "000123");
        assert_eq!(encode(NUMERIC, &TypedValue::Integer(1234567), 4), "4567");
        assert_eq!(encode(NUMERIC, &TypedValue::Integer(-42), 4), "0042");
    }

    #[test]
    fn sentinel_fills_are_absent() {
        let nines = decode(SENTINEL, "999999999").expect("nines");
        assert_eq!(nines, TypedValue::Integer(999_999_999));
        assert!(is_absent(SENTINEL, &nines, 9));
        assert_eq!(encode(SENTINEL, &nines, 9), "999999999");

        let zeros = decode(SENTINEL, "000000000").expect("zeros");
        assert!(is_absent(SENTINEL, &zeros, 9));

        let ssn = decode(SENTINEL, "123456789").expect("ssn");
        assert!(!is_absent(SENTINEL, &ssn, 9));
        // all nines only means absent on sentinel columns
        assert!(!is_absent(NUMERIC, &nines, 9));
    }

    #[test]
    fn date_validates_calendar() {
        let leap = decode(DATE, "02292020").expect("leap day");
        assert_eq!(leap, TypedValue::Date(NaiveDate::from_ymd_opt(2020, 2, 29)));
        assert_eq!(encode(DATE, &leap, 8), "02292020");

        assert_eq!(decode(DATE, "02302020").map_err(|e| e.kind), Err(ErrorKind::InvalidValue));
        assert_eq!(decode(DATE, "02292021").map_err(|e| e.kind), Err(ErrorKind::InvalidValue));
        assert_eq!(decode(DATE, "13012020").map_err(|e| e.kind), Err(ErrorKind::InvalidValue));
        assert_eq!(decode(DATE, "0115198O").map_err(|e| e.kind), Err(ErrorKind::InvalidFormat));
        assert_eq!(decode(DATE, "        ").map_err(|e| e.kind), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn zero_date_is_absent() {
        let v = decode(DATE, "00000000").expect("zeros");
        assert_eq!(v, TypedValue::Date(None));
        assert!(is_absent(DATE, &v, 8));
        assert_eq!(encode(DATE, &v, 8), "00000000");
    }

    #[test]
    fn timestamp_round_trip() {
        let v = decode(STAMP, "12312019235959").expect("timestamp");
        let expected = NaiveDate::from_ymd_opt(2019, 12, 31).and_then(|d| d.and_hms_opt(23, 59, 59));
        assert_eq!(v, TypedValue::Timestamp(expected));
        assert_eq!(encode(STAMP, &v, 14), "12312019235959");
        assert_eq!(decode(STAMP, "12312019246000").map_err(|e| e.kind), Err(ErrorKind::InvalidValue));
        assert_eq!(decode(STAMP, "00000000000000"), Ok(TypedValue::Timestamp(None)));
    }

    #[test]
    fn mismatched_variant_encodes_as_fill() {
        assert_eq!(encode(DATE, &TypedValue::Text("x".into()), 8), "00000000");
        assert_eq!(encode(TEXT, &TypedValue::Integer(5), 3), "   ");
        assert_eq!(encode(NUMERIC, &TypedValue::Date(None), 2), "00");
    }

    #[test]
    fn all_nines_guards_overflow() {
        assert_eq!(all_nines(3), Some(999));
        assert_eq!(all_nines(18), Some(999_999_999_999_999_999));
        assert_eq!(all_nines(19), None);
    }
}
