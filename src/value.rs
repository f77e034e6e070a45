//! Typed field values (codec representation).

use chrono::{NaiveDate, NaiveDateTime};

/// A single decoded field value. The variant always matches the field's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    /// Free text, trailing blanks removed.
    Text(String),
    /// Digits-only column.
    Integer(i64),
    /// `MMDDYYYY`; `None` when zero-filled.
    Date(Option<NaiveDate>),
    /// `MMDDYYYYHHMMSS`; `None` when zero-filled.
    Timestamp(Option<NaiveDateTime>),
    /// Enumerated code, checked against its set by a business rule.
    Code(String),
}

impl TypedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) | TypedValue::Code(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(d) => *d,
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            TypedValue::Timestamp(t) => *t,
            _ => None,
        }
    }

    /// Short name of the variant, for error details.
    pub fn variant_name(&self) -> &'static str {
        match self {
            TypedValue::Text(_) => "text",
            TypedValue::Integer(_) => "integer",
            TypedValue::Date(_) => "date",
            TypedValue::Timestamp(_) => "timestamp",
            TypedValue::Code(_) => "code",
        }
    }
}
