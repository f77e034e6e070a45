//! Error types for segment decoding, encoding and validation.
//!
//! - [`Fault`] - a failure without location, raised by coercion or a business rule
//! - [`FieldError`] - a [`Fault`] pinned to a record type and field
//! - [`RecordError`] - everything a segment operation can return
//! - [`SchemaError`] - a defect in a layout table, found by [`crate::Layout::verify`]

use std::fmt;
use thiserror::Error;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structural pass: a required field holds its empty value.
    MissingRequired,
    /// Raw text violates the character class of the field's kind.
    InvalidFormat,
    /// Well-formed but semantically wrong (out-of-set code, impossible date, ...).
    InvalidValue,
    /// The value and the field's declared kind disagree. A configuration defect.
    SchemaMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::MissingRequired => "missing required value",
            ErrorKind::InvalidFormat => "invalid format",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::SchemaMismatch => "schema mismatch",
        };
        f.write_str(s)
    }
}

/// A field failure that does not yet know which field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct Fault {
    pub kind: ErrorKind,
    pub detail: String,
}

impl Fault {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Fault {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invalid_format(detail: impl Into<String>) -> Self {
        Fault::new(ErrorKind::InvalidFormat, detail)
    }

    pub fn invalid_value(detail: impl Into<String>) -> Self {
        Fault::new(ErrorKind::InvalidValue, detail)
    }

    /// Attach record and field context.
    pub fn at(self, record: &'static str, field: &'static str) -> FieldError {
        FieldError {
            record,
            field,
            kind: self.kind,
            detail: self.detail,
        }
    }
}

/// A failure localized to one column of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} {field}: {kind}: {detail}")]
pub struct FieldError {
    pub record: &'static str,
    pub field: &'static str,
    pub kind: ErrorKind,
    pub detail: String,
}

/// Error returned by segment decode/validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Input is shorter than the record's fixed width.
    #[error("{record}: line has {found} characters, expected at least {expected}")]
    Length {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl RecordError {
    /// Field kind of the failure, `None` for [`RecordError::Length`].
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RecordError::Length { .. } => None,
            RecordError::Field(e) => Some(e.kind),
        }
    }

    /// Field name of the failure, `None` for [`RecordError::Length`].
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::Length { .. } => None,
            RecordError::Field(e) => Some(e.field),
        }
    }

    /// True when the failure concerns this record only and the caller may skip it
    /// and carry on. Length and schema failures mean the input or the tables are
    /// categorically wrong and retrying cannot help.
    pub fn is_record_local(&self) -> bool {
        match self {
            RecordError::Length { .. } => false,
            RecordError::Field(e) => e.kind != ErrorKind::SchemaMismatch,
        }
    }
}

/// A defect in a layout table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{record}: field {field} starts at {start}, expected {expected}")]
    Gap {
        record: &'static str,
        field: &'static str,
        start: usize,
        expected: usize,
    },
    #[error("{record}: field {field} has zero length")]
    ZeroLength {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record}: fields cover {covered} characters, record width is {width}")]
    Width {
        record: &'static str,
        covered: usize,
        width: usize,
    },
    #[error("{record}: duplicate field name {field}")]
    DuplicateField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record}: field {field} has no accessor for its kind")]
    Accessor {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record}: field {field} names unknown partner {partner}")]
    UnknownPartner {
        record: &'static str,
        field: &'static str,
        partner: &'static str,
    },
    #[error("{record}: numeric field {field} is {length} wide, at most 18 digits fit")]
    NumericWidth {
        record: &'static str,
        field: &'static str,
        length: usize,
    },
    #[error("{record}: field {field} is {length} wide, its date format needs {needed}")]
    DateWidth {
        record: &'static str,
        field: &'static str,
        length: usize,
        needed: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_message_names_record_and_field() {
        let err: RecordError = Fault::invalid_value("not in set").at("J1", "generation_code").into();
        let msg = err.to_string();
        assert!(msg.contains("J1"));
        assert!(msg.contains("generation_code"));
        assert!(msg.contains("not in set"));
        assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
        assert!(err.is_record_local());
    }

    #[test]
    fn length_and_schema_errors_are_not_record_local() {
        let length = RecordError::Length {
            record: "J1",
            expected: 100,
            found: 12,
        };
        assert!(!length.is_record_local());
        assert_eq!(length.kind(), None);

        let schema: RecordError = Fault::new(ErrorKind::SchemaMismatch, "text into date")
            .at("J1", "date_birth")
            .into();
        assert!(!schema.is_record_local());
    }
}
