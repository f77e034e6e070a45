//! Field specification tables: the wire layout of one record type.
//!
//! A [`Layout`] is an ordered list of [`FieldSpec`]s. Table order is the wire order for
//! both decode and encode; the order of fields in the record struct plays no part.
//! Each spec pairs a column span and [`FieldKind`] with a typed [`Accessor`] into the
//! record and an optional business [`Rule`], so the engine never looks fields up by name.

use crate::error::{ErrorKind, Fault, SchemaError};
use crate::value::TypedValue;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Widest numeric column whose every value fits in an `i64`.
pub const MAX_NUMERIC_WIDTH: usize = 18;

/// Date layouts used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `MMDDYYYY`
    MonthDayYear,
    /// `MMDDYYYYHHMMSS`
    Timestamp,
}

impl DateFormat {
    pub fn width(self) -> usize {
        match self {
            DateFormat::MonthDayYear => 8,
            DateFormat::Timestamp => 14,
        }
    }
}

/// Value kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Alphanumeric, left-justified, blank-filled.
    Text,
    /// Digits only, right-justified, zero-filled. With `absent_sentinel`, all zeros or
    /// all nines mean the value was intentionally not reported.
    NumericText { absent_sentinel: bool },
    Date(DateFormat),
    /// Alphanumeric code from a fixed set; membership is a business rule.
    EnumCode,
}

/// Presence requirement checked by the structural pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Required unless the named partner field is present.
    EitherOf(&'static str),
}

/// Typed get/set pair into a record.
pub enum Accessor<R> {
    Text {
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    },
    Integer {
        get: fn(&R) -> i64,
        set: fn(&mut R, i64),
    },
    Date {
        get: fn(&R) -> Option<NaiveDate>,
        set: fn(&mut R, Option<NaiveDate>),
    },
    Timestamp {
        get: fn(&R) -> Option<NaiveDateTime>,
        set: fn(&mut R, Option<NaiveDateTime>),
    },
}

/// Business-rule check for one field (may look at other fields of the record).
pub type Rule<R> = fn(&R) -> Result<(), Fault>;

/// One column of a record layout.
pub struct FieldSpec<R> {
    pub name: &'static str,
    pub start: usize,
    pub length: usize,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub accessor: Accessor<R>,
    pub rule: Option<Rule<R>>,
}

impl<R> FieldSpec<R> {
    pub fn text(
        name: &'static str,
        start: usize,
        length: usize,
        requirement: Requirement,
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    ) -> Self {
        Self::with_accessor(name, start, length, FieldKind::Text, requirement, Accessor::Text { get, set })
    }

    pub fn code(
        name: &'static str,
        start: usize,
        length: usize,
        requirement: Requirement,
        get: fn(&R) -> String,
        set: fn(&mut R, String),
    ) -> Self {
        Self::with_accessor(name, start, length, FieldKind::EnumCode, requirement, Accessor::Text { get, set })
    }

    pub fn numeric(
        name: &'static str,
        start: usize,
        length: usize,
        requirement: Requirement,
        get: fn(&R) -> i64,
        set: fn(&mut R, i64),
    ) -> Self {
        let kind = FieldKind::NumericText {
            absent_sentinel: false,
        };
        Self::with_accessor(name, start, length, kind, requirement, Accessor::Integer { get, set })
    }

    /// Numeric column where all zeros or all nines mean "not reported".
    pub fn identifier(
        name: &'static str,
        start: usize,
        length: usize,
        requirement: Requirement,
        get: fn(&R) -> i64,
        set: fn(&mut R, i64),
    ) -> Self {
        let kind = FieldKind::NumericText {
            absent_sentinel: true,
        };
        Self::with_accessor(name, start, length, kind, requirement, Accessor::Integer { get, set })
    }

    pub fn date(
        name: &'static str,
        start: usize,
        requirement: Requirement,
        get: fn(&R) -> Option<NaiveDate>,
        set: fn(&mut R, Option<NaiveDate>),
    ) -> Self {
        let format = DateFormat::MonthDayYear;
        Self::with_accessor(
            name,
            start,
            format.width(),
            FieldKind::Date(format),
            requirement,
            Accessor::Date { get, set },
        )
    }

    pub fn timestamp(
        name: &'static str,
        start: usize,
        requirement: Requirement,
        get: fn(&R) -> Option<NaiveDateTime>,
        set: fn(&mut R, Option<NaiveDateTime>),
    ) -> Self {
        let format = DateFormat::Timestamp;
        Self::with_accessor(
            name,
            start,
            format.width(),
            FieldKind::Date(format),
            requirement,
            Accessor::Timestamp { get, set },
        )
    }

    pub fn with_accessor(
        name: &'static str,
        start: usize,
        length: usize,
        kind: FieldKind,
        requirement: Requirement,
        accessor: Accessor<R>,
    ) -> Self {
        FieldSpec {
            name,
            start,
            length,
            kind,
            requirement,
            accessor,
            rule: None,
        }
    }

    /// Attach a business rule.
    pub fn with_rule(mut self, rule: Rule<R>) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// True when the accessor can carry values of the declared kind.
    pub fn accessor_fits_kind(&self) -> bool {
        matches!(
            (&self.kind, &self.accessor),
            (FieldKind::Text | FieldKind::EnumCode, Accessor::Text { .. })
                | (FieldKind::NumericText { .. }, Accessor::Integer { .. })
                | (FieldKind::Date(DateFormat::MonthDayYear), Accessor::Date { .. })
                | (FieldKind::Date(DateFormat::Timestamp), Accessor::Timestamp { .. })
        )
    }

    /// Current value of this field in `record`.
    pub fn read(&self, record: &R) -> TypedValue {
        match (&self.accessor, self.kind) {
            (Accessor::Text { get, .. }, FieldKind::EnumCode) => TypedValue::Code(get(record)),
            (Accessor::Text { get, .. }, _) => TypedValue::Text(get(record)),
            (Accessor::Integer { get, .. }, _) => TypedValue::Integer(get(record)),
            (Accessor::Date { get, .. }, _) => TypedValue::Date(get(record)),
            (Accessor::Timestamp { get, .. }, _) => TypedValue::Timestamp(get(record)),
        }
    }

    /// Assign `value` to this field in `record`. A variant the accessor cannot hold is a
    /// [`ErrorKind::SchemaMismatch`]; nothing is assigned in that case.
    pub fn write(&self, record: &mut R, value: TypedValue) -> Result<(), Fault> {
        match (&self.accessor, value) {
            (Accessor::Text { set, .. }, TypedValue::Text(s) | TypedValue::Code(s)) => set(record, s),
            (Accessor::Integer { set, .. }, TypedValue::Integer(n)) => set(record, n),
            (Accessor::Date { set, .. }, TypedValue::Date(d)) => set(record, d),
            (Accessor::Timestamp { set, .. }, TypedValue::Timestamp(t)) => set(record, t),
            (_, other) => {
                return Err(Fault::new(
                    ErrorKind::SchemaMismatch,
                    format!("{} value does not fit {:?} field", other.variant_name(), self.kind),
                ))
            }
        }
        Ok(())
    }
}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("start", &self.start)
            .field("length", &self.length)
            .field("kind", &self.kind)
            .field("requirement", &self.requirement)
            .field("rule", &self.rule.is_some())
            .finish()
    }
}

/// The complete wire layout of one record type.
pub struct Layout<R> {
    /// Short label used in errors (`J1`, `BASE`, ...).
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Fixed total width in characters.
    pub width: usize,
    pub fields: Vec<FieldSpec<R>>,
    by_name: HashMap<&'static str, usize>,
}

impl<R> Layout<R> {
    pub fn new(
        name: &'static str,
        description: &'static str,
        width: usize,
        fields: Vec<FieldSpec<R>>,
    ) -> Self {
        let mut by_name = HashMap::with_capacity(fields.len());
        for (i, f) in fields.iter().enumerate() {
            by_name.entry(f.name).or_insert(i);
        }
        Layout {
            name,
            description,
            width,
            fields,
            by_name,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec<R>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Check the table: spans start at 0, are contiguous and cover exactly `width`;
    /// names are unique; partners exist; every accessor fits its kind.
    pub fn verify(&self) -> Result<(), SchemaError> {
        let record = self.name;
        let mut seen = HashSet::with_capacity(self.fields.len());
        let mut expected = 0usize;
        for f in &self.fields {
            if !seen.insert(f.name) {
                return Err(SchemaError::DuplicateField { record, field: f.name });
            }
            if f.length == 0 {
                return Err(SchemaError::ZeroLength { record, field: f.name });
            }
            if f.start != expected {
                return Err(SchemaError::Gap {
                    record,
                    field: f.name,
                    start: f.start,
                    expected,
                });
            }
            if !f.accessor_fits_kind() {
                return Err(SchemaError::Accessor { record, field: f.name });
            }
            match f.kind {
                FieldKind::Date(format) if format.width() != f.length => {
                    return Err(SchemaError::DateWidth {
                        record,
                        field: f.name,
                        length: f.length,
                        needed: format.width(),
                    });
                }
                FieldKind::NumericText { .. } if f.length > MAX_NUMERIC_WIDTH => {
                    return Err(SchemaError::NumericWidth {
                        record,
                        field: f.name,
                        length: f.length,
                    });
                }
                _ => {}
            }
            expected = f.end();
        }
        if expected != self.width {
            return Err(SchemaError::Width {
                record,
                covered: expected,
                width: self.width,
            });
        }
        for f in &self.fields {
            if let Requirement::EitherOf(partner) = f.requirement {
                if partner == f.name || self.field(partner).is_none() {
                    return Err(SchemaError::UnknownPartner {
                        record,
                        field: f.name,
                        partner,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<R> fmt::Debug for Layout<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Requirement::*;

    #[derive(Default)]
    struct Pair {
        code: String,
        amount: i64,
    }

    type F = FieldSpec<Pair>;

    fn pair_fields() -> Vec<F> {
        vec![
            F::code("code", 0, 2, Required, |p| p.code.clone(), |p, v| p.code = v),
            F::numeric("amount", 2, 5, Optional, |p| p.amount, |p, v| p.amount = v),
        ]
    }

    #[test]
    fn verify_accepts_contiguous_table() {
        let layout = Layout::new("PAIR", "pair", 7, pair_fields());
        assert!(layout.verify().is_ok());
        assert_eq!(layout.field("amount").map(|f| f.start), Some(2));
        assert!(layout.field("missing").is_none());
    }

    #[test]
    fn verify_rejects_wrong_width() {
        let layout = Layout::new("PAIR", "pair", 8, pair_fields());
        assert_eq!(
            layout.verify(),
            Err(SchemaError::Width {
                record: "PAIR",
                covered: 7,
                width: 8
            })
        );
    }

    #[test]
    fn verify_rejects_gap_and_overlap() {
        let mut fields = pair_fields();
        fields[1].start = 3;
        let layout = Layout::new("PAIR", "pair", 8, fields);
        assert!(matches!(layout.verify(), Err(SchemaError::Gap { field: "amount", .. })));

        let mut fields = pair_fields();
        fields[1].start = 1;
        let layout = Layout::new("PAIR", "pair", 6, fields);
        assert!(matches!(layout.verify(), Err(SchemaError::Gap { start: 1, expected: 2, .. })));
    }

    #[test]
    fn verify_rejects_accessor_kind_mismatch() {
        let mut fields = pair_fields();
        fields[0].kind = FieldKind::Date(DateFormat::MonthDayYear);
        let layout = Layout::new("PAIR", "pair", 7, fields);
        assert_eq!(
            layout.verify(),
            Err(SchemaError::Accessor {
                record: "PAIR",
                field: "code"
            })
        );
    }

    #[test]
    fn verify_rejects_unknown_partner_and_duplicates() {
        let mut fields = pair_fields();
        fields[1].requirement = EitherOf("nope");
        let layout = Layout::new("PAIR", "pair", 7, fields);
        assert!(matches!(layout.verify(), Err(SchemaError::UnknownPartner { partner: "nope", .. })));

        let mut fields = pair_fields();
        fields[1].name = "code";
        let layout = Layout::new("PAIR", "pair", 7, fields);
        assert!(matches!(layout.verify(), Err(SchemaError::DuplicateField { field: "code", .. })));
    }

    #[test]
    fn write_rejects_mismatched_variant() {
        let fields = pair_fields();
        let mut p = Pair::default();
        let err = fields[1]
            .write(&mut p, TypedValue::Text("12".into()))
            .expect_err("text into integer");
        assert_eq!(err.kind, ErrorKind::SchemaMismatch);
        assert_eq!(p.amount, 0);

        fields[1].write(&mut p, TypedValue::Integer(12)).expect("integer");
        assert_eq!(fields[1].read(&p), TypedValue::Integer(12));
        fields[0].write(&mut p, TypedValue::Code("AB".into())).expect("code");
        assert_eq!(fields[0].read(&p), TypedValue::Code("AB".into()));
    }
}
