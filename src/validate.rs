//! Two-phase record validation.
//!
//! 1. [`check_required`]: every `Required` field must hold a non-empty value, and every
//!    `EitherOf` field must be present unless its partner is.
//! 2. [`check_rules`]: each field's business rule, in table order.
//!
//! The first failure stops validation. Neither phase mutates the record.

use crate::coerce;
use crate::error::{ErrorKind, FieldError, Fault, RecordError};
use crate::layout::{FieldSpec, Layout, Requirement};

/// Run the structural pass then the business-rule pass.
pub fn validate<R>(layout: &Layout<R>, record: &R) -> Result<(), RecordError> {
    check_required(layout, record)?;
    check_rules(layout, record)?;
    Ok(())
}

/// Structural pass.
pub fn check_required<R>(layout: &Layout<R>, record: &R) -> Result<(), FieldError> {
    for f in &layout.fields {
        match f.requirement {
            Requirement::Optional => {}
            Requirement::Required => {
                if is_empty(f, record) {
                    return Err(Fault::new(ErrorKind::MissingRequired, "required field is empty")
                        .at(layout.name, f.name));
                }
            }
            Requirement::EitherOf(partner) => {
                let partner_empty = layout.field(partner).map_or(true, |p| is_empty(p, record));
                if partner_empty && is_empty(f, record) {
                    return Err(Fault::new(
                        ErrorKind::MissingRequired,
                        format!("neither {} nor {} is reported", f.name, partner),
                    )
                    .at(layout.name, f.name));
                }
            }
        }
    }
    Ok(())
}

/// Business-rule pass.
pub fn check_rules<R>(layout: &Layout<R>, record: &R) -> Result<(), FieldError> {
    for f in &layout.fields {
        if let Some(rule) = f.rule {
            rule(record).map_err(|e| e.at(layout.name, f.name))?;
        }
    }
    Ok(())
}

fn is_empty<R>(f: &FieldSpec<R>, record: &R) -> bool {
    coerce::is_absent(f.kind, &f.read(record), f.length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Requirement::*;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct Person {
        name: String,
        ssn: i64,
        birth: Option<NaiveDate>,
        code: String,
    }

    type F = FieldSpec<Person>;

    fn check_code(p: &Person) -> Result<(), Fault> {
        match p.code.as_str() {
            "" | "A" | "B" => Ok(()),
            other => Err(Fault::invalid_value(format!("{:?} not in set", other))),
        }
    }

    fn person_layout() -> Layout<Person> {
        Layout::new(
            "PERSON",
            "person",
            21,
            vec![
                F::text("name", 0, 3, Required, |p| p.name.clone(), |p, v| p.name = v),
                F::identifier("ssn", 3, 9, EitherOf("birth"), |p| p.ssn, |p, v| p.ssn = v),
                F::date("birth", 12, EitherOf("ssn"), |p| p.birth, |p, v| p.birth = v),
                F::code("code", 20, 1, Optional, |p| p.code.clone(), |p, v| p.code = v).with_rule(check_code),
            ],
        )
    }

    fn person() -> Person {
        Person {
            name: "BOB".into(),
            ssn: 123_456_789,
            birth: NaiveDate::from_ymd_opt(1980, 1, 15),
            code: "A".into(),
        }
    }

    #[test]
    fn valid_record_passes() {
        let layout = person_layout();
        assert!(layout.verify().is_ok());
        assert_eq!(validate(&layout, &person()), Ok(()));
    }

    #[test]
    fn required_blank_fails_structural_pass() {
        let layout = person_layout();
        let p = Person {
            name: "   ".into(),
            ..person()
        };
        let err = validate(&layout, &p).expect_err("blank name");
        assert_eq!(err.kind(), Some(ErrorKind::MissingRequired));
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn either_of_needs_one_side() {
        let layout = person_layout();
        let sentinel_only = Person {
            ssn: 999_999_999,
            birth: NaiveDate::from_ymd_opt(1980, 1, 15),
            ..person()
        };
        assert_eq!(validate(&layout, &sentinel_only), Ok(()));

        let birth_missing = Person { birth: None, ..person() };
        assert_eq!(validate(&layout, &birth_missing), Ok(()));

        let neither = Person {
            ssn: 999_999_999,
            birth: None,
            ..person()
        };
        let err = validate(&layout, &neither).expect_err("neither");
        assert_eq!(err.kind(), Some(ErrorKind::MissingRequired));
        assert_eq!(err.field(), Some("ssn"));
    }

    #[test]
    fn structural_pass_runs_before_rules() {
        let layout = person_layout();
        let p = Person {
            name: String::new(),
            code: "Z".into(),
            ..person()
        };
        let err = validate(&layout, &p).expect_err("both broken");
        assert_eq!(err.kind(), Some(ErrorKind::MissingRequired));
    }

    #[test]
    fn rule_failure_is_localized_and_repeatable() {
        let layout = person_layout();
        let p = Person {
            code: "Z".into(),
            ..person()
        };
        let first = validate(&layout, &p);
        let second = validate(&layout, &p);
        assert_eq!(first, second);
        let err = first.expect_err("bad code");
        assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
        assert_eq!(err.field(), Some("code"));
    }
}
