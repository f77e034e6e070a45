//! J1 segment: associated consumer at the same address as the primary consumer.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const J1_SEGMENT_LENGTH: usize = 100;
pub const J1_IDENTIFIER: &str = "J1";

/// J1 segment (100 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct J1Segment {
    /// Constant `J1`.
    pub segment_identifier: String,
    pub reserved: String,
    /// Last name; multiple surnames are hyphenated (`SMITH-JONES`).
    pub surname: String,
    pub first_name: String,
    pub middle_name: String,
    /// Junior, Senior, II..IX; blank when not applicable.
    pub generation_code: String,
    /// Zero- or nine-filled when not available.
    pub social_security_number: i64,
    pub date_birth: Option<NaiveDate>,
    /// Area code plus seven digits, zero when not reported.
    pub telephone_number: i64,
    /// Relationship of the consumer to the account.
    pub ecoa_code: String,
    pub consumer_information_indicator: String,
    pub reserved2: String,
}

type F = FieldSpec<J1Segment>;

static LAYOUT: Lazy<Layout<J1Segment>> = Lazy::new(|| {
    Layout::new(
        J1_IDENTIFIER,
        "J1 Segment - Associated Consumer (Same Address)",
        J1_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, J1_IDENTIFIER)),
            F::text("reserved", 2, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
            F::text("surname", 3, 25, Required, |s| s.surname.clone(), |s, v| s.surname = v),
            F::text("first_name", 28, 20, Required, |s| s.first_name.clone(), |s, v| s.first_name = v),
            F::text("middle_name", 48, 20, Optional, |s| s.middle_name.clone(), |s, v| s.middle_name = v),
            F::code("generation_code", 68, 1, Optional, |s| s.generation_code.clone(), |s, v| {
                s.generation_code = v
            })
            .with_rule(J1Segment::validate_generation_code),
            F::identifier(
                "social_security_number",
                69,
                9,
                EitherOf("date_birth"),
                |s| s.social_security_number,
                |s, v| s.social_security_number = v,
            ),
            F::date("date_birth", 78, EitherOf("social_security_number"), |s| s.date_birth, |s, v| {
                s.date_birth = v
            }),
            F::numeric("telephone_number", 86, 10, Optional, |s| s.telephone_number, |s, v| {
                s.telephone_number = v
            })
            .with_rule(J1Segment::validate_telephone_number),
            F::code("ecoa_code", 96, 1, Required, |s| s.ecoa_code.clone(), |s, v| s.ecoa_code = v)
                .with_rule(J1Segment::validate_ecoa_code),
            F::text(
                "consumer_information_indicator",
                97,
                2,
                Optional,
                |s| s.consumer_information_indicator.clone(),
                |s, v| s.consumer_information_indicator = v,
            ),
            F::text("reserved2", 99, 1, Optional, |s| s.reserved2.clone(), |s, v| s.reserved2 = v),
        ],
    )
});

impl J1Segment {
    /// Empty segment with its identifier set.
    pub fn new() -> Self {
        J1Segment {
            segment_identifier: J1_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_generation_code(&self) -> Result<(), Fault> {
        codes::blank_or_one_of(&self.generation_code, codes::GENERATION_CODES, "generation code")
    }

    pub fn validate_telephone_number(&self) -> Result<(), Fault> {
        codes::telephone(self.telephone_number)
    }

    pub fn validate_ecoa_code(&self) -> Result<(), Fault> {
        codes::one_of(&self.ecoa_code, codes::ECOA_CODES, "ECOA code")
    }
}

impl Segment for J1Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
