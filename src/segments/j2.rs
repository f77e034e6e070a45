//! J2 segment: associated consumer at a different address from the primary consumer.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const J2_SEGMENT_LENGTH: usize = 200;
pub const J2_IDENTIFIER: &str = "J2";

/// J2 segment (200 characters): the J1 identity block followed by an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct J2Segment {
    pub segment_identifier: String,
    pub reserved: String,
    pub surname: String,
    pub first_name: String,
    pub middle_name: String,
    pub generation_code: String,
    pub social_security_number: i64,
    pub date_birth: Option<NaiveDate>,
    pub telephone_number: i64,
    pub ecoa_code: String,
    pub consumer_information_indicator: String,
    /// Blank or `US` for domestic addresses.
    pub country_code: String,
    pub first_line_address: String,
    pub second_line_address: String,
    pub city: String,
    pub state: String,
    /// Five- or nine-digit postal code, blank-filled on the right.
    pub zip_code: String,
    pub address_indicator: String,
    /// O owns, R rents.
    pub residence_code: String,
    pub reserved2: String,
}

type F = FieldSpec<J2Segment>;

static LAYOUT: Lazy<Layout<J2Segment>> = Lazy::new(|| {
    Layout::new(
        J2_IDENTIFIER,
        "J2 Segment - Associated Consumer (Different Address)",
        J2_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, J2_IDENTIFIER)),
            F::text("reserved", 2, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
            F::text("surname", 3, 25, Required, |s| s.surname.clone(), |s, v| s.surname = v),
            F::text("first_name", 28, 20, Required, |s| s.first_name.clone(), |s, v| s.first_name = v),
            F::text("middle_name", 48, 20, Optional, |s| s.middle_name.clone(), |s, v| s.middle_name = v),
            F::code("generation_code", 68, 1, Optional, |s| s.generation_code.clone(), |s, v| {
                s.generation_code = v
            })
            .with_rule(|s| codes::blank_or_one_of(&s.generation_code, codes::GENERATION_CODES, "generation code")),
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
            .with_rule(|s| codes::telephone(s.telephone_number)),
            F::code("ecoa_code", 96, 1, Required, |s| s.ecoa_code.clone(), |s, v| s.ecoa_code = v)
                .with_rule(|s| codes::one_of(&s.ecoa_code, codes::ECOA_CODES, "ECOA code")),
            F::text(
                "consumer_information_indicator",
                97,
                2,
                Optional,
                |s| s.consumer_information_indicator.clone(),
                |s, v| s.consumer_information_indicator = v,
            ),
            F::text("country_code", 99, 2, Optional, |s| s.country_code.clone(), |s, v| s.country_code = v),
            F::text("first_line_address", 101, 32, Required, |s| s.first_line_address.clone(), |s, v| {
                s.first_line_address = v
            }),
            F::text("second_line_address", 133, 32, Optional, |s| s.second_line_address.clone(), |s, v| {
                s.second_line_address = v
            }),
            F::text("city", 165, 20, Required, |s| s.city.clone(), |s, v| s.city = v),
            F::code("state", 185, 2, Required, |s| s.state.clone(), |s, v| s.state = v)
                .with_rule(J2Segment::validate_state),
            F::text("zip_code", 187, 9, Required, |s| s.zip_code.clone(), |s, v| s.zip_code = v),
            F::code("address_indicator", 196, 1, Optional, |s| s.address_indicator.clone(), |s, v| {
                s.address_indicator = v
            })
            .with_rule(J2Segment::validate_address_indicator),
            F::code("residence_code", 197, 1, Optional, |s| s.residence_code.clone(), |s, v| {
                s.residence_code = v
            })
            .with_rule(J2Segment::validate_residence_code),
            F::text("reserved2", 198, 2, Optional, |s| s.reserved2.clone(), |s, v| s.reserved2 = v),
        ],
    )
});

impl J2Segment {
    pub fn new() -> Self {
        J2Segment {
            segment_identifier: J2_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_state(&self) -> Result<(), Fault> {
        codes::one_of(&self.state, codes::STATE_CODES, "state code")
    }

    pub fn validate_address_indicator(&self) -> Result<(), Fault> {
        codes::blank_or_one_of(&self.address_indicator, codes::ADDRESS_INDICATORS, "address indicator")
    }

    pub fn validate_residence_code(&self) -> Result<(), Fault> {
        codes::blank_or_one_of(&self.residence_code, codes::RESIDENCE_CODES, "residence code")
    }
}

impl Segment for J2Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
