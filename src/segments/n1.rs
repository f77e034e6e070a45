//! N1 segment: employment.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const N1_SEGMENT_LENGTH: usize = 146;
pub const N1_IDENTIFIER: &str = "N1";

/// N1 segment (146 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct N1Segment {
    pub segment_identifier: String,
    pub employer_name: String,
    pub first_line_employer_address: String,
    pub second_line_employer_address: String,
    pub employer_city: String,
    pub employer_state: String,
    pub zip_code: String,
    pub occupation: String,
    pub reserved: String,
}

type F = FieldSpec<N1Segment>;

static LAYOUT: Lazy<Layout<N1Segment>> = Lazy::new(|| {
    Layout::new(
        N1_IDENTIFIER,
        "N1 Segment - Employment",
        N1_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, N1_IDENTIFIER)),
            F::text("employer_name", 2, 30, Required, |s| s.employer_name.clone(), |s, v| s.employer_name = v),
            F::text(
                "first_line_employer_address",
                32,
                32,
                Optional,
                |s| s.first_line_employer_address.clone(),
                |s, v| s.first_line_employer_address = v,
            ),
            F::text(
                "second_line_employer_address",
                64,
                32,
                Optional,
                |s| s.second_line_employer_address.clone(),
                |s, v| s.second_line_employer_address = v,
            ),
            F::text("employer_city", 96, 20, Optional, |s| s.employer_city.clone(), |s, v| s.employer_city = v),
            F::code("employer_state", 116, 2, Optional, |s| s.employer_state.clone(), |s, v| {
                s.employer_state = v
            })
            .with_rule(N1Segment::validate_employer_state),
            F::text("zip_code", 118, 9, Optional, |s| s.zip_code.clone(), |s, v| s.zip_code = v),
            F::text("occupation", 127, 18, Optional, |s| s.occupation.clone(), |s, v| s.occupation = v),
            F::text("reserved", 145, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
        ],
    )
});

impl N1Segment {
    pub fn new() -> Self {
        N1Segment {
            segment_identifier: N1_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_employer_state(&self) -> Result<(), Fault> {
        codes::blank_or_one_of(&self.employer_state, codes::STATE_CODES, "state code")
    }
}

impl Segment for N1Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
