//! K3 segment: mortgage information.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const K3_SEGMENT_LENGTH: usize = 40;
pub const K3_IDENTIFIER: &str = "K3";

/// K3 segment (40 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct K3Segment {
    pub segment_identifier: String,
    /// 00 not applicable, 01 Fannie Mae, 02 Freddie Mac, 03 Ginnie Mae, 04 other.
    pub agency_identifier: i64,
    /// Agency loan number, required for Fannie Mae and Freddie Mac loans.
    pub account_number: String,
    /// Mortgage Identification Number (MERS).
    pub mortgage_identification_number: String,
}

type F = FieldSpec<K3Segment>;

static LAYOUT: Lazy<Layout<K3Segment>> = Lazy::new(|| {
    Layout::new(
        K3_IDENTIFIER,
        "K3 Segment - Mortgage Information",
        K3_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, K3_IDENTIFIER)),
            F::numeric("agency_identifier", 2, 2, Optional, |s| s.agency_identifier, |s, v| {
                s.agency_identifier = v
            })
            .with_rule(K3Segment::validate_agency_identifier),
            F::text("account_number", 4, 18, Optional, |s| s.account_number.clone(), |s, v| s.account_number = v)
                .with_rule(K3Segment::validate_account_number),
            F::text(
                "mortgage_identification_number",
                22,
                18,
                Optional,
                |s| s.mortgage_identification_number.clone(),
                |s, v| s.mortgage_identification_number = v,
            ),
        ],
    )
});

impl K3Segment {
    pub fn new() -> Self {
        K3Segment {
            segment_identifier: K3_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_agency_identifier(&self) -> Result<(), Fault> {
        codes::number_one_of(self.agency_identifier, codes::AGENCY_IDENTIFIERS, "agency identifier")
    }

    pub fn validate_account_number(&self) -> Result<(), Fault> {
        if matches!(self.agency_identifier, 1 | 2) && self.account_number.trim().is_empty() {
            return Err(Fault::invalid_value(format!(
                "agency identifier {:02} requires the agency account number",
                self.agency_identifier
            )));
        }
        Ok(())
    }
}

impl Segment for K3Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
