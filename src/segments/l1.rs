//! L1 segment: consumer account number or identification number change.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const L1_SEGMENT_LENGTH: usize = 54;
pub const L1_IDENTIFIER: &str = "L1";

/// L1 segment (54 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct L1Segment {
    pub segment_identifier: String,
    /// 1 account number changed, 2 identification number changed, 3 both.
    pub change_indicator: i64,
    pub new_consumer_account_number: String,
    pub new_identification_number: String,
    pub reserved: String,
}

type F = FieldSpec<L1Segment>;

static LAYOUT: Lazy<Layout<L1Segment>> = Lazy::new(|| {
    Layout::new(
        L1_IDENTIFIER,
        "L1 Segment - Account Number/Identification Number Change",
        L1_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, L1_IDENTIFIER)),
            F::numeric("change_indicator", 2, 1, Required, |s| s.change_indicator, |s, v| s.change_indicator = v)
                .with_rule(L1Segment::validate_change_indicator),
            F::text(
                "new_consumer_account_number",
                3,
                30,
                Optional,
                |s| s.new_consumer_account_number.clone(),
                |s, v| s.new_consumer_account_number = v,
            )
            .with_rule(L1Segment::validate_new_consumer_account_number),
            F::text(
                "new_identification_number",
                33,
                20,
                Optional,
                |s| s.new_identification_number.clone(),
                |s, v| s.new_identification_number = v,
            )
            .with_rule(L1Segment::validate_new_identification_number),
            F::text("reserved", 53, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
        ],
    )
});

impl L1Segment {
    pub fn new() -> Self {
        L1Segment {
            segment_identifier: L1_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_change_indicator(&self) -> Result<(), Fault> {
        codes::number_one_of(self.change_indicator, codes::CHANGE_INDICATORS, "change indicator")
    }

    pub fn validate_new_consumer_account_number(&self) -> Result<(), Fault> {
        if matches!(self.change_indicator, 1 | 3) && self.new_consumer_account_number.trim().is_empty() {
            return Err(Fault::invalid_value(format!(
                "change indicator {} requires the new consumer account number",
                self.change_indicator
            )));
        }
        Ok(())
    }

    pub fn validate_new_identification_number(&self) -> Result<(), Fault> {
        if matches!(self.change_indicator, 2 | 3) && self.new_identification_number.trim().is_empty() {
            return Err(Fault::invalid_value(format!(
                "change indicator {} requires the new identification number",
                self.change_indicator
            )));
        }
        Ok(())
    }
}

impl Segment for L1Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
