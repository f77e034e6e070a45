//! K2 segment: purchased from / sold to.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const K2_SEGMENT_LENGTH: usize = 34;
pub const K2_IDENTIFIER: &str = "K2";

/// K2 segment (34 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct K2Segment {
    pub segment_identifier: String,
    /// 1 purchased from, 2 sold to, 9 remove previously reported K2.
    pub purchased_indicator: String,
    pub purchased_name: String,
    pub reserved: String,
}

type F = FieldSpec<K2Segment>;

static LAYOUT: Lazy<Layout<K2Segment>> = Lazy::new(|| {
    Layout::new(
        K2_IDENTIFIER,
        "K2 Segment - Purchased From/Sold To",
        K2_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, K2_IDENTIFIER)),
            F::code("purchased_indicator", 2, 1, Required, |s| s.purchased_indicator.clone(), |s, v| {
                s.purchased_indicator = v
            })
            .with_rule(K2Segment::validate_purchased_indicator),
            F::text("purchased_name", 3, 30, Optional, |s| s.purchased_name.clone(), |s, v| s.purchased_name = v)
                .with_rule(K2Segment::validate_purchased_name),
            F::text("reserved", 33, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
        ],
    )
});

impl K2Segment {
    pub fn new() -> Self {
        K2Segment {
            segment_identifier: K2_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_purchased_indicator(&self) -> Result<(), Fault> {
        codes::one_of(
            &self.purchased_indicator,
            codes::PURCHASED_SOLD_INDICATORS,
            "purchased/sold indicator",
        )
    }

    /// The name is required unless the segment removes a previously reported one.
    pub fn validate_purchased_name(&self) -> Result<(), Fault> {
        if self.purchased_indicator != "9" && self.purchased_name.trim().is_empty() {
            return Err(Fault::invalid_value(format!(
                "name is required with purchased/sold indicator {:?}",
                self.purchased_indicator
            )));
        }
        Ok(())
    }
}

impl Segment for K2Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
