//! K1 segment: original creditor name.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const K1_SEGMENT_LENGTH: usize = 34;
pub const K1_IDENTIFIER: &str = "K1";

/// K1 segment (34 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct K1Segment {
    pub segment_identifier: String,
    /// Name of the company or entity that originally granted the credit.
    pub original_creditor_name: String,
    /// Kind of business of the original creditor (01-15).
    pub creditor_classification: i64,
}

type F = FieldSpec<K1Segment>;

static LAYOUT: Lazy<Layout<K1Segment>> = Lazy::new(|| {
    Layout::new(
        K1_IDENTIFIER,
        "K1 Segment - Original Creditor Name",
        K1_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, K1_IDENTIFIER)),
            F::text("original_creditor_name", 2, 30, Required, |s| s.original_creditor_name.clone(), |s, v| {
                s.original_creditor_name = v
            }),
            F::numeric("creditor_classification", 32, 2, Required, |s| s.creditor_classification, |s, v| {
                s.creditor_classification = v
            })
            .with_rule(K1Segment::validate_creditor_classification),
        ],
    )
});

impl K1Segment {
    pub fn new() -> Self {
        K1Segment {
            segment_identifier: K1_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_creditor_classification(&self) -> Result<(), Fault> {
        codes::number_one_of(
            self.creditor_classification,
            codes::CREDITOR_CLASSIFICATIONS,
            "creditor classification",
        )
    }
}

impl Segment for K1Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
