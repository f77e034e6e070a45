//! K4 segment: specialized payment information (balloon or deferred payments).

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const K4_SEGMENT_LENGTH: usize = 30;
pub const K4_IDENTIFIER: &str = "K4";

const BALLOON: i64 = 1;
const DEFERRED: i64 = 2;

/// K4 segment (30 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct K4Segment {
    pub segment_identifier: String,
    /// 01 balloon payment, 02 deferred payment.
    pub specialized_payment_indicator: i64,
    pub deferred_payment_start_date: Option<NaiveDate>,
    pub balloon_payment_due_date: Option<NaiveDate>,
    /// Whole dollars.
    pub balloon_payment_amount: i64,
    pub reserved: String,
}

type F = FieldSpec<K4Segment>;

static LAYOUT: Lazy<Layout<K4Segment>> = Lazy::new(|| {
    Layout::new(
        K4_IDENTIFIER,
        "K4 Segment - Specialized Payment Information",
        K4_SEGMENT_LENGTH,
        vec![
            F::text("segment_identifier", 0, 2, Required, |s| s.segment_identifier.clone(), |s, v| {
                s.segment_identifier = v
            })
            .with_rule(|s| codes::identifier(&s.segment_identifier, K4_IDENTIFIER)),
            F::numeric(
                "specialized_payment_indicator",
                2,
                2,
                Required,
                |s| s.specialized_payment_indicator,
                |s, v| s.specialized_payment_indicator = v,
            )
            .with_rule(K4Segment::validate_specialized_payment_indicator),
            F::date(
                "deferred_payment_start_date",
                4,
                Optional,
                |s| s.deferred_payment_start_date,
                |s, v| s.deferred_payment_start_date = v,
            )
            .with_rule(K4Segment::validate_deferred_payment_start_date),
            F::date(
                "balloon_payment_due_date",
                12,
                Optional,
                |s| s.balloon_payment_due_date,
                |s, v| s.balloon_payment_due_date = v,
            )
            .with_rule(K4Segment::validate_balloon_payment_due_date),
            F::numeric("balloon_payment_amount", 20, 9, Optional, |s| s.balloon_payment_amount, |s, v| {
                s.balloon_payment_amount = v
            }),
            F::text("reserved", 29, 1, Optional, |s| s.reserved.clone(), |s, v| s.reserved = v),
        ],
    )
});

impl K4Segment {
    pub fn new() -> Self {
        K4Segment {
            segment_identifier: K4_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    pub fn validate_specialized_payment_indicator(&self) -> Result<(), Fault> {
        codes::number_one_of(
            self.specialized_payment_indicator,
            codes::SPECIALIZED_PAYMENT_INDICATORS,
            "specialized payment indicator",
        )
    }

    pub fn validate_deferred_payment_start_date(&self) -> Result<(), Fault> {
        if self.specialized_payment_indicator == DEFERRED && self.deferred_payment_start_date.is_none() {
            return Err(Fault::invalid_value("deferred payments need a start date"));
        }
        Ok(())
    }

    pub fn validate_balloon_payment_due_date(&self) -> Result<(), Fault> {
        if self.specialized_payment_indicator == BALLOON && self.balloon_payment_due_date.is_none() {
            return Err(Fault::invalid_value("balloon payments need a due date"));
        }
        Ok(())
    }
}

impl Segment for K4Segment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
