//! Base segment: one consumer account, with the primary consumer's identity and address.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const BASE_SEGMENT_LENGTH: usize = 426;

/// Base segment (426 characters). Amounts are whole dollars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseSegment {
    /// Record descriptor word: the record length, `0426`.
    pub record_descriptor_word: i64,
    /// Constant `1`.
    pub processing_indicator: i64,
    /// Date and time of the last update to the account.
    pub time_stamp: Option<NaiveDateTime>,
    pub reserved: String,
    /// Assigned by each credit bureau to identify the furnisher.
    pub identification_number: String,
    pub cycle_identifier: String,
    pub consumer_account_number: String,
    pub portfolio_type: String,
    pub account_type: String,
    pub date_opened: Option<NaiveDate>,
    pub credit_limit: i64,
    pub highest_credit: i64,
    /// Number of payments, or `LOC`/`REV` style text.
    pub terms_duration: String,
    pub terms_frequency: String,
    pub scheduled_monthly_payment_amount: i64,
    pub actual_payment_amount: i64,
    pub account_status: String,
    pub payment_rating: String,
    /// 24 months, most recent first.
    pub payment_history_profile: String,
    pub special_comment: String,
    pub compliance_condition_code: String,
    pub current_balance: i64,
    pub amount_past_due: i64,
    pub original_charge_off_amount: i64,
    pub date_account_information: Option<NaiveDate>,
    /// FCRA compliance date / date of first delinquency.
    pub date_first_delinquency: Option<NaiveDate>,
    pub date_closed: Option<NaiveDate>,
    pub date_last_payment: Option<NaiveDate>,
    pub interest_type_indicator: String,
    pub reserved2: String,
    pub surname: String,
    pub first_name: String,
    pub middle_name: String,
    pub generation_code: String,
    pub social_security_number: i64,
    pub date_birth: Option<NaiveDate>,
    pub telephone_number: i64,
    pub ecoa_code: String,
    pub consumer_information_indicator: String,
    pub country_code: String,
    pub first_line_address: String,
    pub second_line_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub address_indicator: String,
    pub residence_code: String,
}

type F = FieldSpec<BaseSegment>;

static LAYOUT: Lazy<Layout<BaseSegment>> = Lazy::new(|| {
    Layout::new(
        "BASE",
        "Base Segment",
        BASE_SEGMENT_LENGTH,
        vec![
            F::numeric("record_descriptor_word", 0, 4, Required, |b| b.record_descriptor_word, |b, v| {
                b.record_descriptor_word = v
            })
            .with_rule(|b| codes::record_descriptor_word(b.record_descriptor_word, BASE_SEGMENT_LENGTH)),
            F::numeric("processing_indicator", 4, 1, Required, |b| b.processing_indicator, |b, v| {
                b.processing_indicator = v
            })
            .with_rule(BaseSegment::validate_processing_indicator),
            F::timestamp("time_stamp", 5, Required, |b| b.time_stamp, |b, v| b.time_stamp = v),
            F::text("reserved", 19, 1, Optional, |b| b.reserved.clone(), |b, v| b.reserved = v),
            F::text("identification_number", 20, 20, Required, |b| b.identification_number.clone(), |b, v| {
                b.identification_number = v
            }),
            F::text("cycle_identifier", 40, 2, Optional, |b| b.cycle_identifier.clone(), |b, v| {
                b.cycle_identifier = v
            }),
            F::text(
                "consumer_account_number",
                42,
                30,
                Required,
                |b| b.consumer_account_number.clone(),
                |b, v| b.consumer_account_number = v,
            ),
            F::code("portfolio_type", 72, 1, Required, |b| b.portfolio_type.clone(), |b, v| b.portfolio_type = v)
                .with_rule(|b| codes::one_of(&b.portfolio_type, codes::PORTFOLIO_TYPES, "portfolio type")),
            F::code("account_type", 73, 2, Required, |b| b.account_type.clone(), |b, v| b.account_type = v)
                .with_rule(|b| codes::one_of(&b.account_type, codes::ACCOUNT_TYPES, "account type")),
            F::date("date_opened", 75, Required, |b| b.date_opened, |b, v| b.date_opened = v),
            F::numeric("credit_limit", 83, 9, Optional, |b| b.credit_limit, |b, v| b.credit_limit = v),
            F::numeric("highest_credit", 92, 9, Optional, |b| b.highest_credit, |b, v| b.highest_credit = v),
            F::text("terms_duration", 101, 3, Required, |b| b.terms_duration.clone(), |b, v| {
                b.terms_duration = v
            }),
            F::code("terms_frequency", 104, 1, Optional, |b| b.terms_frequency.clone(), |b, v| {
                b.terms_frequency = v
            })
            .with_rule(|b| codes::blank_or_one_of(&b.terms_frequency, codes::TERMS_FREQUENCIES, "terms frequency")),
            F::numeric(
                "scheduled_monthly_payment_amount",
                105,
                9,
                Optional,
                |b| b.scheduled_monthly_payment_amount,
                |b, v| b.scheduled_monthly_payment_amount = v,
            ),
            F::numeric("actual_payment_amount", 114, 9, Optional, |b| b.actual_payment_amount, |b, v| {
                b.actual_payment_amount = v
            }),
            F::code("account_status", 123, 2, Required, |b| b.account_status.clone(), |b, v| {
                b.account_status = v
            })
            .with_rule(|b| codes::one_of(&b.account_status, codes::ACCOUNT_STATUSES, "account status")),
            F::code("payment_rating", 125, 1, Optional, |b| b.payment_rating.clone(), |b, v| {
                b.payment_rating = v
            })
            .with_rule(BaseSegment::validate_payment_rating),
            F::text(
                "payment_history_profile",
                126,
                24,
                Required,
                |b| b.payment_history_profile.clone(),
                |b, v| b.payment_history_profile = v,
            )
            .with_rule(|b| codes::payment_history_profile(&b.payment_history_profile)),
            F::code("special_comment", 150, 2, Optional, |b| b.special_comment.clone(), |b, v| {
                b.special_comment = v
            }),
            F::code(
                "compliance_condition_code",
                152,
                2,
                Optional,
                |b| b.compliance_condition_code.clone(),
                |b, v| b.compliance_condition_code = v,
            )
            .with_rule(|b| {
                codes::blank_or_one_of(
                    &b.compliance_condition_code,
                    codes::COMPLIANCE_CONDITION_CODES,
                    "compliance condition code",
                )
            }),
            F::numeric("current_balance", 154, 9, Optional, |b| b.current_balance, |b, v| b.current_balance = v),
            F::numeric("amount_past_due", 163, 9, Optional, |b| b.amount_past_due, |b, v| b.amount_past_due = v),
            F::numeric(
                "original_charge_off_amount",
                172,
                9,
                Optional,
                |b| b.original_charge_off_amount,
                |b, v| b.original_charge_off_amount = v,
            ),
            F::date(
                "date_account_information",
                181,
                Required,
                |b| b.date_account_information,
                |b, v| b.date_account_information = v,
            ),
            F::date("date_first_delinquency", 189, Optional, |b| b.date_first_delinquency, |b, v| {
                b.date_first_delinquency = v
            }),
            F::date("date_closed", 197, Optional, |b| b.date_closed, |b, v| b.date_closed = v)
                .with_rule(BaseSegment::validate_date_closed),
            F::date("date_last_payment", 205, Optional, |b| b.date_last_payment, |b, v| b.date_last_payment = v),
            F::code(
                "interest_type_indicator",
                213,
                1,
                Optional,
                |b| b.interest_type_indicator.clone(),
                |b, v| b.interest_type_indicator = v,
            )
            .with_rule(|b| codes::blank_or_one_of(&b.interest_type_indicator, codes::INTEREST_TYPES, "interest type")),
            F::text("reserved2", 214, 17, Optional, |b| b.reserved2.clone(), |b, v| b.reserved2 = v),
            F::text("surname", 231, 25, Required, |b| b.surname.clone(), |b, v| b.surname = v),
            F::text("first_name", 256, 20, Required, |b| b.first_name.clone(), |b, v| b.first_name = v),
            F::text("middle_name", 276, 20, Optional, |b| b.middle_name.clone(), |b, v| b.middle_name = v),
            F::code("generation_code", 296, 1, Optional, |b| b.generation_code.clone(), |b, v| {
                b.generation_code = v
            })
            .with_rule(|b| codes::blank_or_one_of(&b.generation_code, codes::GENERATION_CODES, "generation code")),
            F::identifier(
                "social_security_number",
                297,
                9,
                EitherOf("date_birth"),
                |b| b.social_security_number,
                |b, v| b.social_security_number = v,
            ),
            F::date("date_birth", 306, EitherOf("social_security_number"), |b| b.date_birth, |b, v| {
                b.date_birth = v
            }),
            F::numeric("telephone_number", 314, 10, Optional, |b| b.telephone_number, |b, v| {
                b.telephone_number = v
            })
            .with_rule(|b| codes::telephone(b.telephone_number)),
            F::code("ecoa_code", 324, 1, Required, |b| b.ecoa_code.clone(), |b, v| b.ecoa_code = v)
                .with_rule(|b| codes::one_of(&b.ecoa_code, codes::ECOA_CODES, "ECOA code")),
            F::text(
                "consumer_information_indicator",
                325,
                2,
                Optional,
                |b| b.consumer_information_indicator.clone(),
                |b, v| b.consumer_information_indicator = v,
            ),
            F::text("country_code", 327, 2, Optional, |b| b.country_code.clone(), |b, v| b.country_code = v),
            F::text("first_line_address", 329, 32, Required, |b| b.first_line_address.clone(), |b, v| {
                b.first_line_address = v
            }),
            F::text("second_line_address", 361, 32, Optional, |b| b.second_line_address.clone(), |b, v| {
                b.second_line_address = v
            }),
            F::text("city", 393, 20, Required, |b| b.city.clone(), |b, v| b.city = v),
            F::code("state", 413, 2, Required, |b| b.state.clone(), |b, v| b.state = v)
                .with_rule(|b| codes::one_of(&b.state, codes::STATE_CODES, "state code")),
            F::text("zip_code", 415, 9, Required, |b| b.zip_code.clone(), |b, v| b.zip_code = v),
            F::code("address_indicator", 424, 1, Optional, |b| b.address_indicator.clone(), |b, v| {
                b.address_indicator = v
            })
            .with_rule(|b| {
                codes::blank_or_one_of(&b.address_indicator, codes::ADDRESS_INDICATORS, "address indicator")
            }),
            F::code("residence_code", 425, 1, Optional, |b| b.residence_code.clone(), |b, v| {
                b.residence_code = v
            })
            .with_rule(|b| codes::blank_or_one_of(&b.residence_code, codes::RESIDENCE_CODES, "residence code")),
        ],
    )
});

impl BaseSegment {
    pub fn new() -> Self {
        BaseSegment {
            record_descriptor_word: BASE_SEGMENT_LENGTH as i64,
            processing_indicator: 1,
            ..Default::default()
        }
    }

    pub fn validate_processing_indicator(&self) -> Result<(), Fault> {
        if self.processing_indicator == 1 {
            Ok(())
        } else {
            Err(Fault::invalid_value(format!(
                "processing indicator must be 1, found {}",
                self.processing_indicator
            )))
        }
    }

    /// Closed or paid statuses must report how the account was rated; other statuses
    /// leave the rating blank or use a valid rating.
    pub fn validate_payment_rating(&self) -> Result<(), Fault> {
        if codes::STATUSES_NEEDING_RATING.contains(&self.account_status.as_str()) {
            return codes::one_of(&self.payment_rating, codes::PAYMENT_RATINGS, "payment rating")
                .map_err(|e| Fault::invalid_value(format!("account status {}: {}", self.account_status, e.detail)));
        }
        codes::blank_or_one_of(&self.payment_rating, codes::PAYMENT_RATINGS, "payment rating")
    }

    pub fn validate_date_closed(&self) -> Result<(), Fault> {
        match (self.date_opened, self.date_closed) {
            (Some(opened), Some(closed)) if closed < opened => Err(Fault::invalid_value(format!(
                "date closed {} precedes date opened {}",
                closed, opened
            ))),
            _ => Ok(()),
        }
    }
}

impl Segment for BaseSegment {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
