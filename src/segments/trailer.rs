//! Trailer record: file totals, used by the bureaus to reconcile what they received.

use super::codes;
use super::Segment;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const TRAILER_RECORD_LENGTH: usize = 426;
pub const TRAILER_IDENTIFIER: &str = "TRAILER";

/// Trailer record (426 characters). Every count is optional and zero when not tallied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailerRecord {
    /// Record descriptor word: the record length, `0426`.
    pub record_descriptor_word: i64,
    /// Constant `TRAILER`.
    pub record_identifier: String,
    /// Base segments in the file.
    pub total_base_records: i64,
    pub reserved: String,
    /// Base segments reporting status `DF` (deleted, fraud).
    pub total_status_code_df: i64,
    pub total_consumer_segments_j1: i64,
    pub total_consumer_segments_j2: i64,
    /// Blocks in the file; zero for unblocked files.
    pub block_count: i64,
    pub total_status_code_da: i64,
    pub total_status_code_05: i64,
    pub total_status_code_11: i64,
    pub total_status_code_13: i64,
    pub total_status_code_61: i64,
    pub total_status_code_62: i64,
    pub total_status_code_63: i64,
    pub total_status_code_64: i64,
    pub total_status_code_65: i64,
    pub total_status_code_71: i64,
    pub total_status_code_78: i64,
    pub total_status_code_80: i64,
    pub total_status_code_82: i64,
    pub total_status_code_83: i64,
    pub total_status_code_84: i64,
    pub total_status_code_88: i64,
    pub total_status_code_89: i64,
    pub total_status_code_93: i64,
    pub total_status_code_94: i64,
    pub total_status_code_95: i64,
    pub total_status_code_96: i64,
    pub total_status_code_97: i64,
    /// Base segments reporting ECOA code `Z` (delete consumer).
    pub total_ecoa_code_z: i64,
    /// N1 segments.
    pub total_employment_segments: i64,
    /// K1 segments.
    pub total_original_creditor_segments: i64,
    /// K2 segments.
    pub total_purchased_to_segments: i64,
    /// K3 segments.
    pub total_mortgage_information_segments: i64,
    /// K4 segments.
    pub total_specialized_payment_information_segments: i64,
    /// L1 segments.
    pub total_change_segments: i64,
    /// Social Security Numbers reported in base, J1 and J2 segments.
    pub total_social_numbers_all_segments: i64,
    pub total_social_numbers_base_segments: i64,
    pub total_social_numbers_j1_segments: i64,
    pub total_social_numbers_j2_segments: i64,
    pub total_dates_birth_all_segments: i64,
    pub total_dates_birth_base_segments: i64,
    pub total_dates_birth_j1_segments: i64,
    pub total_dates_birth_j2_segments: i64,
    pub total_telephone_numbers_all_segments: i64,
    pub reserved2: String,
}

type F = FieldSpec<TrailerRecord>;

static LAYOUT: Lazy<Layout<TrailerRecord>> = Lazy::new(|| {
    Layout::new(
        TRAILER_IDENTIFIER,
        "Trailer Record",
        TRAILER_RECORD_LENGTH,
        vec![
            F::numeric("record_descriptor_word", 0, 4, Required, |t| t.record_descriptor_word, |t, v| {
                t.record_descriptor_word = v
            })
            .with_rule(|t| codes::record_descriptor_word(t.record_descriptor_word, TRAILER_RECORD_LENGTH)),
            F::text("record_identifier", 4, 7, Required, |t| t.record_identifier.clone(), |t, v| {
                t.record_identifier = v
            })
            .with_rule(|t| codes::identifier(&t.record_identifier, TRAILER_IDENTIFIER)),
            F::numeric("total_base_records", 11, 9, Optional, |t| t.total_base_records, |t, v| {
                t.total_base_records = v
            }),
            F::text("reserved", 20, 9, Optional, |t| t.reserved.clone(), |t, v| t.reserved = v),
            F::numeric("total_status_code_df", 29, 9, Optional, |t| t.total_status_code_df, |t, v| {
                t.total_status_code_df = v
            }),
            F::numeric("total_consumer_segments_j1", 38, 9, Optional, |t| t.total_consumer_segments_j1, |t, v| {
                t.total_consumer_segments_j1 = v
            }),
            F::numeric("total_consumer_segments_j2", 47, 9, Optional, |t| t.total_consumer_segments_j2, |t, v| {
                t.total_consumer_segments_j2 = v
            }),
            F::numeric("block_count", 56, 9, Optional, |t| t.block_count, |t, v| t.block_count = v),
            F::numeric("total_status_code_da", 65, 9, Optional, |t| t.total_status_code_da, |t, v| {
                t.total_status_code_da = v
            }),
            F::numeric("total_status_code_05", 74, 9, Optional, |t| t.total_status_code_05, |t, v| {
                t.total_status_code_05 = v
            }),
            F::numeric("total_status_code_11", 83, 9, Optional, |t| t.total_status_code_11, |t, v| {
                t.total_status_code_11 = v
            }),
            F::numeric("total_status_code_13", 92, 9, Optional, |t| t.total_status_code_13, |t, v| {
                t.total_status_code_13 = v
            }),
            F::numeric("total_status_code_61", 101, 9, Optional, |t| t.total_status_code_61, |t, v| {
                t.total_status_code_61 = v
            }),
            F::numeric("total_status_code_62", 110, 9, Optional, |t| t.total_status_code_62, |t, v| {
                t.total_status_code_62 = v
            }),
            F::numeric("total_status_code_63", 119, 9, Optional, |t| t.total_status_code_63, |t, v| {
                t.total_status_code_63 = v
            }),
            F::numeric("total_status_code_64", 128, 9, Optional, |t| t.total_status_code_64, |t, v| {
                t.total_status_code_64 = v
            }),
            F::numeric("total_status_code_65", 137, 9, Optional, |t| t.total_status_code_65, |t, v| {
                t.total_status_code_65 = v
            }),
            F::numeric("total_status_code_71", 146, 9, Optional, |t| t.total_status_code_71, |t, v| {
                t.total_status_code_71 = v
            }),
            F::numeric("total_status_code_78", 155, 9, Optional, |t| t.total_status_code_78, |t, v| {
                t.total_status_code_78 = v
            }),
            F::numeric("total_status_code_80", 164, 9, Optional, |t| t.total_status_code_80, |t, v| {
                t.total_status_code_80 = v
            }),
            F::numeric("total_status_code_82", 173, 9, Optional, |t| t.total_status_code_82, |t, v| {
                t.total_status_code_82 = v
            }),
            F::numeric("total_status_code_83", 182, 9, Optional, |t| t.total_status_code_83, |t, v| {
                t.total_status_code_83 = v
            }),
            F::numeric("total_status_code_84", 191, 9, Optional, |t| t.total_status_code_84, |t, v| {
                t.total_status_code_84 = v
            }),
            F::numeric("total_status_code_88", 200, 9, Optional, |t| t.total_status_code_88, |t, v| {
                t.total_status_code_88 = v
            }),
            F::numeric("total_status_code_89", 209, 9, Optional, |t| t.total_status_code_89, |t, v| {
                t.total_status_code_89 = v
            }),
            F::numeric("total_status_code_93", 218, 9, Optional, |t| t.total_status_code_93, |t, v| {
                t.total_status_code_93 = v
            }),
            F::numeric("total_status_code_94", 227, 9, Optional, |t| t.total_status_code_94, |t, v| {
                t.total_status_code_94 = v
            }),
            F::numeric("total_status_code_95", 236, 9, Optional, |t| t.total_status_code_95, |t, v| {
                t.total_status_code_95 = v
            }),
            F::numeric("total_status_code_96", 245, 9, Optional, |t| t.total_status_code_96, |t, v| {
                t.total_status_code_96 = v
            }),
            F::numeric("total_status_code_97", 254, 9, Optional, |t| t.total_status_code_97, |t, v| {
                t.total_status_code_97 = v
            }),
            F::numeric("total_ecoa_code_z", 263, 9, Optional, |t| t.total_ecoa_code_z, |t, v| {
                t.total_ecoa_code_z = v
            }),
            F::numeric("total_employment_segments", 272, 9, Optional, |t| t.total_employment_segments, |t, v| {
                t.total_employment_segments = v
            }),
            F::numeric("total_original_creditor_segments", 281, 9, Optional, |t| t.total_original_creditor_segments, |t, v| {
                t.total_original_creditor_segments = v
            }),
            F::numeric("total_purchased_to_segments", 290, 9, Optional, |t| t.total_purchased_to_segments, |t, v| {
                t.total_purchased_to_segments = v
            }),
            F::numeric("total_mortgage_information_segments", 299, 9, Optional, |t| t.total_mortgage_information_segments, |t, v| {
                t.total_mortgage_information_segments = v
            }),
            F::numeric("total_specialized_payment_information_segments", 308, 9, Optional, |t| t.total_specialized_payment_information_segments, |t, v| {
                t.total_specialized_payment_information_segments = v
            }),
            F::numeric("total_change_segments", 317, 9, Optional, |t| t.total_change_segments, |t, v| {
                t.total_change_segments = v
            }),
            F::numeric("total_social_numbers_all_segments", 326, 9, Optional, |t| t.total_social_numbers_all_segments, |t, v| {
                t.total_social_numbers_all_segments = v
            }),
            F::numeric("total_social_numbers_base_segments", 335, 9, Optional, |t| t.total_social_numbers_base_segments, |t, v| {
                t.total_social_numbers_base_segments = v
            }),
            F::numeric("total_social_numbers_j1_segments", 344, 9, Optional, |t| t.total_social_numbers_j1_segments, |t, v| {
                t.total_social_numbers_j1_segments = v
            }),
            F::numeric("total_social_numbers_j2_segments", 353, 9, Optional, |t| t.total_social_numbers_j2_segments, |t, v| {
                t.total_social_numbers_j2_segments = v
            }),
            F::numeric("total_dates_birth_all_segments", 362, 9, Optional, |t| t.total_dates_birth_all_segments, |t, v| {
                t.total_dates_birth_all_segments = v
            }),
            F::numeric("total_dates_birth_base_segments", 371, 9, Optional, |t| t.total_dates_birth_base_segments, |t, v| {
                t.total_dates_birth_base_segments = v
            }),
            F::numeric("total_dates_birth_j1_segments", 380, 9, Optional, |t| t.total_dates_birth_j1_segments, |t, v| {
                t.total_dates_birth_j1_segments = v
            }),
            F::numeric("total_dates_birth_j2_segments", 389, 9, Optional, |t| t.total_dates_birth_j2_segments, |t, v| {
                t.total_dates_birth_j2_segments = v
            }),
            F::numeric("total_telephone_numbers_all_segments", 398, 9, Optional, |t| t.total_telephone_numbers_all_segments, |t, v| {
                t.total_telephone_numbers_all_segments = v
            }),
            F::text("reserved2", 407, 19, Optional, |t| t.reserved2.clone(), |t, v| t.reserved2 = v),
        ],
    )
});

impl TrailerRecord {
    pub fn new() -> Self {
        TrailerRecord {
            record_descriptor_word: TRAILER_RECORD_LENGTH as i64,
            record_identifier: TRAILER_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }
}

impl Segment for TrailerRecord {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
