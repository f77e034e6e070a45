//! Header record: identifies the data furnisher and the reporting period.

use super::codes;
use super::Segment;
use crate::error::Fault;
use crate::layout::{FieldSpec, Layout, Requirement::*};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const HEADER_RECORD_LENGTH: usize = 426;
pub const HEADER_IDENTIFIER: &str = "HEADER";

/// Header record (426 characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderRecord {
    /// Record descriptor word: the record length, `0426`.
    pub record_descriptor_word: i64,
    /// Constant `HEADER`.
    pub record_identifier: String,
    pub cycle_identifier: String,
    pub innovis_program_identifier: String,
    pub equifax_program_identifier: String,
    pub experian_program_identifier: String,
    pub transunion_program_identifier: String,
    /// Date the accounts were last updated.
    pub activity_date: Option<NaiveDate>,
    pub date_created: Option<NaiveDate>,
    pub program_date: Option<NaiveDate>,
    pub program_revision_date: Option<NaiveDate>,
    pub reporter_name: String,
    pub reporter_address: String,
    pub reporter_telephone_number: i64,
    pub software_vendor_name: String,
    pub software_version_number: String,
    pub prbc_program_identifier: String,
    pub reserved: String,
}

type F = FieldSpec<HeaderRecord>;

static LAYOUT: Lazy<Layout<HeaderRecord>> = Lazy::new(|| {
    Layout::new(
        "HEADER",
        "Header Record",
        HEADER_RECORD_LENGTH,
        vec![
            F::numeric("record_descriptor_word", 0, 4, Required, |h| h.record_descriptor_word, |h, v| {
                h.record_descriptor_word = v
            })
            .with_rule(|h| codes::record_descriptor_word(h.record_descriptor_word, HEADER_RECORD_LENGTH)),
            F::text("record_identifier", 4, 6, Required, |h| h.record_identifier.clone(), |h, v| {
                h.record_identifier = v
            })
            .with_rule(|h| codes::identifier(&h.record_identifier, HEADER_IDENTIFIER)),
            F::text("cycle_identifier", 10, 2, Optional, |h| h.cycle_identifier.clone(), |h, v| {
                h.cycle_identifier = v
            }),
            F::text(
                "innovis_program_identifier",
                12,
                10,
                Optional,
                |h| h.innovis_program_identifier.clone(),
                |h, v| h.innovis_program_identifier = v,
            )
            .with_rule(HeaderRecord::validate_program_identifiers),
            F::text(
                "equifax_program_identifier",
                22,
                10,
                Optional,
                |h| h.equifax_program_identifier.clone(),
                |h, v| h.equifax_program_identifier = v,
            ),
            F::text(
                "experian_program_identifier",
                32,
                5,
                Optional,
                |h| h.experian_program_identifier.clone(),
                |h, v| h.experian_program_identifier = v,
            ),
            F::text(
                "transunion_program_identifier",
                37,
                10,
                Optional,
                |h| h.transunion_program_identifier.clone(),
                |h, v| h.transunion_program_identifier = v,
            ),
            F::date("activity_date", 47, Required, |h| h.activity_date, |h, v| h.activity_date = v),
            F::date("date_created", 55, Required, |h| h.date_created, |h, v| h.date_created = v)
                .with_rule(HeaderRecord::validate_date_created),
            F::date("program_date", 63, Optional, |h| h.program_date, |h, v| h.program_date = v),
            F::date("program_revision_date", 71, Optional, |h| h.program_revision_date, |h, v| {
                h.program_revision_date = v
            }),
            F::text("reporter_name", 79, 40, Required, |h| h.reporter_name.clone(), |h, v| h.reporter_name = v),
            F::text("reporter_address", 119, 96, Required, |h| h.reporter_address.clone(), |h, v| {
                h.reporter_address = v
            }),
            F::numeric(
                "reporter_telephone_number",
                215,
                10,
                Optional,
                |h| h.reporter_telephone_number,
                |h, v| h.reporter_telephone_number = v,
            )
            .with_rule(|h| codes::telephone(h.reporter_telephone_number)),
            F::text("software_vendor_name", 225, 40, Optional, |h| h.software_vendor_name.clone(), |h, v| {
                h.software_vendor_name = v
            }),
            F::text(
                "software_version_number",
                265,
                5,
                Optional,
                |h| h.software_version_number.clone(),
                |h, v| h.software_version_number = v,
            ),
            F::text(
                "prbc_program_identifier",
                270,
                10,
                Optional,
                |h| h.prbc_program_identifier.clone(),
                |h, v| h.prbc_program_identifier = v,
            ),
            F::text("reserved", 280, 146, Optional, |h| h.reserved.clone(), |h, v| h.reserved = v),
        ],
    )
});

impl HeaderRecord {
    pub fn new() -> Self {
        HeaderRecord {
            record_descriptor_word: HEADER_RECORD_LENGTH as i64,
            record_identifier: HEADER_IDENTIFIER.to_string(),
            ..Default::default()
        }
    }

    /// At least one credit bureau program identifier must be reported.
    pub fn validate_program_identifiers(&self) -> Result<(), Fault> {
        let any = [
            &self.innovis_program_identifier,
            &self.equifax_program_identifier,
            &self.experian_program_identifier,
            &self.transunion_program_identifier,
        ]
        .iter()
        .any(|id| !id.trim().is_empty());
        if any {
            Ok(())
        } else {
            Err(Fault::invalid_value("no credit bureau program identifier is reported"))
        }
    }

    /// The file cannot be created before the activity it reports.
    pub fn validate_date_created(&self) -> Result<(), Fault> {
        match (self.activity_date, self.date_created) {
            (Some(activity), Some(created)) if created < activity => Err(Fault::invalid_value(format!(
                "date created {} precedes activity date {}",
                created, activity
            ))),
            _ => Ok(()),
        }
    }
}

impl Segment for HeaderRecord {
    fn layout() -> &'static Layout<Self> {
        &LAYOUT
    }
}
