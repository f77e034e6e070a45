//! Enumerated code sets and shared business-rule checks.

use crate::error::Fault;

/// Generation code: Junior, Senior, II through IX.
pub const GENERATION_CODES: &[&str] = &["J", "S", "2", "3", "4", "5", "6", "7", "8", "9"];

/// ECOA codes currently accepted (0, 4 and 6 are obsolete).
pub const ECOA_CODES: &[&str] = &["1", "2", "3", "5", "7", "T", "W", "X", "Z"];

pub const PORTFOLIO_TYPES: &[&str] = &["C", "I", "M", "O", "R"];

pub const ACCOUNT_TYPES: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "0A", "0C", "0F", "0G", "10", "11",
    "12", "13", "15", "17", "18", "19", "1A", "1B", "1C", "20", "25", "26", "29", "2A", "2C",
    "37", "3A", "43", "47", "48", "4D", "50", "5A", "5B", "65", "66", "67", "68", "69", "6A",
    "6B", "6D", "77", "7A", "7B", "89", "8A", "8B", "90", "91", "92", "93", "95", "9A", "9B",
];

pub const TERMS_FREQUENCIES: &[&str] = &["D", "P", "W", "B", "E", "M", "L", "Q", "T", "S", "Y"];

pub const ACCOUNT_STATUSES: &[&str] = &[
    "DA", "DF", "05", "11", "13", "61", "62", "63", "64", "65", "71", "78", "80", "82", "83",
    "84", "88", "89", "93", "94", "95", "96", "97",
];

/// Account statuses that are closed or paid and must carry a payment rating.
pub const STATUSES_NEEDING_RATING: &[&str] = &["13", "65", "88", "89", "94", "95"];

pub const PAYMENT_RATINGS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "G", "L"];

/// Characters allowed in the 24-month payment history profile.
pub const PAYMENT_HISTORY_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', 'B', 'D', 'E', 'G', 'H', 'J', 'K', 'L',
];

pub const COMPLIANCE_CONDITION_CODES: &[&str] = &[
    "XA", "XB", "XC", "XD", "XE", "XF", "XG", "XH", "XJ", "XR",
];

pub const INTEREST_TYPES: &[&str] = &["F", "V"];

pub const ADDRESS_INDICATORS: &[&str] = &["C", "Y", "N", "M", "S", "B", "U", "D", "P"];

pub const RESIDENCE_CODES: &[&str] = &["O", "R"];

/// USPS state, district, territory and military codes.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY", "AS", "FM", "GU", "MH", "MP", "PR", "PW", "VI", "AA",
    "AE", "AP",
];

/// K1 creditor classification codes.
pub const CREDITOR_CLASSIFICATIONS: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// K2 purchased/sold indicator: 1 purchased from, 2 sold to, 9 remove previously reported.
pub const PURCHASED_SOLD_INDICATORS: &[&str] = &["1", "2", "9"];

/// K3 agency identifier: not applicable, Fannie Mae, Freddie Mac, Ginnie Mae, other.
pub const AGENCY_IDENTIFIERS: &[i64] = &[0, 1, 2, 3, 4];

/// K4 specialized payment indicator: 01 balloon, 02 deferred.
pub const SPECIALIZED_PAYMENT_INDICATORS: &[i64] = &[1, 2];

/// L1 change indicator: account number, identification number, both.
pub const CHANGE_INDICATORS: &[i64] = &[1, 2, 3];

/// `value` must be a member of `set`.
pub fn one_of(value: &str, set: &[&str], what: &str) -> Result<(), Fault> {
    if set.contains(&value) {
        Ok(())
    } else {
        Err(Fault::invalid_value(format!("{:?} is not a valid {}", value, what)))
    }
}

/// `value` must be blank or a member of `set`.
pub fn blank_or_one_of(value: &str, set: &[&str], what: &str) -> Result<(), Fault> {
    if value.trim().is_empty() {
        return Ok(());
    }
    one_of(value, set, what)
}

pub fn number_one_of(value: i64, set: &[i64], what: &str) -> Result<(), Fault> {
    if set.contains(&value) {
        Ok(())
    } else {
        Err(Fault::invalid_value(format!("{} is not a valid {}", value, what)))
    }
}

/// Fixed segment or record identifier.
pub fn identifier(value: &str, expected: &str) -> Result<(), Fault> {
    if value == expected {
        Ok(())
    } else {
        Err(Fault::invalid_value(format!("expected {:?}, found {:?}", expected, value)))
    }
}

/// The record descriptor word of a fixed-length record is its width.
pub fn record_descriptor_word(value: i64, width: usize) -> Result<(), Fault> {
    if usize::try_from(value).map_or(false, |v| v == width) {
        Ok(())
    } else {
        Err(Fault::invalid_value(format!(
            "record descriptor word {:04} does not match record length {}",
            value, width
        )))
    }
}

/// A telephone number is either unreported (zero) or ten digits: a plausible area code
/// followed by a plausible exchange and line number (NANP, first digit 2-9 each).
pub fn telephone(number: i64) -> Result<(), Fault> {
    if number == 0 {
        return Ok(());
    }
    if !(2_000_000_000..=9_999_999_999).contains(&number) {
        return Err(Fault::invalid_value(format!(
            "{} is not an area code plus seven digit number",
            number
        )));
    }
    let exchange = (number / 10_000) % 1_000;
    if exchange < 200 {
        return Err(Fault::invalid_value(format!("{} has an implausible exchange {:03}", number, exchange)));
    }
    Ok(())
}

pub fn payment_history_profile(value: &str) -> Result<(), Fault> {
    match value.chars().find(|c| !PAYMENT_HISTORY_CHARS.contains(c)) {
        None => Ok(()),
        Some(c) => Err(Fault::invalid_value(format!(
            "{:?} is not a payment history code in {:?}",
            c, value
        ))),
    }
}
