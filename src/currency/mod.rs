//! Tenge amounts.
//!
//! Amounts are plain `i64` tenge inside the domain. Two textual forms
//! exist at the boundaries and nowhere else:
//!
//! - the stored document encoding `"<signed integer> ₸"` (e.g. `"3500 ₸"`,
//!   `"-250 ₸"`), kept byte-compatible with existing data;
//! - the grouped display form `"1 234 ₸"` / `"-1 234 ₸"` used for
//!   presentation only.

use crate::errors::StoreError;

pub const TENGE_SIGN: char = '₸';

/// Renders an amount in the stored document encoding.
pub fn encode_amount(amount: i64) -> String {
    format!("{} {}", amount, TENGE_SIGN)
}

/// Parses an amount from its stored encoding.
///
/// Tolerant of grouping and the currency sign: every character other than
/// digits and a leading minus is discarded before parsing, which matches
/// how the stored strings were read historically.
pub fn parse_amount(raw: &str) -> Result<i64, StoreError> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect();
    cleaned
        .parse::<i64>()
        .map_err(|_| StoreError::MalformedAmount(raw.to_string()))
}

/// Renders an amount for display, grouping thousands with spaces.
pub fn display_amount(amount: i64) -> String {
    let grouped = group_digits(&amount.unsigned_abs().to_string(), ' ');
    if amount < 0 {
        format!("-{} {}", grouped, TENGE_SIGN)
    } else {
        format!("{} {}", grouped, TENGE_SIGN)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Serde adapter keeping a numeric field wire-compatible with the stored
/// `"<signed integer> ₸"` encoding. Use via `#[serde(with = ...)]`.
pub mod encoded {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_amount(*amount))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_amount(&raw).map_err(de::Error::custom)
    }
}
