//! Entry validation
//!
//! Normalizes a [`RawEntry`] into a [`SpendEntry`] or reports which field is
//! bad. Nothing enters aggregation without passing through here, so bad input
//! surfaces as a typed error at the boundary instead of poisoning totals
//! downstream.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{Money, RawEntry, SpendEntry};

/// Date format accepted on entry input, and used everywhere dates are shown
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a raw entry, defaulting an absent date to the system date
pub fn validate(raw: &RawEntry) -> Result<SpendEntry, ValidationError> {
    validate_with_today(raw, Local::now().date_naive())
}

/// Validate a raw entry against an explicit "today" (test seam for the
/// date-defaulting rule).
///
/// Rules:
/// - store must be non-empty after trimming
/// - amount must parse as a non-negative decimal
/// - date, if absent or empty, defaults to `today`; otherwise must parse as
///   `YYYY-MM-DD`
pub fn validate_with_today(raw: &RawEntry, today: NaiveDate) -> Result<SpendEntry, ValidationError> {
    let store = raw.store.trim();
    if store.is_empty() {
        return Err(ValidationError::EmptyStore);
    }

    let amount = Money::parse(&raw.amount).map_err(|e| ValidationError::InvalidAmount {
        value: raw.amount.clone(),
        reason: e.to_string(),
    })?;

    let date = match raw.date.as_deref().map(str::trim) {
        None | Some("") => today,
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate { value: s.to_string() })?,
    };

    Ok(SpendEntry::new(store, amount, date))
}
