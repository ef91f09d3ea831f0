//! Spend entry models
//!
//! [`SpendEntry`] is the validated, immutable record that enters aggregation;
//! [`RawEntry`] is the unvalidated shape coming off a boundary (CLI arguments
//! or a CSV row) before the validator has looked at it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// A single validated spending record. Never mutated after creation; removed
/// only by a full data clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendEntry {
    /// Store the money was spent at
    pub store: String,
    /// Amount spent
    pub amount: Money,
    /// Calendar date of the spend (no time component)
    pub date: NaiveDate,
}

impl SpendEntry {
    /// Create a new spend entry
    pub fn new(store: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            store: store.into(),
            amount,
            date,
        }
    }
}

/// An unvalidated entry as captured at a boundary. All fields are text; the
/// validator is the only path from here to a [`SpendEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub store: String,
    pub amount: String,
    /// Absent or empty means "today"
    pub date: Option<String>,
}

impl RawEntry {
    pub fn new(
        store: impl Into<String>,
        amount: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            store: store.into(),
            amount: amount.into(),
            date,
        }
    }
}
