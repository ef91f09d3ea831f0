//! Billing period representation
//!
//! Spending is tracked against a rolling monthly window anchored to the 16th
//! rather than the calendar month: the period containing any date runs from
//! the 16th of one month to the 15th of the next, both ends inclusive.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of month the billing period rolls over on
const ANCHOR_DAY: u32 = 16;

/// An inclusive 16th-to-15th billing window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    /// The billing period containing `reference`.
    ///
    /// Days 1-15 fall in the period that started on the 16th of the previous
    /// month; days 16 onward open a new period ending on the 15th of the next
    /// month. Year rollover (December to January) is handled by calendar
    /// arithmetic.
    pub fn containing(reference: NaiveDate) -> Self {
        let year = reference.year();
        let month = reference.month();

        let (start, end) = if reference.day() < ANCHOR_DAY {
            let (sy, sm) = month_before(year, month);
            (anchor_date(sy, sm, 16), anchor_date(year, month, 15))
        } else {
            let (ey, em) = month_after(year, month);
            (anchor_date(year, month, 16), anchor_date(ey, em, 15))
        };

        Self { start, end }
    }

    /// Check if a date falls within this period (boundaries inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

// Days 15 and 16 exist in every month, so this cannot fail for our anchors.
fn anchor_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid anchor date {}-{}-{}", year, month, day))
}
