//! Core data models for spendwatch
//!
//! This module contains the data structures that represent the spending
//! domain: entries, money, category groups, and the billing period.

pub mod category;
pub mod entry;
pub mod money;
pub mod period;

pub use category::{CategoryConfig, CategoryGroup};
pub use entry::{RawEntry, SpendEntry};
pub use money::Money;
pub use period::BillingPeriod;
