//! Business logic layer
//!
//! The core pipeline lives here: raw entries pass through validation, get
//! aggregated over the current billing period, and the group totals are
//! checked against thresholds. Everything is a pure function over its
//! arguments; only the import service touches storage.

pub mod aggregate;
pub mod alert;
pub mod import;
pub mod validate;

pub use aggregate::{aggregate, PeriodTotals};
pub use alert::{evaluate, Alert};
pub use import::{ImportResult, ImportService};
