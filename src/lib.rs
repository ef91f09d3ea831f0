//! spendwatch - Household spend tracker with billing-period alerts
//!
//! Users log spending entries (store, amount, date); the tracker aggregates
//! them into category groups over a rolling 16th-to-15th billing period and
//! warns when a group's total strictly exceeds its configured threshold.
//! Entries can be bulk exported/imported as a flat `Store,Amount,Date` CSV.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: custom error types
//! - `models`: entries, money, category groups, the billing period
//! - `storage`: JSON file storage for the entry list
//! - `services`: validation, aggregation, alerting, CSV import
//! - `export`: CSV export
//! - `reports`: the period summary report
//! - `cli`: command handlers for the binary

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult, ValidationError};
