//! Reports

pub mod summary;

pub use summary::SummaryReport;
