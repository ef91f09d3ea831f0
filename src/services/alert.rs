//! Threshold alerting
//!
//! Compares group totals against configured thresholds and emits one alert
//! per group whose spending strictly exceeds its limit. Alerts are derived
//! values, recomputed on every pass and never persisted.

use crate::models::{CategoryConfig, CategoryGroup, Money};

use super::aggregate::PeriodTotals;

/// One threshold breach for the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub group: CategoryGroup,
    pub current_total: Money,
    pub threshold: Money,
}

/// Evaluate group totals against thresholds.
///
/// Strictly-greater-than only: a total exactly at its threshold does not
/// alert. Groups without a configured threshold are skipped. Emission order
/// follows the group-totals order, which is the configured group order.
pub fn evaluate(totals: &PeriodTotals, config: &CategoryConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (group, total) in &totals.group_totals {
        if let Some(threshold) = config.threshold(*group) {
            if *total > threshold {
                alerts.push(Alert {
                    group: *group,
                    current_total: *total,
                    threshold,
                });
            }
        }
    }

    alerts
}
