//! Period summary report
//!
//! The one report the tracker produces: the current billing period, totals
//! per store and per group, and any threshold alerts. Derived fresh from the
//! full entry list on every call.

use chrono::NaiveDate;

use crate::models::{BillingPeriod, CategoryConfig, SpendEntry};
use crate::services::{aggregate, evaluate, Alert, PeriodTotals};

/// Spending summary for one billing period
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// The billing period the totals cover
    pub period: BillingPeriod,
    /// Per-store and per-group totals
    pub totals: PeriodTotals,
    /// Threshold breaches, in configured group order
    pub alerts: Vec<Alert>,
}

impl SummaryReport {
    /// Build the summary for the billing period containing `reference`
    pub fn generate(
        entries: &[SpendEntry],
        reference: NaiveDate,
        config: &CategoryConfig,
    ) -> Self {
        let period = BillingPeriod::containing(reference);
        let totals = aggregate(entries, &period, config);
        let alerts = evaluate(&totals, config);

        Self {
            period,
            totals,
            alerts,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Tracking Period: {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.totals.store_totals.is_empty() {
            output.push_str("No spending recorded this period.\n");
        } else {
            output.push_str("Store Totals:\n");
            for (store, total) in &self.totals.store_totals {
                output.push_str(&format!(
                    "  {:<30} {:>12}\n",
                    store,
                    total.format_with_symbol(currency)
                ));
            }
        }

        output.push_str(&format!(
            "\nGroup Totals ({}):\n",
            self.totals.overall_group_total().format_with_symbol(currency)
        ));
        for (group, total) in &self.totals.group_totals {
            output.push_str(&format!(
                "  {:<30} {:>12}\n",
                group.as_str(),
                total.format_with_symbol(currency)
            ));
        }

        for alert in &self.alerts {
            output.push_str(&format!(
                "\n⚠ {} spending exceeds {} (Current: {})\n",
                alert.group,
                alert.threshold.format_with_symbol(currency),
                alert.current_total.format_with_symbol(currency)
            ));
        }

        output
    }
}
