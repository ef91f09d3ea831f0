//! Period aggregation
//!
//! Reduces the full entry list, restricted to a billing period, into
//! per-store and per-group totals. Totals are recomputed from scratch on
//! every pass; nothing is cached between calls, so repeated aggregation of
//! the same inputs always yields the same result.

use std::collections::BTreeMap;

use crate::models::{BillingPeriod, CategoryConfig, CategoryGroup, Money, SpendEntry};

/// Per-store and per-group totals over one billing period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotals {
    /// Store -> summed amount, sorted by store name
    pub store_totals: BTreeMap<String, Money>,
    /// Group -> summed amount, one slot per configured group in configured
    /// order, zero when nothing matched
    pub group_totals: Vec<(CategoryGroup, Money)>,
}

impl PeriodTotals {
    /// Total for one group (zero when the group is not configured)
    pub fn group_total(&self, group: CategoryGroup) -> Money {
        self.group_totals
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, total)| *total)
            .unwrap_or_else(Money::zero)
    }

    /// Sum across all group totals.
    ///
    /// A store in two groups counts toward both, so this can exceed the sum
    /// of store totals.
    pub fn overall_group_total(&self) -> Money {
        self.group_totals.iter().map(|(_, total)| *total).sum()
    }
}

/// Aggregate entries falling inside `period` into per-store and per-group
/// totals.
///
/// Pure function of its inputs: entries outside the period contribute
/// nothing, boundary dates are included, and every configured group appears
/// in the output even at zero.
pub fn aggregate(
    entries: &[SpendEntry],
    period: &BillingPeriod,
    config: &CategoryConfig,
) -> PeriodTotals {
    let mut store_totals: BTreeMap<String, Money> = BTreeMap::new();
    let mut group_totals: Vec<(CategoryGroup, Money)> =
        config.groups().map(|group| (group, Money::zero())).collect();

    for entry in entries.iter().filter(|e| period.contains(e.date)) {
        *store_totals
            .entry(entry.store.clone())
            .or_insert_with(Money::zero) += entry.amount;

        for (group, total) in group_totals.iter_mut() {
            if config.is_member(*group, &entry.store) {
                *total += entry.amount;
            }
        }
    }

    PeriodTotals {
        store_totals,
        group_totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(store: &str, rands: i64, d: NaiveDate) -> SpendEntry {
        SpendEntry::new(store, Money::from_rands(rands), d)
    }

    fn march_period() -> BillingPeriod {
        BillingPeriod::containing(date(2024, 3, 12))
    }

    #[test]
    fn test_end_to_end_example() {
        let entries = vec![
            entry("Pick n Pay", 1000, date(2024, 3, 1)),
            entry("Sasol", 3500, date(2024, 3, 10)),
            entry("Dischem", 200, date(2024, 2, 20)),
        ];
        let config = CategoryConfig::default();

        let totals = aggregate(&entries, &march_period(), &config);

        assert_eq!(
            totals.store_totals.get("Pick n Pay"),
            Some(&Money::from_rands(1000))
        );
        assert_eq!(totals.store_totals.get("Sasol"), Some(&Money::from_rands(3500)));
        assert_eq!(
            totals.store_totals.get("Dischem"),
            Some(&Money::from_rands(200))
        );
        assert_eq!(
            totals.group_total(CategoryGroup::Groceries),
            Money::from_rands(1000)
        );
        assert_eq!(
            totals.group_total(CategoryGroup::ChildHealth),
            Money::from_rands(200)
        );
        assert_eq!(totals.group_total(CategoryGroup::Fuel), Money::from_rands(3500));
    }

    #[test]
    fn test_entries_outside_period_contribute_nothing() {
        let entries = vec![
            entry("Sasol", 500, date(2024, 2, 15)), // day before period start
            entry("Sasol", 700, date(2024, 3, 16)), // day after period end
        ];
        let totals = aggregate(&entries, &march_period(), &CategoryConfig::default());

        assert!(totals.store_totals.is_empty());
        assert_eq!(totals.group_total(CategoryGroup::Fuel), Money::zero());
    }

    #[test]
    fn test_boundary_dates_are_included() {
        let entries = vec![
            entry("Sasol", 100, date(2024, 2, 16)), // period start
            entry("Sasol", 200, date(2024, 3, 15)), // period end
        ];
        let totals = aggregate(&entries, &march_period(), &CategoryConfig::default());

        assert_eq!(totals.group_total(CategoryGroup::Fuel), Money::from_rands(300));
    }

    #[test]
    fn test_every_configured_group_present_even_at_zero() {
        let totals = aggregate(&[], &march_period(), &CategoryConfig::default());

        assert_eq!(totals.group_totals.len(), 3);
        for (_, total) in &totals.group_totals {
            assert_eq!(*total, Money::zero());
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entries = vec![
            entry("Pick n Pay", 1000, date(2024, 3, 1)),
            entry("Sasol", 3500, date(2024, 3, 10)),
        ];
        let config = CategoryConfig::default();

        let first = aggregate(&entries, &march_period(), &config);
        let second = aggregate(&entries, &march_period(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_multi_group_store_counts_fully_in_each_group() {
        let config = CategoryConfig::new(
            vec![
                (CategoryGroup::Groceries, vec!["Woolworths".into()]),
                (CategoryGroup::ChildHealth, vec!["Woolworths".into()]),
            ],
            HashMap::new(),
        );
        let entries = vec![entry("Woolworths", 250, date(2024, 3, 1))];

        let totals = aggregate(&entries, &march_period(), &config);

        assert_eq!(
            totals.group_total(CategoryGroup::Groceries),
            Money::from_rands(250)
        );
        assert_eq!(
            totals.group_total(CategoryGroup::ChildHealth),
            Money::from_rands(250)
        );
        // Group totals double-count; store totals do not.
        assert_eq!(totals.overall_group_total(), Money::from_rands(500));
        assert_eq!(
            totals.store_totals.get("Woolworths"),
            Some(&Money::from_rands(250))
        );
    }

    #[test]
    fn test_unclassified_store_only_in_store_totals() {
        let entries = vec![entry("Corner Cafe", 80, date(2024, 3, 1))];
        let totals = aggregate(&entries, &march_period(), &CategoryConfig::default());

        assert_eq!(
            totals.store_totals.get("Corner Cafe"),
            Some(&Money::from_rands(80))
        );
        assert_eq!(totals.overall_group_total(), Money::zero());
    }
}
