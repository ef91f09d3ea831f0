//! Category groups and their configuration
//!
//! A category group is a named set of stores whose combined spending is
//! tracked against a single threshold. The groups themselves are a fixed
//! enumeration so group handling is exhaustive at compile time; which stores
//! belong to each group, and each group's threshold, live in an explicit
//! [`CategoryConfig`] value passed to the aggregation and alerting code
//! rather than in process-wide globals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::Money;

/// A semantic spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryGroup {
    Groceries,
    ChildHealth,
    Fuel,
}

impl CategoryGroup {
    /// All groups, in display/reporting order
    pub const ALL: [CategoryGroup; 3] = [
        CategoryGroup::Groceries,
        CategoryGroup::ChildHealth,
        CategoryGroup::Fuel,
    ];

    /// Stable identifier used in reports and the settings file
    pub const fn as_str(&self) -> &'static str {
        match self {
            CategoryGroup::Groceries => "groceries",
            CategoryGroup::ChildHealth => "childHealth",
            CategoryGroup::Fuel => "fuel",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group membership and thresholds, passed explicitly to the aggregator and
/// alert evaluator.
///
/// Membership is not mutually exclusive: a store may belong to zero, one, or
/// several groups, and its spending counts fully toward each matching group.
/// A group without a configured threshold is tracked but never alerts.
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    /// Group -> member stores, in configured (reporting) order
    memberships: Vec<(CategoryGroup, Vec<String>)>,
    thresholds: HashMap<CategoryGroup, Money>,
}

impl CategoryConfig {
    /// Build a config from explicit membership and threshold tables
    pub fn new(
        memberships: Vec<(CategoryGroup, Vec<String>)>,
        thresholds: HashMap<CategoryGroup, Money>,
    ) -> Self {
        Self {
            memberships,
            thresholds,
        }
    }

    /// Configured groups, in a deterministic reporting order
    pub fn groups(&self) -> impl Iterator<Item = CategoryGroup> + '_ {
        self.memberships.iter().map(|(group, _)| *group)
    }

    /// Whether `store` belongs to `group`. Matching is exact and
    /// case-sensitive; "pick n pay" is not "Pick n Pay".
    pub fn is_member(&self, group: CategoryGroup, store: &str) -> bool {
        self.memberships
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, stores)| stores.iter().any(|s| s == store))
            .unwrap_or(false)
    }

    /// All groups a store belongs to, in configured order.
    ///
    /// A store found in no group still contributes to per-store totals; it
    /// just has no group rollup.
    pub fn groups_for(&self, store: &str) -> Vec<CategoryGroup> {
        self.memberships
            .iter()
            .filter(|(_, stores)| stores.iter().any(|s| s == store))
            .map(|(group, _)| *group)
            .collect()
    }

    /// The alert threshold for a group, if one is configured
    pub fn threshold(&self, group: CategoryGroup) -> Option<Money> {
        self.thresholds.get(&group).copied()
    }
}

impl Default for CategoryConfig {
    /// The built-in household configuration:
    /// groceries @ R4000, childHealth @ R3000, fuel @ R3000.
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();

        Self::new(
            vec![
                (
                    CategoryGroup::Groceries,
                    owned(&["Pick n Pay", "Woolworths", "Food Lovers Market"]),
                ),
                (CategoryGroup::ChildHealth, owned(&["Dischem", "Baby City"])),
                (CategoryGroup::Fuel, owned(&["Sasol"])),
            ],
            HashMap::from([
                (CategoryGroup::Groceries, Money::from_rands(4000)),
                (CategoryGroup::ChildHealth, Money::from_rands(3000)),
                (CategoryGroup::Fuel, Money::from_rands(3000)),
            ]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names() {
        assert_eq!(CategoryGroup::Groceries.as_str(), "groceries");
        assert_eq!(CategoryGroup::ChildHealth.to_string(), "childHealth");
    }

    #[test]
    fn test_default_membership() {
        let config = CategoryConfig::default();
        assert_eq!(
            config.groups_for("Pick n Pay"),
            vec![CategoryGroup::Groceries]
        );
        assert_eq!(config.groups_for("Sasol"), vec![CategoryGroup::Fuel]);
        assert!(config.groups_for("Unknown Store").is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let config = CategoryConfig::default();
        assert!(config.is_member(CategoryGroup::Groceries, "Woolworths"));
        assert!(!config.is_member(CategoryGroup::Groceries, "woolworths"));
        assert!(!config.is_member(CategoryGroup::Groceries, " Woolworths"));
    }

    #[test]
    fn test_store_in_multiple_groups() {
        let config = CategoryConfig::new(
            vec![
                (CategoryGroup::Groceries, vec!["Woolworths".into()]),
                (CategoryGroup::ChildHealth, vec!["Woolworths".into()]),
            ],
            HashMap::new(),
        );
        assert_eq!(
            config.groups_for("Woolworths"),
            vec![CategoryGroup::Groceries, CategoryGroup::ChildHealth]
        );
    }

    #[test]
    fn test_default_thresholds() {
        let config = CategoryConfig::default();
        assert_eq!(
            config.threshold(CategoryGroup::Groceries),
            Some(Money::from_rands(4000))
        );
        assert_eq!(
            config.threshold(CategoryGroup::Fuel),
            Some(Money::from_rands(3000))
        );
    }

    #[test]
    fn test_group_order_is_deterministic() {
        let config = CategoryConfig::default();
        let order: Vec<_> = config.groups().collect();
        assert_eq!(order, CategoryGroup::ALL.to_vec());
    }
}
