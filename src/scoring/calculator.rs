use serde::{Deserialize, Serialize};

use crate::models::match_stats::StatCounts;
use crate::models::scoring::Role;
use crate::scoring::rule_table::RuleTable;
use crate::scoring::stat_key::StatKey;

/// Both per-role totals for one snapshot. Always computed together so a player
/// can sit in either slot type without recomputation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct PointTotals {
    pub field: f64,
    pub goalkeeper: f64,
}

impl PointTotals {
    pub fn new(field: f64, goalkeeper: f64) -> Self {
        Self { field, goalkeeper }
    }

    pub fn for_role(&self, role: Role) -> f64 {
        match role {
            Role::Field => self.field,
            Role::Goalkeeper => self.goalkeeper,
        }
    }

    /// Change needed to move from `previous` to `self`
    pub fn delta_from(&self, previous: &PointTotals) -> PointTotals {
        PointTotals {
            field: self.field - previous.field,
            goalkeeper: self.goalkeeper - previous.goalkeeper,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.field == 0.0 && self.goalkeeper == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.field.is_finite() && self.goalkeeper.is_finite()
    }
}

pub struct PointsCalculator {
    rules: RuleTable,
}

impl PointsCalculator {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Weighted sum of the counts named by the rules for `role`.
    ///
    /// Counts are not checked for sign here; negative counts give negative
    /// contributions.
    pub fn calculate(&self, stats: &StatCounts, role: Role) -> f64 {
        self.rules
            .rules_for_role(role)
            .fold(0.0, |total, rule| {
                total + StatKey::resolve(&rule.stat_name, stats) as f64 * rule.points_per_unit
            })
    }

    pub fn totals(&self, stats: &StatCounts) -> PointTotals {
        PointTotals {
            field: self.calculate(stats, Role::Field),
            goalkeeper: self.calculate(stats, Role::Goalkeeper),
        }
    }
}
