//! Fixed-formula scoring: statistic keys, the role-partitioned rule table,
//! the points calculator and roster point propagation.

pub mod calculator;
pub mod propagation;
pub mod rule_table;
pub mod stat_key;

pub use calculator::{PointTotals, PointsCalculator};
pub use propagation::{credits_for_slots, ledger_changes, ScoreCredit};
pub use rule_table::RuleTable;
pub use stat_key::StatKey;
