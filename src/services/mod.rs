pub mod match_stats_service;
pub mod scoring_rule_service;

pub use match_stats_service::MatchStatsService;
pub use scoring_rule_service::ScoringRuleService;
