pub mod helpers;
pub mod leagues;
pub mod match_stats;
pub mod matches;
pub mod players;
pub mod rosters;
pub mod score_credits;
pub mod scores;
pub mod scoring_rules;
pub mod users;
