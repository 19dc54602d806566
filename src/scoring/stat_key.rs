use std::fmt;
use std::str::FromStr;

use crate::models::match_stats::StatCounts;

/// Closed set of statistic names a scoring rule can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    GoalsScored,
    ClearMisses,
    Assists,
    GoalsConceded,
    Saves,
    Concessions,
    FoulsCommitted,
    FoulsReceived,
    PenaltiesWon,
    PenaltiesConceded,
    PassesCompleted,
    PassesFailed,
    Steals,
    ShotsOnTarget,
    ShotsOffTarget,
    MinutesPlayed,
    YellowCards,
    RedCards,
}

impl StatKey {
    pub const ALL: [StatKey; 18] = [
        StatKey::GoalsScored,
        StatKey::ClearMisses,
        StatKey::Assists,
        StatKey::GoalsConceded,
        StatKey::Saves,
        StatKey::Concessions,
        StatKey::FoulsCommitted,
        StatKey::FoulsReceived,
        StatKey::PenaltiesWon,
        StatKey::PenaltiesConceded,
        StatKey::PassesCompleted,
        StatKey::PassesFailed,
        StatKey::Steals,
        StatKey::ShotsOnTarget,
        StatKey::ShotsOffTarget,
        StatKey::MinutesPlayed,
        StatKey::YellowCards,
        StatKey::RedCards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::GoalsScored => "goals_scored",
            StatKey::ClearMisses => "clear_misses",
            StatKey::Assists => "assists",
            StatKey::GoalsConceded => "goals_conceded",
            StatKey::Saves => "saves",
            StatKey::Concessions => "concessions",
            StatKey::FoulsCommitted => "fouls_committed",
            StatKey::FoulsReceived => "fouls_received",
            StatKey::PenaltiesWon => "penalties_won",
            StatKey::PenaltiesConceded => "penalties_conceded",
            StatKey::PassesCompleted => "passes_completed",
            StatKey::PassesFailed => "passes_failed",
            StatKey::Steals => "steals",
            StatKey::ShotsOnTarget => "shots_on_target",
            StatKey::ShotsOffTarget => "shots_off_target",
            StatKey::MinutesPlayed => "minutes_played",
            StatKey::YellowCards => "yellow_cards",
            StatKey::RedCards => "red_cards",
        }
    }

    /// Raw count of this statistic in a snapshot
    pub fn value_in(&self, counts: &StatCounts) -> i32 {
        match self {
            StatKey::GoalsScored => counts.goals_scored,
            StatKey::ClearMisses => counts.clear_misses,
            StatKey::Assists => counts.assists,
            StatKey::GoalsConceded => counts.goals_conceded,
            StatKey::Saves => counts.saves,
            StatKey::Concessions => counts.concessions,
            StatKey::FoulsCommitted => counts.fouls_committed,
            StatKey::FoulsReceived => counts.fouls_received,
            StatKey::PenaltiesWon => counts.penalties_won,
            StatKey::PenaltiesConceded => counts.penalties_conceded,
            StatKey::PassesCompleted => counts.passes_completed,
            StatKey::PassesFailed => counts.passes_failed,
            StatKey::Steals => counts.steals,
            StatKey::ShotsOnTarget => counts.shots_on_target,
            StatKey::ShotsOffTarget => counts.shots_off_target,
            StatKey::MinutesPlayed => counts.minutes_played,
            StatKey::YellowCards => counts.yellow_cards,
            StatKey::RedCards => counts.red_cards,
        }
    }

    /// Count for a rule's statistic name; names outside the known set count as 0
    pub fn resolve(stat_name: &str, counts: &StatCounts) -> i32 {
        stat_name
            .parse::<StatKey>()
            .map(|key| key.value_in(counts))
            .unwrap_or(0)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown statistic: {}", s))
    }
}
