// src/models/match_stats.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::scoring::stat_key::StatKey;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub match_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub name: String,
    pub match_date: DateTime<Utc>,
}

/// Raw event counts for one player in one match. Missing fields default to 0.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StatCounts {
    pub goals_scored: i32,
    pub clear_misses: i32,
    pub assists: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub concessions: i32,
    pub fouls_committed: i32,
    pub fouls_received: i32,
    pub penalties_won: i32,
    pub penalties_conceded: i32,
    pub passes_completed: i32,
    pub passes_failed: i32,
    pub steals: i32,
    pub shots_on_target: i32,
    pub shots_off_target: i32,
    pub minutes_played: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl StatCounts {
    /// Reject negative counts, naming every offending statistic.
    pub fn validate(&self) -> Result<(), AppError> {
        let negative: Vec<&str> = StatKey::ALL
            .iter()
            .filter(|key| key.value_in(self) < 0)
            .map(|key| key.as_str())
            .collect();

        if negative.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Statistic counts cannot be negative: {}",
                negative.join(", ")
            )))
        }
    }
}

/// Stored snapshot of a player's stats in a match with both derived totals
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerMatchStats {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub counts: StatCounts,
    pub total_field_points: f64,
    pub total_goalkeeper_points: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerMatchStatsResult {
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub total_field_points: f64,
    pub total_goalkeeper_points: f64,
    /// Number of users whose league score was credited by this update
    pub credited_users: usize,
}
