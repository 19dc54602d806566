// src/models/league.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub join_code: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl League {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinLeagueRequest {
    pub join_code: String,
}

impl fmt::Display for JoinLeagueRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "join_code: {}", self.join_code)
    }
}

/// One row of a league's leaderboard, read from the score ledger
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LeagueStanding {
    pub user_id: Uuid,
    pub username: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueStandingsResponse {
    pub league: League,
    pub standings: Vec<LeagueStanding>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueDetailsResponse {
    pub league: League,
    pub member_count: i64,
}
