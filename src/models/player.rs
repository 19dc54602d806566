// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::scoring::Role;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    /// Natural position; only decides which match total feeds `total_points`
    #[sqlx(try_from = "String")]
    pub position: Role,
    pub total_points: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub position: Role,
}
