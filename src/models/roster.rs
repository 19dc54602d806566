// src/models/roster.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::scoring::Role;

/// One position in a user's fantasy team for a league
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct RosterSlot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub league_id: Uuid,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub player_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignPlayerRequest {
    pub player_id: Uuid,
}
