use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{conflict_on_unique, require_record};
use crate::db::{leagues, players, rosters};
use crate::error::AppError;
use crate::models::roster::RosterSlot;

/// Roster assembly: reading a member's slots and pointing them at players
pub struct RosterService {
    pool: PgPool,
}

impl RosterService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_roster(&self, league_id: Uuid, user_id: Uuid) -> Result<Vec<RosterSlot>, AppError> {
        if !leagues::is_member(&self.pool, league_id, user_id).await? {
            return Err(AppError::Forbidden("You are not a member of this league".to_string()));
        }
        Ok(rosters::find_slots_for_user(&self.pool, user_id, league_id).await?)
    }

    /// Put `player_id` into one of the caller's slots. The slot keeps its role.
    pub async fn assign_player(&self, user_id: Uuid, slot_id: Uuid, player_id: Uuid) -> Result<RosterSlot, AppError> {
        let mut tx = self.pool.begin().await?;

        let slot = self.owned_slot(&mut tx, user_id, slot_id).await?;
        let player = require_record(
            players::find_player_by_id(&mut *tx, player_id).await?,
            "Player not found",
        )?;

        if player.league_id != slot.league_id {
            return Err(AppError::validation("Player does not belong to this slot's league"));
        }

        if slot.player_id == Some(player_id) {
            return Ok(slot);
        }

        let updated = rosters::assign_player_to_slot(&mut *tx, slot_id, player_id)
            .await
            .map_err(|e| conflict_on_unique(e, "Player is already in your roster"))?;
        tx.commit().await?;

        tracing::info!("Slot {} ({}) now holds player {}", slot_id, updated.role, player_id);
        Ok(updated)
    }

    pub async fn clear_slot(&self, user_id: Uuid, slot_id: Uuid) -> Result<RosterSlot, AppError> {
        let mut tx = self.pool.begin().await?;
        self.owned_slot(&mut tx, user_id, slot_id).await?;
        let updated = rosters::clear_slot(&mut *tx, slot_id).await?;
        tx.commit().await?;

        tracing::info!("Slot {} cleared", slot_id);
        Ok(updated)
    }

    async fn owned_slot(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: Uuid,
        slot_id: Uuid,
    ) -> Result<RosterSlot, AppError> {
        let slot = require_record(
            rosters::find_slot_by_id(&mut **tx, slot_id).await?,
            "Roster slot not found",
        )?;
        if slot.user_id != user_id {
            return Err(AppError::Forbidden("This roster slot belongs to another user".to_string()));
        }
        Ok(slot)
    }
}
