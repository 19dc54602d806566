use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

use crate::models::roster::RosterSlot;
use crate::models::scoring::Role;

const SLOT_COLUMNS: &str = "id, user_id, league_id, role, player_id, created_at, updated_at";

/// Create a new member's empty roster: `field_slots` field slots then
/// `goalkeeper_slots` goalkeeper slots.
pub async fn create_slots_for_member(
    conn: &mut PgConnection,
    user_id: Uuid,
    league_id: Uuid,
    field_slots: u8,
    goalkeeper_slots: u8,
) -> Result<(), sqlx::Error> {
    let roles = std::iter::repeat(Role::Field)
        .take(field_slots as usize)
        .chain(std::iter::repeat(Role::Goalkeeper).take(goalkeeper_slots as usize));

    for role in roles {
        sqlx::query(
            r#"
            INSERT INTO roster_slots (id, user_id, league_id, role, player_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL, NOW(), NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(league_id)
        .bind(role.as_str())
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

pub async fn find_roster_slots_by_player_and_league<'e, E>(
    executor: E,
    player_id: Uuid,
    league_id: Uuid,
) -> Result<Vec<RosterSlot>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RosterSlot>(&format!(
        "SELECT {} FROM roster_slots WHERE player_id = $1 AND league_id = $2",
        SLOT_COLUMNS
    ))
    .bind(player_id)
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn find_slots_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
    league_id: Uuid,
) -> Result<Vec<RosterSlot>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RosterSlot>(&format!(
        "SELECT {} FROM roster_slots WHERE user_id = $1 AND league_id = $2 ORDER BY role ASC, created_at ASC, id ASC",
        SLOT_COLUMNS
    ))
    .bind(user_id)
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn find_slot_by_id<'e, E>(executor: E, slot_id: Uuid) -> Result<Option<RosterSlot>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RosterSlot>(&format!("SELECT {} FROM roster_slots WHERE id = $1", SLOT_COLUMNS))
        .bind(slot_id)
        .fetch_optional(executor)
        .await
}

/// Point a slot at a player. The slot keeps its id and role.
pub async fn assign_player_to_slot<'e, E>(
    executor: E,
    slot_id: Uuid,
    player_id: Uuid,
) -> Result<RosterSlot, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RosterSlot>(&format!(
        "UPDATE roster_slots SET player_id = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
        SLOT_COLUMNS
    ))
    .bind(slot_id)
    .bind(player_id)
    .fetch_one(executor)
    .await
}

pub async fn clear_slot<'e, E>(executor: E, slot_id: Uuid) -> Result<RosterSlot, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RosterSlot>(&format!(
        "UPDATE roster_slots SET player_id = NULL, updated_at = NOW() WHERE id = $1 RETURNING {}",
        SLOT_COLUMNS
    ))
    .bind(slot_id)
    .fetch_one(executor)
    .await
}
