use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::player::Player;
use crate::models::scoring::Role;

const PLAYER_COLUMNS: &str = "id, league_id, name, position, total_points, created_at";

pub async fn insert_player<'e, E>(
    executor: E,
    league_id: Uuid,
    name: &str,
    position: Role,
) -> Result<Player, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>(&format!(
        r#"
        INSERT INTO players (id, league_id, name, position, total_points, created_at)
        VALUES ($1, $2, $3, $4, 0, NOW())
        RETURNING {}
        "#,
        PLAYER_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(league_id)
    .bind(name)
    .bind(position.as_str())
    .fetch_one(executor)
    .await
}

pub async fn find_player_by_id<'e, E>(executor: E, player_id: Uuid) -> Result<Option<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>(&format!("SELECT {} FROM players WHERE id = $1", PLAYER_COLUMNS))
        .bind(player_id)
        .fetch_optional(executor)
        .await
}

/// Fetch a player and hold a row lock until the surrounding transaction ends.
/// Serializes concurrent stat updates for the same player.
pub async fn find_player_for_update<'e, E>(executor: E, player_id: Uuid) -> Result<Option<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>(&format!(
        "SELECT {} FROM players WHERE id = $1 FOR UPDATE",
        PLAYER_COLUMNS
    ))
    .bind(player_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_players_by_league<'e, E>(executor: E, league_id: Uuid) -> Result<Vec<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>(&format!(
        "SELECT {} FROM players WHERE league_id = $1 ORDER BY total_points DESC, name ASC",
        PLAYER_COLUMNS
    ))
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn add_to_total_points<'e, E>(executor: E, player_id: Uuid, delta: f64) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE players SET total_points = total_points + $2 WHERE id = $1")
        .bind(player_id)
        .bind(delta)
        .execute(executor)
        .await?;
    Ok(())
}
