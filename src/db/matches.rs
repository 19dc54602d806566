use chrono::{DateTime, Utc};
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::match_stats::Match;

pub async fn insert_match<'e, E>(
    executor: E,
    league_id: Uuid,
    name: &str,
    match_date: DateTime<Utc>,
) -> Result<Match, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (id, league_id, name, match_date, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, league_id, name, match_date, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(league_id)
    .bind(name)
    .bind(match_date)
    .fetch_one(executor)
    .await
}

pub async fn find_match_by_id<'e, E>(executor: E, match_id: Uuid) -> Result<Option<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        "SELECT id, league_id, name, match_date, created_at FROM matches WHERE id = $1",
    )
    .bind(match_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_matches_by_league<'e, E>(executor: E, league_id: Uuid) -> Result<Vec<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        SELECT id, league_id, name, match_date, created_at
        FROM matches
        WHERE league_id = $1
        ORDER BY match_date ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}
