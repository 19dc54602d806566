use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::league::League;

pub async fn insert_league<'e, E>(
    executor: E,
    name: &str,
    join_code: &str,
    owner_id: Uuid,
) -> Result<League, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, League>(
        r#"
        INSERT INTO leagues (id, name, join_code, owner_id, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, name, join_code, owner_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(join_code)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn find_league_by_id<'e, E>(executor: E, league_id: Uuid) -> Result<Option<League>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, League>(
        "SELECT id, name, join_code, owner_id, created_at FROM leagues WHERE id = $1",
    )
    .bind(league_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_league_by_join_code<'e, E>(executor: E, join_code: &str) -> Result<Option<League>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, League>(
        "SELECT id, name, join_code, owner_id, created_at FROM leagues WHERE join_code = $1",
    )
    .bind(join_code)
    .fetch_optional(executor)
    .await
}

pub async fn insert_member<'e, E>(executor: E, league_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO league_members (league_id, user_id, joined_at) VALUES ($1, $2, NOW())",
    )
    .bind(league_id)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn is_member<'e, E>(executor: E, league_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM league_members WHERE league_id = $1 AND user_id = $2)",
    )
    .bind(league_id)
    .bind(user_id)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}

pub async fn count_members<'e, E>(executor: E, league_id: Uuid) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM league_members WHERE league_id = $1")
        .bind(league_id)
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}
