use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::league::LeagueStanding;

/// Open a member's ledger row at 0. Existing rows are left untouched.
pub async fn init_user_league_score<'e, E>(executor: E, user_id: Uuid, league_id: Uuid) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO user_league_scores (user_id, league_id, score, updated_at)
        VALUES ($1, $2, 0, NOW())
        ON CONFLICT (user_id, league_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(league_id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Atomically add `delta` to a user's cumulative league score.
///
/// Single statement increment, so concurrent credits to the same user never
/// overwrite each other.
pub async fn add_to_user_league_score<'e, E>(
    executor: E,
    user_id: Uuid,
    league_id: Uuid,
    delta: f64,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO user_league_scores (user_id, league_id, score, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id, league_id) DO UPDATE SET
            score = user_league_scores.score + EXCLUDED.score,
            updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(league_id)
    .bind(delta)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_league_standings<'e, E>(executor: E, league_id: Uuid) -> Result<Vec<LeagueStanding>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, LeagueStanding>(
        r#"
        SELECT s.user_id, u.username, s.score
        FROM user_league_scores s
        JOIN users u ON u.id = s.user_id
        WHERE s.league_id = $1
        ORDER BY s.score DESC, u.username ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}
