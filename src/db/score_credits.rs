use sqlx::PgConnection;
use uuid::Uuid;

use crate::scoring::ScoreCredit;

/// Credits recorded for one player's stats in one match.
pub async fn find_credits_for_match_player(
    conn: &mut PgConnection,
    match_id: Uuid,
    player_id: Uuid,
) -> Result<Vec<ScoreCredit>, sqlx::Error> {
    sqlx::query_as::<_, ScoreCredit>(
        r#"
        SELECT user_id, league_id, points
        FROM match_score_credits
        WHERE match_id = $1 AND player_id = $2
        ORDER BY user_id ASC
        "#,
    )
    .bind(match_id)
    .bind(player_id)
    .fetch_all(&mut *conn)
    .await
}

/// Swap the recorded credits of `(match_id, player_id)` for `credits`.
pub async fn replace_credits_for_match_player(
    conn: &mut PgConnection,
    match_id: Uuid,
    player_id: Uuid,
    credits: &[ScoreCredit],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM match_score_credits WHERE match_id = $1 AND player_id = $2")
        .bind(match_id)
        .bind(player_id)
        .execute(&mut *conn)
        .await?;

    for credit in credits {
        sqlx::query(
            r#"
            INSERT INTO match_score_credits (match_id, player_id, user_id, league_id, points, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            "#,
        )
        .bind(match_id)
        .bind(player_id)
        .bind(credit.user_id)
        .bind(credit.league_id)
        .bind(credit.points)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
