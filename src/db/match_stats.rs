use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::match_stats::{PlayerMatchStats, StatCounts};
use crate::scoring::PointTotals;

const STATS_COLUMNS: &str = r#"
    id, match_id, player_id,
    goals_scored, clear_misses, assists, goals_conceded, saves, concessions,
    fouls_committed, fouls_received, penalties_won, penalties_conceded,
    passes_completed, passes_failed, steals, shots_on_target, shots_off_target,
    minutes_played, yellow_cards, red_cards,
    total_field_points, total_goalkeeper_points, created_at, updated_at
"#;

pub async fn find_player_match_stats<'e, E>(
    executor: E,
    match_id: Uuid,
    player_id: Uuid,
) -> Result<Option<PlayerMatchStats>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, PlayerMatchStats>(&format!(
        "SELECT {} FROM player_match_stats WHERE match_id = $1 AND player_id = $2",
        STATS_COLUMNS
    ))
    .bind(match_id)
    .bind(player_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_stats_by_match<'e, E>(executor: E, match_id: Uuid) -> Result<Vec<PlayerMatchStats>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, PlayerMatchStats>(&format!(
        "SELECT {} FROM player_match_stats WHERE match_id = $1 ORDER BY total_field_points DESC, player_id ASC",
        STATS_COLUMNS
    ))
    .bind(match_id)
    .fetch_all(executor)
    .await
}

/// Insert the snapshot for `(match_id, player_id)` or overwrite the existing one.
pub async fn upsert_player_match_stats<'e, E>(
    executor: E,
    match_id: Uuid,
    player_id: Uuid,
    counts: &StatCounts,
    totals: &PointTotals,
) -> Result<PlayerMatchStats, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, PlayerMatchStats>(&format!(
        r#"
        INSERT INTO player_match_stats (
            id, match_id, player_id,
            goals_scored, clear_misses, assists, goals_conceded, saves, concessions,
            fouls_committed, fouls_received, penalties_won, penalties_conceded,
            passes_completed, passes_failed, steals, shots_on_target, shots_off_target,
            minutes_played, yellow_cards, red_cards,
            total_field_points, total_goalkeeper_points, created_at, updated_at
        ) VALUES (
            $1, $2, $3,
            $4, $5, $6, $7, $8, $9,
            $10, $11, $12, $13,
            $14, $15, $16, $17, $18,
            $19, $20, $21,
            $22, $23, NOW(), NOW()
        )
        ON CONFLICT (match_id, player_id) DO UPDATE SET
            goals_scored = EXCLUDED.goals_scored,
            clear_misses = EXCLUDED.clear_misses,
            assists = EXCLUDED.assists,
            goals_conceded = EXCLUDED.goals_conceded,
            saves = EXCLUDED.saves,
            concessions = EXCLUDED.concessions,
            fouls_committed = EXCLUDED.fouls_committed,
            fouls_received = EXCLUDED.fouls_received,
            penalties_won = EXCLUDED.penalties_won,
            penalties_conceded = EXCLUDED.penalties_conceded,
            passes_completed = EXCLUDED.passes_completed,
            passes_failed = EXCLUDED.passes_failed,
            steals = EXCLUDED.steals,
            shots_on_target = EXCLUDED.shots_on_target,
            shots_off_target = EXCLUDED.shots_off_target,
            minutes_played = EXCLUDED.minutes_played,
            yellow_cards = EXCLUDED.yellow_cards,
            red_cards = EXCLUDED.red_cards,
            total_field_points = EXCLUDED.total_field_points,
            total_goalkeeper_points = EXCLUDED.total_goalkeeper_points,
            updated_at = NOW()
        RETURNING {}
        "#,
        STATS_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(player_id)
    .bind(counts.goals_scored)
    .bind(counts.clear_misses)
    .bind(counts.assists)
    .bind(counts.goals_conceded)
    .bind(counts.saves)
    .bind(counts.concessions)
    .bind(counts.fouls_committed)
    .bind(counts.fouls_received)
    .bind(counts.penalties_won)
    .bind(counts.penalties_conceded)
    .bind(counts.passes_completed)
    .bind(counts.passes_failed)
    .bind(counts.steals)
    .bind(counts.shots_on_target)
    .bind(counts.shots_off_target)
    .bind(counts.minutes_played)
    .bind(counts.yellow_cards)
    .bind(counts.red_cards)
    .bind(totals.field)
    .bind(totals.goalkeeper)
    .fetch_one(executor)
    .await
}
