use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::scoring::{Role, ScoringRule};

pub async fn find_scoring_rules_by_role<'e, E>(executor: E, role: Role) -> Result<Vec<ScoringRule>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, ScoringRule>(
        r#"
        SELECT id, stat_name, points_per_unit, role, created_at
        FROM scoring_rules
        WHERE role = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(role.as_str())
    .fetch_all(executor)
    .await
}

pub async fn find_all_scoring_rules<'e, E>(executor: E) -> Result<Vec<ScoringRule>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, ScoringRule>(
        r#"
        SELECT id, stat_name, points_per_unit, role, created_at
        FROM scoring_rules
        ORDER BY role ASC, created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn insert_scoring_rule<'e, E>(
    executor: E,
    stat_name: &str,
    points_per_unit: f64,
    role: Role,
) -> Result<ScoringRule, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, ScoringRule>(
        r#"
        INSERT INTO scoring_rules (id, stat_name, points_per_unit, role, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, stat_name, points_per_unit, role, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(stat_name)
    .bind(points_per_unit)
    .bind(role.as_str())
    .fetch_one(executor)
    .await
}

/// Returns whether a rule was deleted.
pub async fn delete_scoring_rule<'e, E>(executor: E, rule_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM scoring_rules WHERE id = $1")
        .bind(rule_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
