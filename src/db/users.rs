use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::user::{User, UserRole, UserStatus};

const USER_COLUMNS: &str = "id, email, username, password_hash, role, status, created_at, updated_at";

pub async fn insert_user<'e, E>(
    executor: E,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Uuid, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let user_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, role, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        "#,
    )
    .bind(user_id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(UserRole::User.to_string())
    .bind(UserStatus::Active.to_string())
    .execute(executor)
    .await?;

    Ok(user_id)
}

pub async fn find_user_by_username<'e, E>(executor: E, username: &str) -> Result<Option<User>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS))
        .bind(username)
        .fetch_optional(executor)
        .await
}
