//! Small helpers shared by the query modules and services.
//!
//! # Usage
//!
//! ```ignore
//! let player = require_record(
//!     players::find_player_by_id(pool, player_id).await?,
//!     "Player not found",
//! )?;
//! ```

use crate::error::AppError;

/// Unwrap an optional record, turning `None` into `AppError::NotFound`.
pub fn require_record<T>(record: Option<T>, not_found_message: &str) -> Result<T, AppError> {
    record.ok_or_else(|| AppError::not_found(not_found_message))
}

/// Whether a sqlx error is a unique constraint violation.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}

/// Map a unique constraint violation onto `AppError::Conflict`, pass anything else through.
pub fn conflict_on_unique(error: sqlx::Error, conflict_message: &str) -> AppError {
    if is_unique_violation(&error) {
        AppError::Conflict(conflict_message.to_string())
    } else {
        AppError::Database(error)
    }
}
