//! Score submission factory for creating test submission entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a score submission for the given account at the current time.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Uid of the submitting account
/// - `score` - Score value to record
///
/// # Returns
/// - `Ok(Model)` - The inserted submission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_submission(
    db: &DatabaseConnection,
    user_id: i32,
    score: i64,
) -> Result<entity::score_submission::Model, DbErr> {
    create_submission_at(db, user_id, score, Utc::now()).await
}

/// Creates a score submission with an explicit submission timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Uid of the submitting account
/// - `score` - Score value to record
/// - `submitted_at` - Submission timestamp
///
/// # Returns
/// - `Ok(Model)` - The inserted submission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_submission_at(
    db: &DatabaseConnection,
    user_id: i32,
    score: i64,
    submitted_at: DateTime<Utc>,
) -> Result<entity::score_submission::Model, DbErr> {
    entity::score_submission::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        submitted_at: ActiveValue::Set(submitted_at),
        score: ActiveValue::Set(score),
        ..Default::default()
    }
    .insert(db)
    .await
}
