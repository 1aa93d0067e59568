//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an account with a batch of score submissions.
///
/// This is a convenience method that creates an account with default values
/// and one submission per entry in `scores`, in order. Use the individual
/// factories if you need to customize usernames or submission timestamps.
///
/// # Arguments
/// - `db` - Database connection
/// - `scores` - Score values to submit for the new account
///
/// # Returns
/// - `Ok(account)` - The created account (submissions are persisted as a side effect)
/// - `Err(DbErr)` - Database error during creation
pub async fn create_account_with_scores(
    db: &DatabaseConnection,
    scores: &[i64],
) -> Result<entity::account::Model, DbErr> {
    let account = crate::factory::account::create_account(db).await?;

    for score in scores {
        crate::factory::score_submission::create_submission(db, account.uid, *score).await?;
    }

    Ok(account)
}
