//! Login record data repository.
//!
//! Login records are an append-only audit trail: one row per successful login,
//! never read back by any request flow.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Repository providing database operations for the login audit trail.
pub struct LoginRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginRecordRepository<'a> {
    /// Creates a new LoginRecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LoginRecordRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a login record for the given account.
    ///
    /// # Arguments
    /// - `uid` - Uid of the account that logged in
    /// - `logged_in_at` - Login timestamp
    ///
    /// # Returns
    /// - `Ok(())` - Record appended successfully
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(&self, uid: i32, logged_in_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::login_record::ActiveModel {
            uid: ActiveValue::Set(uid),
            logged_in_at: ActiveValue::Set(logged_in_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
