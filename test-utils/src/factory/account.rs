//! Account factory for creating test account entities.
//!
//! This module provides factory methods for creating account entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating account entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .username("player_one")
///     .nickname("Player One")
///     .password_hash("$argon2id$...")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    nickname: String,
    password_hash: String,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - username: `"player_{id}"` where id is auto-incremented
    /// - nickname: `"Player {id}"`
    /// - password_hash: a fixed placeholder string (not a valid Argon2 hash)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AccountFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("player_{}", id),
            nickname: format!("Player {}", id),
            password_hash: "test-password-hash".to_string(),
        }
    }

    /// Sets the username for the account.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the display nickname for the account.
    ///
    /// # Arguments
    /// - `nickname` - Display name shown on the leaderboard
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the stored password hash for the account.
    ///
    /// # Arguments
    /// - `password_hash` - Hash string to store verbatim
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Inserts the account into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted account entity with its assigned uid
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            username: ActiveValue::Set(self.username),
            nickname: ActiveValue::Set(self.nickname),
            password_hash: ActiveValue::Set(self.password_hash),
            registered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The inserted account entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
