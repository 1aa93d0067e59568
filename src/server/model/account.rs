//! Account domain models and parameters.

use chrono::{DateTime, Utc};

/// A registered player account.
///
/// Accounts are created once at registration and never mutated afterwards.
/// The password hash is an Argon2id PHC string and never leaves the service
/// layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Server-assigned player id.
    pub uid: i32,
    /// Unique login name (matched case-sensitively).
    pub username: String,
    /// Display name shown on the leaderboard.
    pub nickname: String,
    /// Argon2id password hash in PHC string format.
    pub password_hash: String,
    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Account` - The converted account domain model
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            uid: entity.uid,
            username: entity.username,
            nickname: entity.nickname,
            password_hash: entity.password_hash,
            registered_at: entity.registered_at,
        }
    }
}

/// Parameters for creating a new account at registration.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    /// Unique login name.
    pub username: String,
    /// Display name shown on the leaderboard.
    pub nickname: String,
    /// Already-hashed password (PHC string); hashing happens in the service layer.
    pub password_hash: String,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Parameters for the register flow.
#[derive(Debug, Clone)]
pub struct RegisterAccountParam {
    /// Requested login name.
    pub username: String,
    /// Requested display name.
    pub nickname: String,
    /// Plaintext password from the request; hashed before storage.
    pub password: String,
}

/// Parameters for the login flow.
#[derive(Debug, Clone)]
pub struct LoginParam {
    /// Login name to look up.
    pub username: String,
    /// Plaintext password to verify.
    pub password: String,
}
