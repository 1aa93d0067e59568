//! Account service for registration and login.
//!
//! This module provides the `AccountService` orchestrating the register and login
//! flows: input validation, password hashing and verification, account creation
//! with duplicate-username handling, and the login audit trail.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{account::AccountRepository, login_record::LoginRecordRepository},
    error::{auth::AuthError, AppError},
    model::account::{Account, CreateAccountParam, LoginParam, RegisterAccountParam},
    util::password,
};

const USERNAME_TAKEN: &str = "Username already exists.";

/// Service providing business logic for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for the register and login flows.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new player account.
    ///
    /// Validates that username and password are non-empty, checks for an existing
    /// account with the same username, hashes the password, and inserts the account.
    /// The existence check is only a fast path: under a registration race the
    /// database unique constraint is the arbiter, and the losing insert is surfaced
    /// as the same `Conflict` the fast path produces. A failed insert returns no uid
    /// and leaves no partial state.
    ///
    /// # Arguments
    /// - `param` - Requested username, nickname, and plaintext password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account with its server-assigned uid
    /// - `Err(AppError::BadRequest)` - Empty username or password
    /// - `Err(AppError::Conflict)` - Username already registered
    /// - `Err(AppError)` - Hashing or database error
    pub async fn register(&self, param: RegisterAccountParam) -> Result<Account, AppError> {
        if param.username.is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest("Invalid data.".to_string()));
        }

        let accounts = AccountRepository::new(self.db);

        if accounts.find_by_username(&param.username).await?.is_some() {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let password_hash = password::hash_password(&param.password)?;

        let created = accounts
            .create(CreateAccountParam {
                username: param.username,
                nickname: param.nickname,
                password_hash,
                registered_at: Utc::now(),
            })
            .await;

        match created {
            Ok(account) => Ok(account),
            Err(err) => match err.sql_err() {
                // Lost a registration race after the fast-path check passed.
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::Conflict(USERNAME_TAKEN.to_string()))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Logs a player in and records the login.
    ///
    /// Looks up the account by username (case-sensitive), verifies the presented
    /// password against the stored Argon2 hash, and appends one login record on
    /// success. A failed verification appends nothing.
    ///
    /// # Arguments
    /// - `param` - Username and plaintext password
    ///
    /// # Returns
    /// - `Ok(i32)` - Uid of the authenticated account
    /// - `Err(AppError::BadRequest)` - Empty username or password
    /// - `Err(AppError::AuthErr(UserNotFound))` - No account with that username
    /// - `Err(AppError::AuthErr(IncorrectPassword))` - Password mismatch
    /// - `Err(AppError)` - Database or hash-parsing error
    pub async fn login(&self, param: LoginParam) -> Result<i32, AppError> {
        if param.username.is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest("Invalid data.".to_string()));
        }

        let accounts = AccountRepository::new(self.db);

        let account = accounts
            .find_by_username(&param.username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !password::verify_password(&param.password, &account.password_hash)? {
            return Err(AuthError::IncorrectPassword.into());
        }

        LoginRecordRepository::new(self.db)
            .append(account.uid, Utc::now())
            .await?;

        Ok(account.uid)
    }
}
