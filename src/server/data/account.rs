//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records in the
//! database. It handles account creation and username lookup with conversion between
//! entity models and domain models at the infrastructure boundary. Username uniqueness
//! is enforced by the database constraint, not by this repository: a duplicate insert
//! surfaces as a unique-violation `DbErr` for the service layer to classify.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::account::{Account, CreateAccountParam};

/// Repository providing database operations for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating and querying account records.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account and returns it with its server-assigned uid.
    ///
    /// The password in `param` must already be hashed; this repository stores it
    /// verbatim. A duplicate username violates the unique constraint and returns
    /// the database error unmapped; the caller decides how to surface it.
    ///
    /// # Arguments
    /// - `param` - Account creation parameters with the hashed password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account including the new uid
    /// - `Err(DbErr)` - Database error during insert (including unique violation)
    pub async fn create(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            username: ActiveValue::Set(param.username),
            nickname: ActiveValue::Set(param.nickname),
            password_hash: ActiveValue::Set(param.password_hash),
            registered_at: ActiveValue::Set(param.registered_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its username.
    ///
    /// The match is a case-sensitive exact comparison, as the login contract
    /// requires.
    ///
    /// # Arguments
    /// - `username` - Login name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }
}
