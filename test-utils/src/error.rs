use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failure connecting to the in-memory database or executing schema setup.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
