//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::account::create_account(&db).await?;
//!     let submission = factory::score_submission::create_submission(&db, account.uid, 100).await?;
//!
//!     // Create an account with a batch of submissions in one call
//!     let account = factory::helpers::create_account_with_scores(&db, &[10, 50, 30]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::account::AccountFactory;
//!
//! let account = AccountFactory::new(&db)
//!     .username("player_one")
//!     .nickname("Player One")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create account entities
//! - `score_submission` - Create score submission entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod helpers;
pub mod score_submission;

// Re-export commonly used factory functions for concise usage
pub use account::create_account;
pub use score_submission::{create_submission, create_submission_at};
