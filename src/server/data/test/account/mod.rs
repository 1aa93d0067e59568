use crate::server::{data::account::AccountRepository, model::account::CreateAccountParam};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_username;

/// Builds creation parameters with a fixed placeholder hash.
fn create_param(username: &str, nickname: &str) -> CreateAccountParam {
    CreateAccountParam {
        username: username.to_string(),
        nickname: nickname.to_string(),
        password_hash: "test-password-hash".to_string(),
        registered_at: Utc::now(),
    }
}
