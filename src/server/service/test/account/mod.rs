use crate::server::{
    error::{auth::AuthError, AppError},
    model::account::{LoginParam, RegisterAccountParam},
    service::account::AccountService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod login;
mod register;

/// Builds registration parameters from plain strings.
fn register_param(username: &str, nickname: &str, password: &str) -> RegisterAccountParam {
    RegisterAccountParam {
        username: username.to_string(),
        nickname: nickname.to_string(),
        password: password.to_string(),
    }
}

/// Builds login parameters from plain strings.
fn login_param(username: &str, password: &str) -> LoginParam {
    LoginParam {
        username: username.to_string(),
        password: password.to_string(),
    }
}
