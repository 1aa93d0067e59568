use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::account::{CreateAccountDto, CreateAccountResponseDto, LoginDto, LoginResponseDto},
    server::{
        error::AppError,
        model::account::{LoginParam, RegisterAccountParam},
        service::account::AccountService,
        state::AppState,
    },
};

/// POST /scores/createAccount - Register a new player account
///
/// Creates an account with the requested username, nickname, and password and
/// returns the server-assigned UID. Usernames are unique; a duplicate request
/// (including one losing a registration race) is rejected.
///
/// # Returns
/// - `200 OK`: `{state: "success", UID}` with the new account's uid
/// - `400 Bad Request`: Empty username or password
/// - `409 Conflict`: Username already exists
/// - `500 Internal Server Error`: Database or hashing error
pub async fn create_account(
    State(state): State<AppState>,
    Json(dto): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let account = account_service
        .register(RegisterAccountParam {
            username: dto.username,
            nickname: dto.nickname,
            password: dto.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(CreateAccountResponseDto::success(account.uid)),
    ))
}

/// POST /scores/login - Authenticate a player
///
/// Verifies the presented credentials against the stored account and records
/// the login. The failure message distinguishes an unknown username from a
/// wrong password, as the game client displays different errors for each.
///
/// # Returns
/// - `200 OK`: `{state: "success", uid}` for valid credentials
/// - `400 Bad Request`: Empty username or password
/// - `401 Unauthorized`: `USER_NOT_EXIST` or `INCORRECT_PASSWORD`
/// - `500 Internal Server Error`: Database or hash-parsing error
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let account_service = AccountService::new(&state.db);

    let uid = account_service
        .login(LoginParam {
            username: dto.username,
            password: dto.password,
        })
        .await?;

    Ok((StatusCode::OK, Json(LoginResponseDto::success(uid))))
}
