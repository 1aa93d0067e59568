use serde::{Deserialize, Serialize};

/// Request body for `POST /scores/createAccount`.
#[derive(Deserialize)]
pub struct CreateAccountDto {
    pub username: String,
    pub nickname: String,
    pub password: String,
}

/// Success response for `POST /scores/createAccount`.
#[derive(Serialize)]
pub struct CreateAccountResponseDto {
    pub state: String,
    #[serde(rename = "UID")]
    pub uid: i32,
}

impl CreateAccountResponseDto {
    pub fn success(uid: i32) -> Self {
        Self {
            state: "success".to_string(),
            uid,
        }
    }
}

/// Request body for `POST /scores/login`.
#[derive(Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Success response for `POST /scores/login`.
#[derive(Serialize)]
pub struct LoginResponseDto {
    pub state: String,
    pub uid: i32,
}

impl LoginResponseDto {
    pub fn success(uid: i32) -> Self {
        Self {
            state: "success".to_string(),
            uid,
        }
    }
}
