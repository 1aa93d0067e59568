use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account exists for the username presented at login.
    ///
    /// Results in a 401 Unauthorized response with the `USER_NOT_EXIST`
    /// message code the game client matches on.
    #[error("No account exists for the presented username")]
    UserNotFound,

    /// The presented password does not verify against the stored hash.
    ///
    /// Results in a 401 Unauthorized response with the `INCORRECT_PASSWORD`
    /// message code the game client matches on.
    #[error("Password verification failed for the presented credentials")]
    IncorrectPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps login failures to 401 Unauthorized with the fixed message codes of the
/// external contract. The codes distinguish an unknown username from a wrong
/// password, matching what the game client displays to the player.
///
/// # Returns
/// - 401 Unauthorized with `USER_NOT_EXIST` - For `UserNotFound`
/// - 401 Unauthorized with `INCORRECT_PASSWORD` - For `IncorrectPassword`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::UserNotFound => "USER_NOT_EXIST",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto::failed(message.to_string())),
        )
            .into_response()
    }
}
