use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::score::{HighestScoreResponseDto, SubmitScoreDto, SubmitScoreResponseDto},
    server::{
        error::AppError, model::score::SubmitScoreParam, service::ranking::RankingService,
        state::AppState,
    },
};

/// POST /scores/submit - Submit a score and get the resulting rank
///
/// Appends the submission to the score store and returns the player's rank
/// among all players by best score, reflecting the just-submitted value.
/// Scores are accepted without range validation; duplicates are allowed.
///
/// # Returns
/// - `200 OK`: `{state: "success", rank}` with the player's current rank
/// - `400 Bad Request`: Malformed request body
/// - `500 Internal Server Error`: Database error
pub async fn submit_score(
    State(state): State<AppState>,
    Json(dto): Json<SubmitScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let ranking_service = RankingService::new(&state.db, &state.exporter);

    let rank = ranking_service
        .submit_score(SubmitScoreParam {
            user_id: dto.user_id,
            submitted_at: dto.submission_date,
            score: dto.score,
        })
        .await?;

    Ok((StatusCode::OK, Json(SubmitScoreResponseDto::success(rank))))
}

/// GET /scores/highestScore/{uid} - Get a player's highest score
///
/// Returns the player's best submitted score, or 0 if the player has no
/// submissions yet.
///
/// # Path Parameters
/// - `uid`: Player uid, must be positive
///
/// # Returns
/// - `200 OK`: `{state: "success", UID, highScore}` (highScore 0 if none)
/// - `400 Bad Request`: uid is zero or negative
/// - `500 Internal Server Error`: Database error
pub async fn get_highest_score(
    State(state): State<AppState>,
    Path(uid): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if uid <= 0 {
        return Err(AppError::BadRequest("Invalid UID.".to_string()));
    }

    let ranking_service = RankingService::new(&state.db, &state.exporter);

    let high_score = ranking_service.highest_score(uid).await?;

    Ok((
        StatusCode::OK,
        Json(HighestScoreResponseDto::success(uid, high_score)),
    ))
}
