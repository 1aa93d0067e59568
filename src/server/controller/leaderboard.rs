use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::leaderboard::LeaderboardRequestDto,
    server::{error::AppError, service::ranking::RankingService, state::AppState},
};

/// POST /scores/leaderboard - Get the top-100 leaderboard with the requester's standing
///
/// Returns the top 100 distinct players by best score (descending, uid as the
/// tie-break) along with the requesting player's own rank and high score. A
/// requester with no submissions gets `playerRank: -1` and
/// `playerHighScore: 0`.
///
/// # Returns
/// - `200 OK`: `{topPlayers: [{username, highScore}], playerRank, playerHighScore}`
/// - `400 Bad Request`: UID missing or zero
/// - `500 Internal Server Error`: Database error
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Json(dto): Json<LeaderboardRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.uid == 0 {
        return Err(AppError::BadRequest("Invalid data.".to_string()));
    }

    let ranking_service = RankingService::new(&state.db, &state.exporter);

    let leaderboard = ranking_service.leaderboard(dto.uid).await?;

    Ok((StatusCode::OK, Json(leaderboard.into_dto())))
}
