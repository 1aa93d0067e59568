use serde::{Deserialize, Serialize};

/// Request body for `POST /scores/leaderboard`.
///
/// A missing UID deserializes to 0 and is rejected by the controller.
#[derive(Deserialize)]
pub struct LeaderboardRequestDto {
    #[serde(rename = "UID", default)]
    pub uid: i32,
}

/// One row of the top-N leaderboard.
///
/// `username` carries the account *nickname*, the display name the wire
/// contract exposes under this key.
#[derive(Serialize)]
pub struct LeaderboardEntryDto {
    pub username: String,
    #[serde(rename = "highScore")]
    pub high_score: i64,
}

/// Response for `POST /scores/leaderboard`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponseDto {
    pub top_players: Vec<LeaderboardEntryDto>,
    pub player_rank: i64,
    pub player_high_score: i64,
}
