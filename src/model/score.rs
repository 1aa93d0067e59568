use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /scores/submit`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreDto {
    pub user_id: i32,
    pub submission_date: DateTime<Utc>,
    pub score: i64,
}

/// Success response for `POST /scores/submit`.
#[derive(Serialize)]
pub struct SubmitScoreResponseDto {
    pub state: String,
    pub rank: i64,
}

impl SubmitScoreResponseDto {
    pub fn success(rank: i64) -> Self {
        Self {
            state: "success".to_string(),
            rank,
        }
    }
}

/// Success response for `GET /scores/highestScore/{uid}`.
#[derive(Serialize)]
pub struct HighestScoreResponseDto {
    pub state: String,
    #[serde(rename = "UID")]
    pub uid: i32,
    #[serde(rename = "highScore")]
    pub high_score: i64,
}

impl HighestScoreResponseDto {
    pub fn success(uid: i32, high_score: i64) -> Self {
        Self {
            state: "success".to_string(),
            uid,
            high_score,
        }
    }
}
