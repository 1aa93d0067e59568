use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        account::{create_account, login},
        leaderboard::get_leaderboard,
        score::{get_highest_score, submit_score},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scores/submit", post(submit_score))
        .route("/scores/createAccount", post(create_account))
        .route("/scores/login", post(login))
        .route("/scores/leaderboard", post(get_leaderboard))
        .route("/scores/highestScore/{uid}", get(get_highest_score))
}
