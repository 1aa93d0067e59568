use crate::server::{
    export::SnapshotExporter, model::score::SubmitScoreParam, service::ranking::RankingService,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod highest_score;
mod submit_score;

/// Builds submission parameters timestamped now.
fn submit_param(user_id: i32, score: i64) -> SubmitScoreParam {
    SubmitScoreParam {
        user_id,
        submitted_at: Utc::now(),
        score,
    }
}
