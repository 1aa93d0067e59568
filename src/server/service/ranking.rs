//! Ranking service orchestrating the score flows.
//!
//! This module provides the `RankingService` for the submit, leaderboard, and
//! highest-score flows. The service is stateless between requests: every rank
//! and leaderboard is recomputed from the score store, so concurrent requests
//! only interact through the database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::score::ScoreRepository,
    error::AppError,
    export::SnapshotExporter,
    model::{
        leaderboard::Leaderboard,
        score::{PlayerStats, SubmitScoreParam},
    },
};

/// Number of entries served by the leaderboard flow, fixed by the external contract.
pub const LEADERBOARD_SIZE: u64 = 100;

/// Rank reported by the leaderboard flow for a requester with no submissions.
const NO_SCORES_RANK: i64 = -1;

/// Service providing business logic for score submission and ranking queries.
///
/// This struct holds a reference to the database connection and the snapshot
/// exporter, and provides methods for the three score flows.
pub struct RankingService<'a> {
    pub db: &'a DatabaseConnection,
    exporter: &'a SnapshotExporter,
}

impl<'a> RankingService<'a> {
    /// Creates a new RankingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `exporter` - Leaderboard snapshot exporter (may be disabled)
    ///
    /// # Returns
    /// - `RankingService` - New service instance
    pub fn new(db: &'a DatabaseConnection, exporter: &'a SnapshotExporter) -> Self {
        Self { db, exporter }
    }

    /// Persists a score submission and returns the player's resulting rank.
    ///
    /// The rank is computed after the insert, so it reflects the just-submitted
    /// score (read-your-writes). It may also already reflect submissions racing
    /// in from other players; rank is a point-in-time aggregate, so that is
    /// accepted rather than prevented. After a successful submission the
    /// leaderboard snapshot is refreshed if an exporter is configured; export
    /// failures are logged and do not fail the submission. A failed insert
    /// produces no rank.
    ///
    /// # Arguments
    /// - `param` - Submission parameters (player uid, timestamp, score)
    ///
    /// # Returns
    /// - `Ok(i64)` - The player's rank including this submission
    /// - `Err(AppError)` - Database error during insert or rank computation
    pub async fn submit_score(&self, param: SubmitScoreParam) -> Result<i64, AppError> {
        let scores = ScoreRepository::new(self.db);
        let user_id = param.user_id;

        scores.submit(param).await?;

        let rank = scores.rank_of(user_id).await?;

        if self.exporter.is_enabled() {
            if let Err(err) = self.refresh_snapshot(&scores).await {
                tracing::warn!("Leaderboard snapshot export failed: {}", err);
            }
        }

        Ok(rank)
    }

    /// Builds the leaderboard response for a requesting player.
    ///
    /// Fetches the top players and the requester's own standing. A requester
    /// with no submissions gets rank -1 and high score 0, per the external
    /// contract, rather than the store-level unranked sentinel.
    ///
    /// # Arguments
    /// - `uid` - Uid of the requesting player
    ///
    /// # Returns
    /// - `Ok(Leaderboard)` - Top players plus the requester's rank and best score
    /// - `Err(AppError)` - Database error during the queries
    pub async fn leaderboard(&self, uid: i32) -> Result<Leaderboard, AppError> {
        let scores = ScoreRepository::new(self.db);

        let top_players = scores.top_players(LEADERBOARD_SIZE).await?;
        let stats: PlayerStats = scores.player_stats(uid).await?;

        let (player_rank, player_high_score) = match stats.high_score {
            Some(high_score) => (stats.rank, high_score),
            None => (NO_SCORES_RANK, 0),
        };

        Ok(Leaderboard {
            top_players,
            player_rank,
            player_high_score,
        })
    }

    /// Returns a player's highest submitted score, or 0 with no submissions.
    ///
    /// # Arguments
    /// - `uid` - Uid of the player
    ///
    /// # Returns
    /// - `Ok(i64)` - Highest score, or 0
    /// - `Err(AppError)` - Database error during the query
    pub async fn highest_score(&self, uid: i32) -> Result<i64, AppError> {
        let scores = ScoreRepository::new(self.db);

        Ok(scores.max_score(uid).await?.unwrap_or(0))
    }

    /// Rebuilds the top-100 snapshot and hands it to the exporter.
    async fn refresh_snapshot(&self, scores: &ScoreRepository<'_>) -> Result<(), AppError> {
        let top_players = scores.top_players(LEADERBOARD_SIZE).await?;

        self.exporter.export(&top_players).await
    }
}
