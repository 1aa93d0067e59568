//! Score data repository: the score store and leaderboard builder.
//!
//! This module provides the `ScoreRepository` for persisting score submissions and
//! computing the derived ranking aggregates: per-player maximum score, global rank,
//! and the top-N leaderboard. Submissions are append-only; every aggregate is
//! recomputed on demand from the submission table, so each query is a consistent
//! snapshot of the store at one point in time.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    leaderboard::LeaderboardEntry,
    score::{PlayerStats, SubmitScoreParam, UNRANKED_RANK},
};

/// Row shape of the leaderboard aggregate query.
#[derive(FromQueryResult)]
struct TopPlayerRow {
    uid: i32,
    nickname: String,
    high_score: i64,
}

/// Repository providing database operations for score submissions and ranking.
///
/// This struct holds a reference to the database connection and provides methods
/// for appending submissions and computing ranking aggregates.
pub struct ScoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreRepository<'a> {
    /// Creates a new ScoreRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ScoreRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a new score submission.
    ///
    /// Always succeeds for a valid user id: there is no score-range validation and
    /// repeated submissions of the same value by the same player are allowed.
    /// Existing rows are never updated.
    ///
    /// # Arguments
    /// - `param` - Submission parameters (player uid, timestamp, score)
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the newly inserted submission
    /// - `Err(DbErr)` - Database error during insert
    pub async fn submit(&self, param: SubmitScoreParam) -> Result<i32, DbErr> {
        let entity = entity::score_submission::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            submitted_at: ActiveValue::Set(param.submitted_at),
            score: ActiveValue::Set(param.score),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Returns the highest score ever submitted by a player.
    ///
    /// # Arguments
    /// - `user_id` - Uid of the player
    ///
    /// # Returns
    /// - `Ok(Some(score))` - The player's maximum submitted score
    /// - `Ok(None)` - The player has no submissions
    /// - `Err(DbErr)` - Database error during query
    pub async fn max_score(&self, user_id: i32) -> Result<Option<i64>, DbErr> {
        let max = entity::prelude::ScoreSubmission::find()
            .select_only()
            .column_as(entity::score_submission::Column::Score.max(), "high_score")
            .filter(entity::score_submission::Column::UserId.eq(user_id))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    /// Computes a player's 1-based rank among all players by best score.
    ///
    /// The rank is `1 + count(distinct players whose best score exceeds this
    /// player's best)`. Players with no submissions get `UNRANKED_RANK` rather
    /// than a real rank, so "unranked" is distinguishable from "ranked last".
    ///
    /// # Arguments
    /// - `user_id` - Uid of the player
    ///
    /// # Returns
    /// - `Ok(rank)` - The player's rank, or `UNRANKED_RANK` with no submissions
    /// - `Err(DbErr)` - Database error during query
    pub async fn rank_of(&self, user_id: i32) -> Result<i64, DbErr> {
        match self.max_score(user_id).await? {
            Some(high_score) => self.rank_for_high_score(high_score).await,
            None => Ok(UNRANKED_RANK),
        }
    }

    /// Returns a player's high score and rank in one call.
    ///
    /// # Arguments
    /// - `user_id` - Uid of the player
    ///
    /// # Returns
    /// - `Ok(PlayerStats)` - High score and rank (sentinel values with no submissions)
    /// - `Err(DbErr)` - Database error during query
    pub async fn player_stats(&self, user_id: i32) -> Result<PlayerStats, DbErr> {
        let high_score = self.max_score(user_id).await?;

        let rank = match high_score {
            Some(high_score) => self.rank_for_high_score(high_score).await?,
            None => UNRANKED_RANK,
        };

        Ok(PlayerStats {
            uid: user_id,
            high_score,
            rank,
        })
    }

    /// Builds the top-N leaderboard of distinct players by best score.
    ///
    /// Groups all submissions by player, takes each player's maximum score, joins
    /// the display nickname, and orders descending by score with ascending uid as
    /// the tie-break. A player appears at most once regardless of how many
    /// submissions they have; players with no submissions do not appear at all.
    /// The whole computation is a single aggregate query, so concurrent
    /// submissions cannot produce a torn result.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - At most `limit` entries, best score first
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_players(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let rows = entity::prelude::ScoreSubmission::find()
            .select_only()
            .column_as(entity::account::Column::Uid, "uid")
            .column_as(entity::account::Column::Nickname, "nickname")
            .column_as(entity::score_submission::Column::Score.max(), "high_score")
            .join(
                JoinType::InnerJoin,
                entity::score_submission::Relation::Account.def(),
            )
            .group_by(entity::account::Column::Uid)
            .group_by(entity::account::Column::Nickname)
            .order_by_desc(entity::score_submission::Column::Score.max())
            .order_by_asc(entity::account::Column::Uid)
            .limit(limit)
            .into_model::<TopPlayerRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardEntry {
                uid: row.uid,
                nickname: row.nickname,
                high_score: row.high_score,
            })
            .collect())
    }

    /// Counts the distinct players strictly above a given high score, plus one.
    ///
    /// A player's best score exceeds `high_score` exactly when at least one of
    /// their submissions does, so the per-player MAX aggregate is not needed here.
    async fn rank_for_high_score(&self, high_score: i64) -> Result<i64, DbErr> {
        let players_above = entity::prelude::ScoreSubmission::find()
            .select_only()
            .column(entity::score_submission::Column::UserId)
            .distinct()
            .filter(entity::score_submission::Column::Score.gt(high_score))
            .count(self.db)
            .await?;

        Ok(players_above as i64 + 1)
    }
}
