//! Score domain models and parameters.

use chrono::{DateTime, Utc};

/// Store-level rank sentinel for a player with no submissions.
///
/// Distinguishes "unranked" from "ranked last"; the leaderboard flow maps it
/// to `-1` before it reaches the wire.
pub const UNRANKED_RANK: i64 = 9999;

/// Derived per-player ranking statistics. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    /// Player id the stats belong to.
    pub uid: i32,
    /// Highest score ever submitted, or None if the player has no submissions.
    pub high_score: Option<i64>,
    /// 1-based rank among all players by high score; `UNRANKED_RANK` if none.
    pub rank: i64,
}

/// Parameters for persisting one score submission.
#[derive(Debug, Clone)]
pub struct SubmitScoreParam {
    /// Uid of the submitting player.
    pub user_id: i32,
    /// Client-reported submission timestamp.
    pub submitted_at: DateTime<Utc>,
    /// Submitted score value. No range validation; duplicates are allowed.
    pub score: i64,
}
