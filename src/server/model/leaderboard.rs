//! Leaderboard domain models.

use crate::model::leaderboard::{LeaderboardEntryDto, LeaderboardResponseDto};

/// One distinct player on the leaderboard, holding their best score.
///
/// Entries are ordered descending by `high_score`; ties order by ascending
/// `uid` (the earlier-registered account ranks first).
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Player id.
    pub uid: i32,
    /// Display nickname of the player.
    pub nickname: String,
    /// The player's best submitted score.
    pub high_score: i64,
}

impl LeaderboardEntry {
    /// Converts the leaderboard entry to a DTO for API responses.
    ///
    /// The external contract exposes the nickname under the `username` key.
    ///
    /// # Returns
    /// - `LeaderboardEntryDto` - The converted entry
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            username: self.nickname,
            high_score: self.high_score,
        }
    }
}

/// Combined response of the leaderboard query flow: the top players plus the
/// requesting player's own standing.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    /// Top players, best first.
    pub top_players: Vec<LeaderboardEntry>,
    /// Requester's rank, or -1 if the requester has no submissions.
    pub player_rank: i64,
    /// Requester's best score, or 0 if the requester has no submissions.
    pub player_high_score: i64,
}

impl Leaderboard {
    /// Converts the leaderboard domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `LeaderboardResponseDto` - The converted leaderboard response
    pub fn into_dto(self) -> LeaderboardResponseDto {
        LeaderboardResponseDto {
            top_players: self
                .top_players
                .into_iter()
                .map(|entry| entry.into_dto())
                .collect(),
            player_rank: self.player_rank,
            player_high_score: self.player_high_score,
        }
    }
}
