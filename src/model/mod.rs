//! Wire-format DTOs for the HTTP API.
//!
//! Field names and casing follow the external contract the game client was
//! built against (`userId`, `submissionDate`, `UID`, `topPlayers`, ...), so
//! serde rename attributes are load-bearing here.

pub mod account;
pub mod api;
pub mod leaderboard;
pub mod score;
