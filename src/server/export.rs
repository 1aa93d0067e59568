//! Leaderboard snapshot export.
//!
//! After each score submission the ranking service can mirror the current
//! top-100 leaderboard to a plain-text file (one `rank,nickname,score` line
//! per player), for consumption by an external display outside this service.
//! The exporter is an optional collaborator: without a configured path it is
//! a no-op, and an export failure never fails the submission that triggered it.

use std::path::PathBuf;

use crate::server::{error::AppError, model::leaderboard::LeaderboardEntry};

/// Writes ranked leaderboard snapshots to a configured file path.
///
/// Cheap to clone; carried in `AppState`.
#[derive(Clone)]
pub struct SnapshotExporter {
    path: Option<PathBuf>,
}

impl SnapshotExporter {
    /// Creates an exporter writing to the given path, or a disabled exporter
    /// when no path is configured.
    ///
    /// # Arguments
    /// - `path` - Snapshot file path, or None to disable export
    ///
    /// # Returns
    /// - `SnapshotExporter` - New exporter instance
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Creates an exporter that never writes anything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Whether a snapshot path is configured.
    ///
    /// Callers can skip assembling the leaderboard entirely when export is
    /// disabled.
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Writes the given leaderboard entries as a text snapshot.
    ///
    /// Entries must already be in rank order; line N of the file gets rank N.
    /// The file is replaced wholesale on every export. Missing parent
    /// directories are created. A disabled exporter returns Ok without
    /// touching the filesystem.
    ///
    /// # Arguments
    /// - `entries` - Leaderboard entries, best score first
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot written (or exporter disabled)
    /// - `Err(AppError::IoErr)` - Failed to create directories or write the file
    pub async fn export(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let lines: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                format!("{},{},{}", position + 1, entry.nickname, entry.high_score)
            })
            .collect();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, lines.join("\n")).await?;

        Ok(())
    }
}
