//! Final standings export

use std::path::Path;

use anyhow::Context;

use crate::models::{RankingEntry, StandingsRow};

/// Render standings as a pretty JSON array with 1-based ranks
pub fn standings_json(standings: &[RankingEntry]) -> serde_json::Result<String> {
    let rows: Vec<StandingsRow<'_>> = standings
        .iter()
        .enumerate()
        .map(|(index, entry)| StandingsRow {
            rank: index + 1,
            entry,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

/// Write standings to `path`, replacing any existing file
pub async fn write_standings(path: &Path, standings: &[RankingEntry]) -> anyhow::Result<()> {
    let json = standings_json(standings).context("Failed to serialize standings")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write standings to {}", path.display()))?;
    tracing::info!(path = %path.display(), teams = standings.len(), "Standings exported");
    Ok(())
}
