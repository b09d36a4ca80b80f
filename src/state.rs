//! Contest state
//!
//! The single state object threaded through every command handler.

use std::collections::BTreeMap;

use crate::{
    models::{RankingEntry, Team},
    services::{freeze_service::FreezeController, ledger::SubmissionLedger},
};

/// Everything one scoreboard run knows about
#[derive(Debug, Default)]
pub struct ContestState {
    /// Registered teams, keyed (and therefore ordered) by name
    pub teams: BTreeMap<String, Team>,
    pub ledger: SubmissionLedger,
    pub freeze: FreezeController,
    pub started: bool,
    pub ended: bool,
    pub duration: Option<u64>,
    pub problem_count: usize,
    /// Ranking as of the last flush or scroll
    pub last_ranking: Option<Vec<RankingEntry>>,
}

impl ContestState {
    pub fn new() -> Self {
        Self::default()
    }
}
