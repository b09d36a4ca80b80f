//! Freeze/scroll controller
//!
//! Owns the ACTIVE/FROZEN state machine. While frozen, results submitted
//! after the boundary stay hidden; scrolling reveals them and reports which
//! teams moved up.

use std::collections::BTreeMap;

use crate::{
    error::{AppResult, ScoreboardError},
    models::{FreezeWindow, RankingEntry, Team},
    services::{ledger::SubmissionLedger, ranking_service::RankingService},
};

/// Scoreboard visibility phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FreezePhase {
    #[default]
    Active,
    Frozen {
        boundary: u64,
    },
}

/// A team that moved up during a scroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChange {
    pub team: String,
    /// Team that held the mover's new position before the reveal
    pub displaced: String,
    pub solved_count: usize,
    pub penalty: u64,
}

/// Display tokens per team, then per problem label
pub type CellSnapshot = BTreeMap<String, BTreeMap<String, String>>;

/// Capture every team's current display tokens
pub fn cell_snapshot(teams: &BTreeMap<String, Team>) -> CellSnapshot {
    teams
        .iter()
        .map(|(name, team)| {
            let cells = team
                .problems
                .iter()
                .map(|(label, status)| (label.clone(), status.display_token()))
                .collect();
            (name.clone(), cells)
        })
        .collect()
}

/// Everything a scroll produces, in emission order
#[derive(Debug, Clone)]
pub struct ScrollReport {
    pub before: Vec<RankingEntry>,
    /// Tokens as they stood before the reveal, hidden cells included
    pub before_cells: CellSnapshot,
    pub changes: Vec<RankChange>,
    pub after: Vec<RankingEntry>,
    pub after_cells: CellSnapshot,
}

#[derive(Debug, Default)]
pub struct FreezeController {
    phase: FreezePhase,
}

impl FreezeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FreezePhase {
        self.phase
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.phase, FreezePhase::Frozen { .. })
    }

    /// Window handed to each status update
    pub fn window(&self) -> FreezeWindow {
        match self.phase {
            FreezePhase::Active => FreezeWindow::OPEN,
            FreezePhase::Frozen { boundary } => FreezeWindow {
                frozen: true,
                boundary,
            },
        }
    }

    /// Freeze at the time of the latest submission (0 if there is none)
    pub fn freeze(&mut self, ledger: &SubmissionLedger) -> AppResult<u64> {
        if self.is_frozen() {
            return Err(ScoreboardError::AlreadyFrozen);
        }

        let boundary = ledger.last().map_or(0, |s| s.time);
        self.phase = FreezePhase::Frozen { boundary };
        tracing::info!(boundary, "Scoreboard frozen");
        Ok(boundary)
    }

    /// Reveal every hidden status and report the rank movements
    pub fn scroll(
        &mut self,
        teams: &mut BTreeMap<String, Team>,
        ledger: &SubmissionLedger,
    ) -> AppResult<ScrollReport> {
        let FreezePhase::Frozen { boundary } = self.phase else {
            return Err(ScoreboardError::NotFrozen);
        };

        let before = RankingService::compute(teams.values());
        let before_cells = cell_snapshot(teams);
        let pending = teams.values().filter(|t| t.has_hidden()).count();

        let mut revealed = 0usize;
        for team in teams.values_mut() {
            revealed += reveal_team(team, ledger, boundary);
        }

        let after = RankingService::compute(teams.values());
        let after_cells = cell_snapshot(teams);
        let changes = rank_changes(&before, &after);

        tracing::info!(
            boundary,
            pending_teams = pending,
            revealed,
            movers = changes.len(),
            "Scoreboard scrolled"
        );

        self.phase = FreezePhase::Active;

        Ok(ScrollReport {
            before,
            before_cells,
            changes,
            after,
            after_cells,
        })
    }
}

/// Resolve hidden statuses of one team; returns how many became solved.
///
/// The solve is the first Accepted after the boundary in arrival order.
fn reveal_team(team: &mut Team, ledger: &SubmissionLedger, boundary: u64) -> usize {
    let mut solved = 0;

    for (problem, status) in team.problems.iter_mut().filter(|(_, s)| s.hidden) {
        let first_accept = team
            .submissions
            .iter()
            .filter_map(|&id| ledger.get(id))
            .find(|s| &s.problem == problem && s.time > boundary && s.verdict.is_accepted());

        if let Some(submission) = first_accept {
            if !status.solved {
                status.reveal_solve(submission.time);
                solved += 1;
            }
        }
        status.hidden = false;
    }

    solved
}

/// One record per team that moved up, naming the team that held its new
/// position in the old order.
fn rank_changes(before: &[RankingEntry], after: &[RankingEntry]) -> Vec<RankChange> {
    after
        .iter()
        .enumerate()
        .filter_map(|(new_pos, entry)| {
            let old_pos = before.iter().position(|e| e.team_name == entry.team_name)?;
            (new_pos < old_pos).then(|| RankChange {
                team: entry.team_name.clone(),
                displaced: before[new_pos].team_name.clone(),
                solved_count: entry.solved_count,
                penalty: entry.penalty,
            })
        })
        .collect()
}
