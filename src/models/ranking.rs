//! Ranking snapshot model

use std::cmp::Ordering;

use serde::Serialize;

use super::team::Team;

/// One team's line in a computed ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub team_name: String,
    pub solved_count: usize,
    pub penalty: u64,
    /// Visible solve times, latest first
    pub solve_times: Vec<u64>,
}

impl RankingEntry {
    pub fn from_team(team: &Team) -> Self {
        Self {
            team_name: team.name.clone(),
            solved_count: team.solved_count(),
            penalty: team.total_penalty(),
            solve_times: team.solve_times(),
        }
    }

    /// ICPC ordering: more solves, then less penalty, then the earlier
    /// latest-solve profile, then team name.
    ///
    /// Solve times are compared position by position over the common prefix
    /// only; the smaller time at the first difference ranks higher.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .solved_count
            .cmp(&self.solved_count)
            .then_with(|| self.penalty.cmp(&other.penalty))
            .then_with(|| {
                self.solve_times
                    .iter()
                    .zip(&other.solve_times)
                    .map(|(a, b)| a.cmp(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.team_name.cmp(&other.team_name))
    }
}

/// Final standings row written by the JSON export
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: &'a RankingEntry,
}
