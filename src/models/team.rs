//! Team model

use std::collections::BTreeMap;

use super::problem::ProblemStatus;
use super::submission::SubmissionId;

/// A registered team with its per-problem state
#[derive(Debug, Clone, Default)]
pub struct Team {
    pub name: String,
    /// Status per problem label, present once the team has submitted to it
    pub problems: BTreeMap<String, ProblemStatus>,
    /// Ledger IDs of this team's submissions, in arrival order
    pub submissions: Vec<SubmissionId>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Status for `problem`, created on first use
    pub fn status_mut(&mut self, problem: &str) -> &mut ProblemStatus {
        self.problems.entry(problem.to_string()).or_default()
    }

    pub fn status(&self, problem: &str) -> Option<&ProblemStatus> {
        self.problems.get(problem)
    }

    /// Number of solved problems that are not hidden
    pub fn solved_count(&self) -> usize {
        self.visible_solves().count()
    }

    pub fn total_penalty(&self) -> u64 {
        self.visible_solves().map(ProblemStatus::penalty).sum()
    }

    /// Visible solve times, latest first
    pub fn solve_times(&self) -> Vec<u64> {
        let mut times: Vec<u64> = self.visible_solves().filter_map(|s| s.solved_at).collect();
        times.sort_unstable_by(|a, b| b.cmp(a));
        times
    }

    /// Whether any problem is waiting to be revealed
    pub fn has_hidden(&self) -> bool {
        self.problems.values().any(|s| s.hidden)
    }

    fn visible_solves(&self) -> impl Iterator<Item = &ProblemStatus> {
        self.problems.values().filter(|s| s.is_visible_solve())
    }
}
