//! Submission ledger
//!
//! Append-only, ID-ordered record of every submission in the run.

use crate::models::{Submission, SubmissionId, Verdict};

/// Either a wildcard or an exact value to match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    Any,
    Exact(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

/// Global submission ledger
#[derive(Debug, Default)]
pub struct SubmissionLedger {
    entries: Vec<Submission>,
    /// ID of the most recently recorded submission, 0 when empty
    last_id: SubmissionId,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission and return it with its assigned ID
    pub fn record(&mut self, problem: &str, team: &str, verdict: Verdict, time: u64) -> &Submission {
        self.last_id += 1;
        self.entries.push(Submission {
            id: self.last_id,
            problem: problem.to_string(),
            team: team.to_string(),
            verdict,
            time,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, id: SubmissionId) -> Option<&Submission> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.entries.get(index)
    }

    /// Most recently ingested submission
    pub fn last(&self) -> Option<&Submission> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest submission by `team` matching both filters
    pub fn find_latest_matching(
        &self,
        team: &str,
        problem: &Filter<String>,
        verdict: &Filter<Verdict>,
    ) -> Option<&Submission> {
        self.entries.iter().rev().find(|s| {
            s.team == team && problem.matches(&s.problem) && verdict.matches(&s.verdict)
        })
    }
}
