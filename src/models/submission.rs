//! Submission model

use serde::Serialize;

use crate::constants::verdicts;

/// Ledger sequence number, starting at 1
pub type SubmissionId = u64;

/// Submission verdict enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "Accepted")]
    Accepted,
    #[serde(rename = "Wrong_Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime_Error")]
    RuntimeError,
    #[serde(rename = "Time_Limit_Exceed")]
    TimeLimitExceed,
}

impl Verdict {
    /// Get verdict as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => verdicts::ACCEPTED,
            Self::WrongAnswer => verdicts::WRONG_ANSWER,
            Self::RuntimeError => verdicts::RUNTIME_ERROR,
            Self::TimeLimitExceed => verdicts::TIME_LIMIT_EXCEED,
        }
    }

    /// Parse verdict from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            verdicts::ACCEPTED => Some(Self::Accepted),
            verdicts::WRONG_ANSWER => Some(Self::WrongAnswer),
            verdicts::RUNTIME_ERROR => Some(Self::RuntimeError),
            verdicts::TIME_LIMIT_EXCEED => Some(Self::TimeLimitExceed),
            _ => None,
        }
    }

    /// Check if this verdict means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single judged submission. Immutable once recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub problem: String,
    pub team: String,
    pub verdict: Verdict,
    pub time: u64,
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.team, self.problem, self.verdict, self.time)
    }
}
