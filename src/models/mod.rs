//! Domain models
//!
//! Plain data types for the scoreboard: submissions, per-problem status,
//! teams and ranking snapshots.

pub mod problem;
pub mod ranking;
pub mod submission;
pub mod team;

pub use problem::{FreezeWindow, ProblemStatus};
pub use ranking::{RankingEntry, StandingsRow};
pub use submission::{Submission, SubmissionId, Verdict};
pub use team::Team;
