//! Business logic services

pub mod contest_service;
pub mod freeze_service;
pub mod ledger;
pub mod ranking_service;

pub use contest_service::ContestService;
pub use freeze_service::{FreezeController, RankChange, ScrollReport};
pub use ledger::{Filter, SubmissionLedger};
pub use ranking_service::RankingService;
