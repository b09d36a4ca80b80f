//! ICPC Scoreboard - Contest Standings with Freeze and Scroll
//!
//! This library provides the core of an ICPC-style scoreboard: it ingests a
//! stream of judged submissions, tracks per-team/per-problem solve state and
//! produces ranked standings on demand.
//!
//! # Features
//!
//! - ICPC ranking (solves, penalty, solve-time profile, name)
//! - Scoreboard freeze with hidden results
//! - Scroll reveal with rank-change reporting
//! - Submission lookup with wildcard filters
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Handlers**: command parsing, dispatch and output formatting (thin layer)
//! - **Services**: ledger, ranking engine, freeze controller and contest rules
//! - **Models**: domain types
//! - **State**: the single contest state threaded through every handler

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppResult, ParseError, ScoreboardError};
pub use state::ContestState;
