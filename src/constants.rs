//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// RUNTIME DEFAULTS
// =============================================================================

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log output format
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// SCORING
// =============================================================================

/// Penalty time added for each rejected attempt on a solved problem (ICPC rules)
pub const ICPC_PENALTY_MINUTES: u64 = 20;

/// Problems are labelled `A`, `B`, ... so a contest holds at most this many
pub const MAX_PROBLEM_COUNT: usize = 26;

// =============================================================================
// COMMAND VOCABULARY
// =============================================================================

/// Input verbs
pub mod verbs {
    pub const ADD_TEAM: &str = "ADDTEAM";
    pub const START: &str = "START";
    pub const SUBMIT: &str = "SUBMIT";
    pub const FLUSH: &str = "FLUSH";
    pub const FREEZE: &str = "FREEZE";
    pub const SCROLL: &str = "SCROLL";
    pub const QUERY_RANKING: &str = "QUERY_RANKING";
    pub const QUERY_SUBMISSION: &str = "QUERY_SUBMISSION";
    pub const END: &str = "END";
}

/// Filter value matching any problem or verdict
pub const WILDCARD: &str = "ALL";

/// Submission verdict spellings
pub mod verdicts {
    pub const ACCEPTED: &str = "Accepted";
    pub const WRONG_ANSWER: &str = "Wrong_Answer";
    pub const RUNTIME_ERROR: &str = "Runtime_Error";
    pub const TIME_LIMIT_EXCEED: &str = "Time_Limit_Exceed";
}

// =============================================================================
// RESPONSE LINES
// =============================================================================

/// Fixed `[Info]` / `[Warning]` messages
pub mod messages {
    pub const ADD_SUCCESS: &str = "[Info]Add successfully.";
    pub const COMPETITION_STARTS: &str = "[Info]Competition starts.";
    pub const FLUSH: &str = "[Info]Flush scoreboard.";
    pub const FREEZE: &str = "[Info]Freeze scoreboard.";
    pub const SCROLL: &str = "[Info]Scroll scoreboard.";
    pub const QUERY_RANKING: &str = "[Info]Complete query ranking.";
    pub const QUERY_SUBMISSION: &str = "[Info]Complete query submission.";
    pub const COMPETITION_ENDS: &str = "[Info]Competition ends.";
    pub const FROZEN_WARNING: &str =
        "[Warning]Scoreboard is frozen. The ranking may be inaccurate until it were scrolled.";
    pub const SUBMISSION_NOT_FOUND: &str = "Cannot find any submission.";
}
