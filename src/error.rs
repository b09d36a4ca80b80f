//! Custom error types and handling
//!
//! Scoreboard operations fail only with recoverable validation errors. The
//! dispatcher renders them as `[Error]` lines and keeps going; parse errors
//! never reach the output at all.

/// Validation failures raised by contest operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreboardError {
    #[error("duplicated team name")]
    DuplicateTeam,

    #[error("competition has started")]
    CompetitionAlreadyStarted,

    #[error("scoreboard has been frozen")]
    AlreadyFrozen,

    #[error("scoreboard has not been frozen")]
    NotFrozen,

    #[error("cannot find the team")]
    TeamNotFound,
}

impl ScoreboardError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateTeam => "DUPLICATE_TEAM",
            Self::CompetitionAlreadyStarted => "COMPETITION_ALREADY_STARTED",
            Self::AlreadyFrozen => "ALREADY_FROZEN",
            Self::NotFrozen => "NOT_FROZEN",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
        }
    }

    /// Render the `[Error]` line for a failed operation, e.g. `Add`
    pub fn to_line(&self, operation: &str) -> String {
        format!("[Error]{operation} failed: {self}.")
    }
}

/// Errors produced while turning an input line into a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected token: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid integer for {field}: {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Unknown verdict: {0}")]
    UnknownVerdict(String),
}

/// Result type alias using ScoreboardError
pub type AppResult<T> = Result<T, ScoreboardError>;
