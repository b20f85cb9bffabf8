//! Error types for the leaderboard engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific leaderboard scenarios
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    #[error("Invalid submission: {reason}")]
    InvalidSubmission { reason: String },

    #[error("Player not found: {player}")]
    PlayerNotFound { player: String },

    #[error("Rating calculation failed: {reason}")]
    RatingCalculationFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    #[error("Leaderboard not found at {path}; run a full recalculation first")]
    LeaderboardMissing { path: String },
}
