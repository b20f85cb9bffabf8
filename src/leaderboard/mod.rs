//! Leaderboard document assembly
//!
//! Folds ledger entries into the ordered, tier-grouped document persisted
//! for the static site.

pub mod assembler;
pub mod document;

// Re-export commonly used types
pub use assembler::LeaderboardAssembler;
pub use document::{LeaderboardDocument, LeaderboardRecord};
