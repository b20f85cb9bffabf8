//! Duel Ladder - Tier-based Champion Rating leaderboard engine
//!
//! This crate ingests best-of-three duel submissions, updates a Weng-Lin
//! (OpenSkill) skill estimate per player, derives tiers and a bounded
//! Champion Rating delta per match, and assembles the ordered, tier-grouped
//! leaderboard document for a static site.

pub mod config;
pub mod error;
pub mod ingest;
pub mod leaderboard;
pub mod ledger;
pub mod pipeline;
pub mod rating;
pub mod tier;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LadderError, Result};
pub use types::*;

// Re-export key components
pub use leaderboard::LeaderboardAssembler;
pub use ledger::PlayerLedger;
pub use pipeline::{incremental_update, recalculate, MatchEngine};
pub use rating::{ChampionRatingUpdater, SkillModel};
pub use tier::TierMapper;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
