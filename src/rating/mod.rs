//! Rating systems: Weng-Lin skill updates and Champion Rating deltas
//!
//! This module wraps the skillratings crate for the Bayesian skill-estimate
//! update and implements the bounded, opponent-strength-sensitive Champion
//! Rating delta that drives leaderboard movement.

pub mod champion;
pub mod skill_model;

// Re-export commonly used types
pub use champion::ChampionRatingUpdater;
pub use skill_model::SkillModel;
