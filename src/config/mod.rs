//! Configuration management for the leaderboard engine
//!
//! All tunables (tier tables, percentile distribution, CR constants, skill
//! model parameters) live here as explicit immutable configuration objects
//! passed into each component at construction, never as module-level globals.

pub mod app;
pub mod rating;
pub mod tiers;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, PathSettings, ServiceSettings};
pub use rating::{CrConfig, SkillModelConfig};
pub use tiers::{TierBoundKind, TierConfig, TierDefinition};
