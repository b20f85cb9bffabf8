//! Tier ladder lookups
//!
//! Maps skill ordinals (directly or via the empirical percentile table) to
//! tier bands, and Champion Ratings back to display tiers.

pub mod mapper;

// Re-export commonly used types
pub use mapper::TierMapper;
