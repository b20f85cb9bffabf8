//! Batch pipeline: full recalculation and incremental updates
//!
//! Both modes share the same pure match-application core; they differ only
//! in where the ledger starts and which records are applied.

pub mod engine;
pub mod incremental;
pub mod persist;
pub mod processed;
pub mod recalculate;

// Re-export commonly used types
pub use engine::MatchEngine;
pub use incremental::incremental_update;
pub use processed::ProcessedSet;
pub use recalculate::recalculate;
