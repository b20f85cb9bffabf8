//! The authoritative per-player record store
//!
//! One entry per unique player name, created on first appearance, mutated by
//! every subsequent match, never deleted or merged.

pub mod store;

// Re-export commonly used types
pub use store::{LedgerEntry, PlayerLedger};
