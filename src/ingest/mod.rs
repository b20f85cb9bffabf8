//! Submission ingestion
//!
//! Parses per-submission JSON documents in both historical shapes and
//! normalizes them into validated [`MatchRecord`](crate::types::MatchRecord)s
//! before anything reaches the rating engine.

pub mod loader;
pub mod submission;

// Re-export commonly used types
pub use loader::load_submissions;
pub use submission::{RawSubmission, Submission};
