//! The idempotence ledger
//!
//! A persisted set of already-applied match ids, consulted only by the
//! incremental mode. Applying a match whose id is in the set is a no-op.

use crate::error::Result;
use crate::pipeline::persist;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Set of match ids that have already been applied to the ledger
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProcessedSet {
    processed: BTreeSet<String>,
}

impl ProcessedSet {
    /// Load the persisted set; a missing or unreadable file yields an empty
    /// set with a diagnostic rather than an error
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
        {
            Ok(set) => set,
            Err(error) => {
                warn!(file = %path.display(), %error, "Failed to load processed set, starting empty");
                Self::default()
            }
        }
    }

    /// Persist the set; called only after the leaderboard write succeeded
    pub fn save(&self, path: &Path) -> Result<()> {
        persist::write_json_atomic(path, self)
    }

    pub fn contains(&self, match_id: &str) -> bool {
        self.processed.contains(match_id)
    }

    pub fn insert(&mut self, match_id: &str) {
        self.processed.insert(match_id.to_string());
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed.json");

        let mut set = ProcessedSet::default();
        set.insert("sub-a#0");
        set.insert("sub-a#1");
        set.save(&path).unwrap();

        let loaded = ProcessedSet::load(&path);
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains("sub-a#0"));
        assert!(!loaded.contains("sub-b#0"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let set = ProcessedSet::load(&dir.path().join("absent.json"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed.json");
        std::fs::write(&path, "{broken").unwrap();
        assert!(ProcessedSet::load(&path).is_empty());
    }
}
