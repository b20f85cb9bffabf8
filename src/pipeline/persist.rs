//! Leaderboard persistence helpers
//!
//! Writes go to a temporary file in the target directory followed by a
//! rename, so a failed run never leaves a partial document behind.

use crate::error::{LadderError, Result};
use crate::leaderboard::LeaderboardDocument;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON and atomically replace the target file
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(|e| LadderError::PersistenceError {
        message: format!("writing {}: {}", tmp.display(), e),
    })?;
    fs::rename(&tmp, path).map_err(|e| LadderError::PersistenceError {
        message: format!("replacing {}: {}", path.display(), e),
    })?;
    Ok(())
}

/// Load the persisted leaderboard document, if one exists
pub fn load_leaderboard(path: &Path) -> Result<Option<LeaderboardDocument>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let document = serde_json::from_str(&text)?;
    Ok(Some(document))
}
