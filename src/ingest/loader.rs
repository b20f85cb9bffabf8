//! Submission directory loading
//!
//! Ratings are path-dependent, so submissions are always applied in sorted
//! file-name order, never in directory-listing order.

use crate::config::SkillModelConfig;
use crate::error::Result;
use crate::ingest::submission::{RawSubmission, Submission};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load and normalize every submission in a directory
///
/// Files are processed in sorted name order. Unreadable or malformed files
/// are skipped with a diagnostic rather than aborting the run; a missing
/// directory yields an empty batch.
pub fn load_submissions(dir: &Path, skill: &SkillModelConfig) -> Result<Vec<Submission>> {
    if !dir.exists() {
        warn!(dir = %dir.display(), "No submissions directory found");
        return Ok(Vec::new());
    }

    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut submissions = Vec::with_capacity(files.len());
    for path in files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw: RawSubmission = match fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
        {
            Ok(raw) => raw,
            Err(error) => {
                warn!(file = %path.display(), %error, "Failed to load submission");
                continue;
            }
        };

        match Submission::normalize(&stem, raw, skill) {
            Ok(submission) => submissions.push(submission),
            Err(error) => {
                warn!(file = %path.display(), %error, "Skipping invalid submission");
            }
        }
    }

    info!(count = submissions.len(), "Loaded submissions");
    Ok(submissions)
}
