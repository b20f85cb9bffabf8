//! Incremental leaderboard updates
//!
//! Loads the persisted ledger state and applies only matches not yet in the
//! processed-id set, then re-runs assembly over the full ledger. Much
//! cheaper than a full recalculation for single new submissions.

use crate::config::AppConfig;
use crate::error::{LadderError, Result};
use crate::ingest::load_submissions;
use crate::leaderboard::{LeaderboardAssembler, LeaderboardDocument};
use crate::ledger::PlayerLedger;
use crate::pipeline::engine::MatchEngine;
use crate::pipeline::persist;
use crate::pipeline::processed::ProcessedSet;
use crate::utils::current_timestamp;
use tracing::info;

/// Apply unprocessed matches on top of the persisted leaderboard
///
/// Already-persisted state is only overwritten after the whole batch has
/// been applied: the new document is written first, the processed-id set
/// after it, so a failure mid-run leaves the previous state intact.
pub fn incremental_update(config: &AppConfig) -> Result<LeaderboardDocument> {
    let existing = persist::load_leaderboard(&config.paths.leaderboard_file)?.ok_or_else(|| {
        LadderError::LeaderboardMissing {
            path: config.paths.leaderboard_file.display().to_string(),
        }
    })?;
    let mut ledger = PlayerLedger::from_entries(existing.player_entries().cloned());
    info!(players = ledger.len(), "Loaded existing leaderboard");

    let mut processed = ProcessedSet::load(&config.paths.processed_file);
    info!(count = processed.len(), "Already processed matches");

    let submissions = load_submissions(&config.paths.submissions_dir, &config.skill)?;
    let engine = MatchEngine::new(config)?;

    let mut applied = 0usize;
    for submission in &submissions {
        for record in &submission.records {
            if processed.contains(&record.id) {
                continue;
            }
            engine.apply_record(&mut ledger, record)?;
            processed.insert(&record.id);
            applied += 1;
        }
    }

    if applied == 0 {
        info!("No new matches to process");
        return Ok(existing);
    }
    info!(matches = applied, "Applied new matches");

    let assembler = LeaderboardAssembler::new(config.tiers.clone())?;
    let document = assembler.assemble(&ledger, current_timestamp());

    persist::write_json_atomic(&config.paths.leaderboard_file, &document)?;
    processed.save(&config.paths.processed_file)?;

    info!(
        players = document.player_count,
        file = %config.paths.leaderboard_file.display(),
        "Incremental update complete"
    );
    Ok(document)
}
