//! Full leaderboard recalculation
//!
//! Replays every match record from scratch against a fresh ledger.
//! Idempotent by construction since it never reads prior output; use this
//! after config changes (tier boundaries, CR constants) or bug fixes.

use crate::config::AppConfig;
use crate::error::Result;
use crate::ingest::load_submissions;
use crate::leaderboard::{LeaderboardAssembler, LeaderboardDocument};
use crate::ledger::PlayerLedger;
use crate::pipeline::engine::MatchEngine;
use crate::pipeline::persist;
use crate::pipeline::processed::ProcessedSet;
use crate::utils::current_timestamp;
use tracing::info;

/// Rebuild the leaderboard from the full submission corpus and persist it
///
/// Any failure aborts the whole run; no partial document is written. The
/// processed-id set is rewritten to cover everything applied, so a later
/// incremental run starts from a consistent baseline.
pub fn recalculate(config: &AppConfig) -> Result<LeaderboardDocument> {
    let submissions = load_submissions(&config.paths.submissions_dir, &config.skill)?;
    let engine = MatchEngine::new(config)?;

    let mut ledger = PlayerLedger::new();
    let mut processed = ProcessedSet::default();
    let mut applied = 0usize;

    for submission in &submissions {
        for record in &submission.records {
            engine.apply_record(&mut ledger, record)?;
            processed.insert(&record.id);
            applied += 1;
        }
    }
    info!(
        matches = applied,
        players = ledger.len(),
        "Replayed full match corpus"
    );

    let assembler = LeaderboardAssembler::new(config.tiers.clone())?;
    let document = assembler.assemble(&ledger, current_timestamp());

    persist::write_json_atomic(&config.paths.leaderboard_file, &document)?;
    processed.save(&config.paths.processed_file)?;

    info!(
        players = document.player_count,
        file = %config.paths.leaderboard_file.display(),
        "Full recalculation complete"
    );
    Ok(document)
}
