//! Integration tests for the duel-ladder engine
//!
//! These tests validate the whole pipeline working together: submission
//! ingestion, skill updates, tier placement, Champion Rating movement, and
//! leaderboard assembly, end to end through the filesystem.

use duel_ladder::config::AppConfig;
use duel_ladder::leaderboard::LeaderboardRecord;
use duel_ladder::pipeline::{incremental_update, recalculate, ProcessedSet};
use std::fs;
use std::path::Path;

fn test_config(root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.paths.submissions_dir = root.join("submissions");
    config.paths.leaderboard_file = root.join("data/leaderboard.json");
    config.paths.processed_file = root.join("data/processed.json");
    config
}

fn write_submission(config: &AppConfig, name: &str, contents: &str) {
    fs::create_dir_all(&config.paths.submissions_dir).unwrap();
    fs::write(config.paths.submissions_dir.join(name), contents).unwrap();
}

/// A (seed ordinal 25, Gold) beats B (seed ordinal 10, Silver)
const A_BEATS_B: &str = r#"{
    "players": ["player_a", "player_b"],
    "winner": "player_a",
    "matches": [
        {
            "winner": "player_a",
            "map": "Supreme Isthmus",
            "duration": 1180,
            "seed_ratings": {
                "player_a": {"mu": 30.0, "sigma": 5.0},
                "player_b": {"mu": 14.0, "sigma": 4.0}
            }
        }
    ]
}"#;

#[test]
fn test_end_to_end_single_match() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_submission(&config, "2025-06-01-a-b.json", A_BEATS_B);

    let document = recalculate(&config).unwrap();
    assert_eq!(document.player_count, 2);

    let a = document
        .player_entries()
        .find(|entry| entry.player == "player_a")
        .unwrap();
    let b = document
        .player_entries()
        .find(|entry| entry.player == "player_b")
        .unwrap();

    // Tiers and initial CR derive from the seed ordinals (25 -> Gold, 10 -> Silver)
    assert_eq!(a.tier, "Gold");
    assert_eq!(a.initial_cr, 1650);
    assert_eq!(b.tier, "Silver");
    assert_eq!(b.initial_cr, 1350);

    // A beat a weaker opponent: gain in [2, 30] biased low, B pays the
    // mirrored larger magnitude
    let a_gain = a.current_cr - a.initial_cr;
    let b_loss = b.initial_cr - b.current_cr;
    assert!((2..=30).contains(&a_gain));
    assert!(a_gain < 15);
    assert!(b_loss > 15);
    assert!((2..=30).contains(&b_loss));

    assert_eq!(a.winrate, 100.0);
    assert_eq!(b.winrate, 0.0);

    // A tops its tier
    let a_rank = document
        .entries
        .iter()
        .find_map(|record| match record {
            LeaderboardRecord::Player { entry, tier_rank } if entry.player == "player_a" => {
                Some(*tier_rank)
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(a_rank, 1);
}

#[test]
fn test_leaderboard_ordering_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_submission(&config, "2025-06-01-a-b.json", A_BEATS_B);
    write_submission(
        &config,
        "2025-06-02-c-d.json",
        r#"{
            "players": ["player_c", "player_d"],
            "winner": "player_c",
            "matches": [
                {
                    "winner": "player_c",
                    "seed_ratings": {
                        "player_c": {"mu": 58.0, "sigma": 3.0},
                        "player_d": {"mu": 8.0, "sigma": 3.0}
                    }
                }
            ]
        }"#,
    );

    let document = recalculate(&config).unwrap();
    let tier_config = config.tiers.clone();

    // Tiers appear highest-first and player tiers are contiguous; within a
    // tier, CR never increases with rank
    let mut last_tier_rank = usize::MAX;
    let mut last_cr = i64::MAX;
    for record in &document.entries {
        match record {
            LeaderboardRecord::TierHeader { tier, .. } => {
                let rank = tier_config.tier_rank(tier).unwrap();
                assert!(rank < last_tier_rank, "tier {} out of order", tier);
                last_tier_rank = rank;
                last_cr = i64::MAX;
            }
            LeaderboardRecord::Player { entry, .. } => {
                assert_eq!(tier_config.tier_rank(&entry.tier), Some(last_tier_rank));
                assert!(entry.current_cr <= last_cr);
                last_cr = entry.current_cr;
            }
            LeaderboardRecord::TierSeparator { .. } => {}
        }
    }
}

#[test]
fn test_mixed_format_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_submission(&config, "2025-06-01-a-b.json", A_BEATS_B);
    // Older replay shape for the same pair
    write_submission(
        &config,
        "2025-06-02-a-b.json",
        r#"{
            "players": ["player_a", "player_b"],
            "replays": [
                {
                    "winner": "player_b",
                    "players": [
                        {"name": "player_a", "skill": 30.0},
                        {"name": "player_b", "skill": 15.0}
                    ]
                }
            ]
        }"#,
    );

    let document = recalculate(&config).unwrap();
    let a = document
        .player_entries()
        .find(|entry| entry.player == "player_a")
        .unwrap();
    assert_eq!(a.matches, 2);
    assert_eq!((a.wins, a.losses), (1, 1));
    assert_eq!(a.winrate, 50.0);
}

#[test]
fn test_incremental_idempotence_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_submission(&config, "2025-06-01-a-b.json", A_BEATS_B);
    recalculate(&config).unwrap();

    // Running update repeatedly without new submissions changes nothing
    let first = incremental_update(&config).unwrap();
    let second = incremental_update(&config).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let processed = ProcessedSet::load(&config.paths.processed_file);
    assert_eq!(processed.len(), 1);
}

#[test]
fn test_malformed_submission_does_not_abort_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_submission(&config, "2025-06-01-a-b.json", A_BEATS_B);
    write_submission(&config, "2025-06-00-bad.json", "{not json at all");
    write_submission(
        &config,
        "2025-06-00-solo.json",
        r#"{"players": ["loner"], "matches": []}"#,
    );

    let document = recalculate(&config).unwrap();
    // The good submission still lands on the board
    assert_eq!(document.player_count, 2);
}
