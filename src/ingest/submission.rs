//! Raw submission shapes and normalization
//!
//! Two historical shapes exist side by side: newer submissions carry
//! `matches` with explicit per-player `{mu, sigma}` seed ratings; older ones
//! carry `replays` with a single `skill` number per player, from which the
//! uncertainty is derived as `skill / 3`. Both normalize to the same
//! [`MatchRecord`] before entering the engine.

use crate::config::SkillModelConfig;
use crate::error::{LadderError, Result};
use crate::types::{MatchRecord, PlayerId, SkillEstimate};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Seed rating in the newer submission shape
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeedRating {
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
}

/// One game in the newer shape
#[derive(Debug, Clone, Deserialize)]
pub struct RawMatch {
    pub winner: Option<String>,
    #[serde(default)]
    pub seed_ratings: BTreeMap<String, RawSeedRating>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
}

/// One player inside an older-shape replay
#[derive(Debug, Clone, Deserialize)]
pub struct RawReplayPlayer {
    pub name: String,
    pub skill: Option<f64>,
}

/// One game in the older shape
#[derive(Debug, Clone, Deserialize)]
pub struct RawReplay {
    pub winner: Option<String>,
    #[serde(default)]
    pub players: Vec<RawReplayPlayer>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
}

/// A best-of-three submission document as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubmission {
    pub players: Vec<PlayerId>,
    /// Declared series winner; informational, per-game winners drive the
    /// engine
    #[serde(default)]
    pub winner: Option<PlayerId>,
    #[serde(default)]
    pub matches: Vec<RawMatch>,
    #[serde(default)]
    pub replays: Vec<RawReplay>,
}

/// A validated submission: two players plus normalized match records
#[derive(Debug, Clone)]
pub struct Submission {
    /// Submission id, taken from the file stem
    pub id: String,
    pub players: (PlayerId, PlayerId),
    pub records: Vec<MatchRecord>,
}

impl Submission {
    /// Normalize a raw submission, skipping unusable games with a diagnostic
    ///
    /// Fails only on structural problems (wrong player count); individual
    /// malformed games are dropped so the rest keep processing.
    pub fn normalize(id: &str, raw: RawSubmission, skill: &SkillModelConfig) -> Result<Self> {
        if raw.players.len() != 2 {
            return Err(LadderError::InvalidSubmission {
                reason: format!("{}: expected 2 players, got {}", id, raw.players.len()),
            }
            .into());
        }
        let first = raw.players[0].clone();
        let second = raw.players[1].clone();

        let mut records = Vec::new();
        let mut game_index = 0;

        for raw_match in &raw.matches {
            let match_id = format!("{}#{}", id, game_index);
            game_index += 1;
            match normalize_match(&match_id, raw_match, &first, &second, skill) {
                Some(record) => records.push(record),
                None => warn!(submission = id, game = match_id, "Skipping unusable game"),
            }
        }
        for raw_replay in &raw.replays {
            let match_id = format!("{}#{}", id, game_index);
            game_index += 1;
            match normalize_replay(&match_id, raw_replay, &first, &second, skill) {
                Some(record) => records.push(record),
                None => warn!(submission = id, game = match_id, "Skipping unusable replay"),
            }
        }

        Ok(Self {
            id: id.to_string(),
            players: (first, second),
            records,
        })
    }

}

/// Resolve the winner field against the two player names
///
/// A missing winner means the game never resolved and is dropped; a present
/// winner matching neither player (e.g. an explicit draw marker) is a tie.
fn resolve_winner(
    winner: &Option<String>,
    first: &str,
    second: &str,
) -> Option<Option<PlayerId>> {
    let name = winner.as_deref()?;
    if name == first || name == second {
        Some(Some(name.to_string()))
    } else {
        debug!(winner = name, "Winner matches neither player, treating as tie");
        Some(None)
    }
}

fn seed_from_raw(raw: Option<&RawSeedRating>, skill: &SkillModelConfig) -> SkillEstimate {
    let mean = raw.and_then(|r| r.mu).unwrap_or(skill.default_mean);
    let uncertainty = raw
        .and_then(|r| r.sigma)
        .filter(|sigma| *sigma > 0.0)
        .unwrap_or(skill.default_uncertainty);
    SkillEstimate::new(mean, uncertainty)
}

fn normalize_match(
    match_id: &str,
    raw: &RawMatch,
    first: &str,
    second: &str,
    skill: &SkillModelConfig,
) -> Option<MatchRecord> {
    if raw.seed_ratings.is_empty() {
        return None;
    }
    let winner = resolve_winner(&raw.winner, first, second)?;

    Some(MatchRecord {
        id: match_id.to_string(),
        first: first.to_string(),
        second: second.to_string(),
        winner,
        first_seed: seed_from_raw(raw.seed_ratings.get(first), skill),
        second_seed: seed_from_raw(raw.seed_ratings.get(second), skill),
        map: raw.map.clone(),
        duration_seconds: raw.duration,
    })
}

fn normalize_replay(
    match_id: &str,
    raw: &RawReplay,
    first: &str,
    second: &str,
    skill: &SkillModelConfig,
) -> Option<MatchRecord> {
    if raw.players.len() != 2 {
        return None;
    }
    let winner = resolve_winner(&raw.winner, first, second)?;

    // Older replays carry one skill number; uncertainty is skill / 3
    let seed_for = |name: &str| -> Option<SkillEstimate> {
        let player = raw.players.iter().find(|p| p.name == name)?;
        let mean = player.skill?;
        let uncertainty = mean / 3.0;
        Some(SkillEstimate::new(
            mean,
            if uncertainty > 0.0 {
                uncertainty
            } else {
                skill.default_uncertainty
            },
        ))
    };

    Some(MatchRecord {
        id: match_id.to_string(),
        first: first.to_string(),
        second: second.to_string(),
        winner,
        first_seed: seed_for(first)?,
        second_seed: seed_for(second)?,
        map: raw.map.clone(),
        duration_seconds: raw.duration,
    })
}
