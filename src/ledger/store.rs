//! Per-player ledger entries and the ledger store

use crate::error::{LadderError, Result};
use crate::tier::TierMapper;
use crate::types::PlayerId;
use crate::utils::{round1, round2, round6};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The authoritative record for one player
///
/// `initial_cr` and `initial_ordinal` are captured at first appearance and
/// never recomputed; everything else is mutated by each applied match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub player: PlayerId,
    /// Display tier, recomputed from current CR after every mutation
    pub tier: String,
    pub initial_cr: i64,
    pub current_cr: i64,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Win percentage, one decimal place
    pub winrate: f64,
    #[serde(rename = "initial_os")]
    pub initial_ordinal: f64,
    /// Percentile of the initial ordinal in the reference distribution
    pub percentile: f64,
    #[serde(rename = "latest_os")]
    pub latest_ordinal: Option<f64>,
}

/// All player records, keyed by name
///
/// Backed by a `BTreeMap` so iteration order is deterministic regardless of
/// insertion order.
#[derive(Debug, Default)]
pub struct PlayerLedger {
    entries: BTreeMap<PlayerId, LedgerEntry>,
}

impl PlayerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted player rows
    pub fn from_entries(entries: impl IntoIterator<Item = LedgerEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.player.clone(), entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.entries.contains_key(player)
    }

    pub fn get(&self, player: &str) -> Option<&LedgerEntry> {
        self.entries.get(player)
    }

    /// Deterministically ordered view of all entries
    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.values()
    }

    /// Create an entry on a player's first appearance
    ///
    /// Tier and initial CR are derived from the initial ordinal via the
    /// mapper; the CR starts at the tier midpoint. No-op for an existing
    /// player, even if their first-appearance data would now differ.
    pub fn ensure(&mut self, player: &str, initial_ordinal: f64, mapper: &TierMapper) {
        if self.entries.contains_key(player) {
            return;
        }

        let tier = mapper.placement_tier(initial_ordinal);
        let initial_cr = mapper.initial_cr_for_tier(tier);
        let percentile = mapper.percentile_for_skill(initial_ordinal);

        tracing::debug!(
            player,
            ordinal = initial_ordinal,
            tier = %tier.name,
            cr = initial_cr,
            "Creating ledger entry"
        );

        self.entries.insert(
            player.to_string(),
            LedgerEntry {
                player: player.to_string(),
                tier: tier.name.clone(),
                initial_cr,
                current_cr: initial_cr,
                matches: 0,
                wins: 0,
                losses: 0,
                winrate: 0.0,
                initial_ordinal: round6(initial_ordinal),
                percentile: round2(percentile),
                latest_ordinal: None,
            },
        );
    }

    /// Apply one finished match to a player's record
    ///
    /// The per-match delta is bounded upstream; the running CR total itself
    /// has no floor or ceiling. The display tier follows the new CR.
    pub fn apply_match(
        &mut self,
        player: &str,
        cr_delta: i64,
        new_ordinal: f64,
        did_win: bool,
        mapper: &TierMapper,
    ) -> Result<()> {
        let entry = self
            .entries
            .get_mut(player)
            .ok_or_else(|| LadderError::PlayerNotFound {
                player: player.to_string(),
            })?;

        entry.current_cr += cr_delta;
        entry.matches += 1;
        if did_win {
            entry.wins += 1;
        } else {
            entry.losses += 1;
        }
        entry.winrate = round1(f64::from(entry.wins) / f64::from(entry.matches) * 100.0);
        entry.latest_ordinal = Some(round2(new_ordinal));
        entry.tier = mapper.display_tier(entry.current_cr, entry.matches).name.clone();

        Ok(())
    }
}
