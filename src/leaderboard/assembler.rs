//! Deterministic leaderboard assembly

use crate::config::TierConfig;
use crate::error::Result;
use crate::ledger::{LedgerEntry, PlayerLedger};
use crate::leaderboard::document::{LeaderboardDocument, LeaderboardRecord};
use chrono::{DateTime, Utc};

/// Builds the ordered, tier-grouped document from ledger state
///
/// Given the same ledger, `assemble` produces identical ordering every time:
/// entries are sorted by (tier rank descending, current CR descending), and
/// equal-CR players keep the ledger's name order because the sort is stable
/// over a name-sorted input.
#[derive(Debug)]
pub struct LeaderboardAssembler {
    tiers: TierConfig,
}

impl LeaderboardAssembler {
    /// Create a new assembler from validated configuration
    pub fn new(tiers: TierConfig) -> Result<Self> {
        tiers.validate()?;
        Ok(Self { tiers })
    }

    /// Assemble the full document at the given timestamp
    ///
    /// Players with zero applied matches are kept in the ledger but omitted
    /// from the document.
    pub fn assemble(&self, ledger: &PlayerLedger, updated_at: DateTime<Utc>) -> LeaderboardDocument {
        let mut rows: Vec<&LedgerEntry> =
            ledger.entries().filter(|entry| entry.matches > 0).collect();
        rows.sort_by(|a, b| {
            let rank_a = self.tiers.tier_rank(&a.tier).unwrap_or(0);
            let rank_b = self.tiers.tier_rank(&b.tier).unwrap_or(0);
            rank_b
                .cmp(&rank_a)
                .then_with(|| b.current_cr.cmp(&a.current_cr))
        });

        let mut entries = Vec::with_capacity(rows.len() + 2 * self.tiers.tiers.len());
        let mut current_tier: Option<&str> = None;
        let mut tier_rank = 0;

        for row in &rows {
            if current_tier != Some(row.tier.as_str()) {
                // Separator between tiers, but not before the very first one
                if current_tier.is_some() {
                    entries.push(LeaderboardRecord::TierSeparator {
                        tier: String::new(),
                        tier_logo: String::new(),
                        separator: true,
                    });
                }
                current_tier = Some(row.tier.as_str());
                tier_rank = 0;

                let (logo, info) = self
                    .tiers
                    .tier_by_name(&row.tier)
                    .map(|tier| (tier.logo.clone(), tier.cr_range_label()))
                    .unwrap_or_default();
                entries.push(LeaderboardRecord::TierHeader {
                    tier: row.tier.clone(),
                    tier_logo: logo,
                    tier_info: info,
                    tier_header: true,
                });
            }

            tier_rank += 1;
            entries.push(LeaderboardRecord::Player {
                entry: (*row).clone(),
                tier_rank,
            });
        }

        LeaderboardDocument {
            updated_at,
            player_count: rows.len(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::TierMapper;
    use chrono::TimeZone;

    fn entry(player: &str, tier: &str, current_cr: i64, matches: u32) -> LedgerEntry {
        LedgerEntry {
            player: player.to_string(),
            tier: tier.to_string(),
            initial_cr: current_cr,
            current_cr,
            matches,
            wins: matches,
            losses: 0,
            winrate: if matches > 0 { 100.0 } else { 0.0 },
            initial_ordinal: 20.0,
            percentile: 50.0,
            latest_ordinal: Some(20.0),
        }
    }

    fn assembler() -> LeaderboardAssembler {
        LeaderboardAssembler::new(TierConfig::default()).unwrap()
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_tiers_ordered_highest_first() {
        let ledger = PlayerLedger::from_entries(vec![
            entry("bronze_player", "Bronze", 1050, 3),
            entry("master_player", "Master", 2700, 3),
            entry("gold_player", "Gold", 1650, 3),
        ]);

        let doc = assembler().assemble(&ledger, timestamp());
        let headers: Vec<&str> = doc
            .entries
            .iter()
            .filter_map(|record| match record {
                LeaderboardRecord::TierHeader { tier, .. } => Some(tier.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec!["Master", "Gold", "Bronze"]);
        assert_eq!(doc.player_count, 3);
    }

    #[test]
    fn test_within_tier_cr_descending_with_ranks() {
        let ledger = PlayerLedger::from_entries(vec![
            entry("alice", "Gold", 1600, 4),
            entry("bob", "Gold", 1750, 4),
            entry("carol", "Gold", 1700, 4),
        ]);

        let doc = assembler().assemble(&ledger, timestamp());
        let players: Vec<(&str, u32)> = doc
            .entries
            .iter()
            .filter_map(|record| match record {
                LeaderboardRecord::Player { entry, tier_rank } => {
                    Some((entry.player.as_str(), *tier_rank))
                }
                _ => None,
            })
            .collect();
        assert_eq!(players, vec![("bob", 1), ("carol", 2), ("alice", 3)]);
    }

    #[test]
    fn test_no_separator_before_first_tier() {
        let ledger = PlayerLedger::from_entries(vec![
            entry("alice", "Gold", 1650, 1),
            entry("bob", "Silver", 1350, 1),
        ]);

        let doc = assembler().assemble(&ledger, timestamp());
        assert!(matches!(
            doc.entries[0],
            LeaderboardRecord::TierHeader { .. }
        ));
        // Gold header, player, separator, Silver header, player
        assert_eq!(doc.entries.len(), 5);
        assert!(matches!(
            doc.entries[2],
            LeaderboardRecord::TierSeparator { .. }
        ));
    }

    #[test]
    fn test_zero_match_players_excluded() {
        let ledger = PlayerLedger::from_entries(vec![
            entry("active", "Gold", 1650, 2),
            entry("idle", "Gold", 1650, 0),
        ]);

        let doc = assembler().assemble(&ledger, timestamp());
        assert_eq!(doc.player_count, 1);
        assert_eq!(doc.player_entries().count(), 1);
    }

    #[test]
    fn test_equal_cr_ties_break_by_ledger_order() {
        let mapper = TierMapper::new(TierConfig::default()).unwrap();
        let mut ledger = PlayerLedger::new();
        ledger.ensure("zoe", 25.0, &mapper);
        ledger.ensure("alice", 25.0, &mapper);
        ledger.apply_match("zoe", 15, 25.0, true, &mapper).unwrap();
        ledger.apply_match("alice", 15, 25.0, true, &mapper).unwrap();

        let doc = assembler().assemble(&ledger, timestamp());
        let players: Vec<&str> = doc
            .player_entries()
            .map(|entry| entry.player.as_str())
            .collect();
        // Same tier, same CR: the name-sorted ledger order is preserved
        assert_eq!(players, vec!["alice", "zoe"]);
    }

    #[test]
    fn test_assembly_is_repeatable() {
        let ledger = PlayerLedger::from_entries(vec![
            entry("alice", "Gold", 1700, 2),
            entry("bob", "Silver", 1350, 2),
            entry("carol", "Gold", 1600, 2),
        ]);

        let assembler = assembler();
        let first = serde_json::to_string(&assembler.assemble(&ledger, timestamp())).unwrap();
        let second = serde_json::to_string(&assembler.assemble(&ledger, timestamp())).unwrap();
        assert_eq!(first, second);
    }
}
