//! Persisted leaderboard document shapes
//!
//! The document is a derived view, rebuilt in full on every run; it is not a
//! source of truth for anything except direct display. The JSON layout
//! (tagged entry types, field names) is what the static site consumes.

use crate::ledger::LedgerEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record in the ordered leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LeaderboardRecord {
    TierHeader {
        tier: String,
        tier_logo: String,
        /// CR range string, e.g. `"CR 1500-1800"`
        tier_info: String,
        tier_header: bool,
    },
    TierSeparator {
        tier: String,
        tier_logo: String,
        separator: bool,
    },
    Player {
        #[serde(flatten)]
        entry: LedgerEntry,
        /// Rank within the tier, starting at 1
        tier_rank: u32,
    },
}

/// The complete persisted leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardDocument {
    pub updated_at: DateTime<Utc>,
    /// Player rows only; headers and separators are excluded
    pub player_count: usize,
    pub entries: Vec<LeaderboardRecord>,
}

impl LeaderboardDocument {
    /// Player rows in document order, for rebuilding a ledger
    pub fn player_entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter_map(|record| match record {
            LeaderboardRecord::Player { entry, .. } => Some(entry),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_tags() {
        let header = LeaderboardRecord::TierHeader {
            tier: "Gold".to_string(),
            tier_logo: "static/images/tiers/gold.svg".to_string(),
            tier_info: "CR 1500-1800".to_string(),
            tier_header: true,
        };
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["type"], "tier_header");
        assert_eq!(json["tier_info"], "CR 1500-1800");

        let separator = LeaderboardRecord::TierSeparator {
            tier: String::new(),
            tier_logo: String::new(),
            separator: true,
        };
        let json = serde_json::to_value(&separator).unwrap();
        assert_eq!(json["type"], "tier_separator");
    }

    #[test]
    fn test_player_row_flattens_entry() {
        let record = LeaderboardRecord::Player {
            entry: LedgerEntry {
                player: "alice".to_string(),
                tier: "Gold".to_string(),
                initial_cr: 1650,
                current_cr: 1680,
                matches: 2,
                wins: 2,
                losses: 0,
                winrate: 100.0,
                initial_ordinal: 25.0,
                percentile: 88.85,
                latest_ordinal: Some(26.1),
            },
            tier_rank: 1,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "player");
        assert_eq!(json["player"], "alice");
        assert_eq!(json["initial_os"], 25.0);
        assert_eq!(json["latest_os"], 26.1);
        assert_eq!(json["tier_rank"], 1);
    }
}
