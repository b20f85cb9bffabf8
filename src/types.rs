//! Common types used throughout the leaderboard engine

use serde::{Deserialize, Serialize};
use skillratings::weng_lin::WengLinRating;

/// Unique identifier for players (the in-game name)
pub type PlayerId = String;

/// Unique identifier for a single game within a submission
pub type MatchId = String;

/// A player's belief-state about their own true skill
///
/// The single scalar used for tier placement and CR deltas is the
/// conservative [`SkillEstimate::ordinal`], `mean - k * uncertainty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillEstimate {
    pub mean: f64,
    pub uncertainty: f64,
}

impl SkillEstimate {
    pub fn new(mean: f64, uncertainty: f64) -> Self {
        Self { mean, uncertainty }
    }

    /// Collapse the estimate to one comparable number
    ///
    /// `conservatism` is the k in `mean - k * uncertainty`; 1.0 matches the
    /// tier tables, 3.0 gives the conventional 99.7% lower bound.
    pub fn ordinal(&self, conservatism: f64) -> f64 {
        self.mean - conservatism * self.uncertainty
    }
}

impl From<WengLinRating> for SkillEstimate {
    fn from(rating: WengLinRating) -> Self {
        Self {
            mean: rating.rating,
            uncertainty: rating.uncertainty,
        }
    }
}

impl From<SkillEstimate> for WengLinRating {
    fn from(estimate: SkillEstimate) -> Self {
        Self {
            rating: estimate.mean,
            uncertainty: estimate.uncertainty,
        }
    }
}

/// Outcome of a single game between two players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

/// One validated game, normalized from either historical submission shape
///
/// Immutable once ingested; the same `id` must never be applied to the
/// ledger twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Stable match id, `{submission}#{game index}` when not explicit
    pub id: MatchId,
    pub first: PlayerId,
    pub second: PlayerId,
    /// Winner name; `None` for an unresolved tie
    pub winner: Option<PlayerId>,
    /// Pre-match ("seed") estimates, read before any mutation
    pub first_seed: SkillEstimate,
    pub second_seed: SkillEstimate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

impl MatchRecord {
    /// Derive the outcome from the winner name
    pub fn outcome(&self) -> MatchOutcome {
        match self.winner.as_deref() {
            Some(name) if name == self.first => MatchOutcome::FirstWins,
            Some(name) if name == self.second => MatchOutcome::SecondWins,
            _ => MatchOutcome::Tie,
        }
    }
}
