//! Dynamic Champion Rating deltas
//!
//! CR is a display score separate from the skill estimate. It moves by small
//! bounded integer increments per match, scaled by the pre-match skill gap:
//! beating a much stronger opponent earns the maximum gain, beating a much
//! weaker one the minimum, and the loser's loss mirrors toward the opposite
//! bound, so the two sides of a lopsided match are deliberately asymmetric.

use crate::config::CrConfig;
use crate::error::Result;

/// Computes the bounded CR delta for a finished match
#[derive(Debug)]
pub struct ChampionRatingUpdater {
    config: CrConfig,
}

impl ChampionRatingUpdater {
    /// Create a new updater from validated configuration
    pub fn new(config: CrConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Delta pair for a decisive match, from both players' pre-match ordinals
    ///
    /// Returns `(winner_delta, loser_delta)`; the winner delta is in
    /// `[min_change, max_change]`, the loser delta in
    /// `[-max_change, -min_change]`. A tie never reaches this function; it
    /// is a zero delta for both sides by definition.
    pub fn delta(&self, winner_pre_ordinal: f64, loser_pre_ordinal: f64) -> (i64, i64) {
        let base = self.config.base_change as f64;
        let min = self.config.min_change as f64;
        let max = self.config.max_change as f64;

        // Positive when the favorite won
        let diff = winner_pre_ordinal - loser_pre_ordinal;
        let normalized = (diff / self.config.skill_diff_threshold).clamp(-1.0, 1.0);

        // A full upset reaches max_change for the winner; the clamp makes
        // the favorite's gain bottom out at min_change instead of zero
        let winner_delta = (base - normalized * (max - base)).clamp(min, max);
        let loser_delta = (-(base + normalized * (max - base))).clamp(-max, -min);

        (
            winner_delta.round() as i64,
            loser_delta.round() as i64,
        )
    }
}
