//! Tier mapping between skill ordinals, percentiles, and Champion Ratings

use crate::config::{TierBoundKind, TierConfig, TierDefinition};
use crate::error::Result;

/// Resolves tiers from skill ordinals and Champion Ratings
///
/// A value outside every defined band is never an error: skill above all
/// bounds resolves to the highest tier, CR outside all ranges clamps to the
/// nearest end of the ladder.
#[derive(Debug)]
pub struct TierMapper {
    config: TierConfig,
}

impl TierMapper {
    /// Create a new mapper from validated configuration
    pub fn new(config: TierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    /// Placement tier for a new player, dispatching on the configured mode
    pub fn placement_tier(&self, ordinal: f64) -> &TierDefinition {
        match self.config.bound_kind {
            TierBoundKind::Skill => self.tier_for_skill(ordinal),
            TierBoundKind::Percentile => {
                self.tier_for_percentile(self.percentile_for_skill(ordinal))
            }
        }
    }

    /// Threshold-mode lookup: first tier whose `[lower, upper)` contains the
    /// ordinal; values at or above every upper bound take the highest tier
    pub fn tier_for_skill(&self, ordinal: f64) -> &TierDefinition {
        self.band_for(ordinal)
    }

    /// Percentile-mode band lookup, same overflow policy as threshold mode
    pub fn tier_for_percentile(&self, percentile: f64) -> &TierDefinition {
        self.band_for(percentile)
    }

    fn band_for(&self, value: f64) -> &TierDefinition {
        self.config
            .tiers
            .iter()
            .find(|tier| tier.lower <= value && value < tier.upper)
            .unwrap_or_else(|| self.config.tiers.last().expect("tier table is non-empty"))
    }

    /// Convert a skill ordinal to a percentile via the empirical table
    ///
    /// Below the first control point clamps to its percentile, above the
    /// last clamps likewise; between two points the percentile is linearly
    /// interpolated on the ordinal axis.
    pub fn percentile_for_skill(&self, ordinal: f64) -> f64 {
        let points = &self.config.percentile_points;
        let (first_percentile, first_ordinal) = points[0];
        let (last_percentile, last_ordinal) = points[points.len() - 1];

        if ordinal <= first_ordinal {
            return first_percentile;
        }
        if ordinal >= last_ordinal {
            return last_percentile;
        }

        for pair in points.windows(2) {
            let (p1, o1) = pair[0];
            let (p2, o2) = pair[1];
            if o1 <= ordinal && ordinal <= o2 {
                let ratio = (ordinal - o1) / (o2 - o1);
                return p1 + ratio * (p2 - p1);
            }
        }

        // Unreachable for a validated (strictly ascending) table
        50.0
    }

    /// The CR a brand-new player starts with: the integer midpoint of their
    /// tier's range, so early results have room to move them either way
    /// before they cross a tier line
    pub fn initial_cr_for_tier(&self, tier: &TierDefinition) -> i64 {
        (tier.min_cr + tier.max_cr).div_euclid(2)
    }

    /// Reverse lookup used for display: the tier whose CR range contains the
    /// current CR, clamped to the lowest/highest tier outside all ranges
    pub fn tier_for_cr(&self, current_cr: i64) -> &TierDefinition {
        let tiers = &self.config.tiers;
        if let Some(tier) = tiers
            .iter()
            .find(|tier| tier.min_cr <= current_cr && current_cr < tier.max_cr)
        {
            return tier;
        }
        if current_cr < tiers[0].min_cr {
            &tiers[0]
        } else {
            &tiers[tiers.len() - 1]
        }
    }

    /// Display tier with optional promotion gating
    ///
    /// When per-tier match minimums are configured, the player is demoted to
    /// the highest tier at or below their CR tier whose minimum their match
    /// count satisfies.
    pub fn display_tier(&self, current_cr: i64, matches_played: u32) -> &TierDefinition {
        let cr_tier = self.tier_for_cr(current_cr);
        let Some(minimums) = &self.config.promotion_minimums else {
            return cr_tier;
        };

        let rank = self
            .config
            .tier_rank(&cr_tier.name)
            .expect("tier came from the table");
        for tier in self.config.tiers[..=rank].iter().rev() {
            let minimum = minimums.get(&tier.name).copied().unwrap_or(0);
            if matches_played >= minimum {
                return tier;
            }
        }
        &self.config.tiers[0]
    }
}
