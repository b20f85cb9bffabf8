//! Tier ladder configuration
//!
//! The ordered tier table, the empirical percentile distribution, and the
//! optional per-tier promotion minimums. Tier bounds are interpreted either
//! as raw skill-ordinal thresholds or as percentiles; the choice is a single
//! system-wide mode and the two are never mixed in one leaderboard.

use crate::error::{LadderError, Result};
use std::collections::BTreeMap;

/// How tier lower/upper bounds are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierBoundKind {
    /// Bounds are skill-ordinal thresholds over the real line
    Skill,
    /// Bounds are percentiles in [0, 100]
    Percentile,
}

/// One tier band: skill bound interval plus its Champion Rating range
#[derive(Debug, Clone)]
pub struct TierDefinition {
    pub name: String,
    /// Inclusive lower bound (ordinal or percentile per [`TierBoundKind`])
    pub lower: f64,
    /// Exclusive upper bound
    pub upper: f64,
    pub min_cr: i64,
    pub max_cr: i64,
    /// Display asset path for the static site
    pub logo: String,
}

impl TierDefinition {
    fn new(name: &str, lower: f64, upper: f64, min_cr: i64, max_cr: i64, logo: &str) -> Self {
        Self {
            name: name.to_string(),
            lower,
            upper,
            min_cr,
            max_cr,
            logo: logo.to_string(),
        }
    }

    /// Range string shown in tier headers
    pub fn cr_range_label(&self) -> String {
        format!("CR {}-{}", self.min_cr, self.max_cr)
    }
}

/// Full tier ladder configuration
#[derive(Debug, Clone)]
pub struct TierConfig {
    pub bound_kind: TierBoundKind,
    /// Ascending by bound; contiguous and exhaustive
    pub tiers: Vec<TierDefinition>,
    /// Empirical (percentile, skill-ordinal) control points, ascending by
    /// ordinal; encodes an external population distribution, not the current
    /// player pool
    pub percentile_points: Vec<(f64, f64)>,
    /// When set, a player's displayed tier is demoted to the highest tier
    /// whose match-count minimum they satisfy; `None` disables gating
    pub promotion_minimums: Option<BTreeMap<String, u32>>,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            bound_kind: TierBoundKind::Skill,
            tiers: vec![
                TierDefinition::new(
                    "Bronze",
                    f64::NEG_INFINITY,
                    10.0,
                    900,
                    1200,
                    "static/images/tiers/bronze.svg",
                ),
                TierDefinition::new(
                    "Silver",
                    10.0,
                    20.0,
                    1200,
                    1500,
                    "static/images/tiers/silver.svg",
                ),
                TierDefinition::new(
                    "Gold",
                    20.0,
                    30.0,
                    1500,
                    1800,
                    "static/images/tiers/gold.svg",
                ),
                TierDefinition::new(
                    "Platinum",
                    30.0,
                    40.0,
                    1800,
                    2100,
                    "static/images/tiers/platinum.svg",
                ),
                TierDefinition::new(
                    "Diamond",
                    40.0,
                    50.0,
                    2100,
                    2500,
                    "static/images/tiers/diamond.svg",
                ),
                TierDefinition::new(
                    "Master",
                    50.0,
                    60.0,
                    2500,
                    3000,
                    "static/images/tiers/master.svg",
                ),
                TierDefinition::new(
                    "Grandmaster",
                    60.0,
                    f64::INFINITY,
                    3000,
                    5000,
                    "static/images/tiers/master.svg",
                ),
            ],
            percentile_points: vec![
                (1.0, 2.60),
                (5.0, 7.26),
                (10.0, 9.58),
                (20.0, 12.21),
                (30.0, 13.84),
                (40.0, 14.86),
                (50.0, 16.45),
                (60.0, 18.17),
                (70.0, 19.57),
                (80.0, 21.80),
                (90.0, 25.45),
                (95.0, 29.43),
                (96.0, 31.02),
                (97.0, 32.61),
                (98.0, 35.30),
                (99.0, 39.68),
            ],
            promotion_minimums: None,
        }
    }
}

impl TierConfig {
    /// Position of a tier in the ladder, 0 = lowest
    pub fn tier_rank(&self, name: &str) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.name == name)
    }

    /// Look up a tier definition by name
    pub fn tier_by_name(&self, name: &str) -> Option<&TierDefinition> {
        self.tiers.iter().find(|tier| tier.name == name)
    }

    /// Validate tier ordering, contiguity, and CR range monotonicity
    pub fn validate(&self) -> Result<()> {
        if self.tiers.is_empty() {
            return Err(LadderError::ConfigurationError {
                message: "Tier table cannot be empty".to_string(),
            }
            .into());
        }

        for pair in self.tiers.windows(2) {
            if pair[0].upper != pair[1].lower {
                return Err(LadderError::ConfigurationError {
                    message: format!(
                        "Tiers {} and {} are not contiguous",
                        pair[0].name, pair[1].name
                    ),
                }
                .into());
            }
            if pair[0].max_cr > pair[1].min_cr {
                return Err(LadderError::ConfigurationError {
                    message: format!(
                        "CR ranges of {} and {} overlap",
                        pair[0].name, pair[1].name
                    ),
                }
                .into());
            }
        }

        for tier in &self.tiers {
            if tier.lower >= tier.upper {
                return Err(LadderError::ConfigurationError {
                    message: format!("Tier {} has an empty bound interval", tier.name),
                }
                .into());
            }
            if tier.min_cr >= tier.max_cr {
                return Err(LadderError::ConfigurationError {
                    message: format!("Tier {} has an empty CR range", tier.name),
                }
                .into());
            }
        }

        match self.bound_kind {
            TierBoundKind::Skill => {
                if self.tiers[0].lower != f64::NEG_INFINITY
                    || self.tiers[self.tiers.len() - 1].upper != f64::INFINITY
                {
                    return Err(LadderError::ConfigurationError {
                        message: "Skill-threshold tiers must cover the real line".to_string(),
                    }
                    .into());
                }
            }
            TierBoundKind::Percentile => {
                if self.tiers[0].lower != 0.0 || self.tiers[self.tiers.len() - 1].upper != 100.0 {
                    return Err(LadderError::ConfigurationError {
                        message: "Percentile tiers must cover [0, 100]".to_string(),
                    }
                    .into());
                }
            }
        }

        if self.percentile_points.len() < 2 {
            return Err(LadderError::ConfigurationError {
                message: "Percentile table needs at least two control points".to_string(),
            }
            .into());
        }
        for pair in self.percentile_points.windows(2) {
            if pair[0].1 >= pair[1].1 || pair[0].0 >= pair[1].0 {
                return Err(LadderError::ConfigurationError {
                    message: "Percentile table must be strictly ascending".to_string(),
                }
                .into());
            }
        }

        if let Some(minimums) = &self.promotion_minimums {
            for name in minimums.keys() {
                if self.tier_rank(name).is_none() {
                    return Err(LadderError::ConfigurationError {
                        message: format!("Promotion minimum for unknown tier {}", name),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}
