//! Weng-Lin (OpenSkill) skill model
//!
//! Wraps the Plackett-Luce style rating update from the skillratings crate.
//! The skillratings config has no dynamics term, so the configured tau is
//! reinjected into each player's uncertainty before every update; this keeps
//! long-standing ratings adaptable without letting uncertainty collapse.

use crate::config::SkillModelConfig;
use crate::error::{LadderError, Result};
use crate::types::{MatchOutcome, SkillEstimate};
use skillratings::weng_lin::{weng_lin_multi_team, WengLinConfig, WengLinRating};
use skillratings::MultiTeamOutcome;

/// Bayesian skill-rating model for two-team matches
#[derive(Debug)]
pub struct SkillModel {
    config: SkillModelConfig,
}

impl SkillModel {
    /// Create a new skill model from validated configuration
    pub fn new(config: SkillModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Default seed estimate for players with no prior
    pub fn seed(&self) -> SkillEstimate {
        SkillEstimate::new(self.config.default_mean, self.config.default_uncertainty)
    }

    /// Collapse an estimate to its ordinal using the configured conservatism
    pub fn ordinal(&self, estimate: &SkillEstimate) -> f64 {
        estimate.ordinal(self.config.ordinal_conservatism)
    }

    /// Replace a degenerate uncertainty and reinject the dynamics term
    fn prepare(&self, estimate: &SkillEstimate) -> WengLinRating {
        let uncertainty = if estimate.uncertainty > 0.0 {
            estimate.uncertainty
        } else {
            self.config.default_uncertainty
        };
        WengLinRating {
            rating: estimate.mean,
            uncertainty: (uncertainty.powi(2) + self.config.tau.powi(2)).sqrt(),
        }
    }

    /// Update both teams' estimates for a finished match
    ///
    /// A tie is rated as rank 1 vs rank 1; it still converges and moves the
    /// means less than a decisive result would.
    pub fn rate(
        &self,
        team_a: &[SkillEstimate],
        team_b: &[SkillEstimate],
        outcome: MatchOutcome,
    ) -> Result<(Vec<SkillEstimate>, Vec<SkillEstimate>)> {
        if team_a.is_empty() || team_b.is_empty() {
            return Err(LadderError::RatingCalculationFailed {
                reason: "Both teams need at least one player".to_string(),
            }
            .into());
        }

        let (rank_a, rank_b) = match outcome {
            MatchOutcome::FirstWins => (1, 2),
            MatchOutcome::SecondWins => (2, 1),
            MatchOutcome::Tie => (1, 1),
        };

        let ratings_a: Vec<WengLinRating> = team_a.iter().map(|e| self.prepare(e)).collect();
        let ratings_b: Vec<WengLinRating> = team_b.iter().map(|e| self.prepare(e)).collect();

        let teams: Vec<(&[WengLinRating], MultiTeamOutcome)> = vec![
            (ratings_a.as_slice(), MultiTeamOutcome::new(rank_a)),
            (ratings_b.as_slice(), MultiTeamOutcome::new(rank_b)),
        ];

        let weng_lin_config = WengLinConfig {
            beta: self.config.beta,
            uncertainty_tolerance: self.config.uncertainty_tolerance,
        };

        let updated = weng_lin_multi_team(&teams, &weng_lin_config);
        if updated.len() != 2 {
            return Err(LadderError::RatingCalculationFailed {
                reason: format!("Expected 2 team results, got {}", updated.len()),
            }
            .into());
        }

        let new_a = updated[0].iter().map(|r| SkillEstimate::from(*r)).collect();
        let new_b = updated[1].iter().map(|r| SkillEstimate::from(*r)).collect();
        Ok((new_a, new_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SkillModel {
        SkillModel::new(SkillModelConfig::default()).unwrap()
    }

    #[test]
    fn test_seed_estimate() {
        let seed = model().seed();
        assert_eq!(seed.mean, 25.0);
        assert_eq!(seed.uncertainty, 25.0 / 6.0);
    }

    #[test]
    fn test_decisive_match_moves_means() {
        let model = model();
        let a = vec![model.seed()];
        let b = vec![model.seed()];

        let (new_a, new_b) = model.rate(&a, &b, MatchOutcome::FirstWins).unwrap();

        assert!(new_a[0].mean > a[0].mean);
        assert!(new_b[0].mean < b[0].mean);
    }

    #[test]
    fn test_decisive_match_reduces_uncertainty() {
        let model = model();
        let a = vec![model.seed()];
        let b = vec![model.seed()];

        let (new_a, new_b) = model.rate(&a, &b, MatchOutcome::FirstWins).unwrap();

        assert!(new_a[0].uncertainty < a[0].uncertainty);
        assert!(new_b[0].uncertainty < b[0].uncertainty);
    }

    #[test]
    fn test_tie_moves_means_less_than_win() {
        let model = model();
        let a = vec![SkillEstimate::new(28.0, 4.0)];
        let b = vec![SkillEstimate::new(22.0, 4.0)];

        let (win_a, _) = model.rate(&a, &b, MatchOutcome::FirstWins).unwrap();
        let (tie_a, tie_b) = model.rate(&a, &b, MatchOutcome::Tie).unwrap();

        let win_shift = (win_a[0].mean - a[0].mean).abs();
        let tie_shift = (tie_a[0].mean - a[0].mean).abs();
        assert!(tie_shift < win_shift);

        // A tie pulls the favorite down and the underdog up
        assert!(tie_a[0].mean < a[0].mean);
        assert!(tie_b[0].mean > b[0].mean);
    }

    #[test]
    fn test_tie_between_equals_is_stable() {
        let model = model();
        let a = vec![model.seed()];
        let b = vec![model.seed()];

        let (new_a, new_b) = model.rate(&a, &b, MatchOutcome::Tie).unwrap();

        assert!((new_a[0].mean - new_b[0].mean).abs() < 1e-9);
        assert!((new_a[0].mean - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_uncertainty_substituted() {
        let model = model();
        let a = vec![SkillEstimate::new(25.0, 0.0)];
        let b = vec![model.seed()];

        // Must not divide by zero; the default uncertainty takes over
        let result = model.rate(&a, &b, MatchOutcome::FirstWins);
        assert!(result.is_ok());
        let (new_a, _) = result.unwrap();
        assert!(new_a[0].uncertainty > 0.0);
    }

    #[test]
    fn test_empty_team_rejected() {
        let model = model();
        let result = model.rate(&[], &[model.seed()], MatchOutcome::FirstWins);
        assert!(result.is_err());
    }
}
