//! Rating system configuration
//!
//! Parameters for the Weng-Lin skill model and the dynamic Champion Rating
//! delta. Defaults carry the authoritative tournament tuning.

use crate::error::{LadderError, Result};

/// Parameters for the Bayesian skill-rating update
#[derive(Debug, Clone)]
pub struct SkillModelConfig {
    /// Seed mean for players with no prior estimate
    pub default_mean: f64,
    /// Seed uncertainty for players with no prior estimate; also substituted
    /// whenever a supplied uncertainty is zero or negative
    pub default_uncertainty: f64,
    /// Performance variance constant
    pub beta: f64,
    /// Dynamics constant; `sqrt(sigma^2 + tau^2)` is reinjected before every
    /// update so old ratings stay adaptable
    pub tau: f64,
    /// Numerical floor used by the underlying solver
    pub uncertainty_tolerance: f64,
    /// The k in `ordinal = mean - k * uncertainty` (1.0 or 3.0)
    pub ordinal_conservatism: f64,
}

impl Default for SkillModelConfig {
    fn default() -> Self {
        Self {
            default_mean: 25.0,
            default_uncertainty: 25.0 / 6.0,
            beta: 25.0 / 6.0,
            tau: 25.0 / 300.0,
            uncertainty_tolerance: 0.000_001,
            ordinal_conservatism: 1.0,
        }
    }
}

impl SkillModelConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.beta <= 0.0 {
            return Err(LadderError::ConfigurationError {
                message: "Beta must be positive".to_string(),
            }
            .into());
        }
        if self.tau < 0.0 {
            return Err(LadderError::ConfigurationError {
                message: "Tau must be non-negative".to_string(),
            }
            .into());
        }
        if self.default_uncertainty <= 0.0 {
            return Err(LadderError::ConfigurationError {
                message: "Default uncertainty must be positive".to_string(),
            }
            .into());
        }
        if self.ordinal_conservatism <= 0.0 {
            return Err(LadderError::ConfigurationError {
                message: "Ordinal conservatism must be positive".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Constants for the bounded, opponent-strength-sensitive CR delta
#[derive(Debug, Clone)]
pub struct CrConfig {
    /// CR change for evenly matched opponents
    pub base_change: i64,
    /// Smallest possible per-match change magnitude
    pub min_change: i64,
    /// Largest possible per-match change magnitude
    pub max_change: i64,
    /// Skill-ordinal difference at which the delta saturates
    pub skill_diff_threshold: f64,
}

impl Default for CrConfig {
    fn default() -> Self {
        Self {
            base_change: 15,
            min_change: 2,
            max_change: 30,
            skill_diff_threshold: 15.0,
        }
    }
}

impl CrConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.min_change <= 0 {
            return Err(LadderError::ConfigurationError {
                message: "Minimum CR change must be positive".to_string(),
            }
            .into());
        }
        if self.min_change > self.base_change || self.base_change > self.max_change {
            return Err(LadderError::ConfigurationError {
                message: "CR changes must satisfy min <= base <= max".to_string(),
            }
            .into());
        }
        if self.skill_diff_threshold <= 0.0 {
            return Err(LadderError::ConfigurationError {
                message: "Skill difference threshold must be positive".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
