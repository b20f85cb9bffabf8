//! Main application configuration
//!
//! This module defines the primary configuration structure for the
//! duel-ladder engine, including environment variable loading and validation.

use crate::config::rating::{CrConfig, SkillModelConfig};
use crate::config::tiers::TierConfig;
use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub paths: PathSettings,
    pub skill: SkillModelConfig,
    pub cr: CrConfig,
    pub tiers: TierConfig,
}

/// Service-level settings
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Filesystem locations owned by the pipeline
#[derive(Debug, Clone)]
pub struct PathSettings {
    /// Directory of per-submission JSON documents
    pub submissions_dir: PathBuf,
    /// Output leaderboard document
    pub leaderboard_file: PathBuf,
    /// Persisted set of already-applied match ids
    pub processed_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            paths: PathSettings::default(),
            skill: SkillModelConfig::default(),
            cr: CrConfig::default(),
            tiers: TierConfig::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "duel-ladder".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            submissions_dir: PathBuf::from("submissions/bo3"),
            leaderboard_file: PathBuf::from("public/data/leaderboard.json"),
            processed_file: PathBuf::from("public/data/.processed_submissions.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(dir) = env::var("SUBMISSIONS_DIR") {
            config.paths.submissions_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("LEADERBOARD_FILE") {
            config.paths.leaderboard_file = PathBuf::from(file);
        }
        if let Ok(file) = env::var("PROCESSED_FILE") {
            config.paths.processed_file = PathBuf::from(file);
        }
        if let Ok(base) = env::var("CR_BASE_CHANGE") {
            config.cr.base_change = base
                .parse()
                .map_err(|_| anyhow!("Invalid CR_BASE_CHANGE value: {}", base))?;
        }
        if let Ok(min) = env::var("CR_MIN_CHANGE") {
            config.cr.min_change = min
                .parse()
                .map_err(|_| anyhow!("Invalid CR_MIN_CHANGE value: {}", min))?;
        }
        if let Ok(max) = env::var("CR_MAX_CHANGE") {
            config.cr.max_change = max
                .parse()
                .map_err(|_| anyhow!("Invalid CR_MAX_CHANGE value: {}", max))?;
        }
        if let Ok(threshold) = env::var("SKILL_DIFF_THRESHOLD") {
            config.cr.skill_diff_threshold = threshold
                .parse()
                .map_err(|_| anyhow!("Invalid SKILL_DIFF_THRESHOLD value: {}", threshold))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.paths.submissions_dir.as_os_str().is_empty() {
        return Err(anyhow!("Submissions directory cannot be empty"));
    }
    if config.paths.leaderboard_file.as_os_str().is_empty() {
        return Err(anyhow!("Leaderboard file cannot be empty"));
    }
    if config.paths.processed_file.as_os_str().is_empty() {
        return Err(anyhow!("Processed-ids file cannot be empty"));
    }

    config.skill.validate()?;
    config.cr.validate()?;
    config.tiers.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_cr_constants_rejected() {
        let mut config = AppConfig::default();
        config.cr.min_change = 0;
        assert!(validate_config(&config).is_err());
    }
}
