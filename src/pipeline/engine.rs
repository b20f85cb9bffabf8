//! The match-application core
//!
//! Applies one validated match record to the ledger: skill update, CR delta,
//! counters, tier. Pure and synchronous; all I/O lives in the surrounding
//! pipeline modes.

use crate::config::AppConfig;
use crate::error::Result;
use crate::ledger::PlayerLedger;
use crate::rating::{ChampionRatingUpdater, SkillModel};
use crate::tier::TierMapper;
use crate::types::{MatchOutcome, MatchRecord};
use tracing::debug;

/// Combines the skill model, CR updater, and tier mapper into the single
/// step that moves the ledger forward by one match
#[derive(Debug)]
pub struct MatchEngine {
    skill_model: SkillModel,
    cr_updater: ChampionRatingUpdater,
    mapper: TierMapper,
}

impl MatchEngine {
    /// Create an engine from validated configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            skill_model: SkillModel::new(config.skill.clone())?,
            cr_updater: ChampionRatingUpdater::new(config.cr.clone())?,
            mapper: TierMapper::new(config.tiers.clone())?,
        })
    }

    /// Apply one match to both players' ledger entries
    ///
    /// Both pre-match ordinals are read before either estimate is mutated;
    /// the CR delta depends on both and must never see a half-updated state.
    /// Players are created on first appearance from their seed estimate.
    pub fn apply_record(&self, ledger: &mut PlayerLedger, record: &MatchRecord) -> Result<()> {
        let first_pre = self.skill_model.ordinal(&record.first_seed);
        let second_pre = self.skill_model.ordinal(&record.second_seed);

        ledger.ensure(&record.first, first_pre, &self.mapper);
        ledger.ensure(&record.second, second_pre, &self.mapper);

        let outcome = record.outcome();
        let (new_first, new_second) = self.skill_model.rate(
            &[record.first_seed],
            &[record.second_seed],
            outcome,
        )?;

        let (first_delta, second_delta) = match outcome {
            MatchOutcome::FirstWins => self.cr_updater.delta(first_pre, second_pre),
            MatchOutcome::SecondWins => {
                let (winner_delta, loser_delta) = self.cr_updater.delta(second_pre, first_pre);
                (loser_delta, winner_delta)
            }
            MatchOutcome::Tie => (0, 0),
        };

        debug!(
            match_id = %record.id,
            first = %record.first,
            second = %record.second,
            first_delta,
            second_delta,
            "Applying match"
        );

        ledger.apply_match(
            &record.first,
            first_delta,
            self.skill_model.ordinal(&new_first[0]),
            outcome == MatchOutcome::FirstWins,
            &self.mapper,
        )?;
        ledger.apply_match(
            &record.second,
            second_delta,
            self.skill_model.ordinal(&new_second[0]),
            outcome == MatchOutcome::SecondWins,
            &self.mapper,
        )?;

        Ok(())
    }
}
