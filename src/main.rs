//! Main entry point for the duel-ladder leaderboard engine
//!
//! Runs either a full recalculation or an incremental update over the
//! submission corpus and prints a tier summary of the resulting board.

use anyhow::Result;
use clap::{Parser, Subcommand};
use duel_ladder::config::AppConfig;
use duel_ladder::leaderboard::{LeaderboardDocument, LeaderboardRecord};
use duel_ladder::{incremental_update, recalculate};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Duel Ladder - Tier-based Champion Rating leaderboard engine
#[derive(Parser)]
#[command(
    name = "duel-ladder",
    version,
    about = "Recomputes the tier-based Champion Rating leaderboard from match submissions",
    long_about = "Duel Ladder ingests best-of-three duel submissions, updates Weng-Lin skill \
                 estimates, applies bounded Champion Rating deltas, and writes the ordered, \
                 tier-grouped leaderboard document consumed by the static site."
)]
struct Args {
    /// Directory of per-submission JSON documents
    #[arg(long, value_name = "DIR")]
    submissions_dir: Option<PathBuf>,

    /// Output leaderboard document path
    #[arg(long, value_name = "FILE")]
    leaderboard: Option<PathBuf>,

    /// Processed match-id set path
    #[arg(long, value_name = "FILE")]
    processed: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full recalculation from the complete submission corpus
    Recalculate,
    /// Incremental update applying only unprocessed submissions
    Update,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Log the assembled board grouped by tier
fn log_tier_summary(document: &LeaderboardDocument) {
    for record in &document.entries {
        match record {
            LeaderboardRecord::TierHeader { tier, tier_info, .. } => {
                info!("{} tier ({})", tier, tier_info);
            }
            LeaderboardRecord::Player { entry, tier_rank } => {
                info!(
                    "  {:2}. {:<16} {:4} CR ({}-{}) {:.1}%",
                    tier_rank, entry.player, entry.current_cr, entry.wins, entry.losses,
                    entry.winrate
                );
            }
            LeaderboardRecord::TierSeparator { .. } => {}
        }
    }
    info!(players = document.player_count, "Leaderboard assembled");
}

fn run(args: Args) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(level) = args.log_level {
        config.service.log_level = level;
    }
    if let Some(dir) = args.submissions_dir {
        config.paths.submissions_dir = dir;
    }
    if let Some(file) = args.leaderboard {
        config.paths.leaderboard_file = file;
    }
    if let Some(file) = args.processed {
        config.paths.processed_file = file;
    }

    init_logging(&config.service.log_level)?;
    info!(version = duel_ladder::VERSION, "Starting duel-ladder");

    let document = match args.command {
        Command::Recalculate => recalculate(&config)?,
        Command::Update => incremental_update(&config)?,
    };
    log_tier_summary(&document);

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        // Logging may not be initialized yet when config loading fails
        eprintln!("duel-ladder: {:#}", e);
        process::exit(1);
    }
}
