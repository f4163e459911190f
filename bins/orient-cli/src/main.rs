//! orient-cli: Route-choice leaderboards from exported attempt rows.
//!
//! Reads JSON exports of attempt rows (and optionally player profiles),
//! scores every player with decay-weighted accuracy and speed, and prints
//! the leaderboard or one player's stats.

mod config;
mod input;
mod output;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use orient_board::{build_entries, rank_entries, stats_for_user};
use orient_core::types::{SortDirection, SortField};
use orient_score::{stats_score, ScoreEngine};
use tracing::{error, info};

use crate::config::Config;

/// Route-choice scoring and leaderboards.
#[derive(Parser, Debug)]
#[command(name = "orient-cli", version, about = "Route-choice leaderboards from attempt exports")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). Defaults to ORIENT_LOG_LEVEL or "info".
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank all qualified players.
    Leaderboard(LeaderboardArgs),
    /// Show one player's weighted stats.
    Stats(StatsArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Attempts export (JSON array). Defaults to ORIENT_ATTEMPTS_PATH.
    #[arg(short, long)]
    attempts: Option<PathBuf>,

    /// Only count attempts on this map.
    #[arg(short, long)]
    map: Option<String>,

    /// Evaluate decay at this instant (RFC 3339) instead of the current time.
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct LeaderboardArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Profiles export (JSON array). Defaults to ORIENT_PROFILES_PATH.
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    /// Field to rank by: accuracy, speed or combined.
    #[arg(short, long, default_value_t = SortField::Combined)]
    sort: SortField,

    /// Display direction (asc or desc). Defaults to best-first for the field.
    #[arg(short, long)]
    direction: Option<SortDirection>,

    /// Viewing player; below the top rows their neighbourhood is shown too.
    #[arg(short, long)]
    user: Option<String>,

    /// Show every ranked player instead of the top rows and viewer window.
    #[arg(long)]
    full: bool,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Player to report on.
    #[arg(short, long)]
    user: String,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();

    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_logging(&level, &cli.log_format);

    if let Err(e) = run(cli, &config) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Leaderboard(args) => leaderboard(args, config),
        Commands::Stats(args) => stats(args, config),
    }
}

fn leaderboard(args: LeaderboardArgs, config: &Config) -> Result<()> {
    let attempts_path = args.input.attempts.unwrap_or_else(|| config.attempts_path.clone());
    let rows = input::load_attempts(&attempts_path)?;

    let profiles = match args.profiles.or_else(|| config.profiles_path.clone()) {
        Some(path) => input::load_profiles(&path)?,
        None => Vec::new(),
    };

    let now = args.input.now.unwrap_or_else(Utc::now);
    let engine = ScoreEngine::new();
    let entries = build_entries(&rows, &profiles, args.input.map.as_deref(), now, &engine);
    info!(players = entries.len(), sort = %args.sort, "scored players");

    let direction = args.direction.unwrap_or(args.sort.natural_direction());
    let view = rank_entries(entries, args.sort, args.user.as_deref(), !args.full, &engine)
        .in_direction(args.sort, direction);

    match args.input.format {
        OutputFormat::Text => print!("{}", output::render_view(&view, args.sort)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("failed to encode leaderboard")?
        ),
    }
    Ok(())
}

fn stats(args: StatsArgs, config: &Config) -> Result<()> {
    let attempts_path = args.input.attempts.unwrap_or_else(|| config.attempts_path.clone());
    let rows = input::load_attempts(&attempts_path)?;

    let now = args.input.now.unwrap_or_else(Utc::now);
    let stats = stats_for_user(&rows, &args.user, args.input.map.as_deref(), now, &ScoreEngine);

    match args.input.format {
        OutputFormat::Text => print!("{}", output::render_stats(&args.user, &stats)),
        OutputFormat::Json => {
            let body = serde_json::json!({
                "user_id": args.user,
                "stats": stats,
                "combined_score": stats_score(&stats),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&body).context("failed to encode stats")?
            );
        }
    }
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so that stdout carries only the leaderboard. Pass
/// `format = "json"` for structured JSON output.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init();
    }
}
