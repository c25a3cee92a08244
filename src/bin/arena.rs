use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four::ai::{clamp_depth, AgentKind};
use connect_four::arena::play_match;
use connect_four::config::{warn_missing, AppConfig};
use connect_four::game::Player;
use connect_four::logging;

/// Pit two Connect Four agents against each other without a UI.
#[derive(Parser)]
#[command(name = "arena", about = "Play Connect Four agents against each other")]
struct Cli {
    /// Number of games; the starting player alternates
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Agent playing Red (X)
    #[arg(long, value_enum, default_value = "minimax")]
    red: AgentKind,

    /// Agent playing Yellow (O)
    #[arg(long, value_enum, default_value = "advisor")]
    yellow: AgentKind,

    /// Minimax search depth, clamped to 1-5 (defaults to the config value)
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for the randomized agents
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let using_defaults = loaded.is_none();
    let config = loaded.unwrap_or_default();
    logging::init_stderr(&config.log.level);
    if using_defaults {
        warn_missing(&cli.config);
    }

    let depth = clamp_depth(cli.depth.unwrap_or(config.game.depth));
    let seed = cli.seed.or(config.game.seed);

    // Distinct streams so two randomized agents don't mirror each other.
    let mut red = cli.red.build(depth, seed);
    let mut yellow = cli.yellow.build(depth, seed.map(|s| s.wrapping_add(1)));

    println!(
        "{} (X) vs {} (O), {} games, depth {}",
        red.name(),
        yellow.name(),
        cli.games,
        depth
    );
    println!("-------------------------------------------");

    let tally = play_match(red.as_mut(), yellow.as_mut(), cli.games).context("playing match")?;

    println!(
        "Red wins:    {:>4} ({:.1}%)",
        tally.red_wins,
        tally.win_rate(Player::Red) * 100.0
    );
    println!(
        "Yellow wins: {:>4} ({:.1}%)",
        tally.yellow_wins,
        tally.win_rate(Player::Yellow) * 100.0
    );
    println!("Draws:       {:>4}", tally.draws);
    println!("Avg length:  {:.1} moves", tally.average_length());
    Ok(())
}
