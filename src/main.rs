use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::clamp_depth;
use connect_four::config::{warn_missing, AppConfig, GameMode};
use connect_four::logging;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal, against a friend or the computer.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the game mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Override the AI difficulty (search depth, clamped to 1-5)
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for the advisor's random tie-break
    #[arg(long)]
    seed: Option<u64>,

    /// Hide the per-turn move advice
    #[arg(long)]
    no_advice: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let using_defaults = loaded.is_none();
    let mut config = loaded.unwrap_or_default();
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(depth) = cli.depth {
        config.game.depth = clamp_depth(depth);
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.no_advice {
        config.game.show_advice = false;
    }

    if let Some(path) = &config.log.file {
        logging::init_file(path, &config.log.level)
            .with_context(|| format!("opening log file {}", path.display()))?;
    }
    if using_defaults {
        warn_missing(&cli.config);
    }
    tracing::info!(
        mode = config.game.mode.label(),
        depth = config.game.depth,
        "starting game"
    );

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(&config.game);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
