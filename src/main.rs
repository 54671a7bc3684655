//! Tic-tac-toe console binary.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{Cli, GameConfig, build_game};
use tictactoe_core::IoConsole;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument]
fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(mode) = cli.mode {
        let (first, second) = mode.kinds();
        config.set_kinds(first, second);
    }
    if let Some(strategy) = &cli.strategy {
        config.set_strategy(strategy);
    }
    if let Some(seed) = cli.seed {
        config.set_seed(seed);
    }

    let mut game = build_game(&config, IoConsole::stdio()).context("Failed to set up game")?;
    let status = game.play()?;
    info!(%status, "Finished");
    Ok(())
}
