//! Command-line interface for the tic-tac-toe console.

use crate::config::PlayerKind;
use clap::{Parser, ValueEnum};

/// Console tic-tac-toe against a human or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Who sits in each seat (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Computer strategy (only "random" is supported)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Seat assignments, first mover listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Human moves first against the computer
    HumanVsComputer,
    /// Computer moves first against a human
    ComputerVsHuman,
    /// Two computers play each other
    ComputerVsComputer,
    /// Two humans share the console
    HumanVsHuman,
}

impl Mode {
    /// Player kinds for the first and second seat.
    pub fn kinds(self) -> (PlayerKind, PlayerKind) {
        match self {
            Mode::HumanVsComputer => (PlayerKind::Human, PlayerKind::Computer),
            Mode::ComputerVsHuman => (PlayerKind::Computer, PlayerKind::Human),
            Mode::ComputerVsComputer => (PlayerKind::Computer, PlayerKind::Computer),
            Mode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
        }
    }
}
