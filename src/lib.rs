//! Console tic-tac-toe.
//!
//! Wires a [`GameConfig`] into a ready-to-play [`Game`] from
//! `tictactoe_core`.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_console::{GameConfig, build_game};
//! use tictactoe_core::IoConsole;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let mut game = build_game(&config, IoConsole::stdio())?;
//! game.play()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;

pub use cli::{Cli, Mode};
pub use config::{ConfigError, GameConfig, PlayerConfig, PlayerKind};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{ComputerPlayer, Console, Game, GameError, HumanPlayer, Player};
use tracing::{debug, instrument};

/// Builds one player from its config entry.
///
/// `seat` offsets the seed so two seeded computers do not mirror each other.
#[instrument(skip(player), fields(kind = %player.kind(), symbol = %player.symbol()))]
fn build_player(
    player: &PlayerConfig,
    seed: Option<u64>,
    seat: u64,
) -> Result<Box<dyn Player>, GameError> {
    match player.kind() {
        PlayerKind::Human => Ok(Box::new(HumanPlayer::new(
            player.display_name(),
            *player.symbol(),
        ))),
        PlayerKind::Computer => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(seat)),
                None => StdRng::from_os_rng(),
            };
            let computer = ComputerPlayer::new(*player.symbol(), player.strategy(), rng)?
                .with_name(player.display_name());
            debug!(strategy = %computer.strategy(), "Computer player ready");
            Ok(Box::new(computer))
        }
    }
}

/// Creates both players and the game they will play.
///
/// # Errors
///
/// Fails before any output if the config is inconsistent or names an
/// unsupported computer strategy.
#[instrument(skip(config, console))]
pub fn build_game<C: Console>(config: &GameConfig, console: C) -> anyhow::Result<Game<C>> {
    config.validate()?;
    let first = build_player(config.first(), *config.seed(), 0)?;
    let second = build_player(config.second(), *config.seed(), 1)?;
    Ok(Game::new(first, second, console))
}
