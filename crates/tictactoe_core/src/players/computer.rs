//! Computer player that places marks at random.

use super::Player;
use crate::{Board, Console, GameError, GameErrorKind, Symbol};
use rand::Rng;
use rand::rngs::StdRng;
use std::str::FromStr;
use tracing::{debug, instrument};

/// How the computer chooses its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Independent uniform draws of row and column until a free cell is hit.
    #[default]
    Random,
}

/// Computer player driven by an injected random source.
///
/// Each attempt draws row and column afresh, with no memory of rejected
/// cells, so the expected number of attempts grows as the board fills.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = StdRng> {
    name: String,
    symbol: Symbol,
    strategy: Strategy,
    rng: R,
    last_attempts: u32,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player using the named strategy.
    ///
    /// # Errors
    ///
    /// Returns `GameErrorKind::InvalidStrategy` for any name other than `random`.
    #[track_caller]
    #[instrument(skip(rng))]
    pub fn new(symbol: Symbol, strategy: &str, rng: R) -> Result<Self, GameError> {
        let strategy = Strategy::from_str(strategy)
            .map_err(|_| GameError::new(GameErrorKind::InvalidStrategy(strategy.to_string())))?;
        Ok(Self {
            name: format!("Computer ({})", symbol),
            symbol,
            strategy,
            rng,
            last_attempts: 0,
        })
    }

    /// Replaces the default `Computer (S)` display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of draws the most recent move needed.
    pub fn last_attempts(&self) -> u32 {
        self.last_attempts
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Draws cells until one is free.
    ///
    /// # Errors
    ///
    /// Returns `GameErrorKind::BoardFull` without drawing when no cell is free.
    #[instrument(skip_all, fields(player = %self.name, strategy = %self.strategy))]
    fn make_move(
        &mut self,
        board: &mut Board,
        _console: &mut dyn Console,
    ) -> Result<(usize, usize), GameError> {
        if board.free_cells().is_empty() {
            return Err(GameError::new(GameErrorKind::BoardFull));
        }

        let mut attempts = 0;
        loop {
            attempts += 1;
            let row = self.rng.random_range(0..3);
            let col = self.rng.random_range(0..3);

            match board.mark_cell(row, col, self.symbol) {
                Ok(()) => {
                    self.last_attempts = attempts;
                    debug!(row, col, attempts, "Computer chose cell");
                    return Ok((row, col));
                }
                Err(err) => debug!(row, col, attempts, error = %err, "Draw rejected"),
            }
        }
    }
}
