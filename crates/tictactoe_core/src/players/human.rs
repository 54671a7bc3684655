//! Human player that answers row and column prompts.

use super::Player;
use crate::{Board, Console, GameError, GameErrorKind, MarkError, Symbol};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Notice shown when a coordinate falls outside 0-2.
pub const RANGE_NOTICE: &str = "Row and column values must be between 0 and 2.";

/// Human player reading moves from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    symbol: Symbol,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// Reads one integer answer, failing on non-numeric text or closed input.
///
/// Returns `Ok(None)` for integers outside 0-2, including ones too large
/// to fit any integer type.
fn read_coordinate(console: &mut dyn Console, prompt: &str) -> Result<Option<usize>, GameError> {
    let line = console
        .read_line(prompt)?
        .ok_or_else(|| GameError::new(GameErrorKind::InputClosed))?;
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(usize::try_from(value).ok().filter(|&v| v <= 2)),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(GameError::new(GameErrorKind::MalformedInput(
            trimmed.to_string(),
        ))),
    }
}

impl Player for HumanPlayer {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Prompts until an empty cell is named.
    ///
    /// Out-of-range answers and occupied cells print a notice and re-prompt.
    ///
    /// # Errors
    ///
    /// `MalformedInput` for non-integer text, `InputClosed` at end of input,
    /// and `BoardFull` when no cell is free.
    #[instrument(skip_all, fields(player = %self.name, symbol = %self.symbol))]
    fn make_move(
        &mut self,
        board: &mut Board,
        console: &mut dyn Console,
    ) -> Result<(usize, usize), GameError> {
        if board.free_cells().is_empty() {
            return Err(GameError::new(GameErrorKind::BoardFull));
        }
        console.write_line(&format!("It's player {}'s turn.", self.symbol))?;

        loop {
            let row = read_coordinate(console, "Enter the row you want to mark (0-2): ")?;
            let col = read_coordinate(console, "Enter the column you want to mark (0-2): ")?;

            let (Some(row), Some(col)) = (row, col) else {
                debug!(?row, ?col, "Coordinates out of range");
                console.write_line(RANGE_NOTICE)?;
                continue;
            };

            match board.mark_cell(row, col, self.symbol) {
                Ok(()) => return Ok((row, col)),
                Err(err @ MarkError::Occupied { .. }) => {
                    console.write_line(&err.to_string())?;
                }
                Err(MarkError::OutOfBounds { .. }) => {
                    console.write_line(RANGE_NOTICE)?;
                }
            }
        }
    }
}
