//! Player trait and implementations.

mod computer;
mod human;

pub use computer::{ComputerPlayer, Strategy};
pub use human::{HumanPlayer, RANGE_NOTICE};

use crate::{Board, Console, GameError, Symbol};

/// Something that can choose and place a mark.
pub trait Player {
    /// The mark this player places.
    fn symbol(&self) -> Symbol;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Marks one currently empty cell on `board` with this player's symbol.
    ///
    /// Implementations keep trying until `Board::mark_cell` succeeds and
    /// return the `(row, col)` that was marked. The cell was empty before
    /// the call.
    ///
    /// # Errors
    ///
    /// Fails only when the player cannot produce a move at all, such as
    /// unreadable or exhausted input.
    fn make_move(
        &mut self,
        board: &mut Board,
        console: &mut dyn Console,
    ) -> Result<(usize, usize), GameError>;
}
