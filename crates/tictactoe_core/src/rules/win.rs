//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Symbol};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that wins the game.
///
/// Declaration order is the order lines are checked in: rows, then
/// columns, then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Flat board indices covered by this line.
    pub fn indices(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::MiddleColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Returns the symbol filling this line, if one symbol fills all three cells.
    pub fn owner(self, board: &Board) -> Option<Symbol> {
        let [a, b, c] = self.indices().map(|i| board.cells()[i]);
        match a {
            Cell::Marked(symbol) if a == b && b == c => Some(symbol),
            _ => None,
        }
    }
}

/// Finds the first winning line in check order.
///
/// Returns the line together with the symbol that fills it.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Line, Symbol)> {
    Line::iter().find_map(|line| line.owner(board).map(|symbol| (line, symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(idx, symbol) in marks {
            board.mark_cell(idx / 3, idx % 3, symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_either_symbol() {
        for symbol in [Symbol::X, Symbol::O] {
            for line in Line::iter() {
                let marks: Vec<_> = line.indices().iter().map(|&i| (i, symbol)).collect();
                let board = board_with(&marks);
                assert_eq!(check_winner(&board), Some((line, symbol)), "{line}");
            }
        }
    }

    #[test]
    fn test_middle_column_is_reported() {
        let board = board_with(&[(1, Symbol::X), (4, Symbol::X), (7, Symbol::X), (0, Symbol::O)]);
        assert_eq!(check_winner(&board), Some((Line::MiddleColumn, Symbol::X)));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        for line in Line::iter() {
            let [a, b, c] = line.indices();
            let board = board_with(&[(a, Symbol::X), (b, Symbol::O), (c, Symbol::X)]);
            assert_eq!(line.owner(&board), None, "{line}");
        }
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        for line in Line::iter() {
            let [a, b, _] = line.indices();
            let board = board_with(&[(a, Symbol::O), (b, Symbol::O)]);
            assert_eq!(check_winner(&board), None, "{line}");
        }
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // X owns both the top row and the left column.
        let board = board_with(&[
            (0, Symbol::X),
            (1, Symbol::X),
            (2, Symbol::X),
            (3, Symbol::X),
            (6, Symbol::X),
        ]);
        assert_eq!(check_winner(&board), Some((Line::TopRow, Symbol::X)));
    }
}
