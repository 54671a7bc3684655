//! The 3x3 board and its cell operations.

use crate::console::Console;
use crate::error::MarkError;
use crate::types::{Cell, Symbol};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, instrument};

/// Separator printed under every rendered board.
pub const SEPARATOR: &str = "*********************************";

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, so `(row, col)` lives at `row * 3 + col`.
/// A marked cell never becomes empty again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells as three rows of three.
    pub fn get_grid(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Marks `(row, col)` with `symbol`.
    ///
    /// The board prints nothing. Callers decide who sees the rejection:
    /// the `Display` text of `MarkError::Occupied` is the notice shown to
    /// a human, while the computer only logs it.
    ///
    /// # Errors
    ///
    /// Returns `MarkError::Occupied` if the cell already holds a mark and
    /// `MarkError::OutOfBounds` if row or column exceeds 2. The board is
    /// left untouched in both cases.
    #[instrument(skip(self))]
    pub fn mark_cell(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), MarkError> {
        let idx = Self::index(row, col).ok_or(MarkError::OutOfBounds { row, col })?;

        if !self.cells[idx].is_empty() {
            debug!(row, col, "Cell already marked");
            return Err(MarkError::Occupied { row, col });
        }

        self.cells[idx] = Cell::Marked(symbol);
        Ok(())
    }

    /// Coordinates of every cell that is still empty, row-major.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| (idx / 3, idx % 3))
            .collect()
    }

    /// Writes the three rows and the separator line to `console`.
    #[instrument(skip_all)]
    pub fn print_board(&self, console: &mut dyn Console) -> io::Result<()> {
        for [a, b, c] in self.get_grid() {
            console.write_line(&format!("{} | {} | {}", a, b, c))?;
        }
        console.write_line(SEPARATOR)
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        (row < 3 && col < 3).then_some(row * 3 + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for [a, b, c] in self.get_grid() {
            writeln!(f, "{} | {} | {}", a, b, c)?;
        }
        write!(f, "{}", SEPARATOR)
    }
}
