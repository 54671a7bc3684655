//! Core domain types for tic-tac-toe.

use crate::error::{GameError, GameErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark identifying a player on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Conventional first player mark.
    pub const X: Symbol = Symbol('X');
    /// Conventional second player mark.
    pub const O: Symbol = Symbol('O');

    /// Creates a symbol from a single visible character.
    ///
    /// # Errors
    ///
    /// Returns `GameErrorKind::InvalidSymbol` for whitespace or control characters.
    #[track_caller]
    #[instrument]
    pub fn new(c: char) -> Result<Self, GameError> {
        if c.is_whitespace() || c.is_control() {
            return Err(GameError::new(GameErrorKind::InvalidSymbol(c)));
        }
        Ok(Self(c))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = GameError;

    #[track_caller]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Symbol),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Checks whether the cell is still free.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(symbol) => write!(f, "{}", symbol),
        }
    }
}
