//! Error types for tic-tac-toe play.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of failure that can end a game or prevent it from starting.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Computer strategy name is not supported.
    #[display("Unsupported strategy '{}', try 'random'", _0)]
    InvalidStrategy(String),

    /// A symbol could not be used as a player mark.
    #[display("Invalid symbol {:?}: symbols must be a single visible character", _0)]
    InvalidSymbol(char),

    /// Human input did not parse as an integer.
    #[display("Expected an integer, got '{}'", _0)]
    MalformedInput(String),

    /// The input source ran dry before a move was made.
    #[display("Input closed before a move was made")]
    InputClosed,

    /// A move was requested with no free cell left.
    #[display("No free cell left on the board")]
    BoardFull,

    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for GameError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(GameErrorKind::Io(err.to_string()))
    }
}

/// Errors from marking a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// The cell already holds a symbol.
    #[display("That cell is already marked, choose another.")]
    Occupied {
        /// Row of the rejected cell.
        row: usize,
        /// Column of the rejected cell.
        col: usize,
    },

    /// Row or column lies outside 0-2.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
