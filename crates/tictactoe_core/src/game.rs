//! Turn loop and termination check.

use crate::rules::{Line, check_winner, is_draw};
use crate::{Board, Console, GameError, Player, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No result yet.
    #[display("Game in progress")]
    InProgress,
    /// A line was filled by this symbol.
    #[display("Player {} wins!", _0)]
    Won(Symbol),
    /// Board is full and nobody won.
    #[display("The game is a draw!")]
    Drawn,
}

impl GameStatus {
    /// Checks whether play has stopped.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A single applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Who moved.
    symbol: Symbol,
    /// Row that was marked.
    row: usize,
    /// Column that was marked.
    col: usize,
}

/// A two-player game over one board.
///
/// The first player passed to [`Game::new`] moves first. The turn index
/// flips after every move that does not end the game.
pub struct Game<C> {
    board: Board,
    players: [Box<dyn Player>; 2],
    turn: usize,
    status: GameStatus,
    history: Vec<MoveRecord>,
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a new game in progress with an empty board.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, console: C) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            console,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index (0 or 1) of the player whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &dyn Player {
        self.players[self.turn].as_ref()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of moves applied so far.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Consumes the game, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Evaluates the board: rows, then columns, then diagonals, then fullness.
    pub fn check_game_over(&self) -> GameStatus {
        if let Some((_, symbol)) = self.winning_line() {
            GameStatus::Won(symbol)
        } else if is_draw(&self.board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// The line that decided the game, if any.
    pub fn winning_line(&self) -> Option<(Line, Symbol)> {
        check_winner(&self.board)
    }

    /// Plays one turn and returns the resulting status.
    ///
    /// On a terminal status the turn index stays on the player who made
    /// the final move. Calling this after the game ended is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates player input failures and console I/O errors.
    #[instrument(skip(self), fields(turn = self.turn, moves = self.history.len()))]
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let player = &mut self.players[self.turn];
        let symbol = player.symbol();
        let (row, col) = player.make_move(&mut self.board, &mut self.console)?;
        self.history.push(MoveRecord { symbol, row, col });
        debug!(%symbol, row, col, "Move applied");

        self.console
            .write_line(&format!("Player {} played at ({}, {}):", symbol, row, col))?;
        self.board.print_board(&mut self.console)?;

        self.status = self.check_game_over();
        if !self.status.is_terminal() {
            self.turn = 1 - self.turn;
        }
        Ok(self.status)
    }

    /// Runs the game to completion, printing the final message.
    ///
    /// # Errors
    ///
    /// Propagates player input failures and console I/O errors.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<GameStatus, GameError> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "Starting game"
        );
        self.console.write_line("Let's start the game!")?;

        let status = loop {
            let status = self.step()?;
            if status.is_terminal() {
                break status;
            }
        };

        self.console.write_line(&status.to_string())?;
        info!(%status, moves = self.history.len(), "Game over");
        Ok(status)
    }
}
