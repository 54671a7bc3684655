//! Tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of cells, marked in place
//! - **Rules**: win and draw detection over a board
//! - **Players**: human (console prompts) and computer (random draws)
//! - **Game**: owns the board and both players, drives the turn loop
//!
//! All input and output flows through a [`Console`], and the computer
//! player takes its random source as a parameter, so a whole game can be
//! scripted and seeded.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::io::Cursor;
//! use tictactoe_core::{ComputerPlayer, Game, IoConsole, Symbol};
//!
//! # fn example() -> Result<(), tictactoe_core::GameError> {
//! let x = ComputerPlayer::new(Symbol::X, "random", StdRng::seed_from_u64(1))?;
//! let o = ComputerPlayer::new(Symbol::O, "random", StdRng::seed_from_u64(2))?;
//! let console = IoConsole::new(Cursor::new(""), Vec::new());
//!
//! let mut game = Game::new(Box::new(x), Box::new(o), console);
//! let status = game.play()?;
//! assert!(status.is_terminal());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod error;
mod game;
mod players;
pub mod rules;
mod types;

pub use board::{Board, SEPARATOR};
pub use console::{Console, IoConsole};
pub use error::{GameError, GameErrorKind, MarkError};
pub use game::{Game, GameStatus, MoveRecord};
pub use players::{ComputerPlayer, HumanPlayer, Player, RANGE_NOTICE, Strategy};
pub use rules::Line;
pub use types::{Cell, Symbol};
