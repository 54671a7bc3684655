//! Tests for building games from configuration.

use std::io::{Cursor, Write};
use tictactoe_console::{GameConfig, Mode, PlayerKind, build_game};
use tictactoe_core::rules::check_winner;
use tictactoe_core::{
    Board, GameError, GameErrorKind, GameStatus, IoConsole, MoveRecord, Symbol,
};

fn silent_console() -> IoConsole<Cursor<String>, Vec<u8>> {
    IoConsole::new(Cursor::new(String::new()), Vec::new())
}

fn computers(seed: u64) -> GameConfig {
    let mut config = GameConfig::default();
    let (first, second) = Mode::ComputerVsComputer.kinds();
    config.set_kinds(first, second);
    config.set_seed(seed);
    config
}

#[test]
fn test_unsupported_strategy_prevents_game() {
    let mut config = computers(1);
    config.set_strategy("diagonal");

    let err = build_game(&config, silent_console()).err().unwrap();
    let game_err = err.downcast_ref::<GameError>().unwrap();
    assert_eq!(
        game_err.kind(),
        &GameErrorKind::InvalidStrategy("diagonal".to_string())
    );
}

#[test]
fn test_unsupported_strategy_ignored_for_humans() {
    let mut config = GameConfig::default();
    config.set_kinds(PlayerKind::Human, PlayerKind::Human);
    config.set_strategy("diagonal");
    assert!(build_game(&config, silent_console()).is_ok());
}

#[test]
fn test_seeded_games_replay_identically() {
    let run = |seed| {
        let mut game = build_game(&computers(seed), silent_console()).unwrap();
        let status = game.play().unwrap();
        (status, game.history().to_vec())
    };

    let (status, history) = run(11);
    assert!(status.is_terminal());
    assert_eq!(run(11), (status, history));
}

/// Human X names cells row-major, so every human move lands on the
/// first free cell at that point of the game.
fn play_human_against_computer(seed: u64) -> (GameStatus, Vec<MoveRecord>) {
    let input = "0\n0\n0\n1\n0\n2\n1\n0\n1\n1\n1\n2\n2\n0\n2\n1\n2\n2\n";
    let console = IoConsole::new(Cursor::new(input.to_string()), Vec::new());
    let mut config = GameConfig::default();
    config.set_seed(seed);

    let mut game = build_game(&config, console).unwrap();
    let status = game.play().unwrap();
    (status, game.history().to_vec())
}

#[test]
fn test_human_against_computer() {
    let (status, history) = play_human_against_computer(4);
    assert_eq!((*history[0].row(), *history[0].col()), (0, 0));

    let mut board = Board::new();
    for (turn, record) in history.iter().enumerate() {
        let expected = if turn % 2 == 0 { Symbol::X } else { Symbol::O };
        assert_eq!(*record.symbol(), expected, "move {turn}");

        let free = board.free_cells();
        let cell = (*record.row(), *record.col());
        if expected == Symbol::X {
            assert_eq!(Some(&cell), free.first(), "move {turn}");
        } else {
            assert!(free.contains(&cell), "move {turn}");
        }
        board.mark_cell(cell.0, cell.1, expected).unwrap();

        let replayed = match check_winner(&board) {
            Some((_, symbol)) => GameStatus::Won(symbol),
            None if board.free_cells().is_empty() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        if turn + 1 < history.len() {
            assert_eq!(replayed, GameStatus::InProgress, "move {turn}");
        } else {
            assert_eq!(replayed, status);
        }
    }
    assert!(status.is_terminal());
    assert_eq!(play_human_against_computer(4), (status, history));
}

#[test]
fn test_configured_names_reach_players() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[first]
kind = "computer"
symbol = "X"
name = "Hal"

[second]
kind = "human"
symbol = "O"
name = "Dave"
"#,
    )
    .unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();

    let mut game = build_game(&config, silent_console()).unwrap();
    assert_eq!(game.current_player().name(), "Hal");
    // The computer moves, then it is Dave's turn.
    game.step().unwrap();
    assert_eq!(game.current_player().name(), "Dave");
}

#[test]
fn test_default_computer_name() {
    let game = build_game(&computers(2), silent_console()).unwrap();
    assert_eq!(game.current_player().name(), "Computer (X)");
}
