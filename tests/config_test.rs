//! Tests for TOML game configuration.

use std::io::Write;
use tictactoe_console::{GameConfig, PlayerKind};
use tictactoe_core::Symbol;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(*config.first().kind(), PlayerKind::Human);
    assert_eq!(*config.first().symbol(), Symbol::X);
    assert_eq!(*config.second().kind(), PlayerKind::Computer);
    assert_eq!(*config.second().symbol(), Symbol::O);
    assert_eq!(config.second().strategy(), "random");
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r##"
seed = 99

[first]
kind = "computer"
symbol = "#"
strategy = "random"
name = "Hal"

[second]
kind = "human"
symbol = "@"
"##,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.first().kind(), PlayerKind::Computer);
    assert_eq!(config.first().symbol().as_char(), '#');
    assert_eq!(config.first().display_name(), "Hal");
    assert_eq!(config.second().display_name(), "Player @");
    assert_eq!(config.second().strategy(), "random");
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("seed = 5\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.first(), GameConfig::default().first());
    assert_eq!(config.second(), GameConfig::default().second());
}

#[test]
fn test_duplicate_symbols_rejected() {
    let file = write_config(
        r#"
[first]
kind = "human"
symbol = "X"

[second]
kind = "computer"
symbol = "X"
"#,
    );
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Both players use the symbol 'X'"));
}

#[test]
fn test_whitespace_symbol_rejected() {
    let file = write_config(
        r#"
[first]
kind = "human"
symbol = " "
"#,
    );
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_overrides() {
    let mut config = GameConfig::default();
    config.set_kinds(PlayerKind::Computer, PlayerKind::Computer);
    config.set_strategy("diagonal");
    config.set_seed(3);

    assert_eq!(*config.first().kind(), PlayerKind::Computer);
    assert_eq!(config.first().strategy(), "diagonal");
    assert_eq!(config.second().strategy(), "diagonal");
    assert_eq!(*config.seed(), Some(3));
}
