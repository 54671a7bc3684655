//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Strategy, Symbol};
use tracing::{debug, info, instrument};

/// Who controls a seat at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Moves drawn by the computer.
    Computer,
}

/// Configuration for one of the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Human or computer.
    kind: PlayerKind,

    /// Mark placed on the board.
    symbol: Symbol,

    /// Computer strategy name. Ignored for humans.
    #[serde(default = "default_strategy")]
    strategy: String,

    /// Display name; defaults to one derived from kind and symbol.
    #[serde(default)]
    name: Option<String>,
}

#[instrument]
fn default_strategy() -> String {
    Strategy::default().to_string()
}

#[instrument]
fn default_first() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Human, Symbol::X)
}

#[instrument]
fn default_second() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Computer, Symbol::O)
}

impl PlayerConfig {
    /// Creates a player entry with the default strategy and no name.
    pub fn new(kind: PlayerKind, symbol: Symbol) -> Self {
        Self {
            kind,
            symbol,
            strategy: default_strategy(),
            name: None,
        }
    }

    /// Name to show for this player.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| match self.kind {
            PlayerKind::Human => format!("Player {}", self.symbol),
            PlayerKind::Computer => format!("Computer ({})", self.symbol),
        })
    }
}

/// Full game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who moves first.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// Player who moves second.
    #[serde(default = "default_second")]
    second: PlayerConfig,

    /// Seed for computer players; fresh OS randomness when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(first = %config.first.kind, second = %config.second.kind, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the two players can share a board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.symbol == self.second.symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol '{}'",
                self.first.symbol
            )));
        }
        Ok(())
    }

    /// Replaces who controls each seat, keeping symbols and strategies.
    #[instrument(skip(self))]
    pub fn set_kinds(&mut self, first: PlayerKind, second: PlayerKind) {
        self.first.kind = first;
        self.second.kind = second;
    }

    /// Uses `strategy` for both players.
    #[instrument(skip(self))]
    pub fn set_strategy(&mut self, strategy: &str) {
        self.first.strategy = strategy.to_string();
        self.second.strategy = strategy.to_string();
    }

    /// Sets the computer seed.
    #[instrument(skip(self))]
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
