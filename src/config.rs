use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::{MAX_DEPTH, MIN_DEPTH};
use crate::error::ConfigError;
use crate::game::Player;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the keyboard.
    Pvp,
    /// A human plays Red against the computer as Yellow.
    Ai,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Ai => "Player vs AI",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Minimax search depth (difficulty), 1 to 5.
    pub depth: u32,
    pub first_player: Player,
    pub show_advice: bool,
    /// Seed for the advisor's random fallback; drawn from the OS when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::Ai,
            depth: 4,
            first_player: Player::Red,
            show_advice: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file for the terminal UI. Nothing is logged when unset.
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist. Callers report the fallback with [`warn_missing`] once logging
    /// is set up, since the log settings come from this file.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.game.depth) {
            return Err(ConfigError::Validation(format!(
                "game.depth must be in [{MIN_DEPTH}, {MAX_DEPTH}]"
            )));
        }
        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "log.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

/// Report that `path` was absent and defaults are in use.
pub fn warn_missing(path: &Path) {
    tracing::warn!(path = %path.display(), "config file not found, using defaults");
}
