use std::path::PathBuf;

/// Reasons a piece cannot be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that abort an agent-vs-agent match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} found no move in an unfinished game")]
    NoMove { agent: String },

    #[error("{agent} played column {column}: {source}")]
    IllegalMove {
        agent: String,
        column: usize,
        source: MoveError,
    },
}
