//! # Connect Four
//!
//! A Connect Four game on the classic 6x7 board with a minimax computer
//! opponent and a rule-based move advisor. Ships a Ratatui terminal UI and a
//! headless arena for pitting agents against each other.
//!
//! ## Modules
//!
//! - [`game`]: board, players, game state
//! - [`ai`]: position evaluation, alpha-beta search, advisor, agents
//! - [`arena`]: agent-vs-agent matches and tallies
//! - [`ui`]: terminal game view
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
