//! Core Connect Four game logic: board representation with win and
//! alignment scans, player types, and the turn-tracking game state.

mod board;
mod player;
mod state;

#[cfg(test)]
pub(crate) use board::board_from_rows;
pub use board::{Board, Cell, CENTER_COL, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
