//! Terminal UI: the playable board with per-turn advice, player-vs-player
//! and player-vs-AI modes.

mod app;
mod game_view;

pub use app::App;
