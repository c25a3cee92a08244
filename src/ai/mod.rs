//! Move selection: static evaluation, minimax search with alpha-beta
//! pruning, the rule-based advisor, and the agents built on them.

mod advisor;
mod agent;
mod eval;
mod minimax;
mod random;

use crate::game::Player;

/// Side the computer plays in player-vs-AI games.
pub const AI_PLAYER: Player = Player::Yellow;

pub use advisor::{advise, choose_best_move, Advice, AdviceReason, AdvisorAgent};
pub use agent::{Agent, AgentKind};
pub use eval::{evaluate, CENTER_WEIGHT};
pub use minimax::{
    choose_ai_move, choose_move, clamp_depth, MinimaxAgent, Search, MAX_DEPTH, MIN_DEPTH,
    SCORE_BOUND, WIN_SCORE,
};
pub use random::RandomAgent;
