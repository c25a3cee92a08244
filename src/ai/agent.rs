use serde::{Deserialize, Serialize};

use crate::game::GameState;

use super::{AdvisorAgent, MinimaxAgent, RandomAgent};

/// Universal interface for all move-picking agents.
pub trait Agent {
    /// Select a column for the player to move, or `None` when no legal move
    /// exists.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Named agent kinds, selectable from the command line and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Advisor,
    Random,
}

impl AgentKind {
    /// Build a boxed agent. `depth` only applies to minimax, `seed` to the
    /// randomized agents.
    pub fn build(self, depth: u32, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (AgentKind::Minimax, _) => Box::new(MinimaxAgent::new(depth)),
            (AgentKind::Advisor, Some(seed)) => Box::new(AdvisorAgent::seeded(seed)),
            (AgentKind::Advisor, None) => Box::new(AdvisorAgent::new()),
            (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::seeded(seed)),
            (AgentKind::Random, None) => Box::new(RandomAgent::new()),
        }
    }
}
