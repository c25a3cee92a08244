//! Headless agent-vs-agent matches.

use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameOutcome, GameState, Player};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub first_player: Player,
    pub winner: Option<Player>,
    pub game_length: usize,
}

/// Play one game to completion. Red is always `red`, whoever starts.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    first_player: Player,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::new(first_player);

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.select_action(&state).ok_or_else(|| MatchError::NoMove {
            agent: agent.name().to_string(),
        })?;
        state
            .apply_move_mut(column)
            .map_err(|source| MatchError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                source,
            })?;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        _ => None,
    };
    Ok(GameRecord {
        first_player,
        winner,
        game_length: state.move_count(),
    })
}

/// Running totals over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchTally {
    pub fn record(&mut self, record: &GameRecord) {
        match record.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += record.game_length;
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / games as f32
    }

    /// Average game length in moves.
    pub fn average_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / games as f32
    }
}

/// Play `games` games, Red starting the even-numbered ones and Yellow the odd.
pub fn play_match(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    games: usize,
) -> Result<MatchTally, MatchError> {
    let mut tally = MatchTally::default();
    let mut first_player = Player::Red;

    for game in 0..games {
        let record = play_game(red, yellow, first_player)?;
        debug!(
            game,
            first = first_player.name(),
            winner = record.winner.map(|p| p.name()).unwrap_or("draw"),
            moves = record.game_length,
            "game finished"
        );
        tally.record(&record);
        first_player = first_player.other();
    }

    info!(
        red = red.name(),
        yellow = yellow.name(),
        red_wins = tally.red_wins,
        yellow_wins = tally.yellow_wins,
        draws = tally.draws,
        "match finished"
    );
    Ok(tally)
}
