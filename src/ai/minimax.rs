use tracing::{debug, trace};

use crate::game::{Board, GameState, Player, COLS};

use super::agent::Agent;
use super::eval::evaluate;
use super::AI_PLAYER;

/// Base score of a decided position; the remaining depth is folded in.
pub const WIN_SCORE: i32 = 1000;
/// Outer bound of the search window.
pub const SCORE_BOUND: i32 = 10_000;

pub const MIN_DEPTH: u32 = 1;
pub const MAX_DEPTH: u32 = 5;

/// Clamp a requested difficulty into the supported search depths.
pub fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(MIN_DEPTH, MAX_DEPTH)
}

/// Minimax search with alpha-beta pruning, scored from `ai`'s point of view.
///
/// The board is mutated in place while exploring and restored before every
/// return.
pub struct Search {
    ai: Player,
    nodes: u64,
}

impl Search {
    pub fn new(ai: Player) -> Self {
        Search { ai, nodes: 0 }
    }

    /// Number of positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` searched `depth` plies deep. `maximizing` is true
    /// when `ai` is the side to move.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        let ai_cell = self.ai.to_cell();
        let opponent_cell = self.ai.other().to_cell();

        if board.has_win(ai_cell) {
            return WIN_SCORE - depth as i32;
        }
        if board.has_win(opponent_cell) {
            return -WIN_SCORE + depth as i32;
        }
        if depth == 0 {
            return evaluate(board, self.ai);
        }

        let (mover, mut best) = if maximizing {
            (ai_cell, -SCORE_BOUND)
        } else {
            (opponent_cell, SCORE_BOUND)
        };

        for col in 0..COLS {
            let Some(value) = board.with_piece(col, mover, |b, _| {
                self.minimax(b, depth - 1, alpha, beta, !maximizing)
            }) else {
                continue;
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Pick the column with the strictly best search score for `ai`. Ties go to
/// the leftmost column. Returns `None` only when every column is full.
pub fn choose_move(board: &Board, ai: Player, depth: u32) -> Option<usize> {
    let mut scratch = *board;
    let mut search = Search::new(ai);
    let mut best_score = -SCORE_BOUND;
    let mut best_col = None;

    for col in 0..COLS {
        let Some(score) = scratch.with_piece(col, ai.to_cell(), |b, _| {
            search.minimax(b, depth, -SCORE_BOUND, SCORE_BOUND, false)
        }) else {
            continue;
        };
        trace!(col, score, "minimax candidate");

        if score > best_score {
            best_score = score;
            best_col = Some(col);
        }
    }

    let choice = best_col.or_else(|| board.open_columns().next());
    debug!(
        player = ai.name(),
        depth,
        column = ?choice,
        score = best_score,
        nodes = search.nodes(),
        "minimax move"
    );
    choice
}

/// The AI's move: [`choose_move`] for the default AI player.
pub fn choose_ai_move(board: &Board, depth: u32) -> Option<usize> {
    choose_move(board, AI_PLAYER, depth)
}

/// Minimax agent with alpha-beta pruning. Plays whichever side is to move.
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth: clamp_depth(depth),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        choose_move(state.board(), state.current_player(), self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
