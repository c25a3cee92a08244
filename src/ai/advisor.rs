use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::{Board, Cell, GameState, Player, COLS};

use super::agent::Agent;

/// Why the advisor recommended a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceReason {
    /// Dropping here wins immediately.
    Win,
    /// The opponent would win here next.
    Block,
    /// The opponent could play here to open two winning columns.
    PreventFork,
    /// Longest run of own pieces through the landing cell.
    Extend(usize),
    /// Nothing stood out.
    Random,
}

/// A recommended column and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub column: usize,
    pub reason: AdviceReason,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = self.column + 1;
        match self.reason {
            AdviceReason::Win => write!(f, "column {col} wins"),
            AdviceReason::Block => write!(f, "column {col} blocks a win"),
            AdviceReason::PreventFork => write!(f, "column {col} stops a double threat"),
            AdviceReason::Extend(len) => write!(f, "column {col} makes {len} in a row"),
            AdviceReason::Random => write!(f, "column {col}"),
        }
    }
}

/// Recommend a column for `player` by fixed rule priority: win, block,
/// prevent a double threat, extend the longest alignment, then random.
///
/// Returns `None` only when the board is full. `board` is never modified.
pub fn advise<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Advice> {
    let mut scratch = *board;
    let own = player.to_cell();
    let opponent = player.other().to_cell();

    let advice = winning_column(&mut scratch, own)
        .map(|column| Advice {
            column,
            reason: AdviceReason::Win,
        })
        .or_else(|| {
            winning_column(&mut scratch, opponent).map(|column| Advice {
                column,
                reason: AdviceReason::Block,
            })
        })
        .or_else(|| {
            fork_column(&mut scratch, opponent).map(|column| Advice {
                column,
                reason: AdviceReason::PreventFork,
            })
        })
        .or_else(|| {
            best_alignment(&scratch, own).map(|(column, len)| Advice {
                column,
                reason: AdviceReason::Extend(len),
            })
        })
        .or_else(|| {
            random_column(&scratch, rng).map(|column| Advice {
                column,
                reason: AdviceReason::Random,
            })
        });

    debug!(player = player.name(), advice = ?advice, "advisory move");
    advice
}

/// The advisory column alone.
pub fn choose_best_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<usize> {
    advise(board, player, rng).map(|advice| advice.column)
}

/// First column where dropping `cell` completes four.
fn winning_column(board: &mut Board, cell: Cell) -> Option<usize> {
    (0..COLS).find(|&col| wins_at(board, col, cell))
}

fn wins_at(board: &mut Board, col: usize, cell: Cell) -> bool {
    board.with_piece(col, cell, |b, _| b.has_win(cell)) == Some(true)
}

/// First column where dropping `cell` leaves more than one other column that
/// would then win for `cell`.
fn fork_column(board: &mut Board, cell: Cell) -> Option<usize> {
    (0..COLS).find(|&col| {
        let threats = board.with_piece(col, cell, |b, _| {
            (0..COLS)
                .filter(|&next| next != col)
                .filter(|&next| wins_at(b, next, cell))
                .count()
        });
        threats.is_some_and(|count| count > 1)
    })
}

/// First landing cell with an alignment of three, else the column with the
/// strictly longest alignment seen.
fn best_alignment(board: &Board, cell: Cell) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for col in 0..COLS {
        let Some(row) = board.landing_row(col) else {
            continue;
        };
        let len = board.longest_alignment(row, col, cell);
        if len == 3 {
            return Some((col, len));
        }
        if len > best.map_or(0, |(_, best_len)| best_len) {
            best = Some((col, len));
        }
    }

    best
}

fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let open: Vec<usize> = board.open_columns().collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Agent that plays the advisor's recommendation.
pub struct AdvisorAgent {
    rng: StdRng,
}

impl AdvisorAgent {
    pub fn new() -> Self {
        AdvisorAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        AdvisorAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AdvisorAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AdvisorAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        choose_best_move(state.board(), state.current_player(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Advisor"
    }
}
