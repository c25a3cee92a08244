use super::{Board, Player, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
    last_move: Option<(Player, usize)>,
}

impl GameState {
    /// Create a game where `first_player` moves first
    pub fn new(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            first_player,
            current_player: first_player,
            outcome: None,
            move_count: 0,
            last_move: None,
        }
    }

    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Player::Red) // Red starts
    }

    /// Fresh game with the other player starting
    pub fn rematch(&self) -> Self {
        Self::new(self.first_player.other())
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of pieces dropped so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Who moved last and in which column
    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.last_move
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board.drop_piece(column, mover.to_cell())?;
        self.move_count += 1;
        self.last_move = Some((mover, column));

        if self.board.has_win(mover.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
