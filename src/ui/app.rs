use crate::ai::{advise, choose_ai_move, clamp_depth, Advice, AI_PLAYER, MAX_DEPTH, MIN_DEPTH};
use crate::config::{GameConfig, GameMode};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, CENTER_COL, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, error, info};

pub struct App {
    game_state: GameState,
    mode: GameMode,
    depth: u32,
    show_advice: bool,
    advice: Option<Advice>,
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut app = App {
            game_state: GameState::new(config.first_player),
            mode: config.mode,
            depth: clamp_depth(config.depth),
            show_advice: config.show_advice,
            advice: None,
            rng,
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
        };
        app.refresh_advice();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            if self.is_ai_turn() {
                self.play_ai_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn advice(&self) -> Option<Advice> {
        self.advice
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the computer moves next
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::Ai
            && !self.game_state.is_terminal()
            && self.game_state.current_player() == AI_PLAYER
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let col = c as usize - '1' as usize;
                self.selected_column = col;
                self.drop_piece(col);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            KeyCode::Char('m') => {
                self.mode = match self.mode {
                    GameMode::Pvp => GameMode::Ai,
                    GameMode::Ai => GameMode::Pvp,
                };
                self.message = Some(format!("Mode: {}", self.mode.label()));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.depth = (self.depth + 1).min(MAX_DEPTH);
                self.message = Some(format!("Difficulty: {}", self.depth));
            }
            KeyCode::Char('-') => {
                self.depth = self.depth.saturating_sub(1).max(MIN_DEPTH);
                self.message = Some(format!("Difficulty: {}", self.depth));
            }
            KeyCode::Char('a') => {
                self.show_advice = !self.show_advice;
                self.refresh_advice();
            }
            _ => {}
        }
    }

    /// Start a new game with the other player moving first
    fn restart(&mut self) {
        self.game_state = self.game_state.rematch();
        self.selected_column = CENTER_COL;
        self.message = Some(format!(
            "New game! {} starts.",
            self.game_state.current_player().name()
        ));
        self.refresh_advice();
    }

    /// Drop the current player's piece in `col`
    fn drop_piece(&mut self, col: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_ai_turn() {
            self.message = Some("Wait for the AI to move.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        match self.game_state.apply_move_mut(col) {
            Ok(()) => {
                debug!(player = player.name(), column = col, "move");
                self.after_move();
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Let the computer pick and play its column. A rejected move hands the
    /// game back to the humans so the loop never waits on the AI again.
    pub fn play_ai_move(&mut self) {
        match choose_ai_move(self.game_state.board(), self.depth) {
            Some(col) => match self.game_state.apply_move_mut(col) {
                Ok(()) => {
                    debug!(column = col, depth = self.depth, "ai move");
                    self.message = Some(format!("AI chooses column {}", col + 1));
                    self.after_move();
                }
                Err(err) => {
                    error!(column = col, error = %err, "ai move rejected");
                    self.mode = GameMode::Pvp;
                    self.message = Some(format!("AI move failed: {err}"));
                }
            },
            None => {
                self.message = Some("It's a draw!".to_string());
            }
        }
    }

    fn after_move(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            let text = match outcome {
                GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            };
            info!(
                outcome = %text,
                moves = self.game_state.move_count(),
                "game over"
            );
            self.message = Some(match self.message.take() {
                Some(prev) => format!("{prev}. {text}"),
                None => text,
            });
        }
        self.refresh_advice();
    }

    fn refresh_advice(&mut self) {
        self.advice = if self.show_advice && !self.game_state.is_terminal() {
            advise(
                self.game_state.board(),
                self.game_state.current_player(),
                &mut self.rng,
            )
        } else {
            None
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode_label = match self.mode {
            GameMode::Pvp => self.mode.label().to_string(),
            GameMode::Ai => format!("{} (difficulty {})", self.mode.label(), self.depth),
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.advice.as_ref(),
            &mode_label,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};

    fn config(mode: GameMode) -> GameConfig {
        GameConfig {
            mode,
            depth: 2,
            seed: Some(5),
            ..GameConfig::default()
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn digit_keys_drop_pieces() {
        let mut app = App::new(&config(GameMode::Pvp));
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.game_state().board().get(5, 3), Cell::Red);
        assert_eq!(app.game_state().current_player(), Player::Yellow);
    }

    #[test]
    fn arrows_move_selection_within_bounds() {
        let mut app = App::new(&config(GameMode::Pvp));
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().get(5, COLS - 1), Cell::Red);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game_state().board().get(5, 0), Cell::Yellow);
    }

    #[test]
    fn full_column_reports_message() {
        let mut app = App::new(&config(GameMode::Pvp));
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.game_state().move_count(), 6);
    }

    #[test]
    fn ai_answers_human_move() {
        let mut app = App::new(&config(GameMode::Ai));
        assert!(!app.is_ai_turn());
        press(&mut app, KeyCode::Char('4'));
        assert!(app.is_ai_turn());

        // Human input is ignored while the AI is to move.
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game_state().move_count(), 1);

        app.play_ai_move();
        assert_eq!(app.game_state().move_count(), 2);
        assert!(!app.is_ai_turn());
        assert!(app.message().unwrap().starts_with("AI chooses column"));
    }

    #[test]
    fn advice_follows_current_player() {
        let mut app = App::new(&config(GameMode::Pvp));
        for key in ['1', '1', '2', '2', '3', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.advice().map(|a| a.column), Some(3));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.advice(), None);
    }

    #[test]
    fn win_ends_game_and_restart_alternates() {
        let mut app = App::new(&config(GameMode::Pvp));
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(
            app.game_state().outcome(),
            Some(GameOutcome::Winner(Player::Red))
        );
        assert_eq!(app.message(), Some("Red wins!"));
        assert_eq!(app.advice(), None);

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state().move_count(), 0);
        assert_eq!(app.game_state().current_player(), Player::Yellow);
    }

    #[test]
    fn ai_opens_after_restart_when_it_starts() {
        let mut app = App::new(&config(GameMode::Ai));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.is_ai_turn());
        app.play_ai_move();
        assert_eq!(app.game_state().move_count(), 1);
    }

    #[test]
    fn rejected_ai_move_is_reported_and_stops_ai_turns() {
        let mut app = App::new(&config(GameMode::Pvp));
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(app.game_state().is_terminal());
        app.mode = GameMode::Ai;

        app.play_ai_move();
        assert_eq!(app.message(), Some("AI move failed: game is over"));
        assert_eq!(app.mode(), GameMode::Pvp);
        assert_eq!(app.game_state().move_count(), 7);
        assert!(!app.is_ai_turn());
    }

    #[test]
    fn difficulty_and_mode_keys() {
        let mut app = App::new(&config(GameMode::Pvp));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.depth(), MAX_DEPTH);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.depth(), MIN_DEPTH);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.mode(), GameMode::Ai);
        assert_eq!(app.message(), Some("Mode: Player vs AI"));

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
