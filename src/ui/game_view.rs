use crate::ai::Advice;
use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    advice: Option<&Advice>,
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Advice
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_advice(frame, game_state, advice, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let (mut status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("{} wins  |  {}", player.name(), game_mode),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => (format!("Draw  |  {}", game_mode), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Turn: {} ({})  |  {}", player.name(), player.symbol(), game_mode),
                player_color(player),
            )
        }
    };
    if let Some((player, col)) = game_state.last_move() {
        status.push_str(&format!("  |  Last: {} in column {}", player.name(), col + 1));
    }

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_advice(frame: &mut Frame, game_state: &GameState, advice: Option<&Advice>, area: Rect) {
    let text = match advice {
        Some(advice) => format!(
            "Advice for {}: {}",
            game_state.current_player().name(),
            advice
        ),
        None => String::new(),
    };
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("M: Toggle AI  |  +/-: Difficulty  |  A: Toggle advice");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AdviceReason;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(state: &GameState, advice: Option<&Advice>) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, state, 3, &Some("hello".to_string()), advice, "Player vs AI"))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn shows_turn_advice_and_message() {
        let state = GameState::initial();
        let advice = Advice {
            column: 2,
            reason: AdviceReason::Block,
        };
        let text = rendered_text(&state, Some(&advice));
        assert!(text.contains("Turn: Red (X)"));
        assert!(text.contains("Advice for Red: column 3 blocks a win"));
        assert!(text.contains("hello"));
    }

    #[test]
    fn shows_winner() {
        let mut state = GameState::initial();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.apply_move_mut(col).unwrap();
        }
        let text = rendered_text(&state, None);
        assert!(text.contains("Red wins"));
        assert!(text.contains("Last: Red in column 4"));
    }

    #[test]
    fn shows_last_move_once_play_starts() {
        let state = GameState::initial();
        assert!(!rendered_text(&state, None).contains("Last:"));

        let state = state.apply_move(5).unwrap();
        let text = rendered_text(&state, None);
        assert!(text.contains("Turn: Yellow (O)"));
        assert!(text.contains("Last: Red in column 6"));
    }
}
