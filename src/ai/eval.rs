use crate::game::{Board, Cell, Player, CENTER_COL, COLS, ROWS, WIN_LENGTH};

/// Bonus per piece in the center column.
pub const CENTER_WEIGHT: i32 = 5;

/// Score for a window by how many of its cells match the anchor piece.
const WINDOW_SCORES: [i32; WIN_LENGTH + 1] = [0, 0, 10, 50, 1000];

/// Window directions anchored at a piece: right, down, down-right, up-right.
/// The down-left and up-left anchorings are intentionally absent.
const WINDOWS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Static score of a position from `ai`'s point of view. Positive favors
/// `ai`, negative favors its opponent.
pub fn evaluate(board: &Board, ai: Player) -> i32 {
    let ai_cell = ai.to_cell();
    let mut score = 0;

    for row in 0..ROWS {
        match board.get(row, CENTER_COL) {
            Cell::Empty => {}
            cell if cell == ai_cell => score += CENTER_WEIGHT,
            _ => score -= CENTER_WEIGHT,
        }
    }

    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = board.get(row, col);
            if cell == Cell::Empty {
                continue;
            }
            let sign = if cell == ai_cell { 1 } else { -1 };

            for (dr, dc) in WINDOWS {
                if let Some(matching) = window_count(board, row, col, dr, dc, cell) {
                    score += sign * WINDOW_SCORES[matching];
                }
            }
        }
    }

    score
}

/// Count cells equal to `cell` in the 4-cell window starting at (row, col),
/// or `None` when the window leaves the board.
fn window_count(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    cell: Cell,
) -> Option<usize> {
    let span = WIN_LENGTH as isize - 1;
    let end_row = row as isize + dr * span;
    let end_col = col as isize + dc * span;
    if end_row < 0 || end_row >= ROWS as isize || end_col < 0 || end_col >= COLS as isize {
        return None;
    }

    let matching = (0..WIN_LENGTH as isize)
        .filter(|&i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            board.get(r, c) == cell
        })
        .count();
    Some(matching)
}
