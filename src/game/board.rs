use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;
pub const WIN_LENGTH: usize = 4;

/// Line directions as (row step, column step): right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character symbol used by the text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite a single cell. Gravity is not enforced.
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Bounds-checked lookup with signed coordinates.
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row of a column, or `None` if the column is full or out
    /// of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Drop a piece, reporting only whether it landed. A failed placement
    /// leaves the board untouched.
    pub fn place(&mut self, col: usize, cell: Cell) -> bool {
        self.drop_piece(col, cell).is_ok()
    }

    /// Temporarily drop `cell` into `col`, run `f` with the landing row, then
    /// clear the cell again. Returns `None` without calling `f` when the column
    /// has no room.
    pub fn with_piece<T>(
        &mut self,
        col: usize,
        cell: Cell,
        f: impl FnOnce(&mut Board, usize) -> T,
    ) -> Option<T> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = cell;
        let result = f(self, row);
        self.cells[row][col] = Cell::Empty;
        Some(result)
    }

    /// Columns that still have room, left to right.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check whether `cell` has four in a row anywhere on the board.
    pub fn has_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != cell {
                    continue;
                }
                let (r, c) = (row as isize, col as isize);
                for (dr, dc) in DIRECTIONS {
                    let run = (1..WIN_LENGTH as isize)
                        .all(|i| self.cell_at(r + dr * i, c + dc * i) == Some(cell));
                    if run {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Longest run of `cell` through (row, col) on any of the four axes.
    ///
    /// The cell itself always counts once, whatever it holds, so a legal
    /// landing cell can be scored before the piece is dropped. At most three
    /// neighbours are examined on each side and the result is capped at
    /// [`WIN_LENGTH`].
    pub fn longest_alignment(&self, row: usize, col: usize, cell: Cell) -> usize {
        let (r, c) = (row as isize, col as isize);
        let mut longest = 0;

        for (dr, dc) in DIRECTIONS {
            let mut count = 1;
            for sign in [1, -1] {
                for i in 1..WIN_LENGTH as isize {
                    if self.cell_at(r + sign * dr * i, c + sign * dc * i) == Some(cell) {
                        count += 1;
                    } else {
                        break;
                    }
                }
            }
            longest = longest.max(count);
        }

        longest.min(WIN_LENGTH)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..COLS {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;
        for row in &self.cells {
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a board from six strings of `X`, `O` and `.`, top row first.
#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; ROWS]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                'X' => Cell::Red,
                'O' => Cell::Yellow,
                _ => Cell::Empty,
            };
            board.set(row, col, cell);
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_columns_stack_bottom_up() {
        for col in 0..COLS {
            for (first, second) in [(Cell::Red, Cell::Yellow), (Cell::Yellow, Cell::Yellow)] {
                let mut board = Board::new();
                assert!(board.place(col, first));
                assert!(board.place(col, second));
                assert_eq!(board.get(ROWS - 1, col), first);
                assert_eq!(board.get(ROWS - 2, col), second);
                assert_eq!(board.piece_count(), 2);
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull));

        let before = board;
        assert!(!board.place(0, Cell::Yellow));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn));
        assert!(!board.place(7, Cell::Red));
        assert!(!board.place(usize::MAX, Cell::Yellow));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.open_columns().count(), 0);
    }

    #[test]
    fn test_with_piece_restores_board() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        let before = board;

        let landed = board.with_piece(2, Cell::Yellow, |b, row| {
            assert_eq!(b.get(row, 2), Cell::Yellow);
            row
        });

        assert_eq!(landed, Some(4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_with_piece_on_full_column_skips_closure() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(4, Cell::Yellow).unwrap();
        }
        let before = board;
        let called = board.with_piece(4, Cell::Red, |_, _| ());
        assert_eq!(called, None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.has_win(Cell::Red));
        assert!(!board.has_win(Cell::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.has_win(Cell::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        board.set(5, 0, Cell::Red);
        board.set(4, 1, Cell::Red);
        board.set(3, 2, Cell::Red);
        board.set(2, 3, Cell::Red);
        assert!(board.has_win(Cell::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.has_win(Cell::Red));
        assert!(!board.has_win(Cell::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.has_win(Cell::Red));
    }

    #[test]
    fn test_gap_breaks_line() {
        let board = board_from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XX.XX..",
        ]);
        assert!(!board.has_win(Cell::Red));
        assert!(!board.has_win(Cell::Empty));
    }

    #[test]
    fn test_alignment_middle_of_three() {
        let mut board = Board::new();
        board.set(5, 0, Cell::Red);
        board.set(5, 1, Cell::Red);
        board.set(5, 2, Cell::Red);
        assert_eq!(board.longest_alignment(5, 1, Cell::Red), 3);
    }

    #[test]
    fn test_alignment_counts_empty_landing_cell() {
        let mut board = Board::new();
        assert_eq!(board.longest_alignment(5, 3, Cell::Red), 1);

        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        // Landing cell (3, 3) sits on two reds.
        assert_eq!(board.longest_alignment(3, 3, Cell::Red), 3);
        assert_eq!(board.longest_alignment(3, 3, Cell::Yellow), 1);
    }

    #[test]
    fn test_alignment_diagonal_and_cap() {
        let board = board_from_rows([
            ".......",
            ".......",
            "...O...",
            "..O....",
            ".O.....",
            "O......",
        ]);
        assert_eq!(board.longest_alignment(4, 1, Cell::Yellow), 4);

        let row = board_from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.XXX",
        ]);
        // Three on each side would make seven; the result is capped.
        assert_eq!(row.longest_alignment(5, 3, Cell::Red), WIN_LENGTH);
    }

    #[test]
    fn test_display_renders_symbols() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Yellow).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[0], " 1 2 3 4 5 6 7");
        assert_eq!(lines[ROWS], " X . . . . . O");
    }
}
