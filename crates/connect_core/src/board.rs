use std::fmt;

use crate::error::BoardError;
use crate::types::{Grid, Side, COLS, ROWS};

/// Packed board state.
///
/// Each side occupies one bitmask per row (bit `c` = column `c`), and `free`
/// holds the number of occupied cells per column, which is also the row index
/// the next drop lands on. Columns fill bottom-up with no gaps; a cell never
/// carries both side bits.
///
/// Boards are value snapshots: `play` returns a new board and no board handed
/// out is ever mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    p1: [u8; ROWS],
    p2: [u8; ROWS],
    free: [u8; COLS],
}

impl Board {
    /// Empty board.
    pub fn new() -> Self {
        Board {
            p1: [0; ROWS],
            p2: [0; ROWS],
            free: [0; COLS],
        }
    }

    /// Build a board from its matrix form, replaying column fills bottom-up.
    ///
    /// Fails with `InvalidBoard` if any column has an empty cell with an
    /// occupied cell directly above it (a floating piece), and with
    /// `InvalidCell` on codes outside {0, 1, 2}. Each cell is checked before
    /// its move is applied.
    pub fn from_grid(grid: &Grid) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for r in 0..ROWS {
            for c in 0..COLS {
                let code = grid[r][c];
                if r < ROWS - 1 && code == 0 && grid[r + 1][c] != 0 {
                    return Err(BoardError::InvalidBoard { row: r, col: c });
                }
                match code {
                    0 => {}
                    1 => board.drop_piece(c, Side::One),
                    2 => board.drop_piece(c, Side::Two),
                    _ => return Err(BoardError::InvalidCell { row: r, col: c, code }),
                }
            }
        }
        Ok(board)
    }

    /// Private construction-time drop. Callers guarantee the column is open;
    /// `from_grid` replays rows bottom-up so the gap check above holds.
    fn drop_piece(&mut self, col: usize, side: Side) {
        let row = self.free[col] as usize;
        debug_assert!(row < ROWS);
        match side {
            Side::One => self.p1[row] |= 1 << col,
            Side::Two => self.p2[row] |= 1 << col,
        }
        self.free[col] = row as u8 + 1;
    }

    /// Return a new board with one more `side` piece dropped into `col`.
    pub fn play(&self, col: usize, side: Side) -> Result<Board, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        if self.free[col] as usize >= ROWS {
            return Err(BoardError::ColumnFull(col));
        }
        let mut next = self.clone();
        next.drop_piece(col, side);
        Ok(next)
    }

    /// Ascending column indices that still have room. Empty when full.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&c| (self.free[c] as usize) < ROWS).collect()
    }

    /// All (column, successor) pairs for `side`, in ascending column order.
    pub fn children(&self, side: Side) -> Vec<(usize, Board)> {
        (0..COLS)
            .filter(|&c| (self.free[c] as usize) < ROWS)
            .map(|c| {
                let mut next = self.clone();
                next.drop_piece(c, side);
                (c, next)
            })
            .collect()
    }

    /// True if `col` is in range and not yet full.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < COLS && (self.free[col] as usize) < ROWS
    }

    /// True iff every column is full. Fullness only: a board holding a
    /// completed 4-in-a-row still reports non-terminal while columns remain
    /// playable.
    pub fn is_terminal(&self) -> bool {
        self.free.iter().all(|&f| f as usize >= ROWS)
    }

    /// Side occupying a cell, if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<Side> {
        if (self.p1[row] >> col) & 1 != 0 {
            Some(Side::One)
        } else if (self.p2[row] >> col) & 1 != 0 {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// Number of 4-in-a-row windows fully owned by `side`, across all four
    /// orientations. Overlapping windows count independently: five in a row
    /// yields 2.
    pub fn count_connected(&self, side: Side) -> u32 {
        let rows = match side {
            Side::One => &self.p1,
            Side::Two => &self.p2,
        };
        let mut count = 0;

        // Horizontal
        for r in 0..ROWS {
            for c in 0..COLS - 3 {
                if (0..4).all(|i| (rows[r] >> (c + i)) & 1 != 0) {
                    count += 1;
                }
            }
        }

        // Vertical
        for r in 0..ROWS - 3 {
            for c in 0..COLS {
                if (0..4).all(|i| (rows[r + i] >> c) & 1 != 0) {
                    count += 1;
                }
            }
        }

        // Diagonal up-right
        for r in 0..ROWS - 3 {
            for c in 0..COLS - 3 {
                if (0..4).all(|i| (rows[r + i] >> (c + i)) & 1 != 0) {
                    count += 1;
                }
            }
        }

        // Diagonal up-left
        for r in 0..ROWS - 3 {
            for c in 3..COLS {
                if (0..4).all(|i| (rows[r + i] >> (c - i)) & 1 != 0) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Connected-window balance: side one minus side two.
    pub fn utility(&self) -> i32 {
        self.count_connected(Side::One) as i32 - self.count_connected(Side::Two) as i32
    }

    /// Inverse of `from_grid`; round-trips any gap-free grid.
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0u8; COLS]; ROWS];
        for r in 0..ROWS {
            for c in 0..COLS {
                if let Some(side) = self.cell(r, c) {
                    grid[r][c] = side.cell_code();
                }
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first: X = side one, O = side two, . = empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..ROWS).rev() {
            for c in 0..COLS {
                let ch = match self.cell(r, c) {
                    Some(Side::One) => 'X',
                    Some(Side::Two) => 'O',
                    None => '.',
                };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            if r > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
