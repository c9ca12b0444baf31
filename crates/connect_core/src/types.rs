/// Board height. Row 0 is the bottom row; pieces stack upward.
pub const ROWS: usize = 6;
/// Board width.
pub const COLS: usize = 7;

/// External matrix form of a board: `grid[row][col]`, row 0 at the bottom,
/// cell codes 0 = empty, 1 = side one, 2 = side two.
pub type Grid = [[u8; COLS]; ROWS];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Cell code used in the matrix form.
    pub fn cell_code(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

/// The request layer speaks in a boolean: `true` means the engine plays
/// side one.
impl From<bool> for Side {
    fn from(first: bool) -> Side {
        if first {
            Side::One
        } else {
            Side::Two
        }
    }
}
