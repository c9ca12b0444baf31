//! Heuristic board evaluation
//!
//! Weighted linear combination over completed connections, open windows,
//! mobility, and center control. Pure; assumes a structurally valid board.

use connect_core::{Board, Side, COLS, ROWS};

/// A completed 4-in-a-row dominates everything else.
pub const WIN_4_WEIGHT: f64 = 10_000.0;
/// Open 3-in-a-row: one drop away from a win.
pub const OPEN_3_WEIGHT: f64 = 60.0;
/// Open 2-in-a-row: a small positional edge.
pub const OPEN_2_WEIGHT: f64 = 8.0;
/// Legal moves available from the position.
pub const MOBILITY_WEIGHT: f64 = 1.0;
/// Pieces in the middle column.
pub const CENTER_WEIGHT: f64 = 3.0;

/// Evaluates the board for `ai_side`.
///
/// Higher is better for `ai_side`, whichever literal side that is. An open
/// window of length k is a 4-cell line holding exactly k `ai_side` cells and
/// no opponent cells.
pub fn evaluate(board: &Board, ai_side: Side) -> f64 {
    let opponent = ai_side.other();

    let ai4 = board.count_connected(ai_side) as f64;
    let opp4 = board.count_connected(opponent) as f64;

    let ai3 = count_open_windows(board, 3, ai_side) as f64;
    let opp3 = count_open_windows(board, 3, opponent) as f64;

    let ai2 = count_open_windows(board, 2, ai_side) as f64;
    let opp2 = count_open_windows(board, 2, opponent) as f64;

    let mobility = board.legal_moves().len() as f64;

    let center = center_count(board, ai_side) as f64 - center_count(board, opponent) as f64;

    WIN_4_WEIGHT * (ai4 - opp4)
        + OPEN_3_WEIGHT * (ai3 - opp3)
        + OPEN_2_WEIGHT * (ai2 - opp2)
        + MOBILITY_WEIGHT * mobility
        + CENTER_WEIGHT * center
}

/// Counts 4-cell windows holding exactly `k` cells of `side` and zero
/// opponent cells, across all four orientations.
fn count_open_windows(board: &Board, k: u32, side: Side) -> u32 {
    let mut count = 0;

    // Horizontal
    for r in 0..ROWS {
        for c in 0..COLS - 3 {
            if window_matches(board, side, k, |i| (r, c + i)) {
                count += 1;
            }
        }
    }

    // Vertical
    for r in 0..ROWS - 3 {
        for c in 0..COLS {
            if window_matches(board, side, k, |i| (r + i, c)) {
                count += 1;
            }
        }
    }

    // Diagonal up-right
    for r in 0..ROWS - 3 {
        for c in 0..COLS - 3 {
            if window_matches(board, side, k, |i| (r + i, c + i)) {
                count += 1;
            }
        }
    }

    // Diagonal up-left
    for r in 0..ROWS - 3 {
        for c in 3..COLS {
            if window_matches(board, side, k, |i| (r + i, c - i)) {
                count += 1;
            }
        }
    }

    count
}

fn window_matches(board: &Board, side: Side, k: u32, cell_at: impl Fn(usize) -> (usize, usize)) -> bool {
    let mut own = 0;
    for i in 0..4 {
        let (r, c) = cell_at(i);
        match board.cell(r, c) {
            Some(s) if s == side => own += 1,
            Some(_) => return false,
            None => {}
        }
    }
    own == k
}

fn center_count(board: &Board, side: Side) -> u32 {
    let center = COLS / 2;
    (0..ROWS).filter(|&r| board.cell(r, center) == Some(side)).count() as u32
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
