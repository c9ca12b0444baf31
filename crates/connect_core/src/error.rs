use thiserror::Error;

/// Errors raised by board construction and direct move application.
///
/// The search engine only ever applies moves drawn from `legal_moves`, so it
/// never observes `ColumnOutOfRange` or `ColumnFull`; those exist for direct
/// callers of `play` and are fatal, never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board: empty slot below an occupied cell at row {row}, column {col}")]
    InvalidBoard { row: usize, col: usize },

    #[error("invalid cell code {code} at row {row}, column {col} (expected 0, 1 or 2)")]
    InvalidCell { row: usize, col: usize, code: u8 },

    #[error("column out of range: {0}")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}
