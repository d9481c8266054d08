//! Maze errors
//!
//! Blocked moves are not errors; these only cover malformed input.

use std::fmt;

use super::grid::Position;

/// Result type for maze operations
pub type MazeResult<T> = Result<T, MazeError>;

/// Errors raised synchronously by the call that detects them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid is empty, ragged, or holds an unknown cell code
    InvalidGrid { reason: String },
    /// Position lies outside `[0, rows) x [0, cols)`
    InvalidPosition {
        pos: Position,
        rows: usize,
        cols: usize,
    },
    /// Move symbol outside the L/R/U/D alphabet
    UnknownInstruction(char),
}

impl MazeError {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        MazeError::InvalidGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidGrid { reason } => write!(f, "Invalid grid: {}", reason),
            MazeError::InvalidPosition { pos, rows, cols } => write!(
                f,
                "Invalid position ({}, {}), grid is {}x{}",
                pos.row, pos.col, rows, cols
            ),
            MazeError::UnknownInstruction(c) => write!(f, "Unknown move instruction {:?}", c),
        }
    }
}

impl std::error::Error for MazeError {}
