//! Move instruction alphabet

use serde::{Deserialize, Serialize};

use super::error::{MazeError, MazeResult};
use super::grid::Position;

/// One-cell displacement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveInstruction {
    Left,
    Right,
    Up,
    Down,
}

/// The fixed instruction set
pub const ALPHABET: [MoveInstruction; 4] = [
    MoveInstruction::Left,
    MoveInstruction::Right,
    MoveInstruction::Up,
    MoveInstruction::Down,
];

impl MoveInstruction {
    /// Single-letter code (L/R/U/D)
    pub fn symbol(self) -> char {
        match self {
            MoveInstruction::Left => 'L',
            MoveInstruction::Right => 'R',
            MoveInstruction::Up => 'U',
            MoveInstruction::Down => 'D',
        }
    }

    pub fn from_symbol(c: char) -> MazeResult<Self> {
        match c.to_ascii_uppercase() {
            'L' => Ok(MoveInstruction::Left),
            'R' => Ok(MoveInstruction::Right),
            'U' => Ok(MoveInstruction::Up),
            'D' => Ok(MoveInstruction::Down),
            _ => Err(MazeError::UnknownInstruction(c)),
        }
    }

    /// Neighbour of `pos` in this direction, limited to `rows x cols`
    ///
    /// Returns `None` at the grid edge. Right/Down stop at `dimension - 1`.
    pub fn step(self, pos: Position, rows: usize, cols: usize) -> Option<Position> {
        let Position { row, col } = pos;
        match self {
            MoveInstruction::Left if col > 0 => Some(Position::new(row, col - 1)),
            MoveInstruction::Right if col + 1 < cols => Some(Position::new(row, col + 1)),
            MoveInstruction::Up if row > 0 => Some(Position::new(row - 1, col)),
            MoveInstruction::Down if row + 1 < rows => Some(Position::new(row + 1, col)),
            _ => None,
        }
    }
}

/// Parse a move string such as `"RRDDL"`
///
/// Every character must be one of L/R/U/D; whitespace is not skipped.
/// All symbols are checked before anything is returned, so callers can
/// reject the whole string without applying a prefix of it.
pub fn parse_moves(s: &str) -> MazeResult<Vec<MoveInstruction>> {
    s.chars().map(MoveInstruction::from_symbol).collect()
}
