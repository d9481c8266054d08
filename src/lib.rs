//! Ball Maze - a grid-based ball labyrinth
//!
//! Core modules:
//! - `sim`: Deterministic maze state (grid, ball, goal, move application)
//! - `settings`: Driver configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Cell, Grid, MazeError, MazeState, MoveInstruction, Position};

/// Maze configuration constants
pub mod consts {
    use crate::sim::Position;

    /// Reference maze (0 = open, 1 = wall)
    pub const REFERENCE_GRID: [[u8; 5]; 5] = [
        [0, 0, 0, 1, 0],
        [1, 1, 0, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 0, 0, 1],
    ];

    /// Ball start, also the hard-coded reset target
    pub const DEFAULT_START: Position = Position::new(0, 0);
    /// Goal of the reference maze
    pub const DEFAULT_GOAL: Position = Position::new(0, 4);

    /// Move string that solves the reference maze from the default start
    pub const REFERENCE_SOLUTION: &str = "RRDDLLDDRRRURUUU";
}
