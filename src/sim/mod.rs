//! Deterministic maze simulation
//!
//! All maze logic lives here. This module must stay pure:
//! - No printing or file access
//! - Seeded RNG only
//! - Blocked moves are absorbed, never raised

pub mod error;
pub mod grid;
pub mod moves;
pub mod snapshot;
pub mod state;
pub mod walk;

pub use error::{MazeError, MazeResult};
pub use grid::{Cell, Grid, Position};
pub use moves::{ALPHABET, MoveInstruction, parse_moves};
pub use snapshot::{Snapshot, SnapshotCell};
pub use state::MazeState;
pub use walk::random_walk;
