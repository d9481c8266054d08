//! Read-only grid snapshot for display collaborators

use std::fmt;

use super::grid::{Cell, Grid, Position};

/// One displayed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotCell {
    Open,
    Wall,
    Ball,
    Goal,
}

impl SnapshotCell {
    /// Text marker used by `Display`
    pub fn marker(self) -> char {
        match self {
            SnapshotCell::Open => '0',
            SnapshotCell::Wall => '1',
            SnapshotCell::Ball => 'B',
            SnapshotCell::Goal => 'G',
        }
    }
}

/// Grid with ball and goal overlaid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<Vec<SnapshotCell>>,
    pub ball: Position,
    pub goal: Position,
}

impl Snapshot {
    /// Capture `grid` with markers; the ball marker wins when ball and goal coincide
    pub fn capture(grid: &Grid, ball: Position, goal: Position) -> Self {
        let rows = grid
            .rows()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| {
                        let pos = Position::new(r, c);
                        if pos == ball {
                            SnapshotCell::Ball
                        } else if pos == goal {
                            SnapshotCell::Goal
                        } else {
                            match cell {
                                Cell::Open => SnapshotCell::Open,
                                Cell::Wall => SnapshotCell::Wall,
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows, ball, goal }
    }

    /// Numeric image for graphical display: 0 open, 1 wall, 2 ball, 3 goal
    ///
    /// The goal is painted last, so it shows when the ball sits on it.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        let mut image: Vec<Vec<u8>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        SnapshotCell::Wall => 1,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();

        for (pos, code) in [(self.ball, 2), (self.goal, 3)] {
            if let Some(slot) = image.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
                *slot = code;
            }
        }
        image
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|c| c.marker().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
