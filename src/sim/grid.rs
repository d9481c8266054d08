//! Maze grid and positions

use serde::{Deserialize, Serialize};

use super::error::{MazeError, MazeResult};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Space the ball may occupy
    #[default]
    Open,
    /// Blocks movement into it
    Wall,
}

impl Cell {
    /// Numeric code used in grid literals and settings files
    pub fn code(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// A (row, column) grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Fixed-size rectangular table of cells (row-major)
///
/// Always has at least one row and one column; every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cells
    pub fn new(rows: Vec<Vec<Cell>>) -> MazeResult<Self> {
        let Some(first) = rows.first() else {
            return Err(MazeError::invalid_grid("grid has no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MazeError::invalid_grid("grid has no columns"));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != cols) {
            return Err(MazeError::invalid_grid(format!(
                "row {} has {} cells, expected {}",
                i,
                rows[i].len(),
                cols
            )));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from numeric codes (0 = open, 1 = wall)
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> MazeResult<Self> {
        let mut out = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let cells = row
                .as_ref()
                .iter()
                .enumerate()
                .map(|(c, &code)| {
                    Cell::from_code(code).ok_or_else(|| {
                        MazeError::invalid_grid(format!(
                            "unknown cell code {} at ({}, {})",
                            code, r, c
                        ))
                    })
                })
                .collect::<MazeResult<Vec<_>>>()?;
            out.push(cells);
        }
        Self::new(out)
    }

    /// (row count, column count)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at `pos`, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Overwrite a cell; returns false when out of bounds
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[pos.row * self.cols + pos.col] = cell;
        true
    }

    /// Number of open cells
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Open).count()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Error for a position outside this grid
    pub(crate) fn out_of_bounds(&self, pos: Position) -> MazeError {
        MazeError::InvalidPosition {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<u8>>) -> MazeResult<Self> {
        Self::from_codes(&rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
