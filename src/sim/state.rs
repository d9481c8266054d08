//! Maze state and the move transition
//!
//! `MazeState` is the single authority over grid, ball, goal and move count.
//! Every operation runs synchronously; one instance per session.

use glam::DVec2;

use super::error::MazeResult;
use super::grid::{Cell, Grid, Position};
use super::moves::{ALPHABET, MoveInstruction, parse_moves};
use super::snapshot::Snapshot;
use crate::consts::*;

/// Complete maze state
#[derive(Debug, Clone, PartialEq)]
pub struct MazeState {
    grid: Grid,
    /// Configured start (used by `reset_to_start`)
    start: Position,
    ball: Position,
    goal: Position,
    /// Every move attempt, blocked ones included
    move_count: u64,
}

impl Default for MazeState {
    /// Reference 5x5 maze, ball at (0,0), goal at (0,4)
    fn default() -> Self {
        let grid = Grid::from_codes(&REFERENCE_GRID).expect("reference grid is rectangular");

        Self {
            grid,
            start: DEFAULT_START,
            ball: DEFAULT_START,
            goal: DEFAULT_GOAL,
            move_count: 0,
        }
    }
}

impl MazeState {
    /// Create a maze; fails if `start` or `goal` is outside the grid
    pub fn new(grid: Grid, start: Position, goal: Position) -> MazeResult<Self> {
        for pos in [start, goal] {
            if !grid.in_bounds(pos) {
                return Err(grid.out_of_bounds(pos));
            }
        }

        let (rows, cols) = grid.dimensions();
        log::info!(
            "Maze created: {}x{}, start ({}, {}), goal ({}, {})",
            rows,
            cols,
            start.row,
            start.col,
            goal.row,
            goal.col
        );

        Ok(Self {
            grid,
            start,
            ball: start,
            goal,
            move_count: 0,
        })
    }

    /// Create a maze from numeric rows (0 = open, 1 = wall)
    pub fn from_codes<R: AsRef<[u8]>>(
        rows: &[R],
        start: Position,
        goal: Position,
    ) -> MazeResult<Self> {
        Self::new(Grid::from_codes(rows)?, start, goal)
    }

    // === Mutators ===

    /// Swap the grid wholesale
    ///
    /// Ball and goal are kept as they are, even if they now fall outside the
    /// grid or on a wall. Moves from an out-of-bounds ball are always blocked.
    pub fn replace_grid(&mut self, grid: Grid) {
        let (rows, cols) = grid.dimensions();
        log::info!("Grid replaced: {}x{}", rows, cols);
        if !grid.in_bounds(self.ball) || !grid.in_bounds(self.goal) {
            log::warn!(
                "Ball ({}, {}) or goal ({}, {}) lies outside the new {}x{} grid",
                self.ball.row,
                self.ball.col,
                self.goal.row,
                self.goal.col,
                rows,
                cols
            );
        }
        self.grid = grid;
    }

    /// Put the ball on an open cell; a wall target is ignored
    ///
    /// Does not count as a move.
    pub fn place_ball(&mut self, row: usize, col: usize) -> MazeResult<()> {
        let pos = Position::new(row, col);
        match self.grid.get(pos) {
            None => Err(self.grid.out_of_bounds(pos)),
            Some(Cell::Wall) => {
                log::debug!("Ignoring ball placement onto wall at ({}, {})", row, col);
                Ok(())
            }
            Some(Cell::Open) => {
                self.ball = pos;
                Ok(())
            }
        }
    }

    /// Ball back to the fixed default (0,0), move count to 0
    ///
    /// This ignores the configured start; see `reset_to_start`.
    pub fn reset_ball(&mut self) {
        self.ball = DEFAULT_START;
        self.move_count = 0;
        log::info!("Ball reset to default start");
    }

    /// Ball back to the configured start, move count to 0
    pub fn reset_to_start(&mut self) {
        self.ball = self.start;
        self.move_count = 0;
        log::info!("Ball reset to ({}, {})", self.start.row, self.start.col);
    }

    /// Attempt a one-cell move; walls and edges absorb it
    ///
    /// The attempt is counted either way. Returns true if the ball moved.
    pub fn apply_move(&mut self, instruction: MoveInstruction) -> bool {
        let (rows, cols) = self.grid.dimensions();
        let target = instruction
            .step(self.ball, rows, cols)
            .filter(|&p| self.grid.get(p).is_some_and(|c| !c.is_wall()));

        self.move_count += 1;

        match target {
            Some(pos) => {
                log::trace!(
                    "Move {}: ({}, {}) -> ({}, {})",
                    instruction.symbol(),
                    self.ball.row,
                    self.ball.col,
                    pos.row,
                    pos.col
                );
                self.ball = pos;
                true
            }
            None => {
                log::debug!(
                    "Move {} blocked at ({}, {})",
                    instruction.symbol(),
                    self.ball.row,
                    self.ball.col
                );
                false
            }
        }
    }

    /// Apply instructions in order; blocked steps are absorbed, nothing is rolled back
    pub fn apply_sequence<I>(&mut self, instructions: I)
    where
        I: IntoIterator<Item = MoveInstruction>,
    {
        for instruction in instructions {
            self.apply_move(instruction);
        }
    }

    /// Parse and apply a move string like `"RRDDL"`
    ///
    /// An unknown symbol anywhere rejects the whole string before any move.
    pub fn apply_move_str(&mut self, moves: &str) -> MazeResult<()> {
        let parsed = parse_moves(moves)?;
        self.apply_sequence(parsed);
        Ok(())
    }

    // === Queries ===

    /// (row count, column count)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn move_alphabet(&self) -> [MoveInstruction; 4] {
        ALPHABET
    }

    /// Number of open cells in the grid (a static bound, not remaining moves)
    pub fn max_open_cells(&self) -> usize {
        self.grid.open_cells()
    }

    /// Euclidean distance from ball to goal
    ///
    /// Computed in `f64` so distinct cells never collapse to a zero distance.
    pub fn distance_to_goal(&self) -> f64 {
        let to_vec = |p: Position| DVec2::new(p.row as f64, p.col as f64);
        to_vec(self.ball).distance(to_vec(self.goal))
    }

    pub fn reached_goal(&self) -> bool {
        self.ball == self.goal
    }

    /// Grid snapshot with ball and goal markers
    pub fn render(&self) -> Snapshot {
        Snapshot::capture(&self.grid, self.ball, self.goal)
    }

    pub fn ball(&self) -> Position {
        self.ball
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MazeError;
    use MoveInstruction::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_maze() {
        let maze = MazeState::default();
        assert_eq!(maze.dimensions(), (5, 5));
        assert_eq!(maze.ball(), Position::new(0, 0));
        assert_eq!(maze.goal(), Position::new(0, 4));
        assert_eq!(maze.move_count(), 0);
        assert_eq!(maze.max_open_cells(), 17);
        assert!((maze.distance_to_goal() - 4.0).abs() < 1e-6);
        assert!(!maze.reached_goal());
    }

    #[test]
    fn test_reference_walkthrough() {
        let mut maze = MazeState::default();

        // (1,0) is a wall
        assert!(!maze.apply_move(Down));
        assert_eq!(maze.ball(), Position::new(0, 0));
        assert_eq!(maze.move_count(), 1);

        // Top edge
        assert!(!maze.apply_move(Up));
        assert_eq!(maze.ball(), Position::new(0, 0));
        assert_eq!(maze.move_count(), 2);

        assert!(maze.apply_move(Right));
        assert_eq!(maze.ball(), Position::new(0, 1));
        assert_eq!(maze.move_count(), 3);

        // (0,2) open, then (0,3) is a wall
        maze.apply_sequence([Right, Right]);
        assert_eq!(maze.ball(), Position::new(0, 2));
        assert_eq!(maze.move_count(), 5);
    }

    #[test]
    fn test_reference_solution_reaches_goal() {
        let mut maze = MazeState::default();
        maze.apply_move_str("DUR").unwrap();
        maze.reset_ball();
        assert_eq!(maze.move_count(), 0);

        maze.apply_move_str(REFERENCE_SOLUTION).unwrap();
        assert!(maze.reached_goal());
        assert_eq!(maze.ball(), Position::new(0, 4));
        assert_eq!(maze.distance_to_goal(), 0.0);
        assert_eq!(maze.move_count(), 16);
    }

    #[test]
    fn test_moves_continue_past_goal() {
        let mut maze = MazeState::default();
        maze.apply_move_str(REFERENCE_SOLUTION).unwrap();
        assert!(maze.apply_move(Down));
        assert!(!maze.reached_goal());
        assert_eq!(maze.ball(), Position::new(1, 4));
    }

    #[test]
    fn test_right_and_down_stop_at_last_cell() {
        let mut maze = MazeState::from_codes(
            &[[0u8, 0], [0, 0]],
            Position::new(1, 1),
            Position::new(0, 0),
        )
        .unwrap();
        assert!(!maze.apply_move(Right));
        assert!(!maze.apply_move(Down));
        assert_eq!(maze.ball(), Position::new(1, 1));
        assert_eq!(maze.move_count(), 2);
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        let grid = Grid::from_codes(&[[0u8, 0, 0]]).unwrap();
        let err = MazeState::new(grid.clone(), Position::new(1, 0), Position::new(0, 2));
        assert_eq!(
            err,
            Err(MazeError::InvalidPosition {
                pos: Position::new(1, 0),
                rows: 1,
                cols: 3
            })
        );
        assert!(MazeState::new(grid, Position::new(0, 0), Position::new(0, 3)).is_err());
    }

    #[test]
    fn test_new_rejects_bad_grid() {
        let ragged = vec![vec![0u8, 0], vec![0]];
        assert!(matches!(
            MazeState::from_codes(&ragged, Position::new(0, 0), Position::new(0, 1)),
            Err(MazeError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_place_ball() {
        let mut maze = MazeState::default();

        maze.place_ball(2, 2).unwrap();
        assert_eq!(maze.ball(), Position::new(2, 2));
        assert_eq!(maze.move_count(), 0);

        // Wall: silently ignored
        maze.place_ball(3, 1).unwrap();
        assert_eq!(maze.ball(), Position::new(2, 2));

        assert!(matches!(
            maze.place_ball(5, 0),
            Err(MazeError::InvalidPosition { .. })
        ));
        assert_eq!(maze.ball(), Position::new(2, 2));
    }

    #[test]
    fn test_reset_variants() {
        let mut maze = MazeState::from_codes(
            &crate::consts::REFERENCE_GRID,
            Position::new(2, 0),
            DEFAULT_GOAL,
        )
        .unwrap();
        assert_eq!(maze.start(), Position::new(2, 0));
        maze.apply_move(Right);
        maze.reset_to_start();
        assert_eq!(maze.ball(), Position::new(2, 0));
        assert_eq!(maze.move_count(), 0);

        maze.apply_move(Right);
        maze.reset_ball();
        assert_eq!(maze.ball(), Position::new(0, 0));
        assert_eq!(maze.move_count(), 0);
        // Configured start is unchanged by either reset
        assert_eq!(maze.start(), Position::new(2, 0));
    }

    #[test]
    fn test_move_alphabet() {
        use std::collections::HashSet;

        let maze = MazeState::default();
        let alphabet: HashSet<_> = maze.move_alphabet().into_iter().collect();
        let expected: HashSet<_> = [Left, Right, Up, Down].into_iter().collect();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet, expected);
        assert_eq!(alphabet, ALPHABET.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn test_distance_between_far_adjacent_cells() {
        // Column indexes past 2^24 are not exactly representable in f32
        let cols = 16_777_218;
        let mut maze = MazeState::from_codes(
            &[vec![0u8; cols]],
            Position::new(0, cols - 1),
            Position::new(0, cols - 2),
        )
        .unwrap();
        assert!(!maze.reached_goal());
        assert_eq!(maze.distance_to_goal(), 1.0);

        assert!(maze.apply_move(Left));
        assert!(maze.reached_goal());
        assert_eq!(maze.distance_to_goal(), 0.0);
    }

    #[test]
    fn test_bad_move_string_leaves_state_untouched() {
        let mut maze = MazeState::default();
        let before = maze.clone();
        assert_eq!(
            maze.apply_move_str("RRX"),
            Err(MazeError::UnknownInstruction('X'))
        );
        assert_eq!(maze, before);

        assert_eq!(
            maze.apply_move_str("R D"),
            Err(MazeError::UnknownInstruction(' '))
        );
        assert_eq!(maze, before);
        assert_eq!(maze.move_count(), 0);
    }

    #[test]
    fn test_replace_grid_keeps_positions() {
        let mut maze = MazeState::default();
        maze.apply_move_str("RRDD").unwrap();
        assert_eq!(maze.ball(), Position::new(2, 2));

        maze.replace_grid(Grid::from_codes(&[[0u8, 0]]).unwrap());
        assert_eq!(maze.dimensions(), (1, 2));
        assert_eq!(maze.ball(), Position::new(2, 2));
        assert_eq!(maze.goal(), Position::new(0, 4));
        assert_eq!(maze.max_open_cells(), 2);

        // Ball is off the grid: every move is absorbed, none panic
        for m in ALPHABET {
            assert!(!maze.apply_move(m));
        }
        assert_eq!(maze.ball(), Position::new(2, 2));
        assert_eq!(maze.move_count(), 8);
    }

    #[test]
    fn test_render() {
        let mut maze = MazeState::default();
        maze.apply_move(Right);
        assert_eq!(
            maze.render().to_string(),
            "0 B 0 1 G\n1 1 0 1 0\n0 0 0 1 0\n0 1 1 0 0\n0 0 0 0 1\n"
        );
    }

    fn arb_maze() -> impl Strategy<Value = MazeState> {
        arb_maze_with_dims().prop_map(|(maze, _)| maze)
    }

    /// Maze together with the (rows, cols) it was generated with
    fn arb_maze_with_dims() -> impl Strategy<Value = (MazeState, (usize, usize))> {
        (1usize..7, 1usize..7)
            .prop_flat_map(|(rows, cols)| {
                (
                    prop::collection::vec(prop::collection::vec(0u8..2, cols), rows),
                    0..rows,
                    0..cols,
                    0..rows,
                    0..cols,
                )
            })
            .prop_map(|(codes, sr, sc, gr, gc)| {
                let mut grid = Grid::from_codes(&codes).unwrap();
                let start = Position::new(sr, sc);
                grid.set(start, Cell::Open);
                let dims = (codes.len(), codes[0].len());
                (MazeState::new(grid, start, Position::new(gr, gc)).unwrap(), dims)
            })
    }

    fn arb_moves() -> impl Strategy<Value = Vec<MoveInstruction>> {
        prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..64)
    }

    proptest! {
        #[test]
        fn prop_dimensions_match((maze, dims) in arb_maze_with_dims()) {
            prop_assert_eq!(maze.dimensions(), dims);
            prop_assert_eq!(maze.grid().dimensions(), dims);
        }

        #[test]
        fn prop_ball_stays_on_open_cells(mut maze in arb_maze(), moves in arb_moves()) {
            for m in moves {
                maze.apply_move(m);
                let ball = maze.ball();
                prop_assert!(maze.grid().in_bounds(ball));
                prop_assert_eq!(maze.cell(ball), Some(Cell::Open));
            }
        }

        #[test]
        fn prop_counter_counts_attempts(maze in arb_maze(), moves in arb_moves()) {
            let mut single = maze.clone();
            for &m in &moves {
                single.apply_move(m);
            }
            let mut batch = maze;
            batch.apply_sequence(moves.iter().copied());

            prop_assert_eq!(single.move_count(), moves.len() as u64);
            prop_assert_eq!(&single, &batch);
        }

        #[test]
        fn prop_open_cells_invariant(mut maze in arb_maze(), moves in arb_moves()) {
            let open = maze.max_open_cells();
            maze.apply_sequence(moves);
            prop_assert_eq!(maze.max_open_cells(), open);
        }

        #[test]
        fn prop_distance_zero_iff_goal(mut maze in arb_maze(), moves in arb_moves()) {
            maze.apply_sequence(moves);
            prop_assert!(maze.distance_to_goal() >= 0.0);
            prop_assert_eq!(maze.distance_to_goal() == 0.0, maze.reached_goal());
        }

        #[test]
        fn prop_reset_ball(mut maze in arb_maze(), moves in arb_moves()) {
            maze.apply_sequence(moves);
            maze.reset_ball();
            prop_assert_eq!(maze.ball(), Position::new(0, 0));
            prop_assert_eq!(maze.move_count(), 0);
        }
    }
}
