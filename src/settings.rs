//! Driver settings
//!
//! Persisted as JSON on disk. The maze itself is never saved; these settings
//! only describe which maze to build and what to play on it.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Grid, MazeResult, MazeState, Position};

/// Maze layout: grid plus ball start and goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            grid: Grid::from_codes(&REFERENCE_GRID).expect("reference grid is rectangular"),
            start: DEFAULT_START,
            goal: DEFAULT_GOAL,
        }
    }
}

/// Seeded random probing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWalk {
    pub steps: usize,
    #[serde(default)]
    pub seed: u64,
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maze to build
    pub maze: MazeConfig,
    /// Move string played after the walkthrough (L/R/U/D)
    pub moves: String,
    /// Optional random walk after the move string
    pub random_walk: Option<RandomWalk>,

    // === Output ===
    /// Print ball/goal distance after each phase
    pub show_distance: bool,
    /// Print the numeric image matrix (0 open, 1 wall, 2 ball, 3 goal)
    pub show_codes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            moves: REFERENCE_SOLUTION.to_string(),
            random_walk: None,

            show_distance: true,
            show_codes: false,
        }
    }
}

/// Errors from reading or writing a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {}", e),
            SettingsError::Parse(e) => write!(f, "Settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Build a validated maze from the configured layout
    pub fn build_maze(&self) -> MazeResult<MazeState> {
        MazeState::new(self.maze.grid.clone(), self.maze.start, self.maze.goal)
    }
}
