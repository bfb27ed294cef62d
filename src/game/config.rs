use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::board::Position;
use super::direction::Direction;

/// Largest board a terminal can reasonably show
pub const MAX_BOARD_SIZE: usize = 100;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub board_size: usize,
    /// Milliseconds between two game ticks
    pub tick_interval_ms: u64,
    /// Cell the one-segment snake starts on
    pub initial_cell: Position,
    /// Heading at the start of every game
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            tick_interval_ms: 100,
            initial_cell: Position::new(5, 5),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 {
            return Err("board_size must be at least 1".to_string());
        }

        if self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "board_size must be at most {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }

        let n = self.board_size as i32;
        let cell = self.initial_cell;
        if cell.x < 0 || cell.x >= n || cell.y < 0 || cell.y >= n {
            return Err(format!(
                "initial_cell ({}, {}) is outside a {}x{} board",
                cell.x, cell.y, n, n
            ));
        }

        Ok(())
    }
}
