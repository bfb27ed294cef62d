//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Every presentation drives the same [`GameEngine`] and only reads [`Snapshot`]s.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use board::{Board, Position};
pub use config::{GameConfig, MAX_BOARD_SIZE};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, EngineState, GameStatus, Snake, Snapshot};
