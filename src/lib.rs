//! Grid Snake - a terminal Snake game on a fixed-tick engine
//!
//! This library provides:
//! - Core game logic (game module)
//! - Tick scheduling and the engine's hosting session (schedule module)
//! - Keyboard and mouse-swipe input (input module)
//! - TUI rendering (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod schedule;
pub mod telemetry;
