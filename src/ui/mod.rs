//! GUI module for the SiDing game
//!
//! This module provides a native Rust GUI using egui/eframe. All game logic
//! lives in the core modules; the GUI only holds turn and history state.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::SidingApp;
pub use game_state::{ActionError, AiState, CaptureAnimation, GameMode, GameState, ShellConfig};
