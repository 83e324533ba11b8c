//! SiDing (四顶) game engine
//!
//! A two-player strategy game on a 4x4 board:
//! - Each side starts with 4 pieces (B on the top row, A on the bottom row)
//! - A move steps one piece up, down, left or right onto an empty cell
//! - Capture: two of the mover's pieces side by side with an enemy piece
//!   directly beyond them, in the row or column of the moved piece, remove the
//!   enemy piece, unless that row or column is completely filled
//! - A side reduced to fewer than 2 pieces loses
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, captures, win detection
//! - [`eval`]: Position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine with seedable randomness
//! - [`ui`]: Game shell and egui front end
//!
//! # Quick Start
//!
//! ```
//! use siding::{apply_move, check_winner, create_initial_board, AIEngine, AiConfig, Player};
//!
//! let mut board = create_initial_board();
//! let mut engine = AIEngine::with_config(AiConfig { seed: Some(1), ..AiConfig::default() });
//!
//! if let Some(mv) = engine.get_move(&board, Player::B) {
//!     board = apply_move(&board, mv, Player::B).board;
//! }
//! assert_eq!(check_winner(&board), None);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Player, Pos, BOARD_SIZE};
pub use engine::{AIEngine, AiConfig, MoveResult, SearchType};
pub use rules::{
    apply_move, check_winner, create_initial_board, legal_moves, try_apply_move, MoveError,
    MoveOutcome,
};
pub use search::select_best_move;
