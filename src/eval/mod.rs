//! Evaluation module for SiDing positions
//!
//! Positions are scored on material: each piece of advantage is worth
//! [`Score::PIECE`]. A small random jitter breaks ties between otherwise
//! equal positions so the computer does not repeat itself.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, material_score};
pub use patterns::Score;
