//! Search module for the SiDing AI
//!
//! Contains the fixed-depth minimax search with alpha-beta pruning and the
//! root move selection built on top of it.

pub mod alphabeta;

pub use alphabeta::{select_best_move, SearchResult, SearchStats, Searcher, SEARCH_DEPTH};
