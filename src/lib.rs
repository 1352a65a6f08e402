//! Backward induction over the complete tic-tac-toe game tree
//!
//! This crate provides:
//! - Tic-Tac-Toe board, moves and outcome detection
//! - An arena-backed game tree with per-node outcome tables
//! - Prune and fold passes that reduce the tree to a single outcome
//! - JSON, HTML and CSV export of trees and solver traces

pub mod cli;
pub mod error;
pub mod export;
pub mod solver;
pub mod tictactoe;
pub mod tree;

pub use error::{Error, Result};
