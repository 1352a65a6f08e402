//! CLI infrastructure for the tictree toolkit
//!
//! This module provides the command-line interface for building the game
//! tree, solving it from a chosen perspective, and exporting the result.

pub mod commands;
pub mod config;
pub mod output;
