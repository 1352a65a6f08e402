//! Subcommands of the `tictree` binary

pub mod solve;
pub mod stats;
