//! Shared configuration types for CLI commands

use std::{fmt, str::FromStr};

use anyhow::Result;
use clap::Args;
use flexi_logger::{Logger, LoggerHandle};
use serde::{Deserialize, Serialize};

use crate::{cli::output, tictactoe::BoardState, tree::GameTree};

/// Forced moves played before the tree is expanded, as board positions 0-8
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening(pub Vec<usize>);

impl Opening {
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Opening {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let mut positions = Vec::new();
        for part in trimmed.split(',') {
            let position = part.trim().parse::<usize>().map_err(|_| crate::Error::ParseOpening {
                input: s.to_string(),
                reason: format!("'{}' is not a board position", part.trim()),
            })?;
            if position > 8 {
                return Err(crate::Error::ParseOpening {
                    input: s.to_string(),
                    reason: format!("position {position} is off the board (expected 0-8)"),
                });
            }
            positions.push(position);
        }
        Ok(Self(positions))
    }
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Common configuration shared across commands
#[derive(Args, Debug, Clone)]
pub struct CommonConfig {
    /// Comma-separated positions (0-8, row-major) played before expanding
    #[arg(long, default_value = "")]
    pub opening: Opening,

    /// Hide the spinner while the tree is built
    #[arg(long)]
    pub no_progress: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl CommonConfig {
    /// Build the tree for the configured opening
    pub fn build_tree(&self) -> Result<GameTree> {
        let spinner = (!self.no_progress).then(|| {
            output::create_spinner(if self.opening.is_empty() {
                "Building full game tree..."
            } else {
                "Building game tree from opening..."
            })
        });

        let tree = if self.opening.is_empty() {
            GameTree::new()
        } else {
            GameTree::from_opening(self.opening.positions())?
        };

        if let Some(spinner) = spinner {
            spinner.finish_with_message(format!(
                "Built {} states",
                output::format_number(tree.len())
            ));
        }
        Ok(tree)
    }

    /// Board after the opening moves
    pub fn opening_board(&self) -> Result<BoardState> {
        let mut board = BoardState::new();
        for &position in self.opening.positions() {
            board = board.make_move(position)?;
        }
        Ok(board)
    }
}

/// Start the logger; the returned handle must stay alive for output to flush.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .format(flexi_logger::colored_default_format)
        .start()?;
    Ok(handle)
}
