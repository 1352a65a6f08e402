//! Which outcome a solve optimizes for, and how long it runs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// The point of view a prune/fold run reasons from.
///
/// `controller` picks moves that reach `desired`; its opponent picks moves
/// that avoid it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Perspective {
    pub desired: GameOutcome,
    pub controller: Player,
}

impl Perspective {
    pub fn new(desired: GameOutcome, controller: Player) -> Self {
        Self {
            desired,
            controller,
        }
    }

    /// Whether the player who moved into a leaf would pick it over its siblings.
    ///
    /// True when the controller reaches the desired outcome, or when the
    /// opponent reaches anything else.
    pub fn keeps(&self, outcome: GameOutcome, mover: Player) -> bool {
        (outcome == self.desired) == (mover == self.controller)
    }
}

impl Default for Perspective {
    /// O steering toward an X win: both sides end up avoiding it.
    fn default() -> Self {
        Self::new(GameOutcome::Win(Player::X), Player::O)
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} plays for {}", self.controller, self.desired)
    }
}

/// When the solver stops iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Convergence {
    /// Stop as soon as the root reports a single outcome
    #[default]
    RootSettled,
    /// Keep going until neither pass changes the tree
    FixedPoint,
}

impl fmt::Display for Convergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Convergence::RootSettled => "settled",
            Convergence::FixedPoint => "fixed-point",
        })
    }
}

impl FromStr for Convergence {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "settled" | "root" | "root-settled" => Ok(Convergence::RootSettled),
            "fixed-point" | "fixed_point" | "fixpoint" => Ok(Convergence::FixedPoint),
            _ => Err(crate::Error::ParseConvergence {
                input: s.to_string(),
                expected: "settled, fixed-point".to_string(),
            }),
        }
    }
}

/// Configuration for a [`Solver`](super::Solver) run.
///
/// # Examples
///
/// ```
/// use tictree::solver::{Convergence, Perspective, SolverConfig};
/// use tictree::tictactoe::{GameOutcome, Player};
///
/// let config = SolverConfig::new(Perspective::new(GameOutcome::Win(Player::X), Player::X))
///     .with_convergence(Convergence::FixedPoint)
///     .with_max_passes(50);
/// assert_eq!(config.max_passes, Some(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub perspective: Perspective,
    pub convergence: Convergence,
    /// Upper bound on prune+fold rounds; `None` runs until convergence
    pub max_passes: Option<usize>,
}

impl SolverConfig {
    pub fn new(perspective: Perspective) -> Self {
        Self {
            perspective,
            convergence: Convergence::default(),
            max_passes: None,
        }
    }

    /// Set the stopping rule.
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    /// Cap the number of rounds.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Perspective::default())
    }
}
