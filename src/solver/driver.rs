//! Alternating prune and fold passes until the root settles

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use super::{
    fold::fold_pass,
    perspective::{Convergence, SolverConfig},
    prune::prune_pass,
};
use crate::{
    Error, Result,
    tictactoe::GameOutcome,
    tree::{GameTree, TreeSummary},
};

/// Which half of a round produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Prune,
    Fold,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Prune => "prune",
            Phase::Fold => "fold",
        })
    }
}

/// Tree statistics right after one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassRecord {
    pub pass: usize,
    pub phase: Phase,
    pub changed: bool,
    pub summary: TreeSummary,
}

/// Everything a run observed
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub initial: TreeSummary,
    pub passes: Vec<PassRecord>,
    /// The root's outcome, once it holds a single one
    pub outcome: Option<GameOutcome>,
    /// False only when the pass cap cut the run short
    pub converged: bool,
}

impl SolveReport {
    /// Number of full prune+fold rounds started
    pub fn rounds(&self) -> usize {
        self.passes.last().map_or(0, |record| record.pass)
    }
}

/// Drives prune and fold passes over a tree.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run rounds of pruning then folding on `tree`.
    ///
    /// With [`Convergence::RootSettled`] the run stops right after the prune
    /// pass that leaves the root with one outcome. With
    /// [`Convergence::FixedPoint`] it stops after a round in which neither
    /// pass changed anything.
    ///
    /// # Errors
    ///
    /// Returns error if `max_passes` is zero or the tree turns out to be
    /// inconsistent.
    pub fn run(&self, tree: &mut GameTree) -> Result<SolveReport> {
        if self.config.max_passes == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max passes must be at least 1".to_string(),
            });
        }

        let root = tree.root();
        let perspective = self.config.perspective;
        let mut report = SolveReport {
            initial: tree.summary(root),
            passes: Vec::new(),
            outcome: None,
            converged: false,
        };
        info!(
            "solving {} states for {perspective} ({} stop)",
            report.initial.states, self.config.convergence
        );

        let mut pass = 0;
        loop {
            if self.config.max_passes.is_some_and(|max| pass >= max) {
                debug!("stopping after {pass} rounds without converging");
                break;
            }
            pass += 1;

            let pruned = prune_pass(tree, &perspective)?;
            report.passes.push(Self::record(tree, pass, Phase::Prune, pruned));

            if self.config.convergence == Convergence::RootSettled
                && tree.outcomes(root).distinct() == 1
            {
                report.converged = true;
                break;
            }

            let folded = fold_pass(tree)?;
            report.passes.push(Self::record(tree, pass, Phase::Fold, folded));

            if !pruned && !folded {
                report.converged = true;
                break;
            }
        }

        report.outcome = tree.outcomes(root).sole_outcome();
        match report.outcome {
            Some(outcome) => info!("root settled on {outcome} after {pass} rounds"),
            None => info!(
                "root still mixed after {pass} rounds: {}",
                tree.outcomes(root)
            ),
        }
        Ok(report)
    }

    fn record(tree: &GameTree, pass: usize, phase: Phase, changed: bool) -> PassRecord {
        let summary = tree.summary(tree.root());
        debug!(
            "round {pass} {phase}: {} states, {} leaves, {}",
            summary.states, summary.leaves, summary.outcomes
        );
        PassRecord {
            pass,
            phase,
            changed,
            summary,
        }
    }
}
