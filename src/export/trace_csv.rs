//! CSV trace of a solver run, one row per phase

use std::path::Path;

use serde::Serialize;

use crate::{
    Result,
    solver::SolveReport,
    tictactoe::{GameOutcome, Player},
    tree::TreeSummary,
};

/// A flattened [`PassRecord`](crate::solver::PassRecord)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    pub pass: usize,
    pub phase: String,
    pub changed: bool,
    pub states: usize,
    pub leaves: usize,
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl TraceRow {
    fn new(pass: usize, phase: String, changed: bool, summary: &TreeSummary) -> Self {
        Self {
            pass,
            phase,
            changed,
            states: summary.states,
            leaves: summary.leaves,
            x_wins: summary.outcomes.get(GameOutcome::Win(Player::X)),
            o_wins: summary.outcomes.get(GameOutcome::Win(Player::O)),
            draws: summary.outcomes.get(GameOutcome::Draw),
        }
    }
}

/// Rows for a report; the first row (pass 0, phase `build`) is the tree
/// before any pass ran.
pub fn trace_rows(report: &SolveReport) -> Vec<TraceRow> {
    std::iter::once(TraceRow::new(0, "build".to_string(), false, &report.initial))
        .chain(report.passes.iter().map(|record| {
            TraceRow::new(
                record.pass,
                record.phase.to_string(),
                record.changed,
                &record.summary,
            )
        }))
        .collect()
}

/// Write the report's trace as CSV with a header row
pub fn write_trace_csv(report: &SolveReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in trace_rows(report) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
