//! Solve command - prune and fold the tree from one player's perspective

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{CommonConfig, init_logging},
        output::{format_number, print_kv, print_section, print_subsection, print_summary},
    },
    export,
    solver::{Convergence, Perspective, SolveReport, Solver, SolverConfig},
    tictactoe::{GameOutcome, Player},
    tree::GameTree,
};

#[derive(Parser, Debug)]
#[command(about = "Reduce the game tree to the outcome one side can steer toward")]
pub struct SolveArgs {
    /// Outcome the controlling player aims for (x-wins, o-wins, draw)
    #[arg(long, default_value = "x-wins")]
    pub desired: GameOutcome,

    /// Player steering toward the desired outcome (x, o)
    #[arg(long, default_value = "o")]
    pub controller: Player,

    /// Stop when the root settles, or only at a fixed point
    #[arg(long, default_value = "settled")]
    pub until: Convergence,

    /// Give up after this many prune+fold rounds
    #[arg(long)]
    pub max_passes: Option<usize>,

    /// Write the reduced tree as a collapsible HTML page
    #[arg(long)]
    pub export_html: Option<PathBuf>,

    /// Write the reduced tree as nested JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Limit exported trees to this many plies below the root
    #[arg(long)]
    pub export_depth: Option<usize>,

    /// Write per-phase statistics as CSV
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Check tree invariants before and after solving
    #[arg(long)]
    pub verify: bool,

    #[command(flatten)]
    pub common: CommonConfig,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let _logger = init_logging(&args.common.log_level)?;

    let mut config = SolverConfig::new(Perspective::new(args.desired, args.controller))
        .with_convergence(args.until);
    if let Some(max) = args.max_passes {
        config = config.with_max_passes(max);
    }

    print_section(&format!("Solving: {}", config.perspective));
    let mut tree = args.common.build_tree()?;
    if !args.common.opening.is_empty() {
        print_kv("Opening", &args.common.opening.to_string());
        println!("\n{}", args.common.opening_board()?);
    }
    if args.verify {
        tree.check_invariants()
            .context("freshly built tree is inconsistent")?;
    }

    let report = Solver::new(config).run(&mut tree)?;
    print_report(&report);

    if args.verify {
        tree.check_invariants()
            .context("solved tree is inconsistent")?;
        print_kv("Invariants", "ok");
    }

    export_results(&tree, &report, &args)?;
    Ok(())
}

fn print_report(report: &SolveReport) {
    print_subsection("Initial tree");
    print_summary(&report.initial);

    for record in &report.passes {
        print_subsection(&format!(
            "Round {} {}{}",
            record.pass,
            record.phase,
            if record.changed { "" } else { " (no change)" }
        ));
        print_summary(&record.summary);
    }

    print_subsection("Result");
    print_kv("Rounds", &format_number(report.rounds()));
    print_kv("Converged", if report.converged { "yes" } else { "no" });
    match report.outcome {
        Some(outcome) => print_kv("Outcome", outcome.as_str()),
        None => print_kv("Outcome", "undecided"),
    }
}

fn export_results(tree: &GameTree, report: &SolveReport, args: &SolveArgs) -> Result<()> {
    if let Some(path) = &args.export_html {
        export::write_html(tree, path, args.export_depth)
            .with_context(|| format!("failed to export HTML to {}", path.display()))?;
        println!("✓ HTML tree exported to: {}", path.display());
    }
    if let Some(path) = &args.export_json {
        export::write_json(tree, path, args.export_depth)
            .with_context(|| format!("failed to export JSON to {}", path.display()))?;
        println!("✓ JSON tree exported to: {}", path.display());
    }
    if let Some(path) = &args.trace {
        export::write_trace_csv(report, path)
            .with_context(|| format!("failed to write trace to {}", path.display()))?;
        println!("✓ Trace written to: {}", path.display());
    }
    Ok(())
}
