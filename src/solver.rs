//! Backward induction by repeated pruning and folding

mod driver;
mod fold;
mod perspective;
mod prune;

pub use driver::{PassRecord, Phase, SolveReport, Solver};
pub use fold::fold_pass;
pub use perspective::{Convergence, Perspective, SolverConfig};
pub use prune::prune_pass;
