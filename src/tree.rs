//! Arena-backed game tree with cached outcome tables

mod game_tree;
mod invariants;
mod leaves;
pub mod node;
pub mod outcomes;

pub use game_tree::{GameTree, TreeSummary};
pub use leaves::LeafSet;
pub use node::{Node, NodeId};
pub use outcomes::OutcomeCounts;
