//! Game tree node types.
//!
//! Nodes live in an arena owned by [`GameTree`](super::GameTree) and refer to
//! each other by index.

use std::fmt;

use serde::Serialize;

use super::outcomes::OutcomeCounts;
use crate::tictactoe::{GameOutcome, Move};

/// Index into the node arena.
///
/// Handles stay valid as identifiers after the node is removed; looking one
/// up then yields `None` instead of another node, since slots are never
/// reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position in the game tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Owner of this node (None for root). Not an ownership edge.
    pub(crate) parent: Option<NodeId>,

    /// Children in row-major move order. Owned exclusively.
    pub(crate) children: Vec<NodeId>,

    /// Move that led here (None for root).
    pub(crate) mv: Option<Move>,

    /// Terminal result; None while undecided.
    pub(crate) result: Option<GameOutcome>,

    /// Terminal leaves reachable from here, by outcome.
    pub(crate) outcomes: OutcomeCounts,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, mv: Option<Move>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            mv,
            result: None,
            outcomes: OutcomeCounts::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    pub fn result(&self) -> Option<GameOutcome> {
        self.result
    }

    pub fn outcomes(&self) -> &OutcomeCounts {
        &self.outcomes
    }

    /// Whether the game is decided at this node, either naturally or by folding
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }
}
