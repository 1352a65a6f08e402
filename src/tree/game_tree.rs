//! Full game tree construction and the outcome aggregator

use log::debug;
use serde::Serialize;

use super::{
    node::{Node, NodeId},
    outcomes::OutcomeCounts,
};
use crate::{
    Error, Result,
    tictactoe::{BoardState, GameOutcome, Move, Player},
};

/// Exhaustive Tic-Tac-Toe game tree.
///
/// Nodes are stored in an arena and addressed by [`NodeId`]. Every node caches
/// the outcomes of the terminal leaves reachable beneath it; the only ways to
/// change those tables after construction are [`subtract_outcomes`] and
/// [`add_outcomes`], which always walk the whole ancestor chain.
///
/// [`subtract_outcomes`]: GameTree::subtract_outcomes
/// [`add_outcomes`]: GameTree::add_outcomes
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Option<Node>>,
    live: usize,
}

/// Size and outcome statistics for a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub states: usize,
    pub leaves: usize,
    pub outcomes: OutcomeCounts,
}

impl GameTree {
    /// Build the complete game tree from the empty board, X to move.
    pub fn new() -> Self {
        let mut tree = Self::empty();
        tree.grow(None, None);
        debug!("built game tree with {} states", tree.len());
        tree
    }

    /// Build the tree below a forced opening.
    ///
    /// `positions` are row-major cells played alternately starting with X.
    /// The root keeps a single line of nodes down to the last opening move,
    /// and every continuation from there is enumerated.
    ///
    /// # Errors
    ///
    /// Returns error if a position is off the board, already occupied, or
    /// played after the game has been decided.
    pub fn from_opening(positions: &[usize]) -> Result<Self> {
        let mut tree = Self::empty();
        let mut board = BoardState::new();
        let mut current = tree.alloc(Node::new(None, None));

        for (index, &position) in positions.iter().enumerate() {
            if board.is_terminal() {
                return Err(Error::GameOver { index, position });
            }
            let mv = Move::at(board.to_move, position)?;
            board = board.apply(mv)?;

            let child = tree.alloc(Node::new(Some(current), Some(mv)));
            tree.get_mut(current).children.push(child);
            current = child;
        }

        tree.populate(current);
        if let Some(parent) = tree.get(current).parent {
            let table = tree.get(current).outcomes;
            tree.add_outcomes(parent, &table);
        }

        debug!(
            "built game tree below opening {positions:?} with {} states",
            tree.len()
        );
        Ok(tree)
    }

    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            live: 0,
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        self.live += 1;
        id
    }

    /// Create a node for `mv` under `parent` together with its whole subtree.
    fn grow(&mut self, parent: Option<NodeId>, mv: Option<Move>) -> NodeId {
        let id = self.alloc(Node::new(parent, mv));
        self.populate(id);
        id
    }

    /// Classify an existing childless node and enumerate its continuations.
    fn populate(&mut self, id: NodeId) {
        let board = self.derive_board_state(id);

        if let Some(outcome) = board.outcome() {
            let node = self.get_mut(id);
            node.result = Some(outcome);
            node.outcomes = OutcomeCounts::singleton(outcome);
            return;
        }

        for position in board.empty_positions() {
            let mv = Move::new(board.to_move, (position / 3) as u8, (position % 3) as u8);
            let child = self.grow(Some(id), Some(mv));
            let table = self.get(child).outcomes;

            let node = self.get_mut(id);
            node.children.push(child);
            node.outcomes.add(&table);
        }
    }

    /// The root handle
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node; `None` once it has been pruned or folded away.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Whether the handle still refers to a node in the tree
    pub fn is_live(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Get a live node.
    ///
    /// # Panics
    ///
    /// Panics if the node has been removed.
    pub fn get(&self, id: NodeId) -> &Node {
        self.node(id)
            .unwrap_or_else(|| panic!("node {id} has been removed from the tree"))
    }

    pub(super) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("node {id} has been removed from the tree"))
    }

    fn try_get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(Error::DanglingNode { node: id })
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over every live node with its handle, in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i), node)))
    }

    pub fn outcomes(&self, id: NodeId) -> &OutcomeCounts {
        &self.get(id).outcomes
    }

    pub fn result(&self, id: NodeId) -> Option<GameOutcome> {
        self.get(id).result
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub fn move_of(&self, id: NodeId) -> Option<Move> {
        self.get(id).mv
    }

    /// Rebuild the board at a node by replaying the moves on its ancestor chain.
    pub fn derive_board_state(&self, id: NodeId) -> BoardState {
        let mut board = BoardState::new();
        if let Some(last) = self.get(id).mv {
            board.to_move = last.player.opponent();
        }

        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get(current);
            if let Some(mv) = node.mv {
                board.cells[mv.position()] = mv.player.to_cell();
            }
            cursor = node.parent;
        }
        board
    }

    /// The side whose turn it is at a node
    pub fn to_move(&self, id: NodeId) -> Player {
        self.get(id)
            .mv
            .map_or(Player::X, |mv| mv.player.opponent())
    }

    /// Total number of nodes in the subtree, including `id` itself
    pub fn count_states(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            count += 1;
            stack.extend_from_slice(&self.get(current).children);
        }
        count
    }

    /// First terminal node of the subtree in pre-order
    pub fn first_leaf(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let node = self.get(current);
            if node.is_terminal() {
                return Some(current);
            }
            current = *node.children.first()?;
        }
    }

    /// States, leaves and outcome table of a subtree
    pub fn summary(&self, id: NodeId) -> TreeSummary {
        TreeSummary {
            states: self.count_states(id),
            leaves: self.all_leaves(id).len(),
            outcomes: self.get(id).outcomes,
        }
    }

    /// Decrement the tables of `id` and every ancestor up to the root.
    ///
    /// # Panics
    ///
    /// Panics if `table` is not contained in the table of some node on the way.
    pub fn subtract_outcomes(&mut self, id: NodeId, table: &OutcomeCounts) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get_mut(current);
            node.outcomes.subtract(table);
            cursor = node.parent;
        }
    }

    /// Increment the tables of `id` and every ancestor up to the root.
    pub fn add_outcomes(&mut self, id: NodeId, table: &OutcomeCounts) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get_mut(current);
            node.outcomes.add(table);
            cursor = node.parent;
        }
    }

    /// Detach `child` from `parent` and drop its subtree.
    ///
    /// The child's table is subtracted from `parent` and all of its ancestors
    /// before the child is unlinked, so every table stays consistent.
    ///
    /// # Errors
    ///
    /// Returns error if either handle is dangling or `child` is not listed
    /// under `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let table = self.try_get(child)?.outcomes;
        let slot = self
            .try_get(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| Error::InvariantViolation {
                node: child,
                message: format!("not a child of {parent}"),
            })?;

        self.subtract_outcomes(parent, &table);
        self.get_mut(parent).children.remove(slot);
        self.release(child);
        Ok(())
    }

    /// Remove every child of `parent` except `keep`, returning how many went.
    ///
    /// # Errors
    ///
    /// Returns error if `parent` is dangling or `keep` is not one of its children.
    pub fn retain_only_child(&mut self, parent: NodeId, keep: NodeId) -> Result<usize> {
        let siblings = self.try_get(parent)?.children.clone();
        if !siblings.contains(&keep) {
            return Err(Error::InvariantViolation {
                node: keep,
                message: format!("not a child of {parent}"),
            });
        }

        let mut removed = 0;
        for sibling in siblings.into_iter().filter(|&s| s != keep) {
            self.remove_child(parent, sibling)?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Collapse a decided subtree into a synthetic terminal node.
    ///
    /// Applies only when exactly one outcome has a positive count. Each
    /// child's table is subtracted through the ancestor chain as the child is
    /// dropped, then `{outcome: 1}` is added back. Returns the outcome when
    /// the node was folded and `None` when it was left alone (already
    /// terminal, or still undecided).
    ///
    /// # Errors
    ///
    /// Returns error if `id` is dangling.
    pub fn fold(&mut self, id: NodeId) -> Result<Option<GameOutcome>> {
        let node = self.try_get(id)?;
        if node.is_terminal() {
            return Ok(None);
        }
        let Some(outcome) = node.outcomes.sole_outcome() else {
            return Ok(None);
        };

        let children = std::mem::take(&mut self.get_mut(id).children);
        for child in children {
            let table = self.get(child).outcomes;
            self.subtract_outcomes(id, &table);
            self.release(child);
        }

        self.get_mut(id).result = Some(outcome);
        self.add_outcomes(id, &OutcomeCounts::singleton(outcome));
        Ok(Some(outcome))
    }

    /// Tombstone a detached subtree.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                self.live -= 1;
                stack.extend(node.children);
            }
        }
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}
