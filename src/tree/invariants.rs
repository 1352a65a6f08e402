//! Structural and aggregate consistency checks

use super::{game_tree::GameTree, node::NodeId, outcomes::OutcomeCounts};
use crate::{Error, Result, tictactoe::Player};

impl GameTree {
    /// Recompute every table from scratch and verify the tree's structure.
    ///
    /// Checks, for each live node:
    /// - non-terminal tables equal the sum of their children's tables
    /// - terminal tables are `{result: 1}` and terminal nodes have no children
    /// - parent and child links agree, each child listed exactly once
    /// - moves alternate starting with X and only land on empty cells
    /// - a node's stored result agrees with the board when the board is decided
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] describing the first failure.
    pub fn check_invariants(&self) -> Result<()> {
        for (id, node) in self.iter() {
            let fail = |message: String| Error::InvariantViolation { node: id, message };

            match node.parent() {
                None if id != NodeId::ROOT => {
                    return Err(fail("non-root node without a parent".into()));
                }
                Some(parent) => {
                    let owner = self
                        .node(parent)
                        .ok_or_else(|| fail(format!("parent {parent} is gone")))?;
                    let listed = owner.children().iter().filter(|&&c| c == id).count();
                    if listed != 1 {
                        return Err(fail(format!("listed {listed} times under parent {parent}")));
                    }
                    if parent >= id {
                        return Err(fail(format!("parent {parent} allocated after child")));
                    }
                }
                None => {}
            }

            let expected_player = node
                .parent()
                .and_then(|parent| self.get(parent).mv())
                .map_or(Player::X, |mv| mv.player.opponent());
            match (node.parent(), node.mv()) {
                (Some(parent), Some(mv)) => {
                    if mv.player != expected_player {
                        return Err(fail(format!("{mv} out of turn")));
                    }
                    if !self.derive_board_state(parent).is_empty(mv.position()) {
                        return Err(fail(format!("{mv} lands on an occupied cell")));
                    }
                }
                (None, None) => {}
                _ => return Err(fail("move and parent disagree".into())),
            }

            let board = self.derive_board_state(id);
            match node.result() {
                Some(outcome) => {
                    if !node.children().is_empty() {
                        return Err(fail("terminal node still has children".into()));
                    }
                    if *node.outcomes() != OutcomeCounts::singleton(outcome) {
                        return Err(fail(format!(
                            "terminal table {} is not {{{outcome}: 1}}",
                            node.outcomes()
                        )));
                    }
                    if let Some(actual) = board.outcome() {
                        if actual != outcome {
                            return Err(fail(format!("result {outcome} but board says {actual}")));
                        }
                    }
                }
                None => {
                    if let Some(actual) = board.outcome() {
                        return Err(fail(format!("undecided node on a {actual} board")));
                    }
                    if node.children().is_empty() {
                        return Err(fail("undecided node without children".into()));
                    }
                    let mut sum = OutcomeCounts::new();
                    for &child in node.children() {
                        let child_node = self
                            .node(child)
                            .ok_or_else(|| fail(format!("child {child} is gone")))?;
                        if child_node.parent() != Some(id) {
                            return Err(fail(format!("child {child} points elsewhere")));
                        }
                        sum.add(child_node.outcomes());
                    }
                    if sum != *node.outcomes() {
                        return Err(fail(format!(
                            "cached table {} but children sum to {sum}",
                            node.outcomes()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn fresh_subtree_is_consistent() {
        let tree = GameTree::from_opening(&[4, 0]).unwrap();
        tree.check_invariants().unwrap();
    }

    #[test]
    fn detects_bypassed_aggregator() {
        let mut tree = GameTree::from_opening(&[4, 0, 8]).unwrap();
        let leaf = tree.first_leaf(tree.root()).unwrap();
        let outcome = tree.result(leaf).unwrap();
        // Bump only the leaf's parent, skipping the rest of the chain.
        let parent = tree.parent(leaf).unwrap();
        tree.get_mut(parent)
            .outcomes
            .add(&OutcomeCounts::singleton(outcome));

        let err = tree.check_invariants().unwrap_err();
        assert!(matches!(err, Error::InvariantViolation { .. }));
    }

    #[test]
    fn folded_node_passes_checks() {
        let mut tree = GameTree::from_opening(&[0, 3, 1, 4]).unwrap();
        let branch = tree.parent(tree.first_leaf(tree.root()).unwrap()).unwrap();
        let win = tree.children(branch)[0];
        tree.retain_only_child(branch, win).unwrap();
        assert_eq!(tree.fold(branch).unwrap(), Some(GameOutcome::Win(Player::X)));
        tree.check_invariants().unwrap();
    }
}
