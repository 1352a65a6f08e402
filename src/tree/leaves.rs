//! Terminal node queries

use super::{game_tree::GameTree, node::NodeId};
use crate::tictactoe::GameOutcome;

/// Handles to terminal nodes, in pre-order.
///
/// The set does not keep anything alive: nodes may be pruned after the query
/// ran, so consumers resolve each handle with [`GameTree::node`] (or iterate
/// [`live`](Self::live)) and skip the ones that are gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSet {
    leaves: Vec<NodeId>,
}

impl LeafSet {
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.leaves.iter().copied()
    }

    /// Handles whose nodes are still in `tree`
    pub fn live<'a>(&'a self, tree: &'a GameTree) -> impl Iterator<Item = NodeId> + 'a {
        self.iter().filter(|&id| tree.is_live(id))
    }
}

impl IntoIterator for LeafSet {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.into_iter()
    }
}

impl GameTree {
    /// Every terminal node in the subtree rooted at `id`
    pub fn all_leaves(&self, id: NodeId) -> LeafSet {
        self.collect_leaves(id, |_| true)
    }

    /// Terminal nodes whose result equals `target`
    pub fn leaves_with_outcome(&self, id: NodeId, target: GameOutcome) -> LeafSet {
        self.collect_leaves(id, |outcome| outcome == target)
    }

    /// Terminal nodes whose result differs from `target`
    pub fn leaves_without_outcome(&self, id: NodeId, target: GameOutcome) -> LeafSet {
        self.collect_leaves(id, |outcome| outcome != target)
    }

    /// Depth-first pre-order walk following child order.
    fn collect_leaves(&self, id: NodeId, keep: impl Fn(GameOutcome) -> bool) -> LeafSet {
        let mut leaves = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get(current);
            match node.result() {
                Some(outcome) => {
                    if keep(outcome) {
                        leaves.push(current);
                    }
                }
                None => stack.extend(node.children().iter().rev()),
            }
        }
        LeafSet { leaves }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    const X_WINS: GameOutcome = GameOutcome::Win(Player::X);

    #[test]
    fn leaf_queries_partition_all_leaves() {
        let tree = GameTree::from_opening(&[4, 0, 8]).unwrap();
        let root = tree.root();

        let all = tree.all_leaves(root);
        let with = tree.leaves_with_outcome(root, X_WINS);
        let without = tree.leaves_without_outcome(root, X_WINS);

        assert_eq!(all.len(), with.len() + without.len());
        assert_eq!(all.len() as u64, tree.outcomes(root).total());
        assert_eq!(with.len() as u64, tree.outcomes(root).get(X_WINS));
        assert!(with.iter().all(|id| tree.result(id) == Some(X_WINS)));
        assert!(without.iter().all(|id| tree.result(id) != Some(X_WINS)));
    }

    #[test]
    fn leaves_come_in_pre_order() {
        let tree = GameTree::from_opening(&[0, 3, 1, 4]).unwrap();
        let leaves = tree.all_leaves(tree.root());

        assert_eq!(leaves.iter().next(), tree.first_leaf(tree.root()));
        // Arena indices grow in construction order, which is pre-order.
        let ids: Vec<_> = leaves.iter().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn terminal_root_is_its_own_leaf() {
        let tree = GameTree::from_opening(&[0, 3, 1, 4, 2]).unwrap();
        let last = tree.first_leaf(tree.root()).unwrap();
        assert_eq!(tree.all_leaves(last).iter().collect::<Vec<_>>(), vec![last]);
    }

    #[test]
    fn pruned_handles_are_skipped() {
        let mut tree = GameTree::from_opening(&[0, 3, 1, 4]).unwrap();
        let leaves = tree.all_leaves(tree.root());
        let first = leaves.iter().next().unwrap();
        let parent = tree.parent(first).unwrap();

        tree.remove_child(parent, first).unwrap();

        assert_eq!(leaves.live(&tree).count(), leaves.len() - 1);
        assert!(leaves.live(&tree).all(|id| id != first));
    }
}
