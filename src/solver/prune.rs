//! Removing choices a rational mover would not make

use log::{debug, trace};

use super::perspective::Perspective;
use crate::{Result, tree::GameTree};

/// One pruning pass over the leaves currently reachable from the root.
///
/// For each leaf whose parent offers more than one move, the player who made
/// the leaf's move either takes it (every sibling is removed) or avoids it
/// (the leaf itself is removed), as decided by [`Perspective::keeps`]. The
/// leaf list is taken once up front; handles removed along the way are
/// skipped. Returns whether anything was removed.
///
/// # Errors
///
/// Returns error only if the tree is structurally inconsistent.
pub fn prune_pass(tree: &mut GameTree, perspective: &Perspective) -> Result<bool> {
    let leaves = tree.all_leaves(tree.root());
    let mut kept = 0usize;
    let mut dropped = 0usize;

    for leaf in leaves {
        let Some(node) = tree.node(leaf) else {
            continue;
        };
        let (Some(parent), Some(mv), Some(outcome)) = (node.parent(), node.mv(), node.result())
        else {
            continue;
        };
        if tree.children(parent).len() == 1 {
            continue;
        }

        if perspective.keeps(outcome, mv.player) {
            trace!("{leaf}: {} keeps {outcome}", mv.player);
            tree.retain_only_child(parent, leaf)?;
            kept += 1;
        } else {
            trace!("{leaf}: {} avoids {outcome}", mv.player);
            tree.remove_child(parent, leaf)?;
            dropped += 1;
        }
    }

    debug!("prune pass: {kept} leaves chosen, {dropped} leaves avoided");
    Ok(kept + dropped > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{GameOutcome, Player};

    const X_WINS: GameOutcome = GameOutcome::Win(Player::X);

    /// X: 0, 1 / O: 3, 4, X to move. Playing 2 wins on the spot.
    fn late_tree() -> GameTree {
        GameTree::from_opening(&[0, 3, 1, 4]).unwrap()
    }

    fn branch(tree: &GameTree) -> crate::tree::NodeId {
        let leaf = tree.first_leaf(tree.root()).unwrap();
        tree.parent(leaf).unwrap()
    }

    #[test]
    fn controller_takes_immediate_win() {
        let mut tree = late_tree();
        let branch = branch(&tree);
        let win = tree.children(branch)[0];

        let changed = prune_pass(&mut tree, &Perspective::new(X_WINS, Player::X)).unwrap();

        assert!(changed);
        assert_eq!(tree.children(branch), &[win]);
        assert_eq!(tree.outcomes(tree.root()).sole_outcome(), Some(X_WINS));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn opponent_of_goal_avoids_winning_leaf() {
        let mut tree = late_tree();
        let branch = branch(&tree);
        let win = tree.children(branch)[0];

        // O controls and wants X to win, so X (the opponent) shuns its own win.
        prune_pass(&mut tree, &Perspective::new(X_WINS, Player::O)).unwrap();

        assert!(!tree.is_live(win));
        assert!(tree.is_live(branch));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn only_child_is_never_pruned() {
        // X completes the top row on its third move: the opening line is a
        // chain of single children ending in a leaf.
        let mut tree = GameTree::from_opening(&[0, 3, 1, 4, 2]).unwrap();
        let before = tree.len();

        let changed = prune_pass(&mut tree, &Perspective::new(X_WINS, Player::O)).unwrap();

        assert!(!changed);
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn pruning_never_grows_root_total() {
        let mut tree = GameTree::from_opening(&[4, 0]).unwrap();
        let perspective = Perspective::new(GameOutcome::Draw, Player::O);
        let mut total = tree.outcomes(tree.root()).total();

        while prune_pass(&mut tree, &perspective).unwrap() {
            let now = tree.outcomes(tree.root()).total();
            assert!(now < total);
            total = now;
            tree.check_invariants().unwrap();
        }
    }
}
