//! Collapsing subtrees whose outcome is already decided

use log::debug;

use crate::{
    Result,
    tree::{GameTree, NodeId},
};

/// One folding pass from the root.
///
/// Every undecided node whose table holds a single outcome becomes a
/// synthetic leaf with that outcome; nodes with mixed tables are searched
/// further down. Returns whether anything was folded.
///
/// # Errors
///
/// Returns error only if the tree is structurally inconsistent.
pub fn fold_pass(tree: &mut GameTree) -> Result<bool> {
    let mut folded = 0usize;
    fold_below(tree, tree.root(), &mut folded)?;
    debug!("fold pass: {folded} subtrees folded");
    Ok(folded > 0)
}

fn fold_below(tree: &mut GameTree, id: NodeId, folded: &mut usize) -> Result<()> {
    if tree.get(id).is_terminal() {
        return Ok(());
    }
    if tree.fold(id)?.is_some() {
        *folded += 1;
        return Ok(());
    }

    let children = tree.children(id).to_vec();
    for child in children {
        fold_below(tree, child, folded)?;
    }
    Ok(())
}
