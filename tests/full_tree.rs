//! Exhaustive tree construction from the empty board.

use tictree::{
    tictactoe::{GameOutcome, Player},
    tree::GameTree,
};

#[test]
fn full_tree_counts_match_known_enumeration() {
    let tree = GameTree::new();
    let root = tree.root();

    assert_eq!(tree.len(), 549_946);
    assert_eq!(tree.count_states(root), 549_946);
    assert_eq!(tree.children(root).len(), 9);

    let table = tree.outcomes(root);
    assert_eq!(table.get(GameOutcome::Win(Player::X)), 131_184);
    assert_eq!(table.get(GameOutcome::Win(Player::O)), 77_904);
    assert_eq!(table.get(GameOutcome::Draw), 46_080);
    assert_eq!(table.total(), 255_168);
    assert_eq!(tree.all_leaves(root).len(), 255_168);

    tree.check_invariants().unwrap();
}

#[test]
fn leaf_queries_partition_the_leaves() {
    let tree = GameTree::new();
    let root = tree.root();
    let x_wins = GameOutcome::Win(Player::X);

    let with = tree.leaves_with_outcome(root, x_wins);
    let without = tree.leaves_without_outcome(root, x_wins);
    assert_eq!(with.len(), 131_184);
    assert_eq!(without.len(), 77_904 + 46_080);
    assert!(with.iter().all(|leaf| tree.result(leaf) == Some(x_wins)));
}

#[test]
fn first_leaf_is_the_earliest_x_win() {
    let tree = GameTree::new();
    let leaf = tree.first_leaf(tree.root()).unwrap();

    // X 0, O 1, X 2, O 3, X 4, O 5, X 6 completes the anti-diagonal.
    assert_eq!(tree.result(leaf), Some(GameOutcome::Win(Player::X)));
    assert_eq!(tree.derive_board_state(leaf).to_string(), "XOX\nOXO\nX..");
}

#[test]
fn root_children_cover_every_opening_cell() {
    let tree = GameTree::new();
    let positions: Vec<usize> = tree
        .children(tree.root())
        .iter()
        .map(|&child| tree.move_of(child).unwrap().position())
        .collect();
    assert_eq!(positions, (0..9).collect::<Vec<_>>());

    // Every first move leads to the same number of leaves by symmetry class.
    let corner = tree.outcomes(tree.children(tree.root())[0]).total();
    let opposite_corner = tree.outcomes(tree.children(tree.root())[8]).total();
    assert_eq!(corner, opposite_corner);
}
