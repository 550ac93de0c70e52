use crate::{
    node::{balance, Node},
    rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left},
};

/// Restore the balance of a subtree whose left side may have grown (or whose
/// right side may have shrunk) by one level.
///
/// If the balance factor of `node` is exactly 2, the sign of the left child's
/// own balance factor selects the rotation: a single right rotation when the
/// child is balanced or leans left, otherwise a left-right double rotation.
///
/// Returns the (possibly new) root of the subtree.
pub(crate) fn resolve_left_leaning<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    match balance(&node) {
        2 if node.left().map(balance).unwrap_or_default() >= 0 => rotate_right(node),
        2 => rotate_left_right(node),
        _ => node,
    }
}

/// Restore the balance of a subtree whose right side may have grown (or whose
/// left side may have shrunk) by one level.
///
/// Mirror of [`resolve_left_leaning()`], triggered by a balance factor of
/// exactly -2.
pub(crate) fn resolve_right_leaning<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    match balance(&node) {
        -2 if node.right().map(balance).unwrap_or_default() <= 0 => rotate_left(node),
        -2 => rotate_right_left(node),
        _ => node,
    }
}
