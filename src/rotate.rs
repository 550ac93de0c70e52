//! Structural rotations of a subtree.
//!
//! Each rotation consumes the root of an imbalanced subtree and returns the
//! new root, which the caller links into the parent (or the tree root) in
//! place of the old one. Every re-linked node has its height recomputed
//! bottom-up before returning.

use crate::node::{update_height, Node};

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = y.left.take().unwrap();

    y.left = p.right.take();
    update_height(&mut y);

    p.right = Some(y);
    update_height(&mut p);

    p
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = x.right.take().unwrap();

    x.right = p.left.take();
    update_height(&mut x);

    p.left = Some(x);
    update_height(&mut p);

    p
}

/// Rotate the left child of `z` left, and then `z` right, lifting the
/// grandchild `P` into the root position.
///
/// ```text
///        z
///       / \                                 P
///      x   4      Rotate Left-Right       /   \
///     / \       ------------------->     x     z
///    1   P                              / \   / \
///       / \                            1   2 3   4
///      2   3
/// ```
///
/// # Panics
///
/// Panics if `z` has no left pointer, or the left child of `z` has no right
/// pointer.
pub(crate) fn rotate_left_right<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = z.left.take().unwrap();
    let mut p = x.right.take().unwrap();

    x.right = p.left.take();
    z.left = p.right.take();

    // Both displaced nodes before the new root, which depends on them.
    update_height(&mut x);
    update_height(&mut z);

    p.left = Some(x);
    p.right = Some(z);
    update_height(&mut p);

    p
}

/// Rotate the right child of `x` right, and then `x` left, lifting the
/// grandchild `P` into the root position.
///
/// ```text
///      x
///     / \                                   P
///    1   z        Rotate Right-Left       /   \
///       / \     ------------------->     x     z
///      P   4                            / \   / \
///     / \                              1   2 3   4
///    2   3
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer, or the right child of `x` has no left
/// pointer.
pub(crate) fn rotate_right_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let mut z = x.right.take().unwrap();
    let mut p = z.left.take().unwrap();

    z.left = p.right.take();
    x.right = p.left.take();

    update_height(&mut z);
    update_height(&mut x);

    p.left = Some(x);
    p.right = Some(z);
    update_height(&mut p);

    p
}
