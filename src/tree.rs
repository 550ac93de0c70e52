use std::cmp::Ordering;

use crate::{
    balance::{resolve_left_leaning, resolve_right_leaning},
    node::{balance, update_height, Node},
};

/// A height-balanced (AVL) binary search tree of keys.
///
/// Keys that compare equal are stored as distinct nodes.
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Option<Box<Node<K>>>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the height of the tree, or [`None`] if the tree is empty.
    ///
    /// A tree containing a single key has a height of 0.
    pub fn height(&self) -> Option<u8> {
        self.0.as_ref().map(|v| v.height())
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree.
    ///
    /// If an equal key already exists, `key` is stored alongside it.
    pub fn insert(&mut self, key: K) {
        self.0 = Some(insert_recurse(self.0.take(), key));
    }

    /// Remove a single occurrence of `key` from the tree, if any.
    ///
    /// Removing a key that does not exist leaves the tree unchanged.
    pub fn remove(&mut self, key: &K) {
        self.0 = remove_recurse(self.0.take(), key);
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Insert `key` into the subtree rooted at `node`, returning the new root of
/// the (rebalanced) subtree.
fn insert_recurse<K>(node: Option<Box<Node<K>>>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut node = match node {
        Some(v) => v,
        None => return Box::new(Node::new(key)),
    };

    // Equal keys descend left.
    //
    // Growing a subtree can only skew the tree in the direction of the new
    // addition, so only that direction is checked.
    let mut node = if key <= *node.key() {
        node.left = Some(insert_recurse(node.left.take(), key));
        resolve_left_leaning(node)
    } else {
        node.right = Some(insert_recurse(node.right.take(), key));
        resolve_right_leaning(node)
    };

    update_height(&mut node);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(&node).abs() <= 1);

    node
}

/// Remove the first node holding `key` found when descending the subtree
/// rooted at `node`, returning the new root of the (rebalanced) subtree.
fn remove_recurse<K>(node: Option<Box<Node<K>>>, key: &K) -> Option<Box<Node<K>>>
where
    K: Ord,
{
    // The key does not exist in this subtree.
    let mut node = node?;

    // Shrinking a subtree can only skew the tree away from the removal.
    let mut node = match key.cmp(node.key()) {
        Ordering::Less => {
            node.left = remove_recurse(node.left.take(), key);
            resolve_right_leaning(node)
        }
        Ordering::Greater => {
            node.right = remove_recurse(node.right.take(), key);
            resolve_left_leaning(node)
        }
        Ordering::Equal => {
            // This node may have 0, 1 or 2 child node(s).
            //
            // If either child is absent, the other (if any) replaces this
            // node. Otherwise the in-order successor (the left-most node of the
            // right subtree) is unlinked and takes the place of this node,
            // adopting both its children.
            let (left, right) = match (node.left.take(), node.right.take()) {
                (None, v) | (v, None) => return v,
                (Some(l), Some(r)) => (l, r),
            };

            let (mut successor, right) = remove_min(right);

            // Invariant: the successor is the left-most node of its subtree
            // and was unlinked from its own right child.
            debug_assert!(successor.left.is_none());
            debug_assert!(successor.right.is_none());

            successor.left = Some(left);
            successor.right = right;

            // The right subtree may have lost a level.
            resolve_left_leaning(successor)
        }
    };

    update_height(&mut node);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(&node).abs() <= 1);

    Some(node)
}

/// Unlink the node holding the minimum key in the subtree rooted at `node`.
///
/// Returns the detached minimum node (with no children) and the new root of
/// the remaining (rebalanced) subtree, if any.
fn remove_min<K>(mut node: Box<Node<K>>) -> (Box<Node<K>>, Option<Box<Node<K>>>) {
    let left = match node.left.take() {
        Some(v) => v,
        None => {
            // This node is the end of the left edge, so its right subtree (if
            // any) takes its place.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //                \
            //                 5
            // ```
            let right = node.right.take();
            update_height(&mut node);
            return (node, right);
        }
    };

    let (min, left) = remove_min(left);
    node.left = left;

    // Might become right-leaning, since a node was removed from the left.
    let mut node = resolve_right_leaning(node);
    update_height(&mut node);

    debug_assert!(balance(&node).abs() <= 1);

    (min, Some(node))
}
