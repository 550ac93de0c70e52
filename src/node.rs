#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child nodes pointers.
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0, and an absent child is treated as having a
    /// height of -1 (see [`height()`]).
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    pub(crate) height: u8,

    pub(crate) key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Return the cached height of `n`, or -1 if there is no node.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> i16 {
    n.map(|v| v.height() as i16).unwrap_or(-1)
}

/// Recompute the height of `n` from the cached heights of its (possibly new)
/// children.
///
/// The children must already hold correct heights, so after any pointer
/// rewrite this is applied bottom-up.
pub(crate) fn update_height<K>(n: &mut Node<K>) {
    // Correctness: the maximum of two child heights is always >= -1, so the
    // result is never negative.
    n.height = (1 + height(n.left()).max(height(n.right()))) as u8;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion, and a valid AVL tree never
    // skews by more than 2 (transiently).
    (height(n.left()) - height(n.right())) as i8
}
