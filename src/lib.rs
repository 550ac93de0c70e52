//! A height-balanced binary search tree.
//!
//! [`AvlTree`] stores keys of any totally ordered type and keeps the height
//! of the tree within `O(log n)` after every [`insert`] and [`remove`],
//! rebalancing each ancestor of the mutated node on the way back up from the
//! modification point.
//!
//! Equal keys are not collapsed: inserting a key that already exists adds a
//! second node, and [`remove`] deletes a single occurrence.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::default();
//! assert_eq!(t.height(), None);
//!
//! for v in 1..=7 {
//!     t.insert(v);
//! }
//! assert_eq!(t.height(), Some(2));
//!
//! // Removing a key that does not exist is a no-op.
//! t.remove(&42);
//! assert_eq!(t.height(), Some(2));
//! ```
//!
//! [`insert`]: AvlTree::insert
//! [`remove`]: AvlTree::remove

#![deny(missing_docs)]

mod balance;
mod node;
mod rotate;
mod tree;


pub use tree::AvlTree;
