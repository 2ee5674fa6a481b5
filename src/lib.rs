//! An AVL tree set over any totally-ordered value type.
//!
//! [`AvlSet`] keeps its values in a self-balancing binary search tree: after
//! every insert and remove, the heights of each node's subtrees differ by at
//! most 1, so lookups, inserts and removes all complete in `O(log n)`
//! comparisons.
//!
//! Beyond the usual set operations, the tree exposes its structure for
//! inspection: the cached tree [`height()`], a [`pre_order()`] traversal, and
//! the per-value [`balance_factors()`] report.
//!
//! ```
//! use avlset::AvlSet;
//!
//! let mut t = AvlSet::default();
//!
//! // Ascending inserts are rebalanced by rotation.
//! t.insert(10);
//! t.insert(20);
//! t.insert(30);
//!
//! assert_eq!(t.pre_order().collect::<Vec<_>>(), [&20, &10, &30]);
//! assert_eq!(t.height(), 2);
//! ```
//!
//! [`height()`]: AvlSet::height
//! [`pre_order()`]: AvlSet::pre_order
//! [`balance_factors()`]: AvlSet::balance_factors

mod dot;
mod iter;
mod node;
mod tree;

pub use iter::OwnedIter;
pub use tree::AvlSet;
