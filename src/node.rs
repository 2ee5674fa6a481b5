use std::cmp::Ordering;

#[derive(Debug)]
pub(super) enum RemoveResult {
    /// The value was removed from the subtree.
    Removed,

    /// The direct descendent node contains the value, but contains no children
    /// and must be unlinked by the owner of its slot.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child node pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent subtree reads as 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 2.89*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing on the
    /// unwind path as needed.
    ///
    /// Returns true if the tree gained a node, false if `value` was already
    /// present (in which case the tree is untouched).
    pub(crate) fn insert(self: &mut Box<Self>, value: T) -> bool
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            // Duplicate values are a silent no-op.
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(value),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(value)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return true;
            }
        };

        if !inserted {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        // Update this node's height.
        update_height(self);

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        //
        // A subtree whose height just grew by an insert is always skewed
        // towards the inserted value, so the taller child's balance factor
        // sign identifies which grandchild side received it, and therefore
        // whether a single or a double rotation restores the invariant.
        match (balance(self), self.left(), self.right()) {
            // Left-heavy
            (2, Some(l), _) if balance(l) > 0 => {
                // Left-left: the value went below the left child's left.
                rotate_right(self);
            }
            (2, Some(_l), _) => {
                // Left-right: the value went below the left child's right.
                rotate_left(self.left_mut().unwrap());
                rotate_right(self);
            }
            // Right-heavy
            (-2, _, Some(r)) if balance(r) < 0 => {
                // Right-right: the value went below the right child's right.
                rotate_left(self);
            }
            (-2, _, Some(_r)) => {
                // Right-left: the value went below the right child's left.
                rotate_right(self.right_mut().unwrap());
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        true
    }

    /// Remove `value` from the subtree rooted at `self`.
    ///
    /// Returns [`None`] if the value is not in the subtree. A present leaf
    /// cannot unlink itself, so it returns [`RemoveResult::ParentUnlink`] and
    /// the caller owning the child slot clears the pointer (see
    /// [`remove_recurse()`]).
    pub(super) fn remove(self: &mut Box<Self>, value: &T) -> Option<RemoveResult>
    where
        T: Ord + Clone,
    {
        match value.cmp(&self.value) {
            Ordering::Less => return remove_recurse(&mut self.left, value),
            Ordering::Greater => return remove_recurse(&mut self.right, value),
            Ordering::Equal => {
                // This node holds the value to be removed from the tree.
            }
        };

        if self.left.is_some() && self.right.is_some() {
            // This node has two children, so it cannot be unlinked without
            // orphaning a subtree:
            //
            //                          +----------+
            //                     +----|   self   |----+
            //                     |    +----------+    |
            //                     v                    v
            //               +-----------+       +------------+
            //               | self.left |       | self.right |
            //               +-----------+       +------------+
            //
            // Instead the in-order successor of this node (the minimum value
            // of the right subtree, found by pure left descent) is removed
            // from the right subtree and migrated into this node, overwriting
            // the removed value. All node links are preserved and the BST
            // property holds throughout.
            //
            // The successor node has no left child by construction, so its
            // removal always terminates in the 0/1-child cases below.
            let successor = subtree_min(self.right.as_deref().unwrap()).clone();
            debug_assert!(successor > self.value);

            let removed = remove_recurse(&mut self.right, &successor);
            debug_assert!(matches!(removed, Some(RemoveResult::Removed)));

            self.value = successor;
            return Some(RemoveResult::Removed);
        }

        // This node has at most one child: splice the child (if any) into
        // this node's place. This is the only point where a node is freed
        // without its value first migrating elsewhere.
        let child = match self.left.take().or_else(|| self.right.take()) {
            Some(v) => v,
            None => {
                // A childless node is unlinked by the parent.
                debug_assert_eq!(self.height, 1);
                return Some(RemoveResult::ParentUnlink);
            }
        };

        // Invariant: a one-child AVL node is exactly one level taller than
        // its leaf child.
        debug_assert_eq!(self.height, 2);
        debug_assert_eq!(child.height, 1);

        // Invariant: the node being dropped contains the target value, and
        // its replacement does not.
        debug_assert!(self.value == *value);
        debug_assert!(child.value != *value);

        *self = child;
        Some(RemoveResult::Removed)
    }

    /// Search the subtree rooted at `self` for `value`.
    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let node = match value.cmp(&self.value) {
            Ordering::Less => self.left(),
            Ordering::Equal => return true,
            Ordering::Greater => self.right(),
        };

        node.map(|v| v.contains(value)).unwrap_or_default()
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// The height skew of this node: left subtree height minus right subtree
    /// height.
    pub(crate) fn balance_factor(&self) -> i8 {
        balance(self)
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the value `T` it contains.
    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
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
/// The rotation re-links pointers only (no value copying), then refreshes the
/// heights of exactly the two nodes that changed depth, child before parent.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

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
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Returns a reference to the minimum value in the subtree rooted at `node`,
/// found by descending the left edge to its end.
pub(super) fn subtree_min<T>(mut node: &Node<T>) -> &T {
    while let Some(left) = node.left() {
        node = left;
    }
    &node.value
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `value` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the value is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], converting the result to
/// [`RemoveResult::Removed`] for the caller.
pub(super) fn remove_recurse<T>(node: &mut Option<Box<Node<T>>>, value: &T) -> Option<RemoveResult>
where
    T: Ord + Clone,
{
    // Remove the value (if any) and rebalance the tree.
    let remove_ret = {
        let v = node.as_mut()?;
        let ret = v.remove(value)?;
        rebalance_after_remove(v);
        ret
    };

    if let RemoveResult::ParentUnlink = remove_ret {
        // The direct descendent is a childless node holding the value: clear
        // the slot, dropping the node. An emptied slot needs no height or
        // balance work.
        let unlinked = node.take();
        debug_assert!(unlinked.map(|v| v.value == *value).unwrap_or_default());
    }

    Some(RemoveResult::Removed)
}

/// Recompute the height of `v` and restore the AVL invariant of the subtree
/// rooted at it after a removal somewhere beneath it.
///
/// Unlike the insert rebalancing, the rotation case cannot be derived from
/// the position of a single value (the side that shrank is opposite the
/// skew), so it is selected by the taller child's balance factor.
fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}
