use crate::{
    iter::{OwnedIter, PreOrderIter, RefIter},
    node::{remove_recurse, Node, RemoveResult},
};

/// A self-balancing AVL tree set over any totally-ordered value type.
///
/// Every value is stored at most once. After every [`insert()`] and
/// [`remove()`] the tree upholds the AVL invariant (the subtree heights of
/// each node differ by at most 1), bounding the height - and therefore the
/// cost of every operation - to `O(log n)`.
///
/// ```
/// use avlset::AvlSet;
///
/// let mut t = AvlSet::default();
///
/// t.insert(42);
/// t.insert(24);
///
/// assert!(t.contains(&42));
/// assert_eq!(t.iter().collect::<Vec<_>>(), [&24, &42]);
/// ```
///
/// [`insert()`]: AvlSet::insert
/// [`remove()`]: AvlSet::remove
#[derive(Debug, Clone)]
pub struct AvlSet<T>(Option<Box<Node<T>>>);

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Insert `value` into the set.
    ///
    /// Returns true if the value was not previously present. Inserting a
    /// duplicate is a silent no-op returning false.
    pub fn insert(&mut self, value: T) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(value),
            None => {
                self.0 = Some(Box::new(Node::new(value)));
                true
            }
        }
    }

    /// Remove `value` from the set.
    ///
    /// Returns true if the value was present. Removing an absent value is a
    /// silent no-op returning false.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Clone,
    {
        matches!(
            remove_recurse(&mut self.0, value),
            Some(RemoveResult::Removed)
        )
    }

    /// Returns true if `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.0
            .as_ref()
            .map(|v| v.contains(value))
            .unwrap_or_default()
    }
}

impl<T> AvlSet<T> {
    /// Returns true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The height of the tree: the number of nodes on the longest
    /// root-to-leaf path, 0 for an empty tree.
    ///
    /// Reads the cached root height without walking the tree.
    pub fn height(&self) -> u8 {
        self.0.as_ref().map(|v| v.height()).unwrap_or_default()
    }

    /// Iterate over the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flat_map(|v| RefIter::new(v)).map(|v| v.value())
    }

    /// Iterate over the values in pre-order: each node before its left
    /// subtree, and its left subtree before its right.
    ///
    /// Each call walks afresh from the current root.
    pub fn pre_order(&self) -> impl Iterator<Item = &T> {
        self.0
            .iter()
            .flat_map(|v| PreOrderIter::new(v))
            .map(|v| v.value())
    }

    /// Iterate over every stored value paired with the balance factor of its
    /// node (left subtree height minus right subtree height), in pre-order.
    ///
    /// The borrow of the set freezes it for the iterator's lifetime, so the
    /// reported factors always describe a single consistent tree state.
    pub fn balance_factors(&self) -> impl Iterator<Item = (&T, i8)> {
        self.0
            .iter()
            .flat_map(|v| PreOrderIter::new(v))
            .map(|v| (v.value(), v.balance_factor()))
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = OwnedIter<T>;

    /// Consume the set, yielding the values in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        for v in iter {
            t.insert(v);
        }
        t
    }
}
