use crate::node::Node;

/// A pre-order iterator of borrowed [`Node`] instances, visiting each node
/// before its left subtree, and its left subtree before its right.
///
/// This is the visit order in which the tree was rebalanced into shape, which
/// makes it the natural order for structural reports such as the per-value
/// balance factors.
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The right child is pushed first so the left subtree is exhausted
        // before the right subtree is visited.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}
