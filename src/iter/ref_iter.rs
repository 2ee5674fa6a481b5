use crate::node::Node;

/// An in-order iterator of borrowed [`Node`] instances, yielding values in
/// ascending order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> RefIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T> Iterator for RefIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}
