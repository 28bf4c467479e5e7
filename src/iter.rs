use std::iter::FusedIterator;

use crate::node::Node;

/// Iterator that yields keys in ascending order.
///
/// The walk lives entirely in this value: the tree itself is only borrowed
/// and never marked, so calling [`crate::link::in_order`] again on the same
/// root starts over from the smallest key, and a clone continues
/// independently from the point it was taken.
#[derive(Debug, Clone)]
pub struct InOrder<'a, K> {
    /// Ancestors whose key has not been yielded yet, smallest on top.
    pending: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.descend_left(root);
        iter
    }

    /// Stacks `node` and its chain of left children, so the top of the
    /// stack is the minimum of the subtree at `node`.
    fn descend_left(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        // Everything in the right subtree sorts before the next ancestor.
        self.descend_left(node.right.as_deref());
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each pending node is still to be yielded; their right subtrees are unknown.
        (self.pending.len(), None)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}
