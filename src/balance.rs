//! Constant-time height and balance queries over possibly-empty subtrees.
//!
//! Nothing here walks a subtree: every answer comes from the cached
//! `height` fields, so the mutation code must keep those current.

use crate::node::Node;

/// Height of `node`, or 0 for the empty subtree.
pub fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Balance factor of `node`, or 0 for the empty subtree.
///
/// Outside of a mutation in progress this is always -1, 0 or 1.
pub fn balance_factor<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

/// Leftmost node of the subtree rooted at `node`.
pub fn min_value_node<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}
