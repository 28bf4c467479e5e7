use log::trace;
use std::fmt::Debug;

use crate::node::Node;

/// Promotes the left child of `node` to subtree root.
///
/// The left child's right subtree moves under `node` as its new left child.
/// Heights are refreshed bottom-up (the demoted node first). Panics if
/// `node` has no left child.
pub fn rotate_right<K: Debug>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut left = node.left.take().expect("left child expected");
    trace!("rotate right at {:?}, new root {:?}", node.key, left.key);
    node.left = left.right.take();
    node.update();
    left.right = Some(node);
    left.update();
    left
}

/// Mirror of [`rotate_right`]. Panics if `node` has no right child.
pub fn rotate_left<K: Debug>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut right = node.right.take().expect("right child expected");
    trace!("rotate left at {:?}, new root {:?}", node.key, right.key);
    node.right = right.left.take();
    node.update();
    right.left = Some(node);
    right.update();
    right
}

/// Left-right case: rotate the left child left, then `node` right.
pub(crate) fn rotate_left_right<K: Debug>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let left = node.left.take().expect("left child expected");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

/// Right-left case: rotate the right child right, then `node` left.
pub(crate) fn rotate_right_left<K: Debug>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let right = node.right.take().expect("right child expected");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}
