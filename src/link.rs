//! Root-handle operations.
//!
//! Each mutation consumes the subtree it is given and returns the subtree
//! that replaces it. The root may change identity after a rotation, so the
//! returned link is the only valid handle afterwards:
//!
//! ```
//! use rustavl::link;
//!
//! let mut root = None;
//! for key in [10, 20, 30] {
//!     root = link::insert(root, key);
//! }
//! assert_eq!(root.as_ref().map(|n| *n.key()), Some(20));
//! assert_eq!(link::in_order(&root).copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//! assert_eq!(link::release(root), 3);
//! ```

use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::balance::min_value_node;
use crate::iter::InOrder;
use crate::node::{Link, Node};
use crate::rotation::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};

/// Inserts `key` below `root` and returns the new subtree root.
///
/// Inserting a key that is already present returns the tree unchanged.
pub fn insert<K: Ord + Copy + Debug>(root: Link<K>, key: K) -> Link<K> {
    let mut node = match root {
        Some(node) => node,
        None => return Some(Box::new(Node::new(key))),
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        Ordering::Greater => node.right = insert(node.right.take(), key),
        Ordering::Equal => {
            debug!("key {:?} already present, insert ignored", key);
            return Some(node);
        }
    }
    node.update();
    Some(rebalance_after_insert(node, key))
}

/// Removes `key` from below `root` and returns the new subtree root.
///
/// Removing a key that is not present returns the tree unchanged.
pub fn delete<K: Ord + Copy + Debug>(root: Link<K>, key: K) -> Link<K> {
    let mut node = match root {
        Some(node) => node,
        None => {
            debug!("key {:?} not found, delete ignored", key);
            return None;
        }
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => {
            if node.left.is_none() || node.right.is_none() {
                return splice(node);
            }
            let right = node.right.as_deref().expect("right child expected");
            let successor = min_value_node(right).key;
            trace!("replacing {:?} with successor {:?}", node.key, successor);
            node.key = successor;
            node.right = delete(node.right.take(), successor);
        }
    }
    node.update();
    Some(rebalance_after_delete(node))
}

/// Returns `true` if `key` is stored below `root`.
pub fn contains<K: Ord>(root: &Link<K>, key: &K) -> bool {
    let mut current = root.as_deref();
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return true,
        };
    }
    false
}

/// Ascending walk over every key below `root`.
pub fn in_order<K>(root: &Link<K>) -> InOrder<'_, K> {
    InOrder::new(root.as_deref())
}

/// Tears down the subtree, children before parent, and returns the number
/// of nodes released.
pub fn release<K>(root: Link<K>) -> usize {
    match root {
        None => 0,
        Some(mut node) => {
            let released = release(node.left.take()) + release(node.right.take());
            drop(node);
            released + 1
        }
    }
}

/// Replaces a node that has at most one child by that child.
fn splice<K: Debug>(mut node: Box<Node<K>>) -> Link<K> {
    debug_assert!(node.left.is_none() || node.right.is_none());
    trace!("splicing out {:?}", node.key);
    node.left.take().or_else(|| node.right.take())
}

/// The inserted key picks the rotation shape: only one key was added, so the
/// path it took tells which grandchild grew.
fn rebalance_after_insert<K: Ord + Debug>(node: Box<Node<K>>, key: K) -> Box<Node<K>> {
    let balance = node.balance_factor();
    if balance > 1 {
        let left = node.left.as_deref().expect("left child expected");
        match key.cmp(&left.key) {
            Ordering::Less => return rotate_right(node),
            Ordering::Greater => return rotate_left_right(node),
            Ordering::Equal => {}
        }
    } else if balance < -1 {
        let right = node.right.as_deref().expect("right child expected");
        match key.cmp(&right.key) {
            Ordering::Greater => return rotate_left(node),
            Ordering::Less => return rotate_right_left(node),
            Ordering::Equal => {}
        }
    }
    node
}

/// After a removal the heavy child's own balance picks the rotation shape.
/// Runs at every ancestor as the recursion unwinds, since one removal can
/// unbalance several of them.
fn rebalance_after_delete<K: Debug>(node: Box<Node<K>>) -> Box<Node<K>> {
    let balance = node.balance_factor();
    if balance > 1 {
        let left = node.left.as_deref().expect("left child expected");
        if left.balance_factor() >= 0 {
            return rotate_right(node);
        }
        return rotate_left_right(node);
    }
    if balance < -1 {
        let right = node.right.as_deref().expect("right child expected");
        if right.balance_factor() <= 0 {
            return rotate_left(node);
        }
        return rotate_right_left(node);
    }
    node
}
