use log::debug;
use std::fmt;
use std::fmt::Debug;

use crate::balance;
use crate::iter::InOrder;
use crate::link;
use crate::node::{Link, Node};
use crate::validate::{self, InvariantResult};

/// Owning handle around the root of an AVL tree.
///
/// Keeps no aggregate state besides the root: sizes are recovered by
/// walking the tree. Every mutation replaces the root with the one returned
/// by the corresponding [`link`] operation.
pub struct AvlTree<K> {
    root: Link<K>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    /// Creates an empty [`AvlTree`].
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the stored keys. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> usize {
        balance::height(self.root.as_deref())
    }

    /// Borrows the root node, if any.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> InOrder<'_, K> {
        link::in_order(&self.root)
    }

    /// Releases every node and returns how many were released.
    pub fn clear(&mut self) -> usize {
        let released = link::release(self.root.take());
        debug!("released {} nodes", released);
        released
    }

    /// Gives up ownership of the root link.
    pub fn into_link(mut self) -> Link<K> {
        self.root.take()
    }
}

impl<K: Ord> AvlTree<K> {
    /// Returns `true` if `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        link::contains(&self.root, key)
    }

    /// Smallest stored key.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().map(|n| balance::min_value_node(n).key())
    }
}

impl<K: Ord + Debug> AvlTree<K> {
    /// Checks every structural invariant and returns the recomputed height.
    pub fn validate(&self) -> InvariantResult<usize> {
        validate::check(&self.root)
    }
}

impl<K: Ord + Copy + Debug> AvlTree<K> {
    /// Inserts `key`. Returns `false` if it was already present, in which
    /// case the tree is left untouched.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            debug!("key {:?} already present, insert ignored", key);
            return false;
        }
        self.root = link::insert(self.root.take(), key);
        true
    }

    /// Removes `key`. Returns `false` if it was not present, in which case
    /// the tree is left untouched.
    pub fn remove(&mut self, key: K) -> bool {
        if !self.contains(&key) {
            debug!("key {:?} not found, delete ignored", key);
            return false;
        }
        self.root = link::delete(self.root.take(), key);
        true
    }

    /// Returns a vector containing the keys in ascending order.
    pub fn in_order(&self) -> Vec<K> {
        self.iter().copied().collect()
    }
}

impl<K> From<Link<K>> for AvlTree<K> {
    /// Wraps a root produced by the [`link`] functions.
    fn from(root: Link<K>) -> Self {
        Self { root }
    }
}

impl<K: Clone> Clone for AvlTree<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<K: PartialEq> PartialEq for AvlTree<K> {
    /// Structural equality: same keys in the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<K: Eq> Eq for AvlTree<K> {}

impl<K: Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("height", &self.height())
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K: Ord + Copy + Debug> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord + Copy + Debug> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.root = link::insert(self.root.take(), key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
