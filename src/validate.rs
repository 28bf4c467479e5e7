//! Full-tree invariant check.
//!
//! Unlike the rest of the crate this walks every node and recomputes heights
//! from scratch, so it is meant for tests and debug logging, not hot paths.

use std::cmp::Ordering;
use std::fmt::Debug;
use thiserror::Error;

use crate::node::{Link, Node};

/// First invariant violation found by [`check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("key {key} is out of order after {previous}")]
    Unordered { previous: String, key: String },
    #[error("key {key} is stored more than once")]
    DuplicateKey { key: String },
    #[error("node {key} caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        key: String,
        cached: usize,
        actual: usize,
    },
    #[error("node {key} has balance factor {balance}")]
    Unbalanced { key: String, balance: isize },
}

/// Convenience alias for invariant check results.
pub type InvariantResult<T> = Result<T, InvariantError>;

/// Verifies ordering, key uniqueness, cached heights and AVL balance for the
/// whole subtree. Returns the true height on success.
pub fn check<K: Ord + Debug>(root: &Link<K>) -> InvariantResult<usize> {
    let mut previous = None;
    walk(root.as_deref(), &mut previous)
}

fn walk<'a, K: Ord + Debug>(
    node: Option<&'a Node<K>>,
    previous: &mut Option<&'a K>,
) -> InvariantResult<usize> {
    let Some(node) = node else {
        return Ok(0);
    };

    let left_height = walk(node.left.as_deref(), previous)?;

    if let Some(prev) = *previous {
        match prev.cmp(&node.key) {
            Ordering::Less => {}
            Ordering::Equal => {
                return Err(InvariantError::DuplicateKey {
                    key: format!("{:?}", node.key),
                })
            }
            Ordering::Greater => {
                return Err(InvariantError::Unordered {
                    previous: format!("{:?}", prev),
                    key: format!("{:?}", node.key),
                })
            }
        }
    }
    *previous = Some(&node.key);

    let right_height = walk(node.right.as_deref(), previous)?;

    let actual = 1 + left_height.max(right_height);
    if node.height != actual {
        return Err(InvariantError::StaleHeight {
            key: format!("{:?}", node.key),
            cached: node.height,
            actual,
        });
    }
    let balance = left_height as isize - right_height as isize;
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced {
            key: format!("{:?}", node.key),
            balance,
        });
    }
    Ok(actual)
}
