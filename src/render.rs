//! Text renderings of a tree. Every function returns a `String`; printing is
//! up to the caller.

use std::fmt::{Display, Write};

use crate::node::Node;
use crate::tree::AvlTree;

/// Indentation added per level by [`sideways`] when none is configured.
pub const DEFAULT_INDENT: usize = 10;

/// Widest per-level indentation [`sideways`] will use.
pub const MAX_INDENT: usize = 80;

/// Keys in ascending order separated by single spaces.
pub fn in_order_line<K: Display>(tree: &AvlTree<K>) -> String {
    let mut line = String::new();
    for (i, key) in tree.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{}", key);
    }
    line
}

/// The tree lying on its side: right subtree on top, root at the left
/// margin, each level `indent` columns further right. Every key line is
/// preceded by a blank line. `indent` is clamped to [`MAX_INDENT`].
pub fn sideways<K: Display>(tree: &AvlTree<K>, indent: usize) -> String {
    fn recurse<K: Display>(node: Option<&Node<K>>, depth: usize, indent: usize, out: &mut String) {
        if let Some(n) = node {
            recurse(n.right(), depth + 1, indent, out);
            let _ = writeln!(out);
            let _ = writeln!(out, "{:width$}{}", "", n.key(), width = depth.saturating_mul(indent));
            recurse(n.left(), depth + 1, indent, out);
        }
    }
    let mut out = String::new();
    recurse(tree.root(), 0, indent.min(MAX_INDENT), &mut out);
    out
}

/// Top-down outline, one line per node with its branch side and cached
/// height.
pub fn outline<K: Display>(tree: &AvlTree<K>) -> String {
    fn recurse<K: Display>(node: Option<&Node<K>>, prefix: &str, is_left: bool, out: &mut String) {
        if let Some(n) = node {
            let _ = writeln!(
                out,
                "{}{}- [{}] height:{}",
                prefix,
                if is_left { "L" } else { "R" },
                n.key(),
                n.height()
            );
            let child_prefix = format!("{}{}", prefix, if is_left { "|  " } else { "   " });
            recurse(n.left(), &child_prefix, true, out);
            recurse(n.right(), &child_prefix, false, out);
        }
    }
    let mut out = String::new();
    recurse(tree.root(), "", false, &mut out);
    out
}
