//! Self-balancing AVL tree of unique, ordered keys.
//!
//! This crate provides:
//! - [`link`]: the core operations (`insert`, `delete`, `in_order`, `release`)
//!   over a bare root link, each returning the new root.
//! - [`AvlTree`]: an owning handle that applies those operations to a single root.
//! - [`rotation`] and [`balance`]: the rotation primitives and O(1) height queries
//!   the mutations are built from.
//! - [`validate`]: a full invariant check used by tests and diagnostics.
//! - [`render`] and [`shell`]: text output and the interactive menu that drive the
//!   tree from the `rustavl` binary.

pub mod balance;
pub mod iter;
pub mod link;
pub mod node;
pub mod render;
pub mod rotation;
pub mod shell;
pub mod tree;
pub mod validate;

pub use iter::InOrder;
pub use node::{Link, Node};
pub use shell::{Command, Flow, Shell, ShellConfig, ShellError, ShellResult};
pub use tree::AvlTree;
pub use validate::{InvariantError, InvariantResult};
