//! This crate provides a Binary Search Tree (BST) over unique integer keys that stays as it is
//! until explicitly rebalanced.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. A [`Tree`] built with [`Tree::new`] has the smallest
//! possible height, `O(lg N)`, because it is assembled from the sorted keys by always choosing the
//! middle key as the root of each subtree. Inserting and deleting don't restore that shape: a run
//! of ascending inserts degrades the tree towards a linked list. [`Tree::is_balanced`] detects
//! this and [`Tree::rebalance`] rebuilds the tree from its keys.
//!
//! ## Traversals
//!
//! Nodes can be visited level by level or in any of the three depth-first orders (see [`Order`]).
//! [`Tree::iter`] and [`Tree::keys`] are lazy, [`Tree::visit`] runs a callback per node and
//! [`Tree::inorder`] and friends collect the keys into a `Vec`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
pub mod error;
pub mod node;
pub mod pretty;
pub mod traversal;
pub mod tree;


/// The type of every key stored in a [`Tree`].
pub type Key = i64;

pub use error::ParseTreeError;
pub use node::Node;
pub use traversal::{Iter, Order};
pub use tree::Tree;
