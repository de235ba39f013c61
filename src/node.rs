//! The `Node` type and the recursive helpers that rewrite subtrees.
//!
//! Subtrees are owned `Option<Box<Node>>`s. Every mutation takes ownership of a subtree and hands
//! back the subtree that should replace it, so each parent simply reassigns its child link.

use std::cmp::Ordering;

use crate::Key;

/// An owned, possibly empty, subtree.
pub(crate) type Link = Option<Box<Node>>;

/// One key in the tree along with its two (possibly empty) subtrees.
///
/// Every key in the left subtree is strictly less than [`data`][Node::data] and every key in the
/// right subtree is strictly greater.
// TODO stack based Clone, Debug and PartialEq. These recurse once per level; `Tree`'s don't.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    data: Key,
    left: Link,
    right: Link,
}

impl Node {
    pub(crate) fn new(data: Key) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(data: Key, left: Link, right: Link) -> Self {
        Self { data, left, right }
    }

    /// The key stored in this node.
    pub fn data(&self) -> Key {
        self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Moves both child links out, leaving this node childless.
    pub(crate) fn take_children(&mut self) -> (Link, Link) {
        (self.left.take(), self.right.take())
    }

    /// Returns the leftmost node of this subtree (i.e. its smallest key) without detaching it.
    pub(crate) fn leftmost(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }
}

/// Returns `link` with `key` added. If `key` is already present the subtree comes back unchanged.
pub(crate) fn insert(link: Link, key: Key) -> Link {
    let Some(mut node) = link else {
        return Some(Box::new(Node::new(key)));
    };

    match key.cmp(&node.data) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert(node.right.take(), key),
    }

    if cfg!(debug_assertions) {
        if let Some(left) = node.left() {
            assert!(node.data > left.data);
        }
        if let Some(right) = node.right() {
            assert!(node.data < right.data);
        }
    }

    Some(node)
}

/// Returns `link` without `key`. Deleting a missing key gives back the subtree unchanged.
pub(crate) fn delete(link: Link, key: Key) -> Link {
    let mut node = link?;

    match key.cmp(&node.data) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match node.take_children() {
            (None, right) => return right,
            (left, None) => return left,
            // With two children we promote the successor: the smallest key of the right subtree.
            // It has no left child, so deleting it below only ever hits the splice cases above.
            (left, Some(right)) => {
                let successor = right.leftmost().data;
                node.data = successor;
                node.left = left;
                node.right = delete(Some(right), successor);
            }
        },
    }

    Some(node)
}

/// Height of a possibly empty subtree. An empty subtree is `-1` and a lone leaf is `0`.
pub(crate) fn height(node: Option<&Node>) -> isize {
    match node {
        None => -1,
        Some(n) => 1 + height(n.left()).max(height(n.right())),
    }
}

/// Whether every node in the subtree has child heights differing by at most one.
///
/// Heights are recomputed at every node, so this is quadratic in the worst case.
pub(crate) fn is_balanced(node: Option<&Node>) -> bool {
    let Some(n) = node else {
        return true;
    };

    let diff = height(n.left()) - height(n.right());
    diff.abs() <= 1 && is_balanced(n.left()) && is_balanced(n.right())
}
