//! A binary search tree over unique `i64` keys that only rebalances when asked to.
//!
//! Construction always produces a height-balanced tree. [`insert`][Tree::insert] and
//! [`delete`][Tree::delete] never rotate, so a run of ascending inserts will skew the tree;
//! [`rebalance`][Tree::rebalance] rebuilds it from scratch.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{Order, Tree};
//!
//! let mut tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are gone and the middle key is the root.
//! assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]);
//! assert_eq!(tree.root().map(|n| n.data()), Some(8));
//!
//! // Ascending inserts pile up on the right.
//! for key in 101..=104 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.keys(Order::InOrder).count(), 15);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr;
use std::str::FromStr;

use log::debug;

use crate::error::ParseTreeError;
use crate::node::{self, Link, Node};
use crate::pretty::Pretty;
use crate::traversal::{Iter, Order};
use crate::{build, Key};

/// A binary search tree of unique keys. See the [module documentation][self] for an overview.
#[derive(Default)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    // The derived drop would recurse once per level, which a skewed tree can make arbitrarily deep.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl Clone for Tree {
    // Rebuilds bottom up from the post-order walk: by the time a node comes out, its subtrees'
    // copies are the top one or two entries of `built`.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node>> = Vec::new();
        for node in self.iter(Order::PostOrder) {
            let right = node.right().and_then(|_| built.pop());
            let left = node.left().and_then(|_| built.pop());
            built.push(Box::new(Node::with_children(node.data(), left, right)));
        }
        Self::from_root(built.pop())
    }
}

/// Two trees are equal when they have the same keys in the same shape. With unique keys the
/// pre-order sequence pins down the shape, so that is all that is compared.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.keys(Order::PreOrder).eq(other.keys(Order::PreOrder))
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("preorder", &self.preorder())
            .finish()
    }
}

impl Tree {
    /// Builds a balanced tree from `keys`. Duplicate keys are kept once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([5, 5, 5]);
    /// assert_eq!(tree.level_order(), vec![5]);
    ///
    /// assert!(Tree::new([]).is_empty());
    /// ```
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::from_root(build::balanced(keys))
    }

    /// Generates a new, empty `Tree`.
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub(crate) fn from_root(root: Link) -> Self {
        Self { root }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter(Order::PreOrder).count()
    }

    /// Adds `key` to the tree. Inserting a key that is already present does nothing.
    ///
    /// The tree is not rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::empty();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.inorder(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, key: Key) {
        self.root = node::insert(self.root.take(), key);
    }

    /// Removes `key` from the tree. Deleting a missing key does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new([1, 2, 3]);
    /// tree.delete(2);
    /// tree.delete(42);
    ///
    /// assert!(tree.find(2).is_none());
    /// assert_eq!(tree.inorder(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, key: Key) {
        self.root = node::delete(self.root.take(), key);
    }

    /// Finds the node holding `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(3).map(|n| n.data()), Some(3));
    /// assert!(tree.find(42).is_none());
    /// ```
    pub fn find(&self, key: Key) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.data()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Lazily walks the nodes in the given order. Every call starts a fresh traversal.
    pub fn iter(&self, order: Order) -> Iter<'_> {
        Iter::new(self.root(), order)
    }

    /// Lazily walks the keys in the given order.
    pub fn keys(&self, order: Order) -> impl Iterator<Item = Key> + '_ {
        self.iter(order).map(Node::data)
    }

    /// Calls `visitor` once for every node in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Order, Tree};
    ///
    /// let tree = Tree::new([1, 2, 3]);
    /// let mut leaves = 0;
    /// tree.visit(Order::PostOrder, |node| {
    ///     if node.is_leaf() {
    ///         leaves += 1;
    ///     }
    /// });
    ///
    /// assert_eq!(leaves, 2);
    /// ```
    pub fn visit<F>(&self, order: Order, visitor: F)
    where
        F: FnMut(&Node),
    {
        self.iter(order).for_each(visitor);
    }

    /// Keys in breadth-first order.
    pub fn level_order(&self) -> Vec<Key> {
        self.keys(Order::LevelOrder).collect()
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Vec<Key> {
        self.keys(Order::InOrder).collect()
    }

    /// Keys with every node before its subtrees.
    pub fn preorder(&self) -> Vec<Key> {
        self.keys(Order::PreOrder).collect()
    }

    /// Keys with every node after its subtrees.
    pub fn postorder(&self) -> Vec<Key> {
        self.keys(Order::PostOrder).collect()
    }

    /// The height of the subtree rooted at `node`. An empty subtree has height `-1` and a single
    /// leaf has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4]);
    ///
    /// assert_eq!(Tree::height(tree.root()), 2);
    /// assert_eq!(Tree::height(tree.find(4)), 0);
    /// assert_eq!(Tree::height(None), -1);
    /// ```
    pub fn height(node: Option<&Node>) -> isize {
        node::height(node)
    }

    /// The number of edges between the root and `node`, or `-1` if `node` is `None` or is not a
    /// node of this tree.
    ///
    /// The search descends by `node`'s key, then checks the node it lands on is `node` itself. A
    /// node from another tree that happens to hold the same key is not found. Use
    /// [`depth_of`][Tree::depth_of] to look up a key instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    /// let other = Tree::new([3]);
    ///
    /// assert_eq!(tree.depth(tree.root()), 0);
    /// assert_eq!(tree.depth(tree.find(3)), 1);
    /// assert_eq!(tree.depth(other.find(3)), -1);
    /// assert_eq!(tree.depth(None), -1);
    /// ```
    pub fn depth(&self, node: Option<&Node>) -> isize {
        let Some(target) = node else {
            return -1;
        };

        let mut current = self.root();
        let mut depth = 0;
        while let Some(n) = current {
            current = match target.data().cmp(&n.data()) {
                Ordering::Less => n.left(),
                Ordering::Equal if ptr::eq(n, target) => return depth,
                Ordering::Equal => return -1,
                Ordering::Greater => n.right(),
            };
            depth += 1;
        }
        -1
    }

    /// The depth of the node holding `key`, if there is one.
    pub fn depth_of(&self, key: Key) -> Option<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(n) = current {
            current = match key.cmp(&n.data()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => n.right(),
            };
            depth += 1;
        }
        None
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root())
    }

    /// Throws away the current shape and rebuilds a balanced tree from the same keys.
    pub fn rebalance(&mut self) {
        let keys = self.level_order();
        let old_height = Self::height(self.root());

        *self = Self::new(keys);
        debug!(
            "rebalanced {} keys: height {} -> {}",
            self.len(),
            old_height,
            Self::height(self.root())
        );
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<Key> for Tree {
    /// Inserts every key in turn. Like [`insert`][Tree::insert], this never rebalances.
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromStr for Tree {
    type Err = ParseTreeError;

    /// Parses keys separated by commas and/or whitespace, e.g. `"1, 7 4,23"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keys = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<Key>().map_err(|source| ParseTreeError::InvalidKey {
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(keys))
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Pretty(self.root()), f)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes and rebuilds we have the same keys in both.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree, set: &mut BTreeSet<Key>) {
        for op in ops {
            match *op {
                Op::Insert(k) => {
                    tree.insert(Key::from(k));
                    set.insert(Key::from(k));
                }
                Op::Delete(k) => {
                    tree.delete(Key::from(k));
                    set.remove(&Key::from(k));
                }
                Op::Rebalance => {
                    tree.rebalance();
                    assert!(tree.is_balanced());
                }
                Op::Traverse => {
                    assert_eq!(tree.inorder(), set.iter().copied().collect::<Vec<_>>());
                    assert_eq!(tree.len(), set.len());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::empty();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            (Key::from(i8::MIN)..=Key::from(i8::MAX)).all(|k| tree.contains(k) == set.contains(&k))
        }
    }

    quickcheck::quickcheck! {
        fn build_is_sorted_unique_and_balanced(xs: Vec<i64>) -> bool {
            let tree = Tree::new(xs.iter().copied());
            let expected: Vec<Key> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

            tree.inorder() == expected && tree.is_balanced()
        }
    }

    quickcheck::quickcheck! {
        fn every_order_visits_every_key(xs: Vec<i16>) -> bool {
            let tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
            let mut sorted = tree.inorder();
            sorted.sort_unstable();

            [tree.level_order(), tree.preorder(), tree.postorder()]
                .into_iter()
                .all(|mut keys| {
                    keys.sort_unstable();
                    keys == sorted
                })
        }
    }
}
