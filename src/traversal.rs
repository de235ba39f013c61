//! Traversal orders and the lazy iterator behind them.
//!
//! Nothing here recurses: level order is driven by a FIFO queue and the three depth-first orders
//! by an explicit stack, so skewed trees can be walked without growing the call stack. Each
//! [`Iter`] owns its own buffer; two traversals of the same tree never share state.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: top to bottom, left to right within each level.
    LevelOrder,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A stacked node, plus whether its children have already been pushed. An expanded node is
/// yielded the next time it is popped.
type Frame<'a> = (&'a Node, bool);

/// The orders driven by a stack rather than a queue.
#[derive(Clone, Copy, Debug)]
enum DepthFirst {
    In,
    Pre,
    Post,
}

enum Pending<'a> {
    Queue(VecDeque<&'a Node>),
    Stack(DepthFirst, Vec<Frame<'a>>),
}

/// An iterator over the nodes of a tree in a given [`Order`].
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a> {
    order: Order,
    pending: Pending<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: Order) -> Self {
        let stack = || root.into_iter().map(|n| (n, false)).collect();
        let pending = match order {
            Order::LevelOrder => Pending::Queue(root.into_iter().collect()),
            Order::InOrder => Pending::Stack(DepthFirst::In, stack()),
            Order::PreOrder => Pending::Stack(DepthFirst::Pre, stack()),
            Order::PostOrder => Pending::Stack(DepthFirst::Post, stack()),
        };
        Self { order, pending }
    }

    /// The order this iterator visits nodes in.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.pending {
            Pending::Queue(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node)
            }
            Pending::Stack(order, stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(node);
                }

                // Push in reverse of the visiting order.
                let (left, right) = (node.left(), node.right());
                match order {
                    DepthFirst::Pre => {
                        stack.extend(right.map(|n| (n, false)));
                        stack.extend(left.map(|n| (n, false)));
                        return Some(node);
                    }
                    DepthFirst::In => {
                        stack.extend(right.map(|n| (n, false)));
                        stack.push((node, true));
                        stack.extend(left.map(|n| (n, false)));
                    }
                    DepthFirst::Post => {
                        stack.push((node, true));
                        stack.extend(right.map(|n| (n, false)));
                        stack.extend(left.map(|n| (n, false)));
                    }
                }
            },
        }
    }
}

impl FusedIterator for Iter<'_> {}
