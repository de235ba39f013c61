//! Sideways, box-drawn rendering of a subtree.
//!
//! The right subtree is drawn above its parent and the left subtree below, so reading the output
//! top to bottom gives the keys in descending order.
//!
//! ```
//! use rebuild_bst::{pretty::Pretty, Tree};
//!
//! let tree = Tree::new([1, 2, 3]);
//! let drawn = Pretty(tree.root()).to_string();
//!
//! assert_eq!(drawn, "│   ┌── 3\n└── 2\n    └── 1\n");
//! ```

use std::fmt;

use crate::node::Node;

const LEFT_BRANCH: &str = "└── ";
const RIGHT_BRANCH: &str = "┌── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// Displays the subtree rooted at the wrapped node, one key per line. An empty subtree displays
/// as nothing.
#[derive(Clone, Copy, Debug)]
pub struct Pretty<'a>(pub Option<&'a Node>);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. The root is drawn as a left child.
fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, prefix: &str, is_left: bool) -> fmt::Result {
    if let Some(right) = node.right() {
        let extended = format!("{prefix}{}", if is_left { PIPE } else { GAP });
        write_node(f, right, &extended, false)?;
    }

    let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
    writeln!(f, "{prefix}{branch}{}", node.data())?;

    if let Some(left) = node.left() {
        let extended = format!("{prefix}{}", if is_left { GAP } else { PIPE });
        write_node(f, left, &extended, true)?;
    }
    Ok(())
}
