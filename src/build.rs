//! Pure conversions from a sequence of keys to a balanced subtree.

use log::trace;

use crate::node::{Link, Node};
use crate::Key;

/// Sorts `keys` ascending and drops duplicates.
pub(crate) fn sorted_unique(keys: impl IntoIterator<Item = Key>) -> Vec<Key> {
    let mut keys: Vec<Key> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Builds a height-balanced subtree holding exactly the distinct values of `keys`.
pub(crate) fn balanced(keys: impl IntoIterator<Item = Key>) -> Link {
    let sorted = sorted_unique(keys);
    trace!("building balanced subtree from {} distinct keys", sorted.len());
    from_sorted(&sorted)
}

/// Builds a subtree from strictly ascending `keys` by making the middle key the root and
/// recursing on either half. Even-length runs take the lower of the two middle keys, so the left
/// half is never larger than the right.
pub(crate) fn from_sorted(keys: &[Key]) -> Link {
    if keys.is_empty() {
        return None;
    }

    let mid = (keys.len() - 1) / 2;
    Some(Box::new(Node::with_children(
        keys[mid],
        from_sorted(&keys[..mid]),
        from_sorted(&keys[mid + 1..]),
    )))
}
