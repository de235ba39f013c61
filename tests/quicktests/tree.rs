use rebuild_bst::{Key, Order, Tree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, set: &mut HashSet<Key>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(Key::from(k));
                set.insert(Key::from(k));
            }
            Op::Remove(k) => {
                tree.delete(Key::from(k));
                set.remove(&Key::from(k));
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

fn is_strictly_ascending(keys: &[Key]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::empty();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|&key| tree.contains(key)) && tree.len() == set.len()
}

#[quickcheck]
fn inorder_is_sorted_distinct_input(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().map(|&x| Key::from(x)).collect();
    let distinct: HashSet<_> = xs.iter().map(|&x| Key::from(x)).collect();

    let keys = tree.inorder();
    is_strictly_ascending(&keys) && keys.len() == distinct.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| tree.find(Key::from(x)).is_none())
}

#[quickcheck]
fn insert_missing_key_keeps_order(xs: Vec<i8>, key: i8) -> bool {
    let mut tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    tree.insert(Key::from(key));

    tree.find(Key::from(key)).map(|n| n.data()) == Some(Key::from(key))
        && is_strictly_ascending(&tree.inorder())
}

#[quickcheck]
fn insert_present_key_changes_nothing(xs: Vec<i8>) -> bool {
    let Some(&first) = xs.first() else {
        return true;
    };
    let mut tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    let before = tree.clone();
    tree.insert(Key::from(first));

    tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    for &delete in &deletes {
        tree.delete(Key::from(delete));
    }

    let mut expected: Vec<Key> = xs
        .iter()
        .filter(|x| !deletes.contains(x))
        .map(|&x| Key::from(x))
        .collect();
    expected.sort_unstable();
    expected.dedup();

    deletes.iter().all(|&x| tree.find(Key::from(x)).is_none()) && tree.inorder() == expected
}

#[quickcheck]
fn rebalance_keeps_keys_and_balances(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    tree.extend(inserts.iter().map(|&x| Key::from(x)));
    let before = tree.inorder();

    tree.rebalance();
    tree.inorder() == before && tree.is_balanced()
}

#[quickcheck]
fn rebuilding_from_inorder_round_trips(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    tree.extend(inserts.iter().map(|&x| Key::from(x)));

    let rebuilt = Tree::new(tree.keys(Order::InOrder));
    rebuilt.inorder() == tree.inorder()
}

#[quickcheck]
fn depth_is_below_height(xs: Vec<i8>) -> bool {
    let tree = Tree::new(xs.iter().map(|&x| Key::from(x)));
    let height = Tree::height(tree.root());

    tree.iter(Order::LevelOrder).all(|node| {
        let depth = tree.depth(Some(node));
        depth >= 0 && depth <= height && tree.depth_of(node.data()) == Some(depth as usize)
    })
}
