//! Deletion engine - leaf removal, sibling borrow/merge, root collapse.
//!
//! A parent repairs an underflowing child immediately after the
//! recursive removal returns, while it still owns both siblings and the
//! separator between them. Per rebalancing step the decision is:
//! borrow from the left sibling, else borrow from the right sibling,
//! else merge with the right, else merge with the left.

use super::min_occupancy;
use super::node::{InnerNode, Key, Node};

/// Delete `key` from the tree rooted at `root`, collapsing the root
/// when a merge leaves an inner root with a single child.
pub(super) fn delete(root: &mut Box<Node>, key: Key, capacity: usize) -> Option<String> {
    let removed = remove_from(root.as_mut(), key, capacity)?;
    collapse_root(root);
    Some(removed)
}

/// An inner root drained of its last separator has a single child left;
/// that child becomes the new root and the tree loses a level.
fn collapse_root(root: &mut Box<Node>) {
    let sole_child = match root.as_mut() {
        Node::Inner(inner) if inner.keys.is_empty() => {
            debug_assert_eq!(inner.children.len(), 1);
            inner.children.pop()
        }
        _ => None,
    };
    if let Some(child) = sole_child {
        *root = child;
    }
}

/// Recursive removal. Returns the removed value, or `None` (with the
/// tree unchanged) when the key is absent.
///
/// The root-level call may leave `node` below minimum occupancy; the
/// root has no lower bound and [`delete`] collapses it if needed.
fn remove_from(node: &mut Node, key: Key, capacity: usize) -> Option<String> {
    match node {
        Node::Leaf(leaf) => {
            let at = leaf.position_of(key)?;
            leaf.keys.remove(at);
            Some(leaf.values.remove(at))
        }
        Node::Inner(inner) => {
            let at = inner.route(key);
            let removed = remove_from(&mut inner.children[at], key, capacity)?;
            if inner.children[at].occupancy() < min_occupancy(capacity) {
                rebalance(inner, at, capacity);
            }
            Some(removed)
        }
    }
}

/// Restore the occupancy band for `inner.children[at]`.
fn rebalance(inner: &mut InnerNode, at: usize, capacity: usize) {
    debug_assert!(inner.children.len() >= 2);
    let surplus = |sibling: &Node| sibling.occupancy() > min_occupancy(capacity);

    if at > 0 && surplus(&inner.children[at - 1]) {
        borrow_from_left(inner, at);
    } else if at + 1 < inner.children.len() && surplus(&inner.children[at + 1]) {
        borrow_from_right(inner, at);
    } else if at + 1 < inner.children.len() {
        merge_children(inner, at);
    } else {
        merge_children(inner, at - 1);
    }
}

/// Move the left sibling's largest entry to the front of
/// `inner.children[at]`.
///
/// At leaf level the moved key becomes the new separator between the
/// two siblings. At inner level the old separator rotates down into the
/// underflowing node and the lender's boundary key rotates up to
/// replace it.
fn borrow_from_left(inner: &mut InnerNode, at: usize) {
    let InnerNode { keys, children } = inner;
    let (left_of, from) = children.split_at_mut(at);
    match (left_of[at - 1].as_mut(), from[0].as_mut()) {
        (Node::Leaf(lender), Node::Leaf(taker)) => {
            let key = lender.keys.pop().expect("a lending sibling is never empty");
            let value = lender
                .values
                .pop()
                .expect("a lending sibling is never empty");
            taker.keys.insert(0, key);
            taker.values.insert(0, value);
            keys[at - 1] = key;
        }
        (Node::Inner(lender), Node::Inner(taker)) => {
            let boundary = lender.keys.pop().expect("a lending sibling is never empty");
            let child = lender
                .children
                .pop()
                .expect("a lending sibling is never empty");
            let separator = std::mem::replace(&mut keys[at - 1], boundary);
            taker.keys.insert(0, separator);
            taker.children.insert(0, child);
        }
        _ => unreachable!("siblings at the same depth share a shape"),
    }
}

/// Move the right sibling's smallest entry to the back of
/// `inner.children[at]`, the mirror image of [`borrow_from_left`].
fn borrow_from_right(inner: &mut InnerNode, at: usize) {
    let InnerNode { keys, children } = inner;
    let (up_to, from) = children.split_at_mut(at + 1);
    match (up_to[at].as_mut(), from[0].as_mut()) {
        (Node::Leaf(taker), Node::Leaf(lender)) => {
            let key = lender.keys.remove(0);
            let value = lender.values.remove(0);
            taker.keys.push(key);
            taker.values.push(value);
            keys[at] = lender.keys[0];
        }
        (Node::Inner(taker), Node::Inner(lender)) => {
            let boundary = lender.keys.remove(0);
            let child = lender.children.remove(0);
            let separator = std::mem::replace(&mut keys[at], boundary);
            taker.keys.push(separator);
            taker.children.push(child);
        }
        _ => unreachable!("siblings at the same depth share a shape"),
    }
}

/// Merge `inner.children[left_at]` with the child to its right and drop
/// the absorbed node.
///
/// A leaf merge discards the separator, since every leaf key is already
/// present in a leaf. An inner merge pulls the separator down between
/// the two key runs to keep one key per child boundary.
fn merge_children(inner: &mut InnerNode, left_at: usize) {
    let separator = inner.keys.remove(left_at);
    let absorbed = inner.children.remove(left_at + 1);
    match (inner.children[left_at].as_mut(), *absorbed) {
        (Node::Leaf(keeper), Node::Leaf(mut absorbed)) => {
            keeper.keys.append(&mut absorbed.keys);
            keeper.values.append(&mut absorbed.values);
        }
        (Node::Inner(keeper), Node::Inner(mut absorbed)) => {
            keeper.keys.push(separator);
            keeper.keys.append(&mut absorbed.keys);
            keeper.children.append(&mut absorbed.children);
        }
        _ => unreachable!("siblings at the same depth share a shape"),
    }
}
