//! Insertion engine - sorted leaf insert, split propagation, root growth.
//!
//! A split hands its caller the separator key and the new right-hand
//! node; each inner level grafts that pair in just after the child that
//! split, splitting itself in turn when it overflows. The recursion
//! bottoms out at the root, which grows the tree by one level if it
//! split too.

use super::node::{InnerNode, Key, LeafNode, Node};

/// Outcome of splitting an overflowing node: the separator to push into
/// the parent and the node holding the upper half of the slots.
struct Split {
    key: Key,
    right: Box<Node>,
}

/// Insert into the tree rooted at `root`. Returns the previous value
/// when `key` was already present.
pub(super) fn insert(
    root: &mut Box<Node>,
    key: Key,
    value: String,
    capacity: usize,
) -> Option<String> {
    let (replaced, split) = insert_into(root, key, value, capacity);
    if let Some(Split { key, right }) = split {
        // The top-level node split: the tree grows a new root with one
        // separator and two children.
        let left = std::mem::replace(root, Box::new(Node::Leaf(LeafNode::default())));
        *root = Box::new(Node::Inner(InnerNode {
            keys: vec![key],
            children: vec![left, right],
        }));
    }
    replaced
}

/// Recursive descent. Returns the replaced value (duplicate key) and,
/// when this node split, the pair the caller must graft one level up.
fn insert_into(
    node: &mut Node,
    key: Key,
    value: String,
    capacity: usize,
) -> (Option<String>, Option<Split>) {
    match node {
        Node::Leaf(leaf) => insert_into_leaf(leaf, key, value, capacity),
        Node::Inner(inner) => {
            let at = inner.route(key);
            let (replaced, split) = insert_into(&mut inner.children[at], key, value, capacity);
            let split = split.and_then(|child_split| graft(inner, at, child_split, capacity));
            (replaced, split)
        }
    }
}

fn insert_into_leaf(
    leaf: &mut LeafNode,
    key: Key,
    value: String,
    capacity: usize,
) -> (Option<String>, Option<Split>) {
    if let Some(at) = leaf.position_of(key) {
        // Replace-on-conflict: overwrite in place, no structural change.
        let previous = std::mem::replace(&mut leaf.values[at], value);
        return (Some(previous), None);
    }

    let at = leaf
        .keys
        .iter()
        .position(|&existing| key < existing)
        .unwrap_or(leaf.keys.len());
    leaf.keys.insert(at, key);
    leaf.values.insert(at, value);

    if leaf.keys.len() <= capacity {
        return (None, None);
    }
    (None, Some(split_leaf(leaf, capacity)))
}

/// Split an oversized leaf. The left half keeps `capacity / 2` entries;
/// the separator is the right half's smallest key, copied up so that it
/// remains present in the leaf.
fn split_leaf(leaf: &mut LeafNode, capacity: usize) -> Split {
    let split_at = capacity / 2;
    let right_keys = leaf.keys.split_off(split_at);
    let right_values = leaf.values.split_off(split_at);
    Split {
        key: right_keys[0],
        right: Box::new(Node::Leaf(LeafNode {
            keys: right_keys,
            values: right_values,
        })),
    }
}

/// Graft a child split into `inner` just after the child that split,
/// splitting `inner` in turn when it overflows.
fn graft(inner: &mut InnerNode, at: usize, child_split: Split, capacity: usize) -> Option<Split> {
    inner.keys.insert(at, child_split.key);
    inner.children.insert(at + 1, child_split.right);
    (inner.keys.len() > capacity).then(|| split_inner(inner, capacity))
}

/// Split an oversized inner node. The middle key moves up to the
/// parent: unlike a leaf split it is removed from both halves.
fn split_inner(inner: &mut InnerNode, capacity: usize) -> Split {
    let split_at = capacity / 2;
    let mut right_keys = inner.keys.split_off(split_at);
    let key = right_keys.remove(0);
    let right_children = inner.children.split_off(split_at + 1);
    Split {
        key,
        right: Box::new(Node::Inner(InnerNode {
            keys: right_keys,
            children: right_children,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[Key]) -> LeafNode {
        LeafNode::new(keys.to_vec(), keys.iter().map(|k| k.to_string()).collect())
    }

    fn boxed_leaf(keys: &[Key]) -> Box<Node> {
        Box::new(Node::Leaf(leaf(keys)))
    }

    #[test]
    fn test_split_leaf_keeps_lower_half_and_copies_separator_up() {
        let mut node = leaf(&[1, 2, 3, 4, 5]);

        let split = split_leaf(&mut node, 4);

        assert_eq!(node.keys(), &[1, 2]);
        assert_eq!(split.key, 3);
        match split.right.as_ref() {
            Node::Leaf(right) => {
                // The separator stays present as the right leaf's smallest key.
                assert_eq!(right.keys(), &[3, 4, 5]);
                assert_eq!(right.values(), &["3", "4", "5"]);
            }
            Node::Inner(_) => panic!("leaf split must produce a leaf"),
        }
    }

    #[test]
    fn test_split_inner_promotes_the_middle_key() {
        let mut node = InnerNode {
            keys: vec![10, 20, 30, 40, 50],
            children: vec![
                boxed_leaf(&[1, 2]),
                boxed_leaf(&[10, 11]),
                boxed_leaf(&[20, 21]),
                boxed_leaf(&[30, 31]),
                boxed_leaf(&[40, 41]),
                boxed_leaf(&[50, 51]),
            ],
        };

        let split = split_inner(&mut node, 4);

        assert_eq!(node.keys(), &[10, 20]);
        assert_eq!(node.children().len(), 3);
        // 30 moved up: it is in neither half.
        assert_eq!(split.key, 30);
        match split.right.as_ref() {
            Node::Inner(right) => {
                assert_eq!(right.keys(), &[40, 50]);
                assert_eq!(right.children().len(), 3);
            }
            Node::Leaf(_) => panic!("inner split must produce an inner node"),
        }
    }

    #[test]
    fn test_graft_places_the_separator_after_the_split_child() {
        let mut parent = InnerNode {
            keys: vec![10, 30],
            children: vec![boxed_leaf(&[1]), boxed_leaf(&[10]), boxed_leaf(&[30])],
        };

        let grown = graft(
            &mut parent,
            1,
            Split {
                key: 20,
                right: boxed_leaf(&[20]),
            },
            4,
        );

        assert!(grown.is_none());
        assert_eq!(parent.keys(), &[10, 20, 30]);
        assert_eq!(parent.children().len(), 4);
        match parent.child(2) {
            Node::Leaf(child) => assert_eq!(child.keys(), &[20]),
            Node::Inner(_) => panic!("grafted child should be the new leaf"),
        }
    }

    #[test]
    fn test_replace_on_conflict_leaves_structure_alone() {
        let mut node = leaf(&[1, 2, 3, 4]);

        let (replaced, split) = insert_into_leaf(&mut node, 3, "other".to_string(), 4);

        assert_eq!(replaced.as_deref(), Some("3"));
        assert!(split.is_none());
        assert_eq!(node.keys(), &[1, 2, 3, 4]);
        assert_eq!(node.values(), &["1", "2", "other", "4"]);
    }
}
