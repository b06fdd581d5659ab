//! B+ tree index - fixed fanout, in-memory, all values at the leaves.
//!
//! The tree maps integer keys to string values. Point lookups descend
//! from the root by separator keys; insertion splits overflowing nodes
//! upward; deletion restores underflowing nodes by borrowing from a
//! sibling or merging with one. Every non-root node stays within the
//! occupancy band `[capacity / 2, capacity]`.

mod delete;
mod insert;
mod node;
mod render;

pub use node::{InnerNode, Key, LeafNode, Node};

use crate::common::config;
use crate::common::{Error, Result};

/// Fewest keys a non-root node may hold: `ceil(capacity / 2)`, which is
/// exactly `capacity / 2` because capacities are always even.
#[inline]
fn min_occupancy(capacity: usize) -> usize {
    capacity / 2
}

/// An in-memory B+ tree mapping integer keys to string values.
///
/// The tree is the sole entry point for all operations and exclusively
/// owns its node graph: each node is owned by exactly one parent slot,
/// or by the tree itself if it is the root.
///
/// # Structure
/// ```text
/// BPlusTree { capacity: 4 }
/// └── inner [10]
///     ├── leaf [2:a 5:b]          keys < 10
///     └── leaf [10:c 11:d 17:e]   keys >= 10
/// ```
///
/// # Usage
/// ```
/// use bptree::BPlusTree;
///
/// let mut tree = BPlusTree::new(4)?;
/// tree.insert(7, "seven".to_string());
/// assert_eq!(tree.lookup(7), Some("seven"));
/// assert_eq!(tree.delete(7), Some("seven".to_string()));
/// assert_eq!(tree.lookup(7), None);
/// # Ok::<(), bptree::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BPlusTree {
    /// Upper bound on keys per node, fixed at construction.
    capacity: usize,

    /// The whole node graph.
    root: Box<Node>,
}

impl BPlusTree {
    /// Create an empty tree: a single empty leaf as root.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is odd or
    /// smaller than [`MIN_CAPACITY`](crate::common::config::MIN_CAPACITY).
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_root(Node::Leaf(LeafNode::default()), capacity)
    }

    /// Create a tree around an existing root node.
    ///
    /// The caller supplies a well-formed node structure; this is the
    /// construction path used to build trees node-by-node in tests.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is odd or
    /// smaller than [`MIN_CAPACITY`](crate::common::config::MIN_CAPACITY).
    pub fn with_root(root: Node, capacity: usize) -> Result<Self> {
        if !config::is_valid_capacity(capacity) {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            root: Box::new(root),
        })
    }

    /// The configured node capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read-only root reference, for rendering and structural checks.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The leaf that does or would contain `key`, together with the
    /// root-to-parent chain of inner nodes crossed to reach it (empty
    /// when the root is a leaf).
    ///
    /// Every key maps to exactly one leaf, present or not: at each
    /// inner node the search descends into the first child whose
    /// separator exceeds the key, else into the last child.
    pub fn locate(&self, key: Key) -> (&LeafNode, Vec<&InnerNode>) {
        let mut ancestors = Vec::new();
        let mut node = self.root.as_ref();
        loop {
            match node {
                Node::Leaf(leaf) => return (leaf, ancestors),
                Node::Inner(inner) => {
                    ancestors.push(inner);
                    node = inner.child(inner.route(key));
                }
            }
        }
    }

    /// Look up the value stored under `key`.
    ///
    /// No side effects; absent keys are `None`, not an error.
    pub fn lookup(&self, key: Key) -> Option<&str> {
        let (leaf, _ancestors) = self.locate(key);
        let at = leaf.position_of(key)?;
        Some(leaf.values()[at].as_str())
    }

    /// Insert `key` with `value`.
    ///
    /// If the key is already present the value is replaced in place and
    /// the previous value returned; no structural change happens. A
    /// fresh key is inserted at its sorted position, splitting nodes
    /// upward as needed and growing a new root when the split reaches
    /// the top. Insertion never fails.
    pub fn insert(&mut self, key: Key, value: String) -> Option<String> {
        insert::insert(&mut self.root, key, value, self.capacity)
    }

    /// Delete `key`, returning the value stored under it.
    ///
    /// Absent keys return `None` and leave the tree unchanged. Removal
    /// that underflows a leaf borrows from or merges with a sibling,
    /// recursively rebalancing ancestors; an inner root left with a
    /// single child is replaced by that child.
    pub fn delete(&mut self, key: Key) -> Option<String> {
        delete::delete(&mut self.root, key, self.capacity)
    }
}
