//! bptree - an in-memory B+ tree index mapping integer keys to string values.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                     BPlusTree                     │
//! ├───────────────────────────────────────────────────┤
//! │   lookup            insert             delete     │
//! │     │                  │                  │       │
//! │     ▼                  ▼                  ▼       │
//! │  traversal         insertion          deletion    │
//! │  (locate)           engine             engine     │
//! │     │           split + root        borrow/merge  │
//! │     │              growth         + root collapse │
//! │     └──────────────────┼──────────────────┘       │
//! │                        ▼                          │
//! │              Node { Leaf | Inner }                │
//! │        (key, value) slots at the leaves,          │
//! │        separator keys + children above them       │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! All values live at the leaves; inner nodes only route. Every
//! non-root node keeps between `capacity / 2` and `capacity` keys, so
//! the tree stays balanced through any sequence of inserts and deletes.
//!
//! # Modules
//! - [`common`] - shared primitives (config, errors)
//! - [`index`] - index structures (the B+ tree)
//!
//! # Quick Start
//! ```
//! use bptree::BPlusTree;
//!
//! let mut tree = BPlusTree::new(4)?;
//!
//! tree.insert(7, "seven".to_string());
//! tree.insert(3, "three".to_string());
//!
//! assert_eq!(tree.lookup(3), Some("three"));
//! assert_eq!(tree.delete(7), Some("seven".to_string()));
//! assert_eq!(tree.lookup(7), None);
//! # Ok::<(), bptree::Error>(())
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::MIN_CAPACITY;
pub use common::{Error, Result};
pub use index::btree::{BPlusTree, InnerNode, Key, LeafNode, Node};
