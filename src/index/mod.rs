//! Index structures.
//!
//! One index lives here today: the in-memory B+ tree in [`btree`].

pub mod btree;

pub use btree::{BPlusTree, InnerNode, Key, LeafNode, Node};
