//! Tree rendering - one node per line, indented by depth.
//!
//! The printer consumes only the read-only traversal; the engines never
//! call it.

use std::fmt;

use super::node::Node;
use super::BPlusTree;

impl fmt::Display for BPlusTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self.root(), 0, f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, 0, f)
    }
}

fn fmt_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match node {
        Node::Leaf(leaf) => {
            write!(f, "leaf[")?;
            for (i, (key, value)) in leaf.entries().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}:{}", key, value)?;
            }
            writeln!(f, "]")
        }
        Node::Inner(inner) => {
            write!(f, "inner[")?;
            for (i, key) in inner.keys().iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", key)?;
            }
            writeln!(f, "]")?;
            for child in inner.children() {
                fmt_node(child, depth + 1, f)?;
            }
            Ok(())
        }
    }
}
