//! HTML parser module for tree construction.

/// Token stream to DOM tree construction.
pub mod tree_builder;

pub use tree_builder::{HTMLParser, dump_tree, print_tree};
