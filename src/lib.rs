mod macros;

pub mod graph;
pub mod hashmap;
pub mod sort;
pub mod tree;

pub use graph::Graph;
pub use hashmap::{ChainedHashTable, Entry};
pub use tree::BinarySearchTree;
