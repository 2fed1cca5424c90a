//! Core data structures and the merge algorithm.
//!
//! This module contains the generic min priority queue, the weighted node
//! type, and the builder that merges nodes into a code tree.

pub mod alphabet;
pub mod node;
pub mod priority;
pub mod tree;

pub use alphabet::{FAN_OUT, PATH_ALPHABET};
pub use node::WeightedNode;
pub use priority::MinPriorityQueue;
pub use tree::{CodeTree, TreeBuilder, TreeStats};
