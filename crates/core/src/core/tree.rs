//! Greedy five-way merge tree construction.
//!
//! The builder repeatedly drains up to [`FAN_OUT`] of the lightest nodes
//! from a [`MinPriorityQueue`] and merges them under a new internal node
//! until a single root remains. This is generalized Huffman coding without
//! the dummy-leaf padding, so the last rounds may merge fewer than
//! [`FAN_OUT`] nodes and the resulting code is not guaranteed optimal.

use crate::core::alphabet::{FAN_OUT, PATH_ALPHABET};
use crate::core::node::WeightedNode;
use crate::core::priority::MinPriorityQueue;
use crate::encoding::PathTable;
use crate::{KevinError, Result};
use ahash::AHashSet;

/// A finished code tree.
#[derive(Debug, Clone)]
pub struct CodeTree {
    root: WeightedNode,
}

impl CodeTree {
    /// Build a tree with the default builder settings.
    pub fn from_frequencies(frequencies: impl IntoIterator<Item = (char, f64)>) -> Result<Self> {
        TreeBuilder::new().build(frequencies)
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &WeightedNode {
        &self.root
    }

    /// Number of distinct symbols in the tree.
    pub fn symbol_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Derive the symbol -> path table.
    pub fn path_table(&self) -> Result<PathTable> {
        PathTable::from_tree(&self.root)
    }

    /// Get statistics about the tree shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            depth: self.depth(),
            ..TreeStats::default()
        };

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                WeightedNode::Leaf { .. } => stats.symbols += 1,
                WeightedNode::Internal { children, .. } => {
                    stats.internal_nodes += 1;
                    if children.len() < FAN_OUT {
                        stats.partial_groups += 1;
                    }
                    stack.extend(children.iter());
                }
            }
        }

        stats
    }
}

/// Statistics about a code tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of leaves
    pub symbols: usize,
    /// Number of merged groups
    pub internal_nodes: usize,
    /// Internal nodes with fewer than `FAN_OUT` children
    pub partial_groups: usize,
    /// Longest root-to-leaf path
    pub depth: usize,
}

// Every child position needs its own path letter
const _: () = assert!(FAN_OUT >= 2 && FAN_OUT <= PATH_ALPHABET.len());

/// Builder for [`CodeTree`].
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    /// Arity of the priority queue used while merging
    heap_arity: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create a builder with a binary heap.
    pub fn new() -> Self {
        Self {
            heap_arity: MinPriorityQueue::<WeightedNode>::DEFAULT_ARITY,
        }
    }

    /// Set the arity of the internal priority queue.
    ///
    /// This only affects how ties between equal weights fall out, never
    /// which weights are merged together.
    pub fn heap_arity(mut self, arity: usize) -> Self {
        self.heap_arity = arity;
        self
    }

    /// Build the tree from `(symbol, weight)` pairs.
    ///
    /// The iteration order of `frequencies` is the initial heap order and
    /// therefore decides how ties between equal weights are broken.
    pub fn build(&self, frequencies: impl IntoIterator<Item = (char, f64)>) -> Result<CodeTree> {
        let mut seen = AHashSet::new();
        let mut leaves = Vec::new();
        for (symbol, weight) in frequencies {
            if !seen.insert(symbol) {
                return Err(KevinError::InvalidConfig(format!(
                    "Duplicate symbol {:?} in frequency table",
                    symbol
                )));
            }
            leaves.push(WeightedNode::leaf(symbol, weight)?);
        }

        if leaves.is_empty() {
            return Err(KevinError::InvalidConfig(
                "Frequency table is empty".to_string(),
            ));
        }

        let mut queue = MinPriorityQueue::with_items(leaves, self.heap_arity)?;

        while queue.len() > 1 {
            let mut children = Vec::with_capacity(FAN_OUT);
            while children.len() < FAN_OUT && !queue.is_empty() {
                children.push(queue.extract_min()?);
            }
            queue.insert(WeightedNode::internal(children));
        }

        let root = queue.extract_min()?;
        Ok(CodeTree { root })
    }
}
