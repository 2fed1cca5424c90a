//! Weighted tree nodes.
//!
//! Nodes are ordered by weight alone so they can be fed straight into a
//! [`MinPriorityQueue`](crate::core::MinPriorityQueue). Two nodes of equal
//! weight compare equal regardless of their symbols or children.

use crate::{KevinError, Result};
use std::cmp::Ordering;

/// A node of the code tree.
#[derive(Debug, Clone)]
pub enum WeightedNode {
    /// A source symbol and its frequency
    Leaf { symbol: char, weight: f64 },
    /// A merged group; children are kept in extraction order
    Internal {
        weight: f64,
        children: Vec<WeightedNode>,
    },
}

impl WeightedNode {
    /// Create a leaf node.
    ///
    /// Fails with [`KevinError::InvalidConfig`] if `weight` is negative,
    /// NaN or infinite.
    pub fn leaf(symbol: char, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(KevinError::InvalidConfig(format!(
                "Weight for {:?} must be a finite non-negative number, got {}",
                symbol, weight
            )));
        }

        // -0.0 would otherwise sort below 0.0 under total_cmp
        Ok(WeightedNode::Leaf {
            symbol,
            weight: weight.abs(),
        })
    }

    /// Create an internal node over `children`, weighted by their sum.
    pub fn internal(children: Vec<WeightedNode>) -> Self {
        let weight = children
            .iter()
            .fold(0.0, |total, child| total + child.weight());
        WeightedNode::Internal { weight, children }
    }

    /// Weight of this node.
    #[inline]
    pub fn weight(&self) -> f64 {
        match self {
            WeightedNode::Leaf { weight, .. } | WeightedNode::Internal { weight, .. } => *weight,
        }
    }

    /// Symbol stored at a leaf, `None` for internal nodes.
    #[inline]
    pub fn symbol(&self) -> Option<char> {
        match self {
            WeightedNode::Leaf { symbol, .. } => Some(*symbol),
            WeightedNode::Internal { .. } => None,
        }
    }

    /// Children in attachment order; empty for leaves.
    #[inline]
    pub fn children(&self) -> &[WeightedNode] {
        match self {
            WeightedNode::Leaf { .. } => &[],
            WeightedNode::Internal { children, .. } => children,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, WeightedNode::Leaf { .. })
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            WeightedNode::Leaf { .. } => 1,
            WeightedNode::Internal { children, .. } => {
                children.iter().map(WeightedNode::leaf_count).sum()
            }
        }
    }
}

impl PartialEq for WeightedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedNode {}

impl PartialOrd for WeightedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated finite at the leaves, so total_cmp agrees
        // with the numeric order
        self.weight().total_cmp(&other.weight())
    }
}
