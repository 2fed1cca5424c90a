//! Main kevinifier implementation.
//!
//! This module provides the high-level `Kevinifier` struct that owns a
//! built code tree together with its path table.

use crate::frequency::FrequencyTable;
use crate::io::FrequencyLoader;
use kevinify_core::{
    decode, encode, CodeTree, MinPriorityQueue, PathTable, Result, TreeBuilder, WeightedNode,
};
use std::fmt::Write as _;
use std::path::Path;

/// Configuration for building a kevinifier.
#[derive(Debug, Clone)]
pub struct KevinifierConfig {
    /// Arity of the priority queue used while building the tree
    pub heap_arity: usize,
}

impl Default for KevinifierConfig {
    fn default() -> Self {
        Self {
            heap_arity: MinPriorityQueue::<WeightedNode>::DEFAULT_ARITY,
        }
    }
}

/// Builder for creating a kevinifier.
#[derive(Clone, Default)]
pub struct KevinifierBuilder {
    config: KevinifierConfig,
}

impl KevinifierBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arity of the priority queue.
    pub fn heap_arity(mut self, arity: usize) -> Self {
        self.config.heap_arity = arity;
        self
    }

    /// Build the kevinifier from a frequency table.
    pub fn build(self, frequencies: &FrequencyTable) -> Result<Kevinifier> {
        Kevinifier::new(frequencies, self.config)
    }
}

/// Encoder/decoder for one frequency table.
///
/// The tree and table are immutable once built, so a `Kevinifier` can be
/// shared between threads for concurrent encoding and decoding.
#[derive(Debug, Clone)]
pub struct Kevinifier {
    /// The code tree, used for decoding
    tree: CodeTree,
    /// Symbol -> path, used for encoding
    table: PathTable,
    /// Frequencies the tree was built from
    frequencies: FrequencyTable,
    /// Configuration
    config: KevinifierConfig,
}

impl Kevinifier {
    /// Build a kevinifier with the given configuration.
    pub fn new(frequencies: &FrequencyTable, config: KevinifierConfig) -> Result<Self> {
        let tree = TreeBuilder::new()
            .heap_arity(config.heap_arity)
            .build(frequencies.iter())?;
        let table = tree.path_table()?;

        Ok(Self {
            tree,
            table,
            frequencies: frequencies.clone(),
            config,
        })
    }

    /// Create a kevinifier builder.
    pub fn builder() -> KevinifierBuilder {
        KevinifierBuilder::new()
    }

    /// Load a frequency table from a JSON file and build with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let frequencies = FrequencyLoader::load(path)?;
        Self::new(&frequencies, KevinifierConfig::default())
    }

    /// Encode text.
    pub fn encode(&self, message: &str) -> String {
        encode(message, &self.table)
    }

    /// Decode text produced by [`encode`](Self::encode).
    pub fn decode(&self, code: &str) -> Result<String> {
        decode(code, self.tree.root())
    }

    /// Get the code tree.
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }

    /// Get the path table.
    pub fn table(&self) -> &PathTable {
        &self.table
    }

    /// Get the frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Get the configuration.
    pub fn config(&self) -> &KevinifierConfig {
        &self.config
    }

    /// Get the number of encodable symbols.
    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }

    /// Render the tree as an indented outline, one node per line.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        render_node(&mut out, self.tree.root(), None, 0);
        out
    }
}

fn render_node(out: &mut String, node: &WeightedNode, label: Option<char>, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = label.map_or_else(|| "root".to_string(), |c| c.to_string());

    // Writing into a String cannot fail
    let _ = match node {
        WeightedNode::Leaf { symbol, weight } => {
            writeln!(out, "{}{} -> {:?} [weight: {}]", indent, label, symbol, weight)
        }
        WeightedNode::Internal { weight, .. } => {
            writeln!(out, "{}{} -> node [weight: {}]", indent, label, weight)
        }
    };

    for (child, &c) in node.children().iter().zip(kevinify_core::PATH_ALPHABET.iter()) {
        render_node(out, child, Some(c), depth + 1);
    }
}
