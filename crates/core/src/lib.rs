//! Kevinify-core - merge tree construction and path coding
//!
//! This crate builds a five-way weighted merge tree from a symbol frequency
//! table and uses it as a substitution code: every symbol is replaced by
//! the path from the root to its leaf, spelled with the letters `k e v i n`.
//!
//! # Features
//!
//! - Generic d-ary min priority queue over any `Ord` payload
//! - Greedy merge of up to five lightest nodes per round
//! - Case-preserving encoding with pass-through of unknown characters
//! - Tree-walking decoder that tolerates interleaved pass-through text
//!
//! # Example
//!
//! ```rust
//! use kevinify_core::{decode, encode, CodeTree};
//!
//! let tree = CodeTree::from_frequencies([
//!     ('a', 1.0),
//!     ('b', 2.0),
//!     ('c', 3.0),
//!     ('d', 4.0),
//!     ('e', 5.0),
//! ])?;
//! let table = tree.path_table()?;
//!
//! assert_eq!(encode("Abcde", &table), "Kevin");
//! assert_eq!(decode("kevin", tree.root())?, "abcde");
//! # Ok::<(), kevinify_core::KevinError>(())
//! ```

pub mod error;
pub use error::{KevinError, Result};

// Priority queue, nodes and tree building
pub mod core;
pub use core::{
    CodeTree, MinPriorityQueue, TreeBuilder, TreeStats, WeightedNode, FAN_OUT, PATH_ALPHABET,
};

// Path table and text codec
pub mod encoding;
pub use encoding::{decode, encode, PathTable};
