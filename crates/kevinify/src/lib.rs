//! Kevinify - high-level API for the kevin path code
//!
//! This crate ties the core pieces (frequency table, merge tree, path table,
//! codec) together behind a single [`Kevinifier`] and adds loading and
//! saving of frequency and path tables.
//!
//! # Example
//!
//! ```rust
//! use kevinify::{FrequencyTable, Kevinifier};
//!
//! let freqs = FrequencyTable::from_entries([
//!     ('a', 1.0),
//!     ('b', 2.0),
//!     ('c', 3.0),
//!     ('d', 4.0),
//!     ('e', 5.0),
//! ])?;
//! let kevinifier = Kevinifier::builder().heap_arity(2).build(&freqs)?;
//!
//! assert_eq!(kevinifier.encode("A bad cab"), "K eki vke");
//! assert_eq!(kevinifier.decode("K eki vke")?, "a bad cab");
//! # Ok::<(), kevinify::KevinError>(())
//! ```

// Re-export core types
pub use kevinify_core::{
    CodeTree, KevinError, PathTable, Result, TreeStats, WeightedNode, FAN_OUT, PATH_ALPHABET,
};

// Frequency tables
pub mod frequency;
pub use frequency::{CountConfig, FrequencyTable};

// High-level API
pub mod kevinifier;
pub use kevinifier::{Kevinifier, KevinifierBuilder, KevinifierConfig};

// IO/Serialization
pub mod io;
pub use io::{FrequencyLoader, SerializedPathTable, TableSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
