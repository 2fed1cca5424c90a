//! Path table derivation and the text codec.
//!
//! Encoding substitutes each known symbol by its path through the code
//! tree; decoding walks the tree one path letter at a time.

pub mod codec;
pub mod table;

pub use codec::{decode, encode};
pub use table::PathTable;
