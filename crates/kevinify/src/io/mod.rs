//! Serialization and deserialization of frequency and path tables.
//!
//! Frequency tables are stored as a JSON object mapping single characters
//! to weights, in the order the symbols should be fed to the tree builder.

pub mod format;
pub mod load;
pub mod save;

pub use format::SerializedPathTable;
pub use load::FrequencyLoader;
pub use save::TableSaver;
