//! Load functionality for frequency tables.

use crate::frequency::{CountConfig, FrequencyTable};
use kevinify_core::{KevinError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Frequency table loader.
pub struct FrequencyLoader;

impl FrequencyLoader {
    /// Load a frequency table from a JSON file.
    ///
    /// The file must contain a single JSON object mapping one-character
    /// strings to non-negative numbers.
    pub fn load(path: &Path) -> Result<FrequencyTable> {
        let file = File::open(path).map_err(|err| KevinError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            KevinError::Load(format!(
                "Failed to parse frequency table {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a frequency table from a JSON string.
    pub fn from_json(json: &str) -> Result<FrequencyTable> {
        serde_json::from_str(json)
            .map_err(|e| KevinError::Load(format!("Failed to parse frequency table: {}", e)))
    }

    /// Count symbol frequencies in a text file.
    pub fn count_file(path: &Path, config: &CountConfig) -> Result<FrequencyTable> {
        let text = std::fs::read_to_string(path).map_err(|err| KevinError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Ok(FrequencyTable::from_text(&text, config))
    }
}
