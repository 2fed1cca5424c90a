//! Save functionality for frequency and path tables.

use super::format::SerializedPathTable;
use crate::frequency::FrequencyTable;
use kevinify_core::{KevinError, PathTable, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Table saver - writes tables as pretty-printed JSON.
pub struct TableSaver;

impl TableSaver {
    /// Save a frequency table to `path`, creating parent directories.
    pub fn save_frequencies(table: &FrequencyTable, path: &Path) -> Result<()> {
        let mut writer = Self::create(path)?;
        serde_json::to_writer_pretty(&mut writer, table).map_err(|e| {
            KevinError::Save(format!("Failed to serialize frequency table: {}", e))
        })?;
        Self::finish(writer, path)
    }

    /// Save a path table to `path`, creating parent directories.
    pub fn save_paths(table: &PathTable, path: &Path) -> Result<()> {
        let mut writer = Self::create(path)?;
        serde_json::to_writer_pretty(&mut writer, &Self::serialize_paths(table))
            .map_err(|e| KevinError::Save(format!("Failed to serialize path table: {}", e)))?;
        Self::finish(writer, path)
    }

    /// Serialize a path table to its export structure.
    pub fn serialize_paths(table: &PathTable) -> SerializedPathTable {
        SerializedPathTable::from(table)
    }

    fn create(path: &Path) -> Result<BufWriter<File>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                KevinError::Save(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(path).map_err(|err| KevinError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Ok(BufWriter::new(file))
    }

    /// Flush buffered output so late write errors are returned.
    fn finish<W: Write>(mut writer: W, path: &Path) -> Result<()> {
        writer.flush().map_err(|e| {
            KevinError::Save(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
