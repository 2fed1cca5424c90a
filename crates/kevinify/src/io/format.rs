//! Format definitions for table serialization.
//!
//! `FrequencyTable` (de)serializes as a plain JSON object such as
//! `{"e": 12.7, "t": 9.1}`. Entry order is kept on both sides.

use crate::frequency::FrequencyTable;
use kevinify_core::{PathTable, PATH_ALPHABET};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (symbol, weight) in self.iter() {
            map.serialize_entry(&symbol.to_string(), &weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FrequencyTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FrequencyVisitor)
    }
}

struct FrequencyVisitor;

impl<'de> Visitor<'de> for FrequencyVisitor {
    type Value = FrequencyTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from single characters to non-negative weights")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut table = FrequencyTable::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((key, weight)) = map.next_entry::<String, f64>()? {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(de::Error::custom(format!(
                        "expected a single-character symbol, got {:?}",
                        key
                    )))
                }
            };
            table
                .insert(symbol, weight)
                .map_err(<A::Error as de::Error>::custom)?;
        }

        Ok(table)
    }
}

/// Path table in serialized form, for export and inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPathTable {
    /// Format version
    pub version: String,
    /// Path alphabet, in child-position order
    pub alphabet: String,
    /// Symbol -> path
    pub paths: BTreeMap<String, String>,
}

impl From<&PathTable> for SerializedPathTable {
    fn from(table: &PathTable) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            alphabet: PATH_ALPHABET.iter().collect(),
            paths: table
                .iter()
                .map(|(symbol, path)| (symbol.to_string(), path.to_string()))
                .collect(),
        }
    }
}
