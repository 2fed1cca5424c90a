//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] keeps its entries in insertion order. That order is
//! the initial heap order when the tree is built, so it decides how ties
//! between equal weights are broken.

use ahash::AHashMap;
use kevinify_core::{KevinError, Result};

/// Options for counting symbol frequencies in a text sample.
#[derive(Debug, Clone)]
pub struct CountConfig {
    /// Fold every character to lower case before counting
    pub lowercase: bool,
    /// Count alphabetic characters only
    pub letters_only: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            letters_only: true,
        }
    }
}

/// Ordered mapping from symbol to non-negative weight.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Entries in insertion order
    entries: Vec<(char, f64)>,
    /// Symbol -> position in `entries`
    index: AHashMap<char, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Create a table from `(symbol, weight)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, f64)>) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, weight) in entries {
            table.insert(symbol, weight)?;
        }
        Ok(table)
    }

    /// Count symbol occurrences in `text`.
    ///
    /// Symbols are ordered by first occurrence. When folding case, characters
    /// whose lower-case form is more than one character are skipped, since
    /// the encoder never maps them to a table symbol.
    pub fn from_text(text: &str, config: &CountConfig) -> Self {
        let mut table = Self::new();
        for c in text.chars() {
            if config.letters_only && !c.is_alphabetic() {
                continue;
            }
            let symbol = if config.lowercase {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => l,
                    _ => continue,
                }
            } else {
                c
            };
            table.bump(symbol, 1.0);
        }
        table
    }

    /// Add a new symbol.
    ///
    /// Fails with [`KevinError::InvalidConfig`] if the symbol is already
    /// present or the weight is negative or not finite.
    pub fn insert(&mut self, symbol: char, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(KevinError::InvalidConfig(format!(
                "Weight for {:?} must be a finite non-negative number, got {}",
                symbol, weight
            )));
        }
        if self.index.contains_key(&symbol) {
            return Err(KevinError::InvalidConfig(format!(
                "Duplicate symbol {:?} in frequency table",
                symbol
            )));
        }

        self.index.insert(symbol, self.entries.len());
        self.entries.push((symbol, weight));
        Ok(())
    }

    fn bump(&mut self, symbol: char, amount: f64) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, amount));
            }
        }
    }

    /// Weight of `symbol`.
    #[inline]
    pub fn get(&self, symbol: char) -> Option<f64> {
        self.index.get(&symbol).map(|&pos| self.entries[pos].1)
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|&(_, weight)| weight).sum()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let table = FrequencyTable::from_entries([('z', 1.0), ('a', 2.0), ('m', 0.5)]).unwrap();
        let symbols: Vec<char> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(symbols, vec!['z', 'a', 'm']);
        assert_eq!(table.get('a'), Some(2.0));
        assert_eq!(table.get('b'), None);
        assert_eq!(table.total_weight(), 3.5);
    }

    #[test]
    fn test_insert_rejects_invalid() {
        let mut table = FrequencyTable::new();
        table.insert('a', 1.0).unwrap();

        assert!(matches!(
            table.insert('a', 2.0),
            Err(KevinError::InvalidConfig(_))
        ));
        assert!(table.insert('b', -0.5).is_err());
        assert!(table.insert('c', f64::NAN).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_text_defaults() {
        let table = FrequencyTable::from_text("Hello, World!", &CountConfig::default());
        let entries: Vec<(char, f64)> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                ('h', 1.0),
                ('e', 1.0),
                ('l', 3.0),
                ('o', 2.0),
                ('w', 1.0),
                ('r', 1.0),
                ('d', 1.0),
            ]
        );
    }

    #[test]
    fn test_from_text_keep_everything() {
        let config = CountConfig {
            lowercase: false,
            letters_only: false,
        };
        let table = FrequencyTable::from_text("Aa a", &config);
        assert_eq!(table.get('A'), Some(1.0));
        assert_eq!(table.get('a'), Some(2.0));
        assert_eq!(table.get(' '), Some(1.0));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_text_skips_multi_char_lowercase() {
        // 'İ' lower-cases to "i\u{307}"
        let table = FrequencyTable::from_text("İiÉ", &CountConfig::default());
        let entries: Vec<(char, f64)> = table.iter().collect();
        assert_eq!(entries, vec![('i', 1.0), ('é', 1.0)]);
        assert_eq!(table.get('\u{307}'), None);

        let config = CountConfig {
            lowercase: false,
            letters_only: true,
        };
        let table = FrequencyTable::from_text("İ", &config);
        assert_eq!(table.get('İ'), Some(1.0));
    }

    #[test]
    fn test_from_text_empty() {
        let table = FrequencyTable::from_text("123 !?", &CountConfig::default());
        assert!(table.is_empty());
    }
}
