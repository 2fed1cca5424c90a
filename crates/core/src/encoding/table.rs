//! Symbol -> path lookup table.

use crate::core::alphabet::path_label;
use crate::core::node::WeightedNode;
use crate::{KevinError, Result};
use ahash::AHashMap;

/// Mapping from each leaf symbol to its path string.
///
/// A path is the sequence of alphabet labels of the child positions taken
/// from the root down to the leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    paths: AHashMap<char, String>,
}

impl PathTable {
    /// Derive the table from a code tree.
    ///
    /// A root that is itself a leaf maps its symbol to the empty path.
    /// Fails with [`KevinError::InvalidConfig`] if any node has more
    /// children than the path alphabet has labels.
    pub fn from_tree(root: &WeightedNode) -> Result<Self> {
        let mut table = Self {
            paths: AHashMap::with_capacity(root.leaf_count()),
        };
        let mut path = String::new();
        table.collect(root, &mut path)?;
        Ok(table)
    }

    fn collect(&mut self, node: &WeightedNode, path: &mut String) -> Result<()> {
        match node {
            WeightedNode::Leaf { symbol, .. } => {
                self.paths.insert(*symbol, path.clone());
            }
            WeightedNode::Internal { children, .. } => {
                for (i, child) in children.iter().enumerate() {
                    let label = path_label(i).ok_or_else(|| {
                        KevinError::InvalidConfig(format!(
                            "Node has {} children but the path alphabet only labels {}",
                            children.len(),
                            i
                        ))
                    })?;
                    path.push(label);
                    self.collect(child, path)?;
                    path.pop();
                }
            }
        }
        Ok(())
    }

    /// Path for `symbol`, compared case-sensitively.
    #[inline]
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.paths.get(&symbol).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.paths.contains_key(&symbol)
    }

    /// Number of symbols in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over `(symbol, path)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.paths.iter().map(|(&symbol, path)| (symbol, path.as_str()))
    }

    /// Entries ordered by path length, then path, for display.
    pub fn sorted_entries(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(b.1)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodeTree;

    #[test]
    fn test_single_round_paths() {
        let tree =
            CodeTree::from_frequencies([('a', 1.0), ('b', 2.0), ('c', 3.0), ('d', 4.0), ('e', 5.0)])
                .unwrap();
        let table = tree.path_table().unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table.get('a'), Some("k"));
        assert_eq!(table.get('b'), Some("e"));
        assert_eq!(table.get('c'), Some("v"));
        assert_eq!(table.get('d'), Some("i"));
        assert_eq!(table.get('e'), Some("n"));
        assert_eq!(table.get('f'), None);
    }

    #[test]
    fn test_two_round_paths() {
        let tree = CodeTree::from_frequencies([
            ('a', 1.0),
            ('b', 2.0),
            ('c', 3.0),
            ('d', 4.0),
            ('e', 5.0),
            ('f', 6.0),
        ])
        .unwrap();
        let table = tree.path_table().unwrap();

        assert_eq!(table.get('f'), Some("k"));
        assert_eq!(table.get('a'), Some("ek"));
        assert_eq!(table.get('b'), Some("ee"));
        assert_eq!(table.get('c'), Some("ev"));
        assert_eq!(table.get('d'), Some("ei"));
        assert_eq!(table.get('e'), Some("en"));

        let sorted: Vec<char> = table.sorted_entries().into_iter().map(|(c, _)| c).collect();
        assert_eq!(sorted[0], 'f');
    }

    #[test]
    fn test_leaf_root_gets_empty_path() {
        let tree = CodeTree::from_frequencies([('q', 1.0)]).unwrap();
        let table = tree.path_table().unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get('q'), Some(""));
    }

    #[test]
    fn test_too_many_children() {
        let children = ('a'..='f')
            .map(|c| WeightedNode::leaf(c, 1.0).unwrap())
            .collect();
        let root = WeightedNode::internal(children);

        assert!(matches!(
            PathTable::from_tree(&root),
            Err(KevinError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_keys_match_leaves() {
        let freqs: Vec<(char, f64)> = ('a'..='z').zip(1..).map(|(c, w)| (c, w as f64)).collect();
        let tree = CodeTree::from_frequencies(freqs).unwrap();
        let table = tree.path_table().unwrap();

        assert_eq!(table.len(), 26);
        assert!(('a'..='z').all(|c| table.contains(c)));
        assert!(table.iter().all(|(_, path)| !path.is_empty()));
    }
}
