//! Text encoding and decoding over a code tree.
//!
//! Encoding replaces every character whose lower-case form is in the
//! [`PathTable`] by its path, upper-casing the path when the character is
//! upper-case. Decoding walks the tree from the root, emitting the leaf
//! symbol and returning to the root each time a leaf is reached. Characters
//! outside the table (encode) or the path alphabet (decode) pass through
//! untouched and never disturb a path in progress.

use crate::core::alphabet::path_index;
use crate::core::node::WeightedNode;
use crate::encoding::PathTable;
use crate::{KevinError, Result};

/// Single-character lower-case form of `c`.
///
/// Characters whose lower-case form expands to several characters have no
/// single-character form and are treated as unknown.
#[inline]
fn fold_case(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// Encode `message` with `table`.
pub fn encode(message: &str, table: &PathTable) -> String {
    let mut out = String::with_capacity(message.len() * 2);

    for c in message.chars() {
        match fold_case(c).and_then(|lower| table.get(lower)) {
            Some(path) if c.is_uppercase() => out.push_str(&path.to_uppercase()),
            Some(path) => out.push_str(path),
            None => out.push(c),
        }
    }

    out
}

/// Decode `code` by walking the tree rooted at `root`.
///
/// Decoded symbols are emitted exactly as stored in the leaves; only
/// pass-through characters keep their original case.
///
/// Fails with [`KevinError::MalformedCode`] if a path letter selects a
/// child that does not exist, or if the input ends part-way down a path.
pub fn decode(code: &str, root: &WeightedNode) -> Result<String> {
    let mut out = String::with_capacity(code.len());
    let mut cursor = root;
    let mut path_start = 0;

    for (position, c) in code.chars().enumerate() {
        let Some(index) = fold_case(c).and_then(path_index) else {
            out.push(c);
            continue;
        };

        if std::ptr::eq(cursor, root) {
            path_start = position;
        }

        let child = cursor
            .children()
            .get(index)
            .ok_or_else(|| KevinError::MalformedCode {
                position,
                reason: format!(
                    "{:?} selects child {} of a node with {} children",
                    c,
                    index,
                    cursor.children().len()
                ),
            })?;

        match child {
            WeightedNode::Leaf { symbol, .. } => {
                out.push(*symbol);
                cursor = root;
            }
            WeightedNode::Internal { .. } => cursor = child,
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(KevinError::MalformedCode {
            position: path_start,
            reason: "input ends in the middle of a path".to_string(),
        });
    }

    Ok(out)
}
