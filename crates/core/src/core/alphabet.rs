//! The path alphabet shared by tree building, encoding and decoding.

/// Labels for child positions 0..5 of an internal node.
pub const PATH_ALPHABET: [char; 5] = ['k', 'e', 'v', 'i', 'n'];

/// Maximum number of nodes merged per round.
///
/// Must equal the alphabet length so every child position has a label.
pub const FAN_OUT: usize = PATH_ALPHABET.len();

/// Child position labelled by `c`, compared case-sensitively.
#[inline]
pub fn path_index(c: char) -> Option<usize> {
    PATH_ALPHABET.iter().position(|&label| label == c)
}

/// Label for child position `index`.
#[inline]
pub fn path_label(index: usize) -> Option<char> {
    PATH_ALPHABET.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_label_agree() {
        for (i, &c) in PATH_ALPHABET.iter().enumerate() {
            assert_eq!(path_index(c), Some(i));
            assert_eq!(path_label(i), Some(c));
        }
        assert_eq!(path_label(FAN_OUT), None);
        assert_eq!(path_index('K'), None);
        assert_eq!(path_index('x'), None);
    }
}
