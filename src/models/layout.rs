//! Key layout definitions for the pinpad grid.

use crate::constants::{NUM_COLS, NUM_KEYS, NUM_ROWS};
use crate::models::Key;

/// An ordered sequence of keys assigned to the pinpad grid, row-major over
/// 3 columns × 4 rows.
///
/// The layout is fixed at construction and never mutated. The custom grid
/// geometry only applies when [`KeyLayout::is_grid_complete`] holds (exactly
/// 12 keys); any other count falls back to the embedding container's default
/// sizing.
///
/// Arbitrary alphabets are supported via [`KeyLayout::new`]; callers must not
/// use the reserved sentinel symbols as literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    keys: Vec<Key>,
}

#[allow(dead_code)]
impl KeyLayout {
    /// Creates a layout from an ordered key sequence.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Creates the default telephone layout: digits 1-9 with letter
    /// sub-labels, then help, 0 and delete on the bottom row.
    #[must_use]
    pub fn telephone() -> Self {
        Self::new(vec![
            Key::new('1', ""),
            Key::new('2', "ABC"),
            Key::new('3', "DEF"),
            Key::new('4', "GHI"),
            Key::new('5', "JKL"),
            Key::new('6', "MNO"),
            Key::new('7', "PQRS"),
            Key::new('8', "TUV"),
            Key::new('9', "WXYZ"),
            Key::help(),
            Key::new('0', "+"),
            Key::delete(),
        ])
    }

    /// Gets the total number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the key count matches the 3×4 grid exactly.
    #[must_use]
    pub fn is_grid_complete(&self) -> bool {
        self.keys.len() == NUM_KEYS
    }

    /// Gets a key by its row-major index.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Gets the row-major index of the key carrying `symbol`, if present.
    #[must_use]
    pub fn position_of(&self, symbol: char) -> Option<usize> {
        self.keys.iter().position(|key| key.symbol == symbol)
    }

    /// Iterates over the keys in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Grid coordinates (column, row) for a row-major key index.
    #[must_use]
    pub fn grid_position(index: usize) -> (u16, u16) {
        let col = (index as u16) % NUM_COLS;
        let row = (index as u16) / NUM_COLS;
        (col, row)
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::telephone()
    }
}

impl<'a> IntoIterator for &'a KeyLayout {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KEY_DELETE, KEY_HELP};

    #[test]
    fn test_telephone_layout_is_grid_complete() {
        let layout = KeyLayout::telephone();
        assert_eq!(layout.key_count(), NUM_KEYS);
        assert!(layout.is_grid_complete());
    }

    #[test]
    fn test_telephone_layout_order() {
        let layout = KeyLayout::telephone();
        let symbols: String = layout.iter().map(|k| k.symbol).collect();
        let expected: String = ['1', '2', '3', '4', '5', '6', '7', '8', '9', KEY_HELP, '0', KEY_DELETE]
            .iter()
            .collect();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn test_telephone_sub_labels() {
        let layout = KeyLayout::telephone();
        assert_eq!(layout.key_at(1).unwrap().sub_label, "ABC");
        assert_eq!(layout.key_at(8).unwrap().sub_label, "WXYZ");
        assert_eq!(layout.key_at(10).unwrap().sub_label, "+");
    }

    #[test]
    fn test_position_of() {
        let layout = KeyLayout::telephone();
        assert_eq!(layout.position_of('1'), Some(0));
        assert_eq!(layout.position_of('0'), Some(10));
        assert_eq!(layout.position_of(KEY_DELETE), Some(11));
        assert_eq!(layout.position_of(KEY_HELP), Some(9));
        assert_eq!(layout.position_of('x'), None);
    }

    #[test]
    fn test_grid_position_row_major() {
        assert_eq!(KeyLayout::grid_position(0), (0, 0));
        assert_eq!(KeyLayout::grid_position(2), (2, 0));
        assert_eq!(KeyLayout::grid_position(3), (0, 1));
        assert_eq!(KeyLayout::grid_position(11), (2, 3));
    }

    #[test]
    fn test_incomplete_layout() {
        let layout = KeyLayout::new(vec![Key::plain('1'), Key::plain('2')]);
        assert!(!layout.is_grid_complete());
    }
}
