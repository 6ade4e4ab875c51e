//! Keyboard layout geometry for typo-aware substitution costs.
//!
//! Each lowercase letter is placed on a `(column, row)` grid following the
//! three letter rows of a QWERTY keyboard. The distance between two keys is
//! the Euclidean distance between their grid positions, so horizontally or
//! vertically adjacent keys cost 1.0 and diagonal neighbours about 1.41.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Cost used when either character has no position on the layout.
pub const UNKNOWN_KEY_PENALTY: f64 = 2.0;

/// Letter rows of the QWERTY layout, top to bottom.
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

lazy_static! {
    static ref QWERTY: KeyLayout = KeyLayout::from_rows(&QWERTY_ROWS);
}

/// Immutable mapping from a key character to its grid position.
#[derive(Debug, Clone)]
pub struct KeyLayout {
    positions: HashMap<char, (i32, i32)>,
}

impl KeyLayout {
    /// Build a layout where `rows[y]` holds the keys of row `y` from left to right.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut positions = HashMap::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                positions.insert(ch, (x as i32, y as i32));
            }
        }
        KeyLayout { positions }
    }

    /// The shared QWERTY layout.
    pub fn qwerty() -> &'static KeyLayout {
        &QWERTY
    }

    /// Grid position of a key, if it is on the layout.
    pub fn position(&self, ch: char) -> Option<(i32, i32)> {
        self.positions.get(&ch).copied()
    }

    /// Check whether a character has a key on this layout.
    pub fn contains(&self, ch: char) -> bool {
        self.positions.contains_key(&ch)
    }

    /// Number of keys on the layout.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout has no keys.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Substitution cost between two keys.
    ///
    /// Returns [`UNKNOWN_KEY_PENALTY`] when either character is off the layout,
    /// otherwise the Euclidean distance between the two grid positions. Equal
    /// characters are not special-cased here; callers short-circuit them.
    pub fn key_distance(&self, c1: char, c2: char) -> f64 {
        match (self.position(c1), self.position(c2)) {
            (Some((x1, y1)), Some((x2, y2))) => {
                let dx = (x1 - x2) as f64;
                let dy = (y1 - y2) as f64;
                (dx * dx + dy * dy).sqrt()
            }
            _ => UNKNOWN_KEY_PENALTY,
        }
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::qwerty().clone()
    }
}

/// Substitution cost between two keys on the QWERTY layout.
pub fn key_distance(c1: char, c2: char) -> f64 {
    KeyLayout::qwerty().key_distance(c1, c2)
}
