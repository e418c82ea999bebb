use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

/// A key's coordinates on the row-staggered grid. `key` is always the
/// unshifted character printed on the keycap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPosition {
    pub row: usize,
    pub col: usize,
    pub key: char,
}

impl KeyPosition {
    pub fn same_cell(&self, other: &KeyPosition) -> bool {
        self.row == other.row && self.col == other.col
    }

    pub fn manhattan(&self, other: &KeyPosition) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Qwerty,
    Dvorak,
}

impl LayoutKind {
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            Self::Qwerty => &["1234567890-=", "qwertyuiop[]", "asdfghjkl;'", "zxcvbnm,./"],
            Self::Dvorak => &["1234567890[]", "',.pyfgcrl/=", "aoeuidhtns-", ";qjkxbmwvz"],
        }
    }
}

/// Shifted glyph -> the key that produces it on a US keyboard.
const SHIFT_PAIRS: &[(char, char)] = &[
    ('!', '1'),
    ('@', '2'),
    ('#', '3'),
    ('$', '4'),
    ('%', '5'),
    ('^', '6'),
    ('&', '7'),
    ('*', '8'),
    ('(', '9'),
    (')', '0'),
    ('_', '-'),
    ('+', '='),
    ('{', '['),
    ('}', ']'),
    (':', ';'),
    ('"', '\''),
    ('<', ','),
    ('>', '.'),
    ('?', '/'),
];

#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    kind: LayoutKind,
    grid: Vec<Vec<char>>,
    positions: HashMap<char, KeyPosition>,
    shifted_to_base: HashMap<char, char>,
    base_to_shifted: HashMap<char, char>,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::new(LayoutKind::Qwerty)
    }
}

impl KeyboardLayout {
    pub fn new(kind: LayoutKind) -> Self {
        let grid: Vec<Vec<char>> = kind.rows().iter().map(|r| r.chars().collect()).collect();

        let mut positions = HashMap::new();
        for (row, keys) in grid.iter().enumerate() {
            for (col, &key) in keys.iter().enumerate() {
                positions.insert(key, KeyPosition { row, col, key });
            }
        }

        let shifted_to_base: HashMap<char, char> = SHIFT_PAIRS.iter().copied().collect();
        let base_to_shifted = SHIFT_PAIRS.iter().map(|&(s, b)| (b, s)).collect();

        Self {
            kind,
            grid,
            positions,
            shifted_to_base,
            base_to_shifted,
        }
    }

    pub fn qwerty() -> Self {
        Self::new(LayoutKind::Qwerty)
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    pub fn row(&self, row: usize) -> &[char] {
        self.grid.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every unshifted key, row by row.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flat_map(|r| r.iter().copied())
    }

    pub fn key_at(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row)?.get(col).copied()
    }

    /// Resolves a typed character to its physical key. Uppercase letters
    /// and US shifted symbols resolve to the key that produces them.
    pub fn position_of(&self, c: char) -> Option<KeyPosition> {
        let base = self
            .shifted_to_base
            .get(&c)
            .copied()
            .unwrap_or_else(|| c.to_ascii_lowercase());
        self.positions.get(&base).copied()
    }

    pub fn base_key(&self, c: char) -> Option<char> {
        self.position_of(c).map(|p| p.key)
    }

    pub fn requires_shift(&self, c: char) -> bool {
        c.is_ascii_uppercase() || self.shifted_to_base.contains_key(&c)
    }

    /// The character the same key produces with the opposite shift state.
    /// Characters without a counterpart are returned unchanged.
    pub fn opposite_shift(&self, c: char) -> char {
        if c.is_ascii_alphabetic() {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        } else if let Some(&base) = self.shifted_to_base.get(&c) {
            base
        } else if let Some(&shifted) = self.base_to_shifted.get(&c) {
            shifted
        } else {
            c
        }
    }

    /// Maps every character onto its unshifted key, dropping what the
    /// layout cannot type.
    pub fn simplify(&self, password: &str) -> String {
        password.chars().filter_map(|c| self.base_key(c)).collect()
    }

    /// Horizontal neighbour, wrapping around the ends of the row.
    pub fn neighbor_in_row(&self, c: char, rightwards: bool) -> Option<char> {
        let pos = self.position_of(c)?;
        let row = self.row(pos.row);
        let len = row.len();
        let col = if rightwards {
            (pos.col + 1) % len
        } else {
            (pos.col + len - 1) % len
        };
        row.get(col).copied()
    }

    /// Vertical neighbour. Rows too short to hold the column are skipped,
    /// wrapping cyclically past the top and bottom.
    pub fn neighbor_in_column(&self, c: char, downwards: bool) -> Option<char> {
        let pos = self.position_of(c)?;
        let n = self.grid.len();
        (1..=n)
            .map(|step| {
                if downwards {
                    (pos.row + step) % n
                } else {
                    (pos.row + n - step % n) % n
                }
            })
            .find_map(|r| self.key_at(r, pos.col))
    }
}
