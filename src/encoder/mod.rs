pub mod backref;
pub mod fold;
pub mod glyph;
pub mod period;

pub use glyph::Glyph;

use crate::consts::DEFAULT_BACK_REFERENCE_WINDOW;
use crate::error::{KeyWalkError, KwResult};
use crate::layout::KeyboardLayout;
use crate::path::{Direction, PathStep};
use crate::similarity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Layout-independent glyph string describing the shape of a walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(glyphs: impl Into<String>) -> Self {
        Self(glyphs.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn glyph_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn similarity(&self, other: &Fingerprint) -> f64 {
        similarity::similarity(&self.0, &other.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub back_references: bool,
    pub window: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            back_references: false,
            window: DEFAULT_BACK_REFERENCE_WINDOW,
        }
    }
}

/// Every intermediate product of one encoding, for tracing.
#[derive(Debug, Clone)]
pub struct EncodedPath {
    /// Steps after folding and redundancy removal.
    pub steps: Vec<PathStep>,
    /// Glyphs before period reduction.
    pub glyphs: String,
    pub fingerprint: Fingerprint,
    pub redundant_moves: u64,
}

#[derive(Debug, Clone)]
pub struct PathEncoder {
    layout: Arc<KeyboardLayout>,
    options: EncodeOptions,
}

impl PathEncoder {
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        Self::with_options(layout, EncodeOptions::default())
    }

    pub fn with_options(layout: Arc<KeyboardLayout>, options: EncodeOptions) -> Self {
        Self { layout, options }
    }

    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn encode(&self, steps: &[PathStep]) -> Fingerprint {
        self.encode_with_trace(steps).fingerprint
    }

    pub fn encode_with_trace(&self, steps: &[PathStep]) -> EncodedPath {
        let folded = fold::fold_runs(steps);
        // Cancellation can expose new runs, so fold once more.
        let cleaned = fold::fold_runs(&fold::eliminate_redundant_moves(folded));
        let redundant_moves = fold::redundant_move_total(&cleaned);

        let glyphs = glyph::map_glyphs(&cleaned);
        let unit = period::smallest_repeating_unit(&glyphs);
        let symbols: Vec<char> = unit.iter().map(|g| g.symbol()).collect();

        let fingerprint = if self.options.back_references {
            backref::compress(&symbols, self.options.window)
        } else {
            symbols.into_iter().collect()
        };

        EncodedPath {
            steps: cleaned,
            glyphs: glyph::glyph_string(&glyphs),
            fingerprint: Fingerprint(fingerprint),
            redundant_moves,
        }
    }

    /// Expands back-references and validates every glyph.
    pub fn parse(&self, fingerprint: &str) -> KwResult<Vec<Glyph>> {
        backref::expand(fingerprint)?
            .into_iter()
            .enumerate()
            .map(|(position, c)| {
                Glyph::from_symbol(c).ok_or(KeyWalkError::MalformedFingerprint { glyph: c, position })
            })
            .collect()
    }

    /// Regenerates a password of `target_len` characters (including
    /// `start`) by walking the glyphs cyclically from `start`.
    pub fn decode(&self, fingerprint: &str, start: char, target_len: usize) -> KwResult<String> {
        let glyphs = self.parse(fingerprint)?;
        Ok(self.replay(&glyphs, start, target_len))
    }

    /// Empty when `start` is off the layout or the glyphs never type.
    pub fn replay(&self, glyphs: &[Glyph], start: char, target_len: usize) -> String {
        if target_len == 0 {
            return String::new();
        }
        let Some(mut current) = self.layout.base_key(start) else {
            debug!(?start, "Start character is not on the layout");
            return String::new();
        };

        let mut out = String::new();
        out.push(start);
        let mut produced = 1;
        if produced >= target_len {
            return out;
        }
        if !glyphs.iter().any(|g| g.is_take()) {
            return String::new();
        }

        for glyph in glyphs.iter().cycle() {
            if let Some(direction) = glyph.movement() {
                match self.neighbor(current, direction) {
                    Some(next) => current = next,
                    None => return String::new(),
                }
            }
            if glyph.is_take() {
                let typed = if glyph.is_shifted() {
                    self.layout.opposite_shift(current)
                } else {
                    current
                };
                out.push(typed);
                produced += 1;
                if produced >= target_len {
                    break;
                }
            }
        }
        out
    }

    fn neighbor(&self, key: char, direction: Direction) -> Option<char> {
        match direction {
            Direction::Up => self.layout.neighbor_in_column(key, false),
            Direction::Down => self.layout.neighbor_in_column(key, true),
            Direction::Left => self.layout.neighbor_in_row(key, false),
            Direction::Right => self.layout.neighbor_in_row(key, true),
            _ => Some(key),
        }
    }
}
