use crate::consts::HOME_ROW;
use crate::layout::{KeyPosition, KeyboardLayout};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Ordered weakest-reach to strongest; the discriminant feeds the
/// press-cost formulas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Pinky = 0,
    Ring = 1,
    Middle = 2,
    Index = 3,
    Thumb = 4,
}

impl Finger {
    pub fn strength_index(self) -> f64 {
        self as u8 as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum ShiftState {
    NoShift,
    LeftShift,
    RightShift,
}

impl ShiftState {
    /// The shift key on the hand that is not busy pressing `target`.
    pub fn for_target(target: &EnhancedKeyPosition) -> ShiftState {
        match target.hand {
            Hand::Left => ShiftState::RightShift,
            Hand::Right => ShiftState::LeftShift,
        }
    }

    /// The shift key that leaves free the hand typing `next`, the key
    /// pressed after `target`. Without a next key, the hand not busy
    /// pressing `target` holds shift.
    pub fn for_sequence(
        target: &EnhancedKeyPosition,
        next: Option<&EnhancedKeyPosition>,
    ) -> ShiftState {
        match next.map(|n| n.hand) {
            Some(Hand::Left) => ShiftState::RightShift,
            Some(Hand::Right) => ShiftState::LeftShift,
            None => ShiftState::for_target(target),
        }
    }

    pub fn hand(self) -> Option<Hand> {
        match self {
            ShiftState::NoShift => None,
            ShiftState::LeftShift => Some(Hand::Left),
            ShiftState::RightShift => Some(Hand::Right),
        }
    }

    pub fn is_shifted(self) -> bool {
        self != ShiftState::NoShift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancedKeyPosition {
    pub row: usize,
    pub col: usize,
    /// The character actually typed, which may be a shifted variant.
    pub key: char,
    pub hand: Hand,
    pub finger: Finger,
    /// 0.0 (resting) ..= 1.0 (full stretch)
    pub reach_difficulty: f64,
    pub is_home_row: bool,
    pub requires_shift: bool,
}

const BASE_REACH: f64 = 0.1;
const REACH_PER_UNIT: f64 = 0.3;
const OUTER_PINKY_REACH: f64 = 0.15;

/// Standard touch-typing assignment for a column of the staggered grid.
pub fn column_assignment(col: usize) -> (Hand, Finger) {
    match col {
        0 => (Hand::Left, Finger::Pinky),
        1 => (Hand::Left, Finger::Ring),
        2 => (Hand::Left, Finger::Middle),
        3 | 4 => (Hand::Left, Finger::Index),
        5 | 6 => (Hand::Right, Finger::Index),
        7 => (Hand::Right, Finger::Middle),
        8 => (Hand::Right, Finger::Ring),
        _ => (Hand::Right, Finger::Pinky),
    }
}

/// Distance from the finger's resting key, squashed into 0..=1.
pub fn reach_difficulty(row: usize, col: usize) -> f64 {
    let dy = row.abs_diff(HOME_ROW) as f64;
    // Index fingers stretch sideways for the two centre columns.
    let dx = if col == 4 || col == 5 { 1.0 } else { 0.0 };
    let outer = if col > 9 {
        OUTER_PINKY_REACH * (col - 9) as f64
    } else {
        0.0
    };
    (BASE_REACH + REACH_PER_UNIT * (dx * dx + dy * dy).sqrt() + outer).min(1.0)
}

/// Attaches hand, finger and reach information to layout positions.
#[derive(Debug, Clone)]
pub struct ErgonomicModel {
    layout: Arc<KeyboardLayout>,
}

impl ErgonomicModel {
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn enhance(&self, c: char) -> Option<EnhancedKeyPosition> {
        let pos = self.layout.position_of(c)?;
        Some(self.enhance_position(&pos, c))
    }

    pub fn enhance_position(&self, pos: &KeyPosition, typed: char) -> EnhancedKeyPosition {
        let (hand, finger) = column_assignment(pos.col);
        EnhancedKeyPosition {
            row: pos.row,
            col: pos.col,
            key: typed,
            hand,
            finger,
            reach_difficulty: reach_difficulty(pos.row, pos.col),
            is_home_row: pos.row == HOME_ROW,
            requires_shift: self.layout.requires_shift(typed),
        }
    }

    /// Which shift key a step towards `target` should hold.
    pub fn shift_for(&self, target: &EnhancedKeyPosition) -> ShiftState {
        self.shift_before(target, None)
    }

    /// Like [`shift_for`](Self::shift_for), but picks the side from the
    /// key typed after `target` when there is one.
    pub fn shift_before(
        &self,
        target: &EnhancedKeyPosition,
        next: Option<&EnhancedKeyPosition>,
    ) -> ShiftState {
        if target.requires_shift {
            ShiftState::for_sequence(target, next)
        } else {
            ShiftState::NoShift
        }
    }
}
