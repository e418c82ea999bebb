pub mod finder;

pub use finder::PathFinder;

use crate::consts::{META_REPEAT_COUNT, META_SHIFT_SIDE};
use crate::ergonomics::Hand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Press,
    Release,
    ShiftDown,
    ShiftUp,
}

impl Direction {
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Down | Direction::Left | Direction::Right
        )
    }

    /// The movement that undoes this one.
    pub fn opposite(self) -> Option<Direction> {
        match self {
            Direction::Up => Some(Direction::Down),
            Direction::Down => Some(Direction::Up),
            Direction::Left => Some(Direction::Right),
            Direction::Right => Some(Direction::Left),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Count(u64),
    Number(f64),
    Text(String),
}

impl MetaValue {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetaValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetaValue::Number(x) => Some(*x),
            MetaValue::Count(n) => Some(*n as f64),
            MetaValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Count(n) => write!(f, "{}", n),
            MetaValue::Number(x) => write!(f, "{:.3}", x),
            MetaValue::Text(s) => f.write_str(s),
        }
    }
}

/// One atomic action of a keyboard walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub key: Option<char>,
    pub direction: Direction,
    pub is_press: bool,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetaValue>,
}

impl PathStep {
    pub fn new(direction: Direction, key: Option<char>, is_press: bool) -> Self {
        Self {
            key,
            direction,
            is_press,
            cost: 0.0,
            metadata: BTreeMap::new(),
        }
    }

    pub fn movement(direction: Direction) -> Self {
        Self::new(direction, None, false)
    }

    pub fn press(key: char) -> Self {
        Self::new(Direction::Press, Some(key), true)
    }

    pub fn release(key: char) -> Self {
        Self::new(Direction::Release, Some(key), false)
    }

    pub fn shift_down(side: Hand) -> Self {
        let mut step = Self::new(Direction::ShiftDown, None, true);
        step.set_meta(META_SHIFT_SIDE, MetaValue::Text(side.to_string()));
        step
    }

    pub fn shift_up(side: Hand) -> Self {
        let mut step = Self::new(Direction::ShiftUp, None, false);
        step.set_meta(META_SHIFT_SIDE, MetaValue::Text(side.to_string()));
        step
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn is_movement(&self) -> bool {
        self.direction.is_movement()
    }

    /// A movement that is not also a keypress.
    pub fn is_pure_movement(&self) -> bool {
        self.direction.is_movement() && !self.is_press
    }

    /// Same (direction, press) pair; runs of these fold together.
    pub fn same_action(&self, other: &PathStep) -> bool {
        self.direction == other.direction && self.is_press == other.is_press
    }

    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }

    pub fn set_meta(&mut self, key: &str, value: MetaValue) {
        self.metadata.insert(key.to_string(), value);
    }

    pub fn counter(&self, key: &str) -> u64 {
        self.meta(key).and_then(MetaValue::as_count).unwrap_or(0)
    }

    pub fn bump_counter(&mut self, key: &str, by: u64) {
        if by == 0 {
            return;
        }
        let next = self.counter(key) + by;
        self.set_meta(key, MetaValue::Count(next));
    }

    /// How many identical actions this step stands for.
    pub fn repeat_count(&self) -> u64 {
        self.counter(META_REPEAT_COUNT).max(1)
    }

    pub fn set_repeat_count(&mut self, count: u64) {
        if count <= 1 {
            self.metadata.remove(META_REPEAT_COUNT);
        } else {
            self.set_meta(META_REPEAT_COUNT, MetaValue::Count(count));
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction)?;
        if let Some(key) = self.key {
            write!(f, " '{}'", key)?;
        }
        let repeats = self.repeat_count();
        if repeats > 1 {
            write!(f, " x{}", repeats)?;
        }
        if self.cost > 0.0 {
            write!(f, " (cost {:.3})", self.cost)?;
        }
        Ok(())
    }
}
