#![allow(dead_code)]

use keywalk::cost::StrategyKind;
use keywalk::ergonomics::Hand;
use keywalk::path::{Direction, PathStep};
use keywalk::{EngineBuilder, KeyboardLayout, PathEncoder, PathFinder, WalkEngine};
use std::sync::Arc;

pub fn qwerty() -> Arc<KeyboardLayout> {
    Arc::new(KeyboardLayout::qwerty())
}

pub fn finder() -> PathFinder {
    PathFinder::new(qwerty())
}

pub fn weighted_finder(kind: StrategyKind) -> PathFinder {
    PathFinder::weighted(qwerty(), kind.build())
}

pub fn encoder() -> PathEncoder {
    PathEncoder::new(qwerty())
}

pub fn engine() -> Arc<WalkEngine> {
    Arc::new(EngineBuilder::new().build())
}

pub fn fingerprint(password: &str) -> String {
    engine().fingerprint(password).to_string()
}

/// Builder for hand-written step sequences.
#[derive(Default)]
pub struct StepsBuilder {
    steps: Vec<PathStep>,
}

impl StepsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(mut self, direction: Direction, n: usize) -> Self {
        for _ in 0..n {
            self.steps.push(PathStep::movement(direction));
        }
        self
    }

    pub fn take(mut self, direction: Direction) -> Self {
        self.steps.push(PathStep::new(direction, None, true));
        self
    }

    pub fn press(mut self, key: char) -> Self {
        self.steps.push(PathStep::press(key));
        self
    }

    pub fn release(mut self, key: char) -> Self {
        self.steps.push(PathStep::release(key));
        self
    }

    pub fn shift_down(mut self, side: Hand) -> Self {
        self.steps.push(PathStep::shift_down(side));
        self
    }

    pub fn shift_up(mut self, side: Hand) -> Self {
        self.steps.push(PathStep::shift_up(side));
        self
    }

    pub fn build(self) -> Vec<PathStep> {
        self.steps
    }
}

pub fn directions(steps: &[PathStep]) -> Vec<Direction> {
    steps.iter().map(|s| s.direction).collect()
}
