use super::{Direction, MetaValue, PathStep};
use crate::consts::META_TOTAL_EFFORT;
use crate::cost::CostStrategy;
use crate::ergonomics::{ErgonomicModel, ShiftState};
use crate::layout::{KeyPosition, KeyboardLayout};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds the step sequence a finger follows between keys.
///
/// Routes are deterministic: all vertical moves first, then horizontal
/// moves, then the press. A weighted finder additionally prices each step
/// with its [`CostStrategy`]; the route itself never changes.
#[derive(Clone)]
pub struct PathFinder {
    model: ErgonomicModel,
    strategy: Option<Arc<dyn CostStrategy>>,
}

impl fmt::Debug for PathFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFinder")
            .field("layout", &self.model.layout().kind())
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl PathFinder {
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        Self {
            model: ErgonomicModel::new(layout),
            strategy: None,
        }
    }

    pub fn weighted(layout: Arc<KeyboardLayout>, strategy: Arc<dyn CostStrategy>) -> Self {
        Self {
            model: ErgonomicModel::new(layout),
            strategy: Some(strategy),
        }
    }

    pub fn layout(&self) -> &KeyboardLayout {
        self.model.layout()
    }

    pub fn strategy(&self) -> Option<&dyn CostStrategy> {
        self.strategy.as_deref()
    }

    /// Unshifted route from `start` to `end`. Empty when either character
    /// is not on the layout.
    pub fn find_path(&self, start: char, end: char) -> Vec<PathStep> {
        let Some((from, to)) = self.resolve(start, end) else {
            return Vec::new();
        };
        let mut steps = route(&from, &to, start, end);
        self.price(&mut steps, &from, &to, start, end, ShiftState::NoShift);
        steps
    }

    /// Route between two consecutive password characters. When `end`
    /// needs shift, the press is bracketed by ShiftDown/ShiftUp on the
    /// hand opposite the target key.
    pub fn keystroke_path(&self, start: char, end: char) -> Vec<PathStep> {
        self.keystroke_path_before(start, end, None)
    }

    /// [`keystroke_path`](Self::keystroke_path) inside a password: a
    /// shifted `end` holds shift on the hand opposite `next`, the
    /// character typed after it, so that hand is free for it.
    pub fn keystroke_path_before(&self, start: char, end: char, next: Option<char>) -> Vec<PathStep> {
        let Some((from, to)) = self.resolve(start, end) else {
            return Vec::new();
        };
        let target = self.model.enhance_position(&to, end);
        let following = next.and_then(|c| self.model.enhance(c));
        let shift = self.model.shift_before(&target, following.as_ref());

        let mut steps = route(&from, &to, start, end);
        self.price(&mut steps, &from, &to, start, end, shift);

        if let Some(side) = shift.hand() {
            let press_at = steps
                .iter()
                .position(|s| s.direction == Direction::Press)
                .unwrap_or(steps.len());
            let mut down = PathStep::shift_down(side);
            // The pair's effort stays on whichever step comes first.
            if press_at == 0 {
                if let Some(effort) = steps
                    .first_mut()
                    .and_then(|s| s.metadata.remove(META_TOTAL_EFFORT))
                {
                    down.set_meta(META_TOTAL_EFFORT, effort);
                }
            }
            steps.insert(press_at, down);
            steps.push(PathStep::shift_up(side));
        }
        steps
    }

    /// Concatenated keystroke paths of every consecutive character pair.
    pub fn password_path(&self, password: &str) -> Vec<PathStep> {
        let chars: Vec<char> = password.chars().collect();
        chars
            .windows(2)
            .enumerate()
            .flat_map(|(i, pair)| {
                self.keystroke_path_before(pair[0], pair[1], chars.get(i + 2).copied())
            })
            .collect()
    }

    /// Grid distance between two characters, if both are on the layout.
    pub fn manhattan(&self, a: char, b: char) -> Option<usize> {
        let (from, to) = self.resolve(a, b)?;
        Some(from.manhattan(&to))
    }

    fn resolve(&self, start: char, end: char) -> Option<(KeyPosition, KeyPosition)> {
        let layout = self.layout();
        match (layout.position_of(start), layout.position_of(end)) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => {
                debug!(?start, ?end, "Skipping pair with a key outside the layout");
                None
            }
        }
    }

    fn price(
        &self,
        steps: &mut [PathStep],
        from: &KeyPosition,
        to: &KeyPosition,
        start: char,
        end: char,
        shift: ShiftState,
    ) {
        let Some(strategy) = &self.strategy else {
            return;
        };
        let from_e = self.model.enhance_position(from, start);
        let to_e = self.model.enhance_position(to, end);

        let moves = steps.iter().filter(|s| s.is_movement()).count();
        let per_move = if moves > 0 {
            strategy.movement_cost(&from_e, &to_e, shift) / moves as f64
        } else {
            0.0
        };
        let press = strategy.key_press_cost(&to_e, shift);

        for step in steps.iter_mut() {
            step.cost = match step.direction {
                d if d.is_movement() => per_move,
                Direction::Press => press,
                Direction::Release => press / 2.0,
                _ => 0.0,
            };
        }

        let total: f64 = steps.iter().map(|s| s.cost).sum();
        if let Some(first) = steps.first_mut() {
            first.set_meta(META_TOTAL_EFFORT, MetaValue::Number(total));
        }
    }
}

fn route(from: &KeyPosition, to: &KeyPosition, start: char, end: char) -> Vec<PathStep> {
    if from.same_cell(to) {
        return vec![PathStep::press(end), PathStep::release(end)];
    }

    let vertical = if to.row > from.row {
        Direction::Down
    } else {
        Direction::Up
    };
    let horizontal = if to.col > from.col {
        Direction::Right
    } else {
        Direction::Left
    };

    let mut steps = Vec::with_capacity(from.manhattan(to) + 1);
    steps.extend((0..from.row.abs_diff(to.row)).map(|_| PathStep::movement(vertical)));
    steps.extend((0..from.col.abs_diff(to.col)).map(|_| PathStep::movement(horizontal)));
    if let Some(first) = steps.first_mut() {
        first.key = Some(start);
    }
    steps.push(PathStep::press(end));
    steps
}
