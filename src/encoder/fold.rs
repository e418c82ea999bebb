use crate::consts::META_REDUNDANT_MOVES;
use crate::path::PathStep;
use tracing::debug;

/// Collapses runs of identical (direction, press) steps into one step
/// carrying a `RepeatCount`.
pub fn fold_runs(steps: &[PathStep]) -> Vec<PathStep> {
    let mut folded: Vec<PathStep> = Vec::with_capacity(steps.len());
    for step in steps {
        match folded.last_mut() {
            Some(last) if last.same_action(step) => absorb(last, step),
            _ => folded.push(step.clone()),
        }
    }
    folded
}

fn absorb(into: &mut PathStep, step: &PathStep) {
    into.set_repeat_count(into.repeat_count() + step.repeat_count());
    into.cost += step.cost;
    into.bump_counter(META_REDUNDANT_MOVES, step.counter(META_REDUNDANT_MOVES));
}

/// Cancels adjacent opposite pure movements, cascading through what the
/// cancellation exposes. Runs cancel up to their smaller repeat count.
/// Every removed move is tallied in `RedundantMoveCount` on the next
/// surviving step, or on the last survivor when nothing follows.
pub fn eliminate_redundant_moves(steps: Vec<PathStep>) -> Vec<PathStep> {
    let mut out: Vec<PathStep> = Vec::with_capacity(steps.len());
    let mut pending: u64 = 0;

    for mut step in steps {
        if step.is_pure_movement() {
            let mut remaining = step.repeat_count();
            while remaining > 0 {
                let Some(top) = out.last_mut() else {
                    break;
                };
                if !top.is_pure_movement() || top.direction.opposite() != Some(step.direction) {
                    break;
                }
                let available = top.repeat_count();
                let cancelled = remaining.min(available);
                remaining -= cancelled;
                pending += 2 * cancelled;

                let left = available - cancelled;
                if left == 0 {
                    if let Some(gone) = out.pop() {
                        pending += gone.counter(META_REDUNDANT_MOVES);
                    }
                } else {
                    top.cost *= left as f64 / available as f64;
                    top.set_repeat_count(left);
                }
            }

            if remaining == 0 {
                pending += step.counter(META_REDUNDANT_MOVES);
                continue;
            }
            let original = step.repeat_count();
            if remaining < original {
                step.cost *= remaining as f64 / original as f64;
                step.set_repeat_count(remaining);
            }
        }

        step.bump_counter(META_REDUNDANT_MOVES, pending);
        pending = 0;
        out.push(step);
    }

    if pending > 0 {
        match out.last_mut() {
            Some(last) => last.bump_counter(META_REDUNDANT_MOVES, pending),
            None => debug!(removed = pending, "Every step of the walk cancelled out"),
        }
    }
    out
}

/// Total moves removed, as recorded on the surviving steps.
pub fn redundant_move_total(steps: &[PathStep]) -> u64 {
    steps.iter().map(|s| s.counter(META_REDUNDANT_MOVES)).sum()
}
