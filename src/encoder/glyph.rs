use crate::path::{Direction, PathStep};
use strum_macros::EnumIter;

/// The fingerprint alphabet. Plain arrows move the finger, filled
/// triangles move and type, hollow triangles move and type shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Glyph {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TakeUp,
    TakeDown,
    TakeLeft,
    TakeRight,
    TakeInPlace,
    ShiftTakeUp,
    ShiftTakeDown,
    ShiftTakeLeft,
    ShiftTakeRight,
}

impl Glyph {
    pub const fn symbol(self) -> char {
        match self {
            Glyph::MoveUp => '↑',
            Glyph::MoveDown => '↓',
            Glyph::MoveLeft => '←',
            Glyph::MoveRight => '→',
            Glyph::TakeUp => '▲',
            Glyph::TakeDown => '▼',
            Glyph::TakeLeft => '◄',
            Glyph::TakeRight => '►',
            Glyph::TakeInPlace => '◘',
            Glyph::ShiftTakeUp => '△',
            Glyph::ShiftTakeDown => '▽',
            Glyph::ShiftTakeLeft => '◁',
            Glyph::ShiftTakeRight => '▷',
        }
    }

    pub fn from_symbol(c: char) -> Option<Glyph> {
        let glyph = match c {
            '↑' => Glyph::MoveUp,
            '↓' => Glyph::MoveDown,
            '←' => Glyph::MoveLeft,
            '→' => Glyph::MoveRight,
            '▲' => Glyph::TakeUp,
            '▼' => Glyph::TakeDown,
            '◄' => Glyph::TakeLeft,
            '►' => Glyph::TakeRight,
            '◘' => Glyph::TakeInPlace,
            '△' => Glyph::ShiftTakeUp,
            '▽' => Glyph::ShiftTakeDown,
            '◁' => Glyph::ShiftTakeLeft,
            '▷' => Glyph::ShiftTakeRight,
            _ => return None,
        };
        Some(glyph)
    }

    /// The finger movement this glyph makes before (optionally) typing.
    pub fn movement(self) -> Option<Direction> {
        match self {
            Glyph::MoveUp | Glyph::TakeUp | Glyph::ShiftTakeUp => Some(Direction::Up),
            Glyph::MoveDown | Glyph::TakeDown | Glyph::ShiftTakeDown => Some(Direction::Down),
            Glyph::MoveLeft | Glyph::TakeLeft | Glyph::ShiftTakeLeft => Some(Direction::Left),
            Glyph::MoveRight | Glyph::TakeRight | Glyph::ShiftTakeRight => Some(Direction::Right),
            Glyph::TakeInPlace => None,
        }
    }

    pub fn is_take(self) -> bool {
        !matches!(
            self,
            Glyph::MoveUp | Glyph::MoveDown | Glyph::MoveLeft | Glyph::MoveRight
        )
    }

    pub fn is_shifted(self) -> bool {
        matches!(
            self,
            Glyph::ShiftTakeUp | Glyph::ShiftTakeDown | Glyph::ShiftTakeLeft | Glyph::ShiftTakeRight
        )
    }

    pub fn plain(direction: Direction) -> Option<Glyph> {
        match direction {
            Direction::Up => Some(Glyph::MoveUp),
            Direction::Down => Some(Glyph::MoveDown),
            Direction::Left => Some(Glyph::MoveLeft),
            Direction::Right => Some(Glyph::MoveRight),
            _ => None,
        }
    }

    /// A take after `movement`. Shifted in-place takes have no glyph of
    /// their own and collapse to `TakeInPlace`.
    pub fn take(movement: Option<Direction>, shifted: bool) -> Glyph {
        match (movement, shifted) {
            (Some(Direction::Up), false) => Glyph::TakeUp,
            (Some(Direction::Down), false) => Glyph::TakeDown,
            (Some(Direction::Left), false) => Glyph::TakeLeft,
            (Some(Direction::Right), false) => Glyph::TakeRight,
            (Some(Direction::Up), true) => Glyph::ShiftTakeUp,
            (Some(Direction::Down), true) => Glyph::ShiftTakeDown,
            (Some(Direction::Left), true) => Glyph::ShiftTakeLeft,
            (Some(Direction::Right), true) => Glyph::ShiftTakeRight,
            _ => Glyph::TakeInPlace,
        }
    }
}

/// Turns cleaned steps into glyphs. A movement directly followed by a
/// press (shift steps may sit between) fuses into one take glyph;
/// release and shift steps emit nothing themselves.
pub fn map_glyphs(steps: &[PathStep]) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    let mut pending: Option<Direction> = None;
    let mut shifted = false;

    for step in steps {
        let repeats = step.repeat_count();
        match step.direction {
            d if d.is_movement() => {
                glyphs.extend(pending.take().and_then(Glyph::plain));
                if step.is_press {
                    glyphs.extend((0..repeats).map(|_| Glyph::take(Some(d), shifted)));
                } else {
                    glyphs.extend((1..repeats).filter_map(|_| Glyph::plain(d)));
                    pending = Some(d);
                }
            }
            Direction::Press => {
                for _ in 0..repeats {
                    glyphs.push(Glyph::take(pending.take(), shifted));
                }
            }
            Direction::ShiftDown => shifted = true,
            Direction::ShiftUp => shifted = false,
            _ => {}
        }
    }
    glyphs.extend(pending.and_then(Glyph::plain));
    glyphs
}

pub fn glyph_string(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.symbol()).collect()
}
