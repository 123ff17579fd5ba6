use crate::parser::{Direction, Step, Wire};

/// Absolute grid position, origin-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// |x| + |y| from the origin.
    pub fn manhattan(self) -> u32 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

/// Receives one callback per unit move, in movement order.
pub trait Visitor {
    fn on_unit_move(&mut self, cursor: Coords, direction: Direction);
}

impl<F: FnMut(Coords, Direction)> Visitor for F {
    fn on_unit_move(&mut self, cursor: Coords, direction: Direction) {
        self(cursor, direction)
    }
}

/// Advances `cursor` exactly `step.length` grid units along the step's
/// axis, invoking the visitor after every unit move. The walker has no
/// awareness of what the visitor does with the positions; the cursor stays
/// observable to the caller once the step is applied.
pub fn walk(cursor: &mut Coords, step: Step, visitor: &mut impl Visitor) {
    let (dx, dy) = step.direction.delta();
    for _ in 0..step.length {
        cursor.x += dx;
        cursor.y += dy;
        visitor.on_unit_move(*cursor, step.direction);
    }
}

/// Walks a whole wire from wherever `cursor` currently stands.
pub fn walk_wire(cursor: &mut Coords, wire: &Wire, visitor: &mut impl Visitor) {
    for &step in &wire.0 {
        walk(cursor, step, visitor);
    }
}
