use crate::parser::{Direction, Wire};
use crate::walker::{self, Coords, Visitor};

/// Axis-aligned bounding region, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub sw: Coords,
    pub ne: Coords,
}

impl Region {
    pub fn width(&self) -> usize {
        (self.ne.x - self.sw.x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.ne.y - self.sw.y + 1) as usize
    }

    pub fn contains(&self, at: Coords) -> bool {
        (self.sw.x..=self.ne.x).contains(&at.x) && (self.sw.y..=self.ne.y).contains(&at.y)
    }
}

/// Widens a running corner pair to cover every visited position.
#[derive(Debug)]
struct BoundsTracker {
    sw: Coords,
    ne: Coords,
}

impl Visitor for BoundsTracker {
    fn on_unit_move(&mut self, cursor: Coords, _direction: Direction) {
        self.sw.x = self.sw.x.min(cursor.x);
        self.sw.y = self.sw.y.min(cursor.y);
        self.ne.x = self.ne.x.max(cursor.x);
        self.ne.y = self.ne.y.max(cursor.y);
    }
}

/// Walks every wire once from the origin and returns the minimal region
/// containing the origin and every position any wire occupies.
#[tracing::instrument(skip(wires))]
pub fn scan(wires: &[Wire]) -> Region {
    // Both corners start at the origin, so the port stays inside the
    // region even when every step leads away from it.
    let mut tracker = BoundsTracker {
        sw: Coords::ORIGIN,
        ne: Coords::ORIGIN,
    };

    for wire in wires {
        let mut cursor = Coords::ORIGIN;
        walker::walk_wire(&mut cursor, wire, &mut tracker);
    }

    Region {
        sw: tracker.sw,
        ne: tracker.ne,
    }
}
