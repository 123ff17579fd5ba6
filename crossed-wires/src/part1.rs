use crate::bounds;
use crate::grid::{Grid, Marker};
use crate::parser::{self, Direction, Wire};
use crate::walker::{self, Coords, Visitor};

/// Marks occupancy for the wire currently walking and records the closest
/// crossing seen so far.
#[derive(Debug)]
struct CrossingMarker<'g> {
    grid: &'g mut Grid,
    wire_id: u8,
    best: Option<u32>,
}

impl Visitor for CrossingMarker<'_> {
    fn on_unit_move(&mut self, cursor: Coords, _direction: Direction) {
        let cell = self.grid.cell_mut(cursor);
        match cell.marker {
            Marker::Empty => cell.marker = Marker::Wire(self.wire_id),
            Marker::Wire(id) if id < self.wire_id => {
                let distance = cursor.manhattan();
                self.best = Some(self.best.map_or(distance, |best| best.min(distance)));
                cell.marker = Marker::Cross;
            }
            // The port, recorded crossings, and same-wire revisits stay as
            // they are.
            _ => {}
        }
    }
}

/// Walks both wires over a cleared grid and returns the Manhattan distance
/// from the port to the nearest cell both wires pass through.
pub fn closest_crossing(grid: &mut Grid, wires: &[Wire; 2]) -> Option<u32> {
    grid.cell_mut(Coords::ORIGIN).marker = Marker::Port;

    let mut marker = CrossingMarker {
        grid,
        wire_id: 0,
        best: None,
    };
    for wire in wires {
        marker.wire_id += 1;
        let mut cursor = Coords::ORIGIN;
        walker::walk_wire(&mut cursor, wire, &mut marker);
    }

    marker.best
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let wires = parser::parse_wires(input)?;
    let region = bounds::scan(&wires);
    let mut grid = Grid::allocate(&region);

    Ok(match closest_crossing(&mut grid, &wires) {
        Some(distance) => distance.to_string(),
        None => "no crossing found".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::scenario_1("R8,U5,L5,D3\nU7,R6,D4,L4\n", "6")]
    #[case::scenario_2(
        "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83\n",
        "159"
    )]
    #[case::scenario_3(
        "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7\n",
        "135"
    )]
    fn finds_the_closest_crossing(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn wires_sharing_only_the_port_have_no_crossing() -> miette::Result<()> {
        assert_eq!("no crossing found", process("R3,U3\nL3,D3\n")?);
        Ok(())
    }

    #[test]
    fn the_port_itself_is_never_a_crossing() -> miette::Result<()> {
        // Both wires re-traverse the origin; nothing else overlaps.
        assert_eq!("no crossing found", process("R1,L1,R1\nU1,D1,U1\n")?);
        Ok(())
    }

    #[test]
    fn same_wire_revisits_are_not_crossings() -> miette::Result<()> {
        // The first wire loops over its own track at (2, 0), distance 2;
        // only the second wire's crossings at (2, 1) and (4, 1) count.
        assert_eq!("3", process("R4,U2,L2,D4\nU1,R8\n")?);
        Ok(())
    }
}
