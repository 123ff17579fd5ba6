use crate::bounds;
use crate::grid::{Grid, Marker};
use crate::parser::{self, Direction, Wire};
use crate::walker::{self, Coords, Visitor};

/// Phase A: records how many steps the first wire has taken by the time it
/// reaches each cell.
#[derive(Debug)]
struct StepRecorder<'g> {
    grid: &'g mut Grid,
    wire_id: u8,
    counter: u32,
}

impl Visitor for StepRecorder<'_> {
    fn on_unit_move(&mut self, cursor: Coords, _direction: Direction) {
        self.counter += 1;
        let cell = self.grid.cell_mut(cursor);
        if matches!(cell.marker, Marker::Port) {
            return;
        }
        cell.marker = Marker::Wire(self.wire_id);
        // A revisited cell keeps the larger count; see DESIGN.md for why
        // this is not first-visit semantics.
        if cell.wire1_steps < self.counter {
            cell.wire1_steps = self.counter;
        }
    }
}

/// Phase B: accumulates the second wire's own step count and closes the
/// loop on cells the first wire already reached.
#[derive(Debug)]
struct CostScanner<'g> {
    grid: &'g mut Grid,
    wire_id: u8,
    counter: u32,
    best: Option<u32>,
}

impl Visitor for CostScanner<'_> {
    fn on_unit_move(&mut self, cursor: Coords, _direction: Direction) {
        self.counter += 1;
        let cell = self.grid.cell_mut(cursor);
        match cell.marker {
            Marker::Wire(id) if id < self.wire_id => {
                let cost = self.counter + cell.wire1_steps;
                self.best = Some(self.best.map_or(cost, |best| best.min(cost)));
                cell.marker = Marker::Cross;
            }
            Marker::Empty => cell.marker = Marker::Wire(self.wire_id),
            _ => {}
        }
    }
}

fn record_first_wire(grid: &mut Grid, wire: &Wire) {
    let mut recorder = StepRecorder {
        grid,
        wire_id: 1,
        counter: 0,
    };
    let mut cursor = Coords::ORIGIN;
    walker::walk_wire(&mut cursor, wire, &mut recorder);
}

fn scan_second_wire(grid: &mut Grid, wire: &Wire) -> Option<u32> {
    let mut scanner = CostScanner {
        grid,
        wire_id: 2,
        counter: 0,
        best: None,
    };
    let mut cursor = Coords::ORIGIN;
    walker::walk_wire(&mut cursor, wire, &mut scanner);
    scanner.best
}

/// Two-phase pass over a cleared grid: record the first wire's step counts,
/// then scan the second wire for the cheapest combined crossing.
pub fn cheapest_crossing(grid: &mut Grid, wires: &[Wire; 2]) -> Option<u32> {
    grid.cell_mut(Coords::ORIGIN).marker = Marker::Port;

    let [first, second] = wires;
    record_first_wire(grid, first);
    scan_second_wire(grid, second)
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let wires = parser::parse_wires(input)?;
    let region = bounds::scan(&wires);
    let mut grid = Grid::allocate(&region);

    Ok(match cheapest_crossing(&mut grid, &wires) {
        Some(cost) => cost.to_string(),
        None => "no crossing found".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::scenario_1("R8,U5,L5,D3\nU7,R6,D4,L4\n", "30")]
    #[case::scenario_2(
        "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83\n",
        "610"
    )]
    #[case::scenario_3(
        "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7\n",
        "410"
    )]
    fn finds_the_cheapest_crossing(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn wires_sharing_only_the_port_have_no_crossing() -> miette::Result<()> {
        assert_eq!("no crossing found", process("R3,U3\nL3,D3\n")?);
        Ok(())
    }

    #[test]
    fn revisited_cells_keep_the_larger_step_count() -> miette::Result<()> {
        // The first wire reaches (1, 0) at step 1 and again at step 5; the
        // stored count stays 5, so the crossing costs 1 + 5, not 1 + 1.
        assert_eq!("6", process("R2,U1,L1,D1,R1\nR1\n")?);
        Ok(())
    }
}
