use itertools::Itertools;

use crate::grid::{Cell, Grid, Marker};

/// Renders the grid from the northernmost row down, west to east: the port
/// as `o`, crossings as `X`, visited cells as the owning wire's digit.
pub fn render(grid: &Grid) -> String {
    let mut out = grid
        .rows()
        .rev()
        .map(|row| row.iter().map(glyph).collect::<String>())
        .join("\n");
    out.push('\n');
    out
}

fn glyph(cell: &Cell) -> char {
    match cell.marker {
        Marker::Empty => ' ',
        Marker::Port => 'o',
        Marker::Cross => 'X',
        Marker::Wire(id) => char::from(b'0' + id),
    }
}
