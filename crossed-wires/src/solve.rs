use miette::Result;

use crate::bounds;
use crate::grid::Grid;
use crate::parser;
use crate::{part1, part2, render};

/// Results of one full run over both detection passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub part1: Option<u32>,
    pub part2: Option<u32>,
    /// Rendered grid after each pass, when rendering was requested.
    pub maps: Option<[String; 2]>,
}

/// Runs the whole pipeline: parse, bounds scan, one grid allocation, the
/// part-1 pass, a clear, and the part-2 pass on the same grid.
#[tracing::instrument(skip(input))]
pub fn run(input: &str, render_maps: bool) -> Result<Report> {
    let wires = parser::parse_wires(input)?;

    let region = bounds::scan(&wires);
    let mut grid = Grid::allocate(&region);
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        center_x = -region.sw.x,
        center_y = -region.sw.y,
        "detected map"
    );

    let part1 = part1::closest_crossing(&mut grid, &wires);
    let map1 = render_maps.then(|| render::render(&grid));

    grid.clear();

    let part2 = part2::cheapest_crossing(&mut grid, &wires);
    let map2 = render_maps.then(|| render::render(&grid));

    Ok(Report {
        part1,
        part2,
        maps: map1.zip(map2).map(|(a, b)| [a, b]),
    })
}
