//! Aldous-Broder random walk.
//!
//! The walk wanders between orthogonal neighbours until it has touched every
//! cell. Only the first entry into a cell removes a wall, which yields a
//! spanning tree drawn uniformly from all spanning trees of the grid graph.
//! The walk has no step bound; its expected length grows faster than the
//! cell count.

use crate::env::MazeRng;
use crate::state::{CellFlags, Coord, Direction, MazeGrid};

use super::GenerationReport;

/// Carves `grid` into a perfect maze.
///
/// Expects every cell to start without [`CellFlags::VISIT_MARK`] and leaves
/// it set on all of them.
pub(super) fn carve<R: MazeRng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> GenerationReport {
    let mut report = GenerationReport::new(grid.len());
    let mut unvisited = grid.len();

    let mut origin = Coord::cell(rng.index(grid.rows()), rng.index(grid.cols()));
    grid.set_flag_at(origin, CellFlags::VISIT_MARK);
    unvisited -= 1;

    while unvisited > 0 {
        let (direction, destination) = loop {
            let direction = Direction::ALL[rng.index(Direction::ALL.len())];
            let destination = origin.step(direction);
            if grid.contains(destination) {
                break (direction, destination);
            }
            report.rejected_draws += 1;
        };
        report.steps += 1;

        if !grid.has_flag_at(destination, CellFlags::VISIT_MARK) {
            grid.set_flag_at(destination, CellFlags::VISIT_MARK);
            unvisited -= 1;
            clear_shared_wall(grid, origin, destination, direction);
        }
        origin = destination;
    }

    report
}

/// Removes the boundary between two neighbours.
///
/// Only `TOP_WALL` and `LEFT_WALL` describe interior boundaries, so the flag
/// cleared belongs to whichever cell lies below or to the right.
fn clear_shared_wall(grid: &mut MazeGrid, origin: Coord, destination: Coord, direction: Direction) {
    let (cell, flag) = match direction {
        Direction::Up => (origin, CellFlags::TOP_WALL),
        Direction::Down => (destination, CellFlags::TOP_WALL),
        Direction::Left => (origin, CellFlags::LEFT_WALL),
        Direction::Right => (destination, CellFlags::LEFT_WALL),
    };
    grid.clear_flag_at(cell, flag);
}
