//! Maze generation pipeline.
//!
//! [`MazeGenerator::generate`] runs, in order: portal placement, the
//! Aldous-Broder walk, outer framing, portal openings, treasure placement and
//! start selection. Random draws happen in exactly that order, so a seeded
//! [`MazeRng`] reproduces the same maze.
mod aldous_broder;

use crate::config::MazeConfig;
use crate::env::MazeRng;
use crate::error::GridError;
use crate::state::{CellFlags, Coord, MazeGrid, PortalModel, TreasureState};

/// Walk statistics for one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Number of cells in the grid.
    pub cells: usize,
    /// Moves taken by the walk, including revisits.
    pub steps: u64,
    /// Direction draws discarded because they pointed off the grid.
    pub rejected_draws: u64,
}

impl GenerationReport {
    pub fn new(cells: usize) -> Self {
        Self {
            cells,
            steps: 0,
            rejected_draws: 0,
        }
    }
}

/// Everything a new game starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: MazeGrid,
    pub portals: PortalModel,
    pub treasure: TreasureState,
    /// Entrance coordinate, or a grid cell when there is no entrance.
    pub start: Coord,
    pub report: GenerationReport,
}

/// Builds mazes from a [`MazeConfig`] using an injected random source.
pub struct MazeGenerator<R: MazeRng> {
    rng: R,
}

impl<R: MazeRng> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a complete maze. Runs until the walk has covered every cell.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if the configured dimensions are
    /// outside `[2, 15]`. No random draws are consumed in that case.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<GeneratedMaze, GridError> {
        let mut grid = MazeGrid::new(config.rows, config.cols)?;
        let portals = PortalModel::place(config.portals, config.rows, config.cols, &mut self.rng);

        let report = aldous_broder::carve(&mut grid, &mut self.rng);
        frame(&mut grid);
        open_portals(&mut grid, &portals);

        let location = self.treasure_location(&portals, config);
        if config.treasure.is_enabled() {
            grid.set_flag_at(location, CellFlags::TREASURE);
        }
        let treasure = TreasureState::new(config.treasure, location);

        let start = match portals.entrance() {
            Some(entrance) => entrance,
            None => self.inner_start(config, location),
        };

        Ok(GeneratedMaze {
            grid,
            portals,
            treasure,
            start,
            report,
        })
    }

    /// Uniform grid cell other than the exit threshold and the entrance doorstep.
    fn treasure_location(&mut self, portals: &PortalModel, config: &MazeConfig) -> Coord {
        loop {
            let candidate = self.random_cell(config);
            if candidate != portals.threshold() && Some(candidate) != portals.doorstep() {
                return candidate;
            }
        }
    }

    /// Uniform grid cell other than the treasure location.
    fn inner_start(&mut self, config: &MazeConfig, treasure: Coord) -> Coord {
        loop {
            let candidate = self.random_cell(config);
            if candidate != treasure {
                return candidate;
            }
        }
    }

    fn random_cell(&mut self, config: &MazeConfig) -> Coord {
        let row = self.rng.index(config.rows);
        let col = self.rng.index(config.cols);
        Coord::cell(row, col)
    }
}

/// Closes the south and east edges of the grid.
fn frame(grid: &mut MazeGrid) {
    let last_row = grid.rows() - 1;
    let last_col = grid.cols() - 1;
    for col in 0..grid.cols() {
        grid.set_flag(last_row, col, CellFlags::BOTTOM_WALL);
    }
    for row in 0..grid.rows() {
        grid.set_flag(row, last_col, CellFlags::RIGHT_WALL);
    }
}

/// Opens the threshold's outward side and the doorstep's west side.
fn open_portals(grid: &mut MazeGrid, portals: &PortalModel) {
    grid.clear_flag_at(portals.threshold(), CellFlags::wall(portals.exit_side()));
    if let Some(doorstep) = portals.doorstep() {
        grid.clear_flag_at(doorstep, CellFlags::LEFT_WALL);
    }
}
