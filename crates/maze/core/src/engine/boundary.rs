//! Wall queries that fold the portal rules into the stored cell flags.

use crate::state::{CellFlags, Coord, Direction, MazeGrid, PortalKind, PortalModel, TreasureState};

/// Read-only view answering "is there a wall on this side of this cell".
#[derive(Clone, Copy, Debug)]
pub struct BoundaryQuery<'a> {
    grid: &'a MazeGrid,
    portals: &'a PortalModel,
    treasure: &'a TreasureState,
}

impl<'a> BoundaryQuery<'a> {
    pub fn new(grid: &'a MazeGrid, portals: &'a PortalModel, treasure: &'a TreasureState) -> Self {
        Self {
            grid,
            portals,
            treasure,
        }
    }

    /// Returns true if `side` of the cell at `coord` is blocked.
    ///
    /// Rules, first match wins:
    /// 1. The entrance is open only toward the grid.
    /// 2. The exit is open only toward its threshold, and not at all while locked.
    /// 3. A locked exit closes the threshold's outward side.
    /// 4. Otherwise the cell's own flag decides; right and bottom sides also
    ///    honour the neighbour's left/top flag, since interior boundaries are
    ///    stored on one cell only.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is neither a grid cell nor an active portal.
    pub fn has_wall(&self, coord: Coord, side: Direction) -> bool {
        match self.portals.classify(coord) {
            PortalKind::Entrance => side != Direction::Right,
            PortalKind::Exit => side != self.portals.exit_side().opposite() || self.exit_locked(),
            PortalKind::ExitThreshold
                if side == self.portals.exit_side() && self.exit_locked() =>
            {
                true
            }
            PortalKind::ExitThreshold | PortalKind::None => self.stored_wall(coord, side),
        }
    }

    /// Blocked sides of `coord`, as wall bits.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Self::has_wall`].
    pub fn walls(&self, coord: Coord) -> CellFlags {
        Direction::ALL
            .into_iter()
            .filter(|&side| self.has_wall(coord, side))
            .fold(CellFlags::empty(), |walls, side| walls | CellFlags::wall(side))
    }

    /// Sides of `coord` the player may leave through.
    pub fn open_sides(&self, coord: Coord) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&side| !self.has_wall(coord, side))
    }

    fn exit_locked(&self) -> bool {
        self.portals.is_exit_locked(self.treasure)
    }

    fn stored_wall(&self, coord: Coord, side: Direction) -> bool {
        let Some((row, col)) = self.grid.position(coord) else {
            panic!(
                "boundary query at {coord} outside the {}x{} grid and its portals",
                self.grid.rows(),
                self.grid.cols()
            );
        };
        if self.grid.has_flag(row, col, CellFlags::wall(side)) {
            return true;
        }
        match side {
            Direction::Right => {
                col + 1 < self.grid.cols() && self.grid.has_flag(row, col + 1, CellFlags::LEFT_WALL)
            }
            Direction::Down => {
                row + 1 < self.grid.rows() && self.grid.has_flag(row + 1, col, CellFlags::TOP_WALL)
            }
            Direction::Left | Direction::Up => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreasureMode;

    /// 2x2 maze carved as (0,0)->(0,1)->(1,1)->(1,0) with an east exit on row 1.
    fn carved_grid() -> MazeGrid {
        let mut grid = MazeGrid::new(2, 2).unwrap();
        grid.clear_flag(0, 1, CellFlags::LEFT_WALL);
        grid.clear_flag(1, 1, CellFlags::TOP_WALL);
        grid.clear_flag(1, 1, CellFlags::LEFT_WALL);
        for col in 0..2 {
            grid.set_flag(1, col, CellFlags::BOTTOM_WALL);
        }
        grid.set_flag(0, 1, CellFlags::RIGHT_WALL);
        grid.clear_flag(0, 0, CellFlags::LEFT_WALL);
        grid
    }

    fn portals() -> PortalModel {
        PortalModel::new(2, 2, Some(0), Direction::Right, 1)
    }

    #[test]
    fn entrance_opens_toward_grid_only() {
        let grid = carved_grid();
        let portals = portals();
        let treasure = TreasureState::new(TreasureMode::None, Coord::new(0, 1));
        let query = BoundaryQuery::new(&grid, &portals, &treasure);

        let open: Vec<_> = query.open_sides(Coord::new(0, -1)).collect();
        assert_eq!(open, vec![Direction::Right]);
    }

    #[test]
    fn right_and_bottom_peek_at_neighbours() {
        let grid = carved_grid();
        let portals = portals();
        let treasure = TreasureState::new(TreasureMode::None, Coord::new(0, 1));
        let query = BoundaryQuery::new(&grid, &portals, &treasure);

        // (0,0) has no right/bottom flags of its own
        assert!(!query.has_wall(Coord::new(0, 0), Direction::Right));
        assert!(query.has_wall(Coord::new(0, 0), Direction::Down));
        // (1,0)'s right side is (1,1)'s cleared left wall
        assert!(!query.has_wall(Coord::new(1, 0), Direction::Right));
        // left and top never look at neighbours
        assert!(!query.has_wall(Coord::new(1, 1), Direction::Left));
        assert!(!query.has_wall(Coord::new(1, 1), Direction::Up));
    }

    #[test]
    fn locked_threshold_and_exit() {
        let grid = carved_grid();
        let portals = portals();
        let threshold = portals.threshold();
        let exit = portals.exit();
        let mut treasure = TreasureState::new(TreasureMode::Key, Coord::new(0, 1));

        {
            let query = BoundaryQuery::new(&grid, &portals, &treasure);
            assert!(query.has_wall(threshold, Direction::Right));
            assert_eq!(query.walls(exit), CellFlags::WALLS);
        }

        treasure.take();
        let query = BoundaryQuery::new(&grid, &portals, &treasure);
        assert!(!query.has_wall(threshold, Direction::Right));
        let open: Vec<_> = query.open_sides(exit).collect();
        assert_eq!(open, vec![Direction::Left]);
    }

    #[test]
    fn unlocked_threshold_reads_only_its_own_flags() {
        // The east-side threshold sits in the last column, so the neighbour
        // peek has nothing to read and the cleared outward flag decides.
        let grid = carved_grid();
        let portals = portals();
        let treasure = TreasureState::new(TreasureMode::Hidden, Coord::new(0, 1));
        let query = BoundaryQuery::new(&grid, &portals, &treasure);
        assert!(!query.has_wall(portals.threshold(), Direction::Right));
        assert!(query.has_wall(portals.threshold(), Direction::Down));
    }

    #[test]
    fn locked_north_threshold_overrides_cleared_flag() {
        let mut grid = MazeGrid::new(3, 3).unwrap();
        let portals = PortalModel::new(3, 3, Some(0), Direction::Up, 1);
        grid.clear_flag(0, 1, CellFlags::TOP_WALL);
        let mut treasure = TreasureState::new(TreasureMode::Key, Coord::new(2, 2));

        let threshold = Coord::new(0, 1);
        assert_eq!(portals.threshold(), threshold);

        assert!(BoundaryQuery::new(&grid, &portals, &treasure).has_wall(threshold, Direction::Up));
        treasure.take();
        assert!(!BoundaryQuery::new(&grid, &portals, &treasure).has_wall(threshold, Direction::Up));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn off_grid_query_panics() {
        let grid = carved_grid();
        let portals = portals();
        let treasure = TreasureState::new(TreasureMode::None, Coord::new(0, 1));
        BoundaryQuery::new(&grid, &portals, &treasure).has_wall(Coord::new(5, 0), Direction::Up);
    }
}
