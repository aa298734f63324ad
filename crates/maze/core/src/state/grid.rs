use crate::config::MazeConfig;
use crate::error::GridError;

use super::{CellCodec, CellFlags, Coord};

/// Flat row-major buffer of packed cells.
///
/// The grid is the only owner of cell bytes. It never resizes; generating a
/// new maze builds a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<i8>,
}

impl MazeGrid {
    /// Creates a grid with every cell holding a left and a top wall.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is outside
    /// `[MazeConfig::MIN_DIMENSION, MazeConfig::MAX_DIMENSION]`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if !MazeConfig::dimension_in_range(rows) || !MazeConfig::dimension_in_range(cols) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let initial = CellCodec::encode(CellFlags::LEFT_WALL | CellFlags::TOP_WALL);
        Ok(Self {
            rows,
            cols,
            cells: vec![initial; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw cell slots in row-major order.
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Linear buffer offset of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    pub fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Returns true if `coord` names a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Converts an in-grid coordinate to `(row, col)` indices.
    pub fn position(&self, coord: Coord) -> Option<(usize, usize)> {
        self.contains(coord)
            .then(|| (coord.row as usize, coord.col as usize))
    }

    pub fn value_at(&self, row: usize, col: usize) -> i8 {
        self.cells[self.index(row, col)]
    }

    pub fn flags(&self, row: usize, col: usize) -> CellFlags {
        CellCodec::decode(self.value_at(row, col))
    }

    /// Flags of the cell at `coord`, or `None` when it lies off the grid.
    pub fn flags_at(&self, coord: Coord) -> Option<CellFlags> {
        self.position(coord)
            .map(|(row, col)| self.flags(row, col))
    }

    pub fn has_flag(&self, row: usize, col: usize, flag: CellFlags) -> bool {
        self.flags(row, col).contains(flag)
    }

    pub fn set_flag(&mut self, row: usize, col: usize, flag: CellFlags) {
        let index = self.index(row, col);
        CellCodec::set(&mut self.cells[index], flag);
    }

    pub fn clear_flag(&mut self, row: usize, col: usize, flag: CellFlags) {
        let index = self.index(row, col);
        CellCodec::clear(&mut self.cells[index], flag);
    }

    pub fn toggle_flag(&mut self, row: usize, col: usize, flag: CellFlags) {
        let index = self.index(row, col);
        CellCodec::toggle(&mut self.cells[index], flag);
    }

    // ===== coordinate-addressed variants, for callers already holding a Coord =====

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn has_flag_at(&self, coord: Coord, flag: CellFlags) -> bool {
        let (row, col) = self.expect_cell(coord);
        self.has_flag(row, col, flag)
    }

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn set_flag_at(&mut self, coord: Coord, flag: CellFlags) {
        let (row, col) = self.expect_cell(coord);
        self.set_flag(row, col, flag);
    }

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    pub fn clear_flag_at(&mut self, coord: Coord, flag: CellFlags) {
        let (row, col) = self.expect_cell(coord);
        self.clear_flag(row, col, flag);
    }

    fn expect_cell(&self, coord: Coord) -> (usize, usize) {
        match self.position(coord) {
            Some(position) => position,
            None => panic!(
                "cell {coord} outside {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            MazeGrid::new(1, 5),
            Err(GridError::InvalidDimensions { rows: 1, cols: 5 })
        );
        assert!(MazeGrid::new(5, 16).is_err());
        assert!(MazeGrid::new(0, 0).is_err());
        assert!(MazeGrid::new(15, 2).is_ok());
    }

    #[test]
    fn new_cells_hold_left_and_top_walls() {
        let grid = MazeGrid::new(3, 4).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(
            grid.cells()
                .iter()
                .all(|&slot| slot == CellCodec::encode(CellFlags::LEFT_WALL | CellFlags::TOP_WALL))
        );
    }

    #[test]
    fn index_is_row_major() {
        let grid = MazeGrid::new(3, 4).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(2, 3), 11);
    }

    #[test]
    #[should_panic(expected = "outside 3x4 grid")]
    fn index_outside_grid_panics() {
        let grid = MazeGrid::new(3, 4).unwrap();
        grid.index(3, 0);
    }

    #[test]
    fn flag_writes_touch_one_cell() {
        let mut grid = MazeGrid::new(2, 2).unwrap();
        grid.set_flag(1, 1, CellFlags::TREASURE);
        grid.clear_flag(1, 1, CellFlags::LEFT_WALL);
        assert_eq!(grid.flags(1, 1), CellFlags::TOP_WALL | CellFlags::TREASURE);
        assert_eq!(grid.flags(1, 0), CellFlags::LEFT_WALL | CellFlags::TOP_WALL);

        grid.toggle_flag(1, 1, CellFlags::TREASURE);
        assert!(!grid.has_flag(1, 1, CellFlags::TREASURE));
    }

    #[test]
    fn contains_excludes_virtual_coordinates() {
        let grid = MazeGrid::new(2, 3).unwrap();
        assert!(grid.contains(Coord::new(1, 2)));
        assert!(!grid.contains(Coord::new(0, -1)));
        assert!(!grid.contains(Coord::new(1, 3)));
        assert!(!grid.contains(Coord::new(2, 0)));
        assert_eq!(grid.flags_at(Coord::new(-1, 0)), None);
    }
}
