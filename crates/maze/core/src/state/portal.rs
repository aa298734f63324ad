//! Entrance and exit placement.
//!
//! Portals live on virtual coordinates one step outside the grid. The entrance
//! is always on the west side; the exit may be on any side not occupied by an
//! entrance. The *threshold* is the grid cell the exit was carved from, and
//! the *doorstep* is the grid cell the entrance leads into.

use crate::config::PortalArrangement;
use crate::env::MazeRng;

use super::{Coord, Direction, TreasureState};

/// How a coordinate relates to the portals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortalKind {
    None,
    Entrance,
    Exit,
    ExitThreshold,
}

/// Exit sides available when an entrance occupies the west side.
const SIDES_BESIDE_ENTRANCE: [Direction; 3] = [Direction::Up, Direction::Right, Direction::Down];

/// Resolved portal positions for one maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalModel {
    rows: usize,
    cols: usize,
    entrance_row: Option<usize>,
    exit_side: Direction,
    /// Row for east/west exits, column for north/south exits.
    exit_position: usize,
}

impl PortalModel {
    /// Builds a model from explicit positions.
    ///
    /// # Panics
    ///
    /// Panics if a position lies outside its side, or if an entrance is given
    /// together with a west exit.
    pub fn new(
        rows: usize,
        cols: usize,
        entrance_row: Option<usize>,
        exit_side: Direction,
        exit_position: usize,
    ) -> Self {
        if let Some(row) = entrance_row {
            assert!(row < rows, "entrance row {row} outside {rows} rows");
            assert!(
                exit_side != Direction::Left,
                "exit cannot share the west side with the entrance"
            );
        }
        let side_len = Self::side_len(rows, cols, exit_side);
        assert!(
            exit_position < side_len,
            "exit position {exit_position} outside {exit_side} side of length {side_len}"
        );
        Self {
            rows,
            cols,
            entrance_row,
            exit_side,
            exit_position,
        }
    }

    /// Places portals for `arrangement`, drawing any random parts from `rng`.
    ///
    /// Draw order: entrance row (if random), exit side (if random), exit
    /// position (if random).
    pub fn place<R: MazeRng + ?Sized>(
        arrangement: PortalArrangement,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Self {
        match arrangement {
            PortalArrangement::CornersFixed => {
                Self::new(rows, cols, Some(0), Direction::Right, rows - 1)
            }
            PortalArrangement::CornersRandomExitSide => {
                let side = SIDES_BESIDE_ENTRANCE[rng.index(SIDES_BESIDE_ENTRANCE.len())];
                let position = match side {
                    Direction::Right => rows - 1,
                    _ => cols - 1,
                };
                Self::new(rows, cols, Some(0), side, position)
            }
            PortalArrangement::BothRandom => {
                let entrance_row = rng.index(rows);
                let side = SIDES_BESIDE_ENTRANCE[rng.index(SIDES_BESIDE_ENTRANCE.len())];
                let position = rng.index(Self::side_len(rows, cols, side));
                Self::new(rows, cols, Some(entrance_row), side, position)
            }
            PortalArrangement::ExitOnly => {
                let side = Direction::ALL[rng.index(Direction::ALL.len())];
                let position = rng.index(Self::side_len(rows, cols, side));
                Self::new(rows, cols, None, side, position)
            }
        }
    }

    fn side_len(rows: usize, cols: usize, side: Direction) -> usize {
        match side {
            Direction::Left | Direction::Right => rows,
            Direction::Up | Direction::Down => cols,
        }
    }

    pub fn has_entrance(&self) -> bool {
        self.entrance_row.is_some()
    }

    pub fn entrance_row(&self) -> Option<usize> {
        self.entrance_row
    }

    /// Virtual entrance coordinate, west of column 0.
    pub fn entrance(&self) -> Option<Coord> {
        self.entrance_row.map(|row| Coord::new(row as i32, -1))
    }

    /// Grid cell the entrance opens into.
    pub fn doorstep(&self) -> Option<Coord> {
        self.entrance_row.map(|row| Coord::cell(row, 0))
    }

    pub fn exit_side(&self) -> Direction {
        self.exit_side
    }

    pub fn exit_position(&self) -> usize {
        self.exit_position
    }

    /// Virtual exit coordinate, one step beyond the threshold.
    pub fn exit(&self) -> Coord {
        self.threshold().step(self.exit_side)
    }

    /// Last grid cell before the exit.
    pub fn threshold(&self) -> Coord {
        let position = self.exit_position;
        match self.exit_side {
            Direction::Right => Coord::cell(position, self.cols - 1),
            Direction::Left => Coord::cell(position, 0),
            Direction::Up => Coord::cell(0, position),
            Direction::Down => Coord::cell(self.rows - 1, position),
        }
    }

    /// Any column west of the grid on the entrance row counts as the entrance.
    pub fn is_entrance(&self, coord: Coord) -> bool {
        self.entrance_row
            .is_some_and(|row| coord.row == row as i32 && coord.col < 0)
    }

    pub fn is_exit(&self, coord: Coord) -> bool {
        let position = self.exit_position as i32;
        match self.exit_side {
            Direction::Right => coord.row == position && coord.col == self.cols as i32,
            Direction::Left => coord.row == position && coord.col == -1,
            Direction::Up => coord.col == position && coord.row == -1,
            Direction::Down => coord.col == position && coord.row == self.rows as i32,
        }
    }

    pub fn is_threshold(&self, coord: Coord) -> bool {
        coord == self.threshold()
    }

    /// Classifies `coord`; entrance wins over exit, exit over threshold.
    pub fn classify(&self, coord: Coord) -> PortalKind {
        if self.is_entrance(coord) {
            PortalKind::Entrance
        } else if self.is_exit(coord) {
            PortalKind::Exit
        } else if self.is_threshold(coord) {
            PortalKind::ExitThreshold
        } else {
            PortalKind::None
        }
    }

    /// True while the exit waits for a key that has not been collected.
    pub fn is_exit_locked(&self, treasure: &TreasureState) -> bool {
        treasure.is_exit_key() && !treasure.is_taken()
    }
}
