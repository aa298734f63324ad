use core::fmt;

/// Signed grid coordinate.
///
/// Signed so that the virtual portal positions just outside the grid (column
/// `-1` for the entrance, one past the last row or column for an exit) are
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Builds a coordinate from in-grid indices.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            row: row as i32,
            col: col as i32,
        }
    }

    /// Returns the coordinate one step away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions, also used to name a cell's sides.
///
/// Rows grow downward: `Up` is north, `Right` is east.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "up", serialize = "north", serialize = "n")]
    Up,
    #[strum(to_string = "down", serialize = "south", serialize = "s")]
    Down,
    #[strum(to_string = "left", serialize = "west", serialize = "w")]
    Left,
    #[strum(to_string = "right", serialize = "east", serialize = "e")]
    Right,
}

impl Direction {
    /// Draw order used by generation: a draw of `i` selects `ALL[i]`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the offset `(d_row, d_col)` for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
