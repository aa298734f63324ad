//! Maze setup parameters and dimension limits.

/// Where the entrance and exit portals are placed when a maze is generated.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PortalArrangement {
    /// Entrance on row 0 of the west side, exit at the lower-right of the east side.
    #[default]
    CornersFixed,
    /// Entrance on row 0 of the west side, exit at the far corner of a random
    /// north, east or south side.
    CornersRandomExitSide,
    /// Entrance on a random west row, exit anywhere along a random north, east
    /// or south side.
    BothRandom,
    /// No entrance; the player starts on a random cell inside the grid.
    ExitOnly,
}

impl PortalArrangement {
    /// Returns true if this arrangement has an entrance portal.
    pub const fn has_entrance(self) -> bool {
        !matches!(self, Self::ExitOnly)
    }

    /// Returns true if any portal coordinate is drawn at random.
    pub const fn is_randomized(self) -> bool {
        !matches!(self, Self::CornersFixed)
    }
}

/// Treasure setting for the next maze.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TreasureMode {
    /// No treasure is hidden.
    #[default]
    None,
    /// Treasure is hidden somewhere in the maze.
    Hidden,
    /// Treasure is hidden and the exit stays locked until it is collected.
    Key,
}

impl TreasureMode {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn is_exit_key(self) -> bool {
        matches!(self, Self::Key)
    }
}

/// Parameters for one maze generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub portals: PortalArrangement,
    pub treasure: TreasureMode,
}

impl MazeConfig {
    // ===== grid limits =====
    /// Smallest accepted row or column count.
    pub const MIN_DIMENSION: usize = 2;
    /// Largest accepted row or column count.
    pub const MAX_DIMENSION: usize = 15;
    /// Number of setup bytes appended to an exported cell buffer.
    pub const FOOTER_LEN: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROWS: usize = 2;
    pub const DEFAULT_COLS: usize = 2;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            portals: PortalArrangement::default(),
            treasure: TreasureMode::default(),
        }
    }

    #[must_use]
    pub const fn with_portals(mut self, portals: PortalArrangement) -> Self {
        self.portals = portals;
        self
    }

    #[must_use]
    pub const fn with_treasure(mut self, treasure: TreasureMode) -> Self {
        self.treasure = treasure;
        self
    }

    /// Returns true if `value` is an accepted row or column count.
    pub const fn dimension_in_range(value: usize) -> bool {
        value >= Self::MIN_DIMENSION && value <= Self::MAX_DIMENSION
    }

    /// Returns true if both dimensions are within `[MIN_DIMENSION, MAX_DIMENSION]`.
    pub const fn has_valid_dimensions(&self) -> bool {
        Self::dimension_in_range(self.rows) && Self::dimension_in_range(self.cols)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!(
            "both_random".parse::<PortalArrangement>().unwrap(),
            PortalArrangement::BothRandom
        );
        assert_eq!(
            "Exit_Only".parse::<PortalArrangement>().unwrap(),
            PortalArrangement::ExitOnly
        );
        assert_eq!("KEY".parse::<TreasureMode>().unwrap(), TreasureMode::Key);
        assert!("sideways".parse::<PortalArrangement>().is_err());
    }

    #[test]
    fn dimension_bounds_are_inclusive() {
        assert!(MazeConfig::new(2, 15).has_valid_dimensions());
        assert!(!MazeConfig::new(1, 5).has_valid_dimensions());
        assert!(!MazeConfig::new(5, 16).has_valid_dimensions());
    }

    #[test]
    fn treasure_mode_flags() {
        assert!(!TreasureMode::None.is_enabled());
        assert!(TreasureMode::Hidden.is_enabled());
        assert!(!TreasureMode::Hidden.is_exit_key());
        assert!(TreasureMode::Key.is_enabled() && TreasureMode::Key.is_exit_key());
    }
}
