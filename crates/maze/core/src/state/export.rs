//! Flat export layout: `rows * cols` cell bytes in row-major order,
//! optionally followed by a three-byte setup footer (rows, cols, flags).

use bitflags::bitflags;

use crate::config::{MazeConfig, PortalArrangement, TreasureMode};
use crate::error::{ExportError, GridError};

use super::MazeGrid;

bitflags! {
    /// Setup flags stored in the last footer byte.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FooterFlags: u8 {
        const PORTALS_RANDOM = 1 << 0;
        const TREASURE       = 1 << 1;
        const EXIT_KEY       = 1 << 2;
    }
}

impl FooterFlags {
    pub fn from_setup(portals: PortalArrangement, treasure: TreasureMode) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::PORTALS_RANDOM, portals.is_randomized());
        flags.set(Self::TREASURE, treasure.is_enabled());
        flags.set(Self::EXIT_KEY, treasure.is_exit_key());
        flags
    }

    /// Treasure mode described by the flags. A key bit without the treasure
    /// bit is read as no treasure.
    pub fn treasure_mode(self) -> TreasureMode {
        match (self.contains(Self::TREASURE), self.contains(Self::EXIT_KEY)) {
            (true, true) => TreasureMode::Key,
            (true, false) => TreasureMode::Hidden,
            (false, _) => TreasureMode::None,
        }
    }
}

/// Setup parameters read back from an exported buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeFooter {
    pub rows: usize,
    pub cols: usize,
    pub flags: FooterFlags,
}

impl MazeFooter {
    pub fn new(rows: usize, cols: usize, flags: FooterFlags) -> Self {
        Self { rows, cols, flags }
    }

    /// Footer describing a maze generated from `config`.
    pub fn from_config(config: &MazeConfig) -> Self {
        Self::new(
            config.rows,
            config.cols,
            FooterFlags::from_setup(config.portals, config.treasure),
        )
    }

    pub fn to_bytes(self) -> [u8; MazeConfig::FOOTER_LEN] {
        [self.rows as u8, self.cols as u8, self.flags.bits()]
    }

    /// Reads the footer from the end of a full export buffer and checks it
    /// against the number of cell bytes in front of it.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is shorter than the footer, declares dimensions
    /// outside `[2, 15]`, carries unknown flag bits, or holds a different
    /// number of cells than declared.
    pub fn parse(bytes: &[u8]) -> Result<Self, ExportError> {
        let len = bytes.len();
        let Some(cell_count) = len.checked_sub(MazeConfig::FOOTER_LEN) else {
            return Err(ExportError::Truncated { len });
        };
        let rows = bytes[cell_count] as usize;
        let cols = bytes[cell_count + 1] as usize;
        let bits = bytes[cell_count + 2];

        if !MazeConfig::dimension_in_range(rows) || !MazeConfig::dimension_in_range(cols) {
            return Err(GridError::InvalidDimensions { rows, cols }.into());
        }
        let flags = FooterFlags::from_bits(bits).ok_or(ExportError::UnknownFlags { bits })?;
        if rows * cols != cell_count {
            return Err(ExportError::CellCountMismatch {
                expected: rows * cols,
                actual: cell_count,
            });
        }
        Ok(Self { rows, cols, flags })
    }
}

/// Serializes the grid cells, optionally appending `footer`.
pub fn export_cells(grid: &MazeGrid, footer: Option<MazeFooter>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(grid.len() + MazeConfig::FOOTER_LEN);
    bytes.extend(grid.cells().iter().map(|&slot| slot as u8));
    if let Some(footer) = footer {
        bytes.extend_from_slice(&footer.to_bytes());
    }
    bytes
}
