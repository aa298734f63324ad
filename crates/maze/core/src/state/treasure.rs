use crate::config::TreasureMode;

use super::Coord;

/// Treasure setup and possession for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreasureState {
    enabled: bool,
    is_exit_key: bool,
    location: Coord,
    taken: bool,
}

impl TreasureState {
    /// Creates the state for a freshly generated maze; nothing is taken yet.
    pub fn new(mode: TreasureMode, location: Coord) -> Self {
        Self {
            enabled: mode.is_enabled(),
            is_exit_key: mode.is_exit_key(),
            location,
            taken: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_exit_key(&self) -> bool {
        self.is_exit_key
    }

    /// Grid cell chosen for the treasure. Chosen even when treasure is disabled.
    pub fn location(&self) -> Coord {
        self.location
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }

    /// Hands the treasure to the player. Later calls have no effect.
    pub fn take(&mut self) {
        self.taken = true;
    }
}
