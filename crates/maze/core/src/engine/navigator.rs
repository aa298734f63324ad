use bitflags::bitflags;

use crate::state::{CellFlags, Coord, Direction, MazeGrid, PortalModel, TreasureState};

use super::BoundaryQuery;

/// Result of one movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// A wall stopped the player; nothing changed.
    Blocked { side: Direction },
    /// The player stepped to `to`.
    Moved { to: Coord },
    /// The player stepped onto the exit.
    Exited { to: Coord },
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

bitflags! {
    /// Side effects of a move, for hosts that animate or log them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveEffects: u8 {
        /// The move was refused; the blocking side should flash.
        const BOUNDARY_FLASH = 1 << 0;
        /// The departed grid cell now carries a breadcrumb.
        const CRUMB_DROPPED  = 1 << 1;
        const TREASURE_TAKEN = 1 << 2;
        const EXIT_REACHED   = 1 << 3;
    }
}

/// Outcome of a move together with its side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub effects: MoveEffects,
}

/// Player position and exit bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerNavigator {
    position: Coord,
    exited: bool,
}

impl PlayerNavigator {
    pub fn new(start: Coord) -> Self {
        Self {
            position: start,
            exited: false,
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// True once the player has stepped onto the exit.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Attempts one step in `direction`.
    ///
    /// After a successful step the side effects run in a fixed order:
    /// breadcrumb on the departed cell, treasure pickup on the new cell, then
    /// the exit check.
    pub fn step(
        &mut self,
        direction: Direction,
        grid: &mut MazeGrid,
        portals: &PortalModel,
        treasure: &mut TreasureState,
    ) -> MoveReport {
        let origin = self.position;
        if BoundaryQuery::new(grid, portals, treasure).has_wall(origin, direction) {
            return MoveReport {
                outcome: MoveOutcome::Blocked { side: direction },
                effects: MoveEffects::BOUNDARY_FLASH,
            };
        }

        let destination = origin.step(direction);
        self.position = destination;
        let mut effects = MoveEffects::empty();

        if grid.contains(origin) {
            grid.clear_flag_at(origin, CellFlags::VISIT_MARK);
            effects |= MoveEffects::CRUMB_DROPPED;
        }

        if grid.contains(destination) && grid.has_flag_at(destination, CellFlags::TREASURE) {
            grid.clear_flag_at(destination, CellFlags::TREASURE);
            treasure.take();
            effects |= MoveEffects::TREASURE_TAKEN;
        }

        let outcome = if portals.is_exit(destination) {
            self.exited = true;
            effects |= MoveEffects::EXIT_REACHED;
            MoveOutcome::Exited { to: destination }
        } else {
            MoveOutcome::Moved { to: destination }
        };

        MoveReport { outcome, effects }
    }
}
