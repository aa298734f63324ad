//! Maze data model: packed cells, the grid that owns them, portal placement,
//! treasure bookkeeping and the flat export layout.
mod cell;
mod common;
mod export;
mod grid;
mod portal;
mod treasure;

pub use cell::{CellCodec, CellFlags};
pub use common::{Coord, Direction};
pub use export::{FooterFlags, MazeFooter, export_cells};
pub use grid::MazeGrid;
pub use portal::{PortalKind, PortalModel};
pub use treasure::TreasureState;
