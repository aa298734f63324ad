//! Maze generation and navigation rules.
//!
//! `maze-core` carves rectangular grids into perfect mazes with the
//! Aldous-Broder random walk, stores every cell in one packed byte, and
//! answers the boundary queries a host needs to move a single player from the
//! entrance to the exit. All mutation of a running game flows through
//! [`engine::MazeEngine`]; the component types are re-exported here for hosts
//! and tests that assemble them directly.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod generate;
pub mod state;

pub use config::{MazeConfig, PortalArrangement, TreasureMode};
pub use engine::{
    BoundaryQuery, CellView, MazeEngine, MoveEffects, MoveOutcome, MoveReport, PlayerNavigator,
};
pub use env::{MazeRng, PcgRng};
pub use error::{EngineError, ErrorSeverity, ExportError, GridError, MazeError};
pub use generate::{GeneratedMaze, GenerationReport, MazeGenerator};
pub use state::{
    CellCodec, CellFlags, Coord, Direction, FooterFlags, MazeFooter, MazeGrid, PortalKind,
    PortalModel, TreasureState,
};
