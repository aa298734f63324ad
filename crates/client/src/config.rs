//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use maze_core::{MazeConfig, PortalArrangement, TreasureMode};

/// Settings for one interactive session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Setup of the first maze; later mazes reuse portals and treasure.
    pub maze: MazeConfig,
    /// Fixed seed for reproducible sessions. Random when unset.
    pub seed: Option<u64>,
    /// Directory for daily log files. Stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_ROWS` / `MAZE_COLS` - First maze size (default: 2x2)
    /// - `MAZE_PORTALS` - Portal arrangement, e.g. `both_random` (default: corners_fixed)
    /// - `MAZE_TREASURE` - `none`, `hidden` or `key` (default: none)
    /// - `MAZE_SEED` - Random seed (default: drawn from the OS)
    /// - `MAZE_LOG_DIR` - Directory for daily log files (default: none)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(rows) = read_env(&lookup, "MAZE_ROWS") {
            config.maze.rows = rows;
        }
        if let Some(cols) = read_env(&lookup, "MAZE_COLS") {
            config.maze.cols = cols;
        }
        if let Some(portals) = read_env(&lookup, "MAZE_PORTALS") {
            config.maze.portals = portals;
        }
        if let Some(treasure) = read_env(&lookup, "MAZE_TREASURE") {
            config.maze.treasure = treasure;
        }

        config.seed = read_env(&lookup, "MAZE_SEED");
        config.log_dir = lookup("MAZE_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    pub fn portals(&self) -> PortalArrangement {
        self.maze.portals
    }

    pub fn treasure(&self) -> TreasureMode {
        self.maze.treasure
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
