//! Common error infrastructure for maze-core.
//!
//! Every failure in this crate is either a rejected configuration or a
//! malformed export buffer. Boundary queries on coordinates outside the grid
//! and its portals are caller bugs and panic instead of returning an error.

/// Severity level of an error, used for categorization by hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: dimensions outside `[2, 15]`, truncated export buffer
    Validation,

    /// The engine was driven in an order it does not support.
    ///
    /// Examples: moving before any maze exists
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all maze-core errors.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while creating a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid maze dimensions {rows}x{cols}: both must be within 2..=15")]
    InvalidDimensions { rows: usize, cols: usize },
}

impl EngineError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDimensions { .. } => "invalid_dimensions",
        }
    }
}

/// Errors surfaced by [`crate::MazeEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no maze has been generated yet")]
    NoActiveMaze,
}

impl EngineError for MazeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Grid(err) => err.severity(),
            Self::NoActiveMaze => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Grid(err) => err.error_code(),
            Self::NoActiveMaze => "no_active_maze",
        }
    }
}

/// Errors raised while reading the setup footer of an exported buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("buffer of {len} bytes is too short to hold a footer")]
    Truncated { len: usize },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("buffer holds {actual} cells but the footer declares {expected}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("unknown footer flag bits {bits:#04x}")]
    UnknownFlags { bits: u8 },
}

impl EngineError for ExportError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Truncated { .. } => "truncated_buffer",
            Self::Grid(err) => err.error_code(),
            Self::CellCountMismatch { .. } => "cell_count_mismatch",
            Self::UnknownFlags { .. } => "unknown_footer_flags",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_error_delegates_grid_classification() {
        let err = MazeError::from(GridError::InvalidDimensions { rows: 1, cols: 4 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "invalid_dimensions");
        assert_eq!(
            err.to_string(),
            "invalid maze dimensions 1x4: both must be within 2..=15"
        );
    }

    #[test]
    fn missing_maze_is_internal() {
        assert!(MazeError::NoActiveMaze.severity().is_internal());
        assert_eq!(MazeError::NoActiveMaze.severity().as_str(), "internal");
    }
}
