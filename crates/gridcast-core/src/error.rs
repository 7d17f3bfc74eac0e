//! Error types for configuration and world queries.

use crate::cell::CellCoord;
use crate::geometry::Point2;
use std::error::Error;
use std::fmt;

/// Errors detected while loading or validating a [`GridConfig`](crate::GridConfig),
/// or while placing the flood-fill seed.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Resolution is NaN, infinite, zero, or negative.
    InvalidResolution {
        /// The invalid value.
        value: f64,
    },
    /// A metric extent is NaN, infinite, zero, or negative.
    InvalidExtent {
        /// Which axis (`"size_x"` or `"size_y"`).
        axis: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The map origin has a non-finite component.
    NonFiniteOrigin,
    /// The start pose has a non-finite component.
    NonFiniteStart,
    /// The extent is smaller than one cell on at least one axis.
    EmptyGrid {
        /// Cells along x.
        cells_x: u64,
        /// Cells along y.
        cells_y: u64,
    },
    /// One axis has more cells than a [`CellCoord`] component can address.
    AxisTooLong {
        /// Which axis (`"size_x"` or `"size_y"`).
        axis: &'static str,
        /// Cells along that axis.
        cells: u64,
    },
    /// Total cell count exceeds `u32::MAX`.
    CellCountOverflow {
        /// The offending cell count.
        value: u64,
    },
    /// The start pose maps to a cell outside the grid.
    StartOutOfBounds {
        /// The configured start pose.
        start: Point2,
        /// The cell the pose maps to.
        cell: CellCoord,
        /// Cells along x.
        cells_x: u32,
        /// Cells along y.
        cells_y: u32,
    },
    /// The configuration source could not be read.
    Io {
        /// Description of the failure.
        reason: String,
    },
    /// The configuration source could not be parsed.
    Parse {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { value } => {
                write!(f, "resolution must be finite and positive, got {value}")
            }
            Self::InvalidExtent { axis, value } => {
                write!(f, "{axis} must be finite and positive, got {value}")
            }
            Self::NonFiniteOrigin => write!(f, "map origin must be finite"),
            Self::NonFiniteStart => write!(f, "start pose must be finite"),
            Self::EmptyGrid { cells_x, cells_y } => {
                write!(f, "extent yields an empty grid ({cells_x} x {cells_y} cells)")
            }
            Self::AxisTooLong { axis, cells } => {
                write!(f, "{axis} spans {cells} cells, more than i32::MAX")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
            Self::StartOutOfBounds {
                start,
                cell,
                cells_x,
                cells_y,
            } => write!(
                f,
                "start pose {start} maps to cell {cell}, outside [0, {cells_x}) x [0, {cells_y})"
            ),
            Self::Io { reason } => write!(f, "could not read config: {reason}"),
            Self::Parse { reason } => write!(f, "could not parse config: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Failure reported by a [`WorldQuery`](crate::WorldQuery) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The world could not answer the ray query.
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "world query unavailable: {reason}"),
        }
    }
}

impl Error for QueryError {}
