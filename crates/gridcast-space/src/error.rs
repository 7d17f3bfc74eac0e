//! Error types for cell-space operations.

use std::fmt;

/// Errors arising from neighbourhood construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A custom neighbour visiting order is not a permutation of the
    /// eight Moore offsets.
    InvalidNeighbourOrder {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNeighbourOrder { reason } => {
                write!(f, "invalid neighbour order: {reason}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
