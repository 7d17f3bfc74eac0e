//! 8-connected (Moore) neighbourhood and its visiting order.

use crate::error::SpaceError;

/// All 8 `(dx, dy)` offsets, row-major over `{-1, 0, 1} x {-1, 0, 1}`
/// with the centre removed.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The order in which the wavefront visits a cell's eight neighbours.
///
/// Only the transient frontier order depends on this; the final
/// free/occupied/unknown classification does not. Custom orders exist so
/// that property can be tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighbourOrder {
    offsets: [(i32, i32); 8],
}

impl NeighbourOrder {
    /// Build an order from an explicit offset list.
    ///
    /// Returns `Err(SpaceError::InvalidNeighbourOrder)` unless `offsets`
    /// is a permutation of [`MOORE_OFFSETS`].
    pub fn new(offsets: [(i32, i32); 8]) -> Result<Self, SpaceError> {
        for (i, off) in offsets.iter().enumerate() {
            if !MOORE_OFFSETS.contains(off) {
                return Err(SpaceError::InvalidNeighbourOrder {
                    reason: format!("{off:?} is not a Moore offset"),
                });
            }
            if offsets[..i].contains(off) {
                return Err(SpaceError::InvalidNeighbourOrder {
                    reason: format!("{off:?} appears more than once"),
                });
            }
        }
        Ok(Self { offsets })
    }

    /// The offsets in visiting order.
    pub fn offsets(&self) -> &[(i32, i32); 8] {
        &self.offsets
    }
}

impl Default for NeighbourOrder {
    fn default() -> Self {
        Self {
            offsets: MOORE_OFFSETS,
        }
    }
}
