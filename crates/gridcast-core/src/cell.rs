//! Cell coordinates and per-cell classification state.

use std::fmt;

/// Integer coordinate of a grid cell: `x` is the column, `y` the row.
///
/// A `CellCoord` may lie outside the grid (e.g. a neighbour of an edge
/// cell, or the cell under a pose outside the mapped extent); bounds are
/// only enforced when converting to a linear index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl CellCoord {
    /// Create a coordinate from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    ///
    /// Saturates at the `i32` range, which is always out of bounds for
    /// any constructible grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Chebyshev (L-inf) distance, the step count on an 8-connected grid.
    pub fn chebyshev(&self, other: &CellCoord) -> u32 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx.max(dy) as u32
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Classification of a single cell.
///
/// The discriminants are the occupancy codes carried by the emitted
/// grid buffer: `-1` unknown, `0` free, `100` occupied. `Frontier` (`50`)
/// only exists while a generation is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum CellState {
    /// Not reached by the wavefront.
    #[default]
    Unknown = -1,
    /// Reachable and clear of geometry.
    Free = 0,
    /// Enqueued for expansion, not yet expanded.
    Frontier = 50,
    /// Intersects world geometry.
    Occupied = 100,
}

impl CellState {
    /// The occupancy code for this state.
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Decode an occupancy code. Returns `None` for codes outside
    /// `{-1, 0, 50, 100}`.
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Unknown),
            0 => Some(Self::Free),
            50 => Some(Self::Frontier),
            100 => Some(Self::Occupied),
            _ => None,
        }
    }

    /// `true` once the cell has left `Unknown`.
    pub const fn is_discovered(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// `true` for states that never change again within a run.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Free | Self::Occupied)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Free => "free",
            Self::Frontier => "frontier",
            Self::Occupied => "occupied",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_occupancy_convention() {
        assert_eq!(CellState::Unknown.code(), -1);
        assert_eq!(CellState::Free.code(), 0);
        assert_eq!(CellState::Frontier.code(), 50);
        assert_eq!(CellState::Occupied.code(), 100);
    }

    #[test]
    fn from_code_decodes_every_state() {
        for state in [
            CellState::Unknown,
            CellState::Free,
            CellState::Frontier,
            CellState::Occupied,
        ] {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
        assert_eq!(CellState::from_code(1), None);
        assert_eq!(CellState::from_code(-100), None);
    }

    #[test]
    fn default_state_is_unknown() {
        assert_eq!(CellState::default(), CellState::Unknown);
        assert!(!CellState::Unknown.is_discovered());
        assert!(CellState::Frontier.is_discovered());
        assert!(!CellState::Frontier.is_terminal());
        assert!(CellState::Occupied.is_terminal());
    }

    #[test]
    fn offset_saturates_instead_of_wrapping() {
        let c = CellCoord::new(i32::MAX, i32::MIN).offset(1, -1);
        assert_eq!(c, CellCoord::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn chebyshev_matches_king_moves() {
        let a = CellCoord::new(0, 0);
        assert_eq!(a.chebyshev(&CellCoord::new(1, 1)), 1);
        assert_eq!(a.chebyshev(&CellCoord::new(3, -4)), 4);
    }
}
