//! The finished occupancy grid artifact.
//!
//! An [`OccupancyGrid`] is produced once per generation by
//! [`GridBuilder::finish()`](crate::GridBuilder::finish) and is read-only
//! from then on. Publication shares it behind an `Arc`.

use std::time::SystemTime;

use gridcast_core::{CellCoord, CellState, GridConfig, Point2, Point3};
use gridcast_space::GridMapper;

/// Dimensions and placement of a grid, as carried by the emitted map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapInfo {
    /// Cells along x.
    pub width: u32,
    /// Cells along y.
    pub height: u32,
    /// Cell edge length in metric units.
    pub resolution: f64,
    /// World position of cell `(0, 0)`'s lower corner, at the casting
    /// plane height. Orientation is always the identity.
    pub origin: Point3,
}

impl MapInfo {
    pub(crate) fn from_mapper(mapper: &GridMapper) -> Self {
        Self {
            width: mapper.cells_x(),
            height: mapper.cells_y(),
            resolution: mapper.resolution(),
            origin: mapper.lower_corner(),
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A classified 2-D occupancy grid.
///
/// Cells are stored row-major (`index = cy * width + cx`). After a
/// completed run no cell is [`CellState::Frontier`]: every cell is free,
/// occupied, or unknown (never reached from the start pose).
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    info: MapInfo,
    frame_id: String,
    stamp: SystemTime,
    mapper: GridMapper,
    config: GridConfig,
    cells: Vec<CellState>,
}

impl OccupancyGrid {
    pub(crate) fn new(
        mapper: GridMapper,
        config: GridConfig,
        frame_id: String,
        stamp: SystemTime,
        cells: Vec<CellState>,
    ) -> Self {
        debug_assert_eq!(cells.len(), mapper.cell_count());
        Self {
            info: MapInfo::from_mapper(&mapper),
            frame_id,
            stamp,
            mapper,
            config,
            cells,
        }
    }

    /// Dimensions and placement.
    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// Cells along x.
    pub fn width(&self) -> u32 {
        self.info.width
    }

    /// Cells along y.
    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Frame label the grid is expressed in.
    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// When the grid was allocated.
    pub fn stamp(&self) -> SystemTime {
        self.stamp
    }

    /// The configuration that produced this grid.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The coordinate mapper for this grid.
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// The row-major cell buffer.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State of `cell`, or `None` if it lies outside the grid.
    pub fn state_at(&self, cell: CellCoord) -> Option<CellState> {
        self.mapper.cell_to_index(cell).map(|i| self.cells[i])
    }

    /// State of the cell containing world point `p`, or `None` if `p`
    /// lies outside the grid.
    pub fn state_at_world(&self, p: Point2) -> Option<CellState> {
        self.world_to_cell(p).and_then(|cell| self.state_at(cell))
    }

    /// The cell containing world point `p`, or `None` if `p` lies
    /// outside the grid.
    pub fn world_to_cell(&self, p: Point2) -> Option<CellCoord> {
        let cell = self.mapper.world_to_cell(p);
        self.mapper.contains(cell).then_some(cell)
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// The buffer as occupancy codes: `-1` unknown, `0` free, `100`
    /// occupied.
    pub fn to_occupancy_data(&self) -> Vec<i8> {
        self.cells.iter().map(|s| s.code()).collect()
    }

    /// Iterate `(cell, state)` pairs in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + '_ {
        let width = self.info.width as usize;
        self.cells.iter().enumerate().map(move |(i, &s)| {
            let cell = CellCoord::new((i % width) as i32, (i / width) as i32);
            (cell, s)
        })
    }
}
