//! Allocation and assembly of the classification buffer.

use std::time::SystemTime;

use gridcast_core::{CellState, ConfigError, GridConfig};
use gridcast_space::GridMapper;

use crate::grid::OccupancyGrid;

/// Owns the cell buffer of one in-flight generation.
///
/// A builder starts with every cell [`CellState::Unknown`], is filled in
/// by a [`Wavefront`](crate::Wavefront), and is consumed by
/// [`finish()`](Self::finish). It does no geometry of its own.
#[derive(Debug)]
pub struct GridBuilder {
    config: GridConfig,
    mapper: GridMapper,
    frame_id: String,
    stamp: SystemTime,
    cells: Vec<CellState>,
}

impl GridBuilder {
    /// Validate `config` and allocate an all-unknown buffer for it.
    ///
    /// The frame label is taken from the configuration and the stamp is
    /// the current time.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let mapper = GridMapper::new(&config)?;
        let cells = vec![CellState::Unknown; mapper.cell_count()];
        Ok(Self {
            frame_id: config.frame_id.clone(),
            config,
            mapper,
            stamp: SystemTime::now(),
            cells,
        })
    }

    /// Override the generation timestamp.
    pub fn with_stamp(mut self, stamp: SystemTime) -> Self {
        self.stamp = stamp;
        self
    }

    /// Override the frame label.
    pub fn with_frame_id(mut self, frame_id: impl Into<String>) -> Self {
        self.frame_id = frame_id.into();
        self
    }

    /// The configuration being generated.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The coordinate mapper for this grid.
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// The cell buffer in its current state.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Freeze the buffer into a finished grid.
    ///
    /// Every discovered cell must already be terminal: a completed
    /// wavefront leaves no frontier behind.
    pub fn finish(self) -> OccupancyGrid {
        debug_assert!(
            self.cells
                .iter()
                .all(|s| !s.is_discovered() || s.is_terminal()),
            "frontier cells left in a finished grid"
        );
        OccupancyGrid::new(
            self.mapper,
            self.config,
            self.frame_id,
            self.stamp,
            self.cells,
        )
    }
}
