//! Breadth-first wavefront classification.
//!
//! Starting from the cell under the configured start pose, the wavefront
//! expands over the 8-connected neighbourhood. Each cell leaves
//! [`CellState::Unknown`] at most once:
//!
//! ```text
//!   Unknown ──probe clear──▶ Frontier ──popped──▶ Free
//!      │
//!      └──probe hit──▶ Occupied
//! ```
//!
//! Occupied cells are never enqueued, so the flood stops at geometry and
//! anything it cannot reach stays unknown. Because the `Unknown` check
//! guards every probe, each cell is probed at most once and the final
//! buffer does not depend on the neighbour visiting order.

use std::collections::VecDeque;

use gridcast_core::{CellCoord, CellState, ConfigError};
use gridcast_probe::CellProbe;
use gridcast_space::NeighbourOrder;
use tracing::{debug, error};

use crate::builder::GridBuilder;
use crate::error::GenerateError;

/// Counters from one wavefront pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WavefrontReport {
    /// The seed cell.
    pub start: CellCoord,
    /// Cells popped from the queue and marked free.
    pub cells_expanded: u64,
    /// Cells handed to the probe.
    pub cells_probed: u64,
    /// Ray queries the probe reported issuing.
    pub rays_cast: u64,
}

/// Flood-fill classifier over a [`GridBuilder`]'s buffer.
#[derive(Clone, Debug)]
pub struct Wavefront<P> {
    probe: P,
    order: NeighbourOrder,
}

impl<P: CellProbe> Wavefront<P> {
    /// A wavefront using `probe` and the row-major neighbour order.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            order: NeighbourOrder::default(),
        }
    }

    /// Replace the neighbour visiting order.
    pub fn with_order(mut self, order: NeighbourOrder) -> Self {
        self.order = order;
        self
    }

    /// The occupancy probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// The neighbour visiting order.
    pub fn order(&self) -> &NeighbourOrder {
        &self.order
    }

    /// Classify every cell reachable from the start pose.
    ///
    /// The seed cell is taken as free without being probed. Cells are
    /// probed at their centre, in the plane `z = origin.z`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::StartOutOfBounds`] if the start pose lies outside
    /// the grid (the buffer is left untouched), or the probe's
    /// [`QueryError`](gridcast_core::QueryError) if the world stops
    /// answering (the buffer is left partially classified and must be
    /// discarded).
    pub fn run(&self, builder: &mut GridBuilder) -> Result<WavefrontReport, GenerateError> {
        let mapper = *builder.mapper();
        let start_pose = builder.config().start;
        let start = mapper.world_to_cell(start_pose);
        let Some(start_index) = mapper.cell_to_index(start) else {
            error!(
                start = %start_pose,
                cell = %start,
                cells_x = mapper.cells_x(),
                cells_y = mapper.cells_y(),
                "start pose lies outside the grid"
            );
            return Err(ConfigError::StartOutOfBounds {
                start: start_pose,
                cell: start,
                cells_x: mapper.cells_x(),
                cells_y: mapper.cells_y(),
            }
            .into());
        };
        debug!(cell = %start, index = start_index, "seeding wavefront");

        let cell_length = mapper.resolution();
        let plane_z = mapper.plane_z();
        let cells = builder.cells_mut();
        let mut report = WavefrontReport {
            start,
            ..WavefrontReport::default()
        };

        let mut queue = VecDeque::new();
        queue.push_back(start_index);

        while let Some(index) = queue.pop_front() {
            let Some(cell) = mapper.index_to_cell(index) else {
                continue;
            };
            cells[index] = CellState::Free;
            report.cells_expanded += 1;

            for (nb, nb_index) in mapper.neighbours(cell, &self.order) {
                if cells[nb_index] != CellState::Unknown {
                    continue;
                }
                let center = mapper.cell_center(nb).with_z(plane_z);
                let outcome = self.probe.probe(center, cell_length)?;
                report.cells_probed += 1;
                report.rays_cast += u64::from(outcome.rays);
                if outcome.occupied {
                    cells[nb_index] = CellState::Occupied;
                } else {
                    cells[nb_index] = CellState::Frontier;
                    queue.push_back(nb_index);
                }
            }
        }

        Ok(report)
    }
}
