//! Per-run metrics for map generation.
//!
//! [`GenerationMetrics`] is returned alongside every grid so callers can
//! log, profile, or budget world queries.

/// Counters and timing collected during a single generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Cells popped from the wavefront queue and expanded.
    pub cells_expanded: u64,
    /// Cells handed to the occupancy probe. The seed is never probed.
    pub cells_probed: u64,
    /// Ray queries issued against the world.
    pub rays_cast: u64,
    /// Cells classified free in the finished grid.
    pub free: u64,
    /// Cells classified occupied in the finished grid.
    pub occupied: u64,
    /// Cells never reached by the wavefront.
    pub unknown: u64,
    /// Wall-clock time of the run, in microseconds.
    pub elapsed_us: u64,
}

impl GenerationMetrics {
    /// Total cells accounted for.
    pub fn total_cells(&self) -> u64 {
        self.free + self.occupied + self.unknown
    }

    /// Mean rays per probed cell, or `0.0` if nothing was probed.
    pub fn rays_per_probe(&self) -> f64 {
        if self.cells_probed == 0 {
            return 0.0;
        }
        self.rays_cast as f64 / self.cells_probed as f64
    }
}
