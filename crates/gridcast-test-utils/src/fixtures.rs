//! Reusable scenario fixtures.
//!
//! - [`unit_config`]: a grid with 1.0 m cells centred on the origin.
//! - [`cell_box`]: a column filling (almost) exactly one cell.
//! - [`RecordingProbe`]: wraps a probe and records every cell centre
//!   it is asked about.

use std::sync::Mutex;

use gridcast_core::{GridConfig, Point2, Point3, QueryError};
use gridcast_probe::{CellProbe, ProbeOutcome};

use crate::Aabb;

/// A `cells_x` by `cells_y` grid of 1.0 m cells centred on the origin,
/// seeded at `start`.
pub fn unit_config(cells_x: u32, cells_y: u32, start: Point2) -> GridConfig {
    GridConfig {
        resolution: 1.0,
        origin: Point3::default(),
        size_x: f64::from(cells_x),
        size_y: f64::from(cells_y),
        start,
        ..GridConfig::default()
    }
}

/// A full-height column over the footprint of cell `(cx, cy)` of
/// `config`, shrunk by `inset` (a fraction of the resolution) on every
/// side.
///
/// A small positive inset keeps the column strictly inside the cell, so
/// neighbouring cells' outlines never graze it.
pub fn cell_box(config: &GridConfig, cx: i32, cy: i32, inset: f64) -> Aabb {
    let corner = config.lower_corner();
    let r = config.resolution;
    let min_x = corner.x + f64::from(cx) * r + inset * r;
    let min_y = corner.y + f64::from(cy) * r + inset * r;
    let max_x = corner.x + f64::from(cx + 1) * r - inset * r;
    let max_y = corner.y + f64::from(cy + 1) * r - inset * r;
    Aabb::column(min_x, min_y, max_x, max_y)
}

/// Wraps a probe and records the centre of every probed cell.
///
/// Backed by a `Mutex` so it satisfies `Sync`.
pub struct RecordingProbe<P> {
    inner: P,
    centers: Mutex<Vec<Point3>>,
}

impl<P> RecordingProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            centers: Mutex::new(Vec::new()),
        }
    }

    /// Every probed centre, in probing order.
    pub fn centers(&self) -> Vec<Point3> {
        self.centers
            .lock()
            .map(|c| c.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// How many cells have been probed.
    pub fn calls(&self) -> usize {
        self.centers().len()
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: CellProbe> CellProbe for RecordingProbe<P> {
    fn probe(&self, center: Point3, cell_length: f64) -> Result<ProbeOutcome, QueryError> {
        if let Ok(mut centers) = self.centers.lock() {
            centers.push(center);
        }
        self.inner.probe(center, cell_length)
    }
}
