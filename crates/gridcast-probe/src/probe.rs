//! The [`CellProbe`] trait and its ray-casting implementation.

use crate::pattern::ProbeSettings;
use gridcast_core::{Point3, QueryError, WorldQuery};

/// Verdict for one probed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// `true` if any ray hit world geometry.
    pub occupied: bool,
    /// Number of ray queries issued to reach the verdict.
    pub rays: u32,
}

/// Decides whether a square cell intersects world geometry.
///
/// Probes are read-only with respect to the grid: they only issue
/// queries against the world.
pub trait CellProbe {
    /// Probe the square of edge `cell_length` centred on `center`.
    fn probe(&self, center: Point3, cell_length: f64) -> Result<ProbeOutcome, QueryError>;
}

impl<P: CellProbe + ?Sized> CellProbe for &P {
    fn probe(&self, center: Point3, cell_length: f64) -> Result<ProbeOutcome, QueryError> {
        (**self).probe(center, cell_length)
    }
}

/// Probes a cell with nested squares of ray casts against a [`WorldQuery`].
///
/// For `step = 1..=steps` the probe casts the segments of a square of
/// edge `cell_length * step / steps` (see
/// [`ProbePattern`](crate::ProbePattern)), smallest square first. The
/// first ray that reports a named entity marks the cell occupied and ends
/// the probe; a cell whose every ray is clear is free. Coverage is
/// bounded, not exhaustive: geometry lying strictly between two nested
/// outlines is not seen.
#[derive(Clone, Debug)]
pub struct RayProbe<W> {
    world: W,
    settings: ProbeSettings,
}

impl<W: WorldQuery> RayProbe<W> {
    /// Probe `world` with the default settings (10 outline steps).
    pub fn new(world: W) -> Self {
        Self::with_settings(world, ProbeSettings::default())
    }

    /// Probe `world` with explicit settings.
    pub fn with_settings(world: W, settings: ProbeSettings) -> Self {
        Self { world, settings }
    }

    /// The world being probed.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// The sampling settings.
    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Consume the probe and return the world.
    pub fn into_world(self) -> W {
        self.world
    }
}

impl<W: WorldQuery> CellProbe for RayProbe<W> {
    fn probe(&self, center: Point3, cell_length: f64) -> Result<ProbeOutcome, QueryError> {
        let pattern = self.settings.pattern();
        let mut rays = 0;
        for step in 1..=self.settings.steps() {
            let side = self.settings.side(cell_length, step);
            for (from, to) in pattern.segments(center, side) {
                rays += 1;
                if self.world.intersect(from, to)?.is_hit() {
                    return Ok(ProbeOutcome {
                        occupied: true,
                        rays,
                    });
                }
            }
        }
        Ok(ProbeOutcome {
            occupied: false,
            rays,
        })
    }
}
