//! Map generation: the trigger seam.
//!
//! [`build_map()`] is one complete run as a plain function call:
//! allocate, classify, freeze. [`MapGenerator`] wraps it with a fixed
//! configuration, a [`Publisher`], and an in-flight guard, and is what a
//! transport (service handler, message queue, timer) calls into.
//!
//! # Concurrency
//!
//! `MapGenerator::generate()` takes `&self` and may be called from any
//! number of threads. At most one run is in flight: an overlapping call
//! returns [`GenerateError::Busy`] immediately instead of queueing.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use gridcast_core::{CellState, ConfigError, GridConfig};
use gridcast_probe::CellProbe;
use gridcast_space::NeighbourOrder;
use tracing::{error, info, warn};

use crate::builder::GridBuilder;
use crate::error::GenerateError;
use crate::grid::OccupancyGrid;
use crate::metrics::GenerationMetrics;
use crate::publish::Publisher;
use crate::wavefront::Wavefront;

/// Run one full generation for `config` and return the finished grid.
///
/// Nothing is published; see [`MapGenerator`] for that.
pub fn build_map<P: CellProbe>(
    config: &GridConfig,
    wavefront: &Wavefront<P>,
) -> Result<(OccupancyGrid, GenerationMetrics), GenerateError> {
    let started = Instant::now();
    let mut builder = GridBuilder::new(config.clone())?;
    let report = wavefront.run(&mut builder)?;
    let grid = builder.finish();

    let metrics = GenerationMetrics {
        cells_expanded: report.cells_expanded,
        cells_probed: report.cells_probed,
        rays_cast: report.rays_cast,
        free: grid.count(CellState::Free) as u64,
        occupied: grid.count(CellState::Occupied) as u64,
        unknown: grid.count(CellState::Unknown) as u64,
        elapsed_us: started.elapsed().as_micros() as u64,
    };
    Ok((grid, metrics))
}

/// Result of a successful [`MapGenerator::generate()`] call.
#[derive(Clone, Debug)]
pub struct GeneratedMap {
    /// The published grid.
    pub grid: Arc<OccupancyGrid>,
    /// Counters and timing for the run.
    pub metrics: GenerationMetrics,
}

/// Clears the in-flight flag when a run ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ── MapGenerator ───────────────────────────────────────────────────

/// Generates and publishes occupancy grids on request.
///
/// # Examples
///
/// ```
/// use gridcast_core::{GridConfig, Point3, QueryError, RayHit, WorldQuery};
/// use gridcast_engine::{ChannelPublisher, MapGenerator};
/// use gridcast_probe::RayProbe;
///
/// struct Nothing;
/// impl WorldQuery for Nothing {
///     fn intersect(&self, _: Point3, _: Point3) -> Result<RayHit, QueryError> {
///         Ok(RayHit::miss())
///     }
/// }
///
/// let config = GridConfig { resolution: 1.0, ..GridConfig::default() };
/// let generator =
///     MapGenerator::new(config, RayProbe::new(Nothing), ChannelPublisher::new()).unwrap();
/// let rx = generator.publisher().subscribe();
///
/// let map = generator.generate().unwrap();
/// assert_eq!(map.metrics.free, 100);
/// assert_eq!(rx.recv().unwrap().width(), 10);
/// ```
pub struct MapGenerator<P, B> {
    config: GridConfig,
    wavefront: Wavefront<P>,
    publisher: B,
    in_flight: AtomicBool,
    completed: AtomicU64,
}

impl<P: CellProbe, B: Publisher> MapGenerator<P, B> {
    /// Create a generator, validating `config` up front.
    ///
    /// The start pose is checked at generation time.
    pub fn new(config: GridConfig, probe: P, publisher: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            wavefront: Wavefront::new(probe),
            publisher,
            in_flight: AtomicBool::new(false),
            completed: AtomicU64::new(0),
        })
    }

    /// Replace the neighbour visiting order.
    pub fn with_neighbour_order(mut self, order: NeighbourOrder) -> Self {
        self.wavefront = self.wavefront.with_order(order);
        self
    }

    /// The configuration used for every run.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The wavefront (and through it, the probe).
    pub fn wavefront(&self) -> &Wavefront<P> {
        &self.wavefront
    }

    /// The publisher finished grids are handed to.
    pub fn publisher(&self) -> &B {
        &self.publisher
    }

    /// `true` while a run is in flight.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Number of runs that completed and published.
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Generate one grid and publish it.
    ///
    /// Blocks until the run completes. On any error nothing is
    /// published.
    pub fn generate(&self) -> Result<GeneratedMap, GenerateError> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            warn!("map generation requested while another is in progress");
            return Err(GenerateError::Busy);
        };

        info!(
            resolution = self.config.resolution,
            size_x = self.config.size_x,
            size_y = self.config.size_y,
            start = %self.config.start,
            "generating occupancy map"
        );

        let (grid, metrics) = match build_map(&self.config, &self.wavefront) {
            Ok(out) => out,
            Err(e) => {
                if matches!(e, GenerateError::Query(_)) {
                    error!(error = %e, "map generation aborted");
                }
                return Err(e);
            }
        };

        let grid = Arc::new(grid);
        self.publisher.publish(Arc::clone(&grid));
        self.completed.fetch_add(1, Ordering::Relaxed);

        info!(
            width = grid.width(),
            height = grid.height(),
            free = metrics.free,
            occupied = metrics.occupied,
            unknown = metrics.unknown,
            rays = metrics.rays_cast,
            elapsed_us = metrics.elapsed_us,
            "occupancy map published"
        );
        Ok(GeneratedMap { grid, metrics })
    }
}

impl<P, B> std::fmt::Debug for MapGenerator<P, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapGenerator")
            .field("config", &self.config)
            .field("in_flight", &self.in_flight)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
