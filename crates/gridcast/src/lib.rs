//! gridcast: occupancy grids from 3-D worlds.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridcast sub-crates. For most users, adding `gridcast` as a single
//! dependency is sufficient.
//!
//! A generation run starts from a pose known to be free, floods outward
//! over the 8-connected grid, and classifies each reached cell by casting
//! a bounded set of rays through it against a user-supplied
//! [`WorldQuery`](types::WorldQuery). Cells the flood cannot reach stay
//! unknown.
//!
//! # Quick start
//!
//! ```rust
//! use gridcast::prelude::*;
//!
//! // A world with a single wall along x = 2.
//! struct Wall;
//! impl WorldQuery for Wall {
//!     fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
//!         let (lo, hi) = (from.x.min(to.x), from.x.max(to.x));
//!         if lo <= 2.0 && hi >= 2.0 {
//!             Ok(RayHit::hit((2.0 - from.x).abs(), "wall"))
//!         } else {
//!             Ok(RayHit::miss())
//!         }
//!     }
//! }
//!
//! let config = GridConfig { resolution: 1.0, ..GridConfig::default() };
//! let generator = MapGenerator::new(config, RayProbe::new(Wall), ChannelPublisher::new()).unwrap();
//! let map = generator.generate().unwrap();
//!
//! assert_eq!(map.grid.state_at(CellCoord::new(0, 0)), Some(CellState::Free));
//! assert_eq!(map.grid.state_at(CellCoord::new(9, 0)), Some(CellState::Unknown));
//! assert!(map.metrics.occupied > 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridcast-core` | Points, cells, configuration, errors, `WorldQuery` |
//! | [`space`] | `gridcast-space` | World/cell/index conversions and neighbourhoods |
//! | [`probe`] | `gridcast-probe` | Cell occupancy probes and ray patterns |
//! | [`engine`] | `gridcast-engine` | Wavefront, grid assembly, generation, publication |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration, and the world-query trait (`gridcast-core`).
pub use gridcast_core as types;

/// Cell-space math (`gridcast-space`).
///
/// [`space::GridMapper`] converts between world points, cell coordinates
/// and buffer indices.
pub use gridcast_space as space;

/// Cell occupancy probes (`gridcast-probe`).
///
/// [`probe::RayProbe`] is the ray-casting implementation of
/// [`probe::CellProbe`].
pub use gridcast_probe as probe;

/// Map generation (`gridcast-engine`).
///
/// [`engine::MapGenerator`] for triggered generation with publication,
/// [`engine::build_map`] for a single unpublished run.
pub use gridcast_engine as engine;

/// Common imports for typical gridcast usage.
///
/// ```rust
/// use gridcast::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gridcast_core::{
        CellCoord, CellState, GridConfig, Point2, Point3, RayHit, WorldQuery,
    };

    // Errors
    pub use gridcast_core::{ConfigError, QueryError};
    pub use gridcast_engine::GenerateError;

    // Space
    pub use gridcast_space::{GridMapper, NeighbourOrder};

    // Probe
    pub use gridcast_probe::{CellProbe, ProbePattern, ProbeSettings, RayProbe};

    // Engine
    pub use gridcast_engine::{
        build_map, ChannelPublisher, GeneratedMap, GenerationMetrics, MapGenerator, MapInfo,
        OccupancyGrid, Publisher, Wavefront,
    };
}
