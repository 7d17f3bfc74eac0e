//! Occupancy map generation for gridcast.
//!
//! Ties the pieces together: a [`GridBuilder`] allocates the buffer, a
//! [`Wavefront`] flood-fills it from the start pose using a
//! [`CellProbe`](gridcast_probe::CellProbe), and the frozen
//! [`OccupancyGrid`] is handed to a [`Publisher`]. [`MapGenerator`] is the
//! trigger-facing entry point; [`build_map()`] is the same run without
//! publication.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod generator;
pub mod grid;
pub mod metrics;
pub mod publish;
pub mod wavefront;

pub use builder::GridBuilder;
pub use error::GenerateError;
pub use generator::{build_map, GeneratedMap, MapGenerator};
pub use grid::{MapInfo, OccupancyGrid};
pub use metrics::GenerationMetrics;
pub use publish::{ChannelPublisher, NullPublisher, Publisher};
pub use wavefront::{Wavefront, WavefrontReport};
