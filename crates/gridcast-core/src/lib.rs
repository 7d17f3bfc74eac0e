//! Core types and traits for the gridcast occupancy mapper.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the rest of the workspace:
//! world-space points, cell coordinates and states, the generation
//! configuration, error types, and the [`WorldQuery`] collaborator trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod error;
pub mod geometry;
pub mod world;

pub use cell::{CellCoord, CellState};
pub use config::GridConfig;
pub use error::{ConfigError, QueryError};
pub use geometry::{Point2, Point3};
pub use world::{RayHit, WorldQuery};
