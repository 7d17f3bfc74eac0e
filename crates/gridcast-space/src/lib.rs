//! Cell-space math for gridcast occupancy grids.
//!
//! This crate owns every conversion between world coordinates, integer
//! cell coordinates and linear buffer indices, plus the 8-connected
//! (Moore) neighbourhood used by the wavefront.
//!
//! [`GridMapper`] is an immutable value derived from a
//! [`GridConfig`](gridcast_core::GridConfig); it carries no mutable
//! state, so one mapper can be shared freely between probes and runs.
//!
//! # Indexing
//!
//! Buffers are row-major: `index = cy * cells_x + cx`.
//! [`cell_to_index`] is the single bounds gate for the whole mapper;
//! every neighbour passes through it before anything else looks at it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mapper;
pub mod moore;

pub use error::SpaceError;
pub use mapper::{cell_to_index, index_to_cell, GridMapper};
pub use moore::{NeighbourOrder, MOORE_OFFSETS};
