//! Cell occupancy probes for gridcast.
//!
//! A probe decides whether one metric cell intersects world geometry.
//! The wavefront only sees the [`CellProbe`] trait; [`RayProbe`] is the
//! production implementation, which reduces a bounded set of
//! [`WorldQuery`](gridcast_core::WorldQuery) ray casts to a verdict.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pattern;
pub mod probe;

pub use pattern::{ProbePattern, ProbeSettings};
pub use probe::{CellProbe, ProbeOutcome, RayProbe};
