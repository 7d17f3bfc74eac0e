//! The world-query collaborator.
//!
//! The mapper never touches scene geometry directly. Everything it knows
//! about the world comes from point-to-point ray queries answered by a
//! [`WorldQuery`] implementation: a physics engine binding, a mesh BVH,
//! or one of the mock worlds in `gridcast-test-utils`.

use crate::error::QueryError;
use crate::geometry::Point3;
use std::sync::Arc;

/// Answer to a single ray query.
#[derive(Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray start to the first intersection. Meaningless
    /// when nothing was hit.
    pub distance: f64,
    /// Name of the first entity hit, or `None` if the segment is clear.
    pub entity: Option<String>,
}

impl RayHit {
    /// A clear segment.
    pub fn miss() -> Self {
        Self {
            distance: f64::INFINITY,
            entity: None,
        }
    }

    /// A hit on `entity` at `distance` from the ray start.
    pub fn hit(distance: f64, entity: impl Into<String>) -> Self {
        Self {
            distance,
            entity: Some(entity.into()),
        }
    }

    /// `true` if the query reported a non-empty entity name.
    pub fn is_hit(&self) -> bool {
        self.entity.as_deref().is_some_and(|name| !name.is_empty())
    }
}

/// Read-only ray intersection against the world's collision geometry.
///
/// Implementations must tolerate being called many times in quick
/// succession: a generation issues up to `40 * cells_x * cells_y`
/// queries. Calls are synchronous; the mapper defines no timeout or
/// retry policy and aborts the run on the first `Err`.
pub trait WorldQuery {
    /// Intersect the segment `from -> to` with the world.
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError>;
}

impl<W: WorldQuery + ?Sized> WorldQuery for &W {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        (**self).intersect(from, to)
    }
}

impl<W: WorldQuery + ?Sized> WorldQuery for Box<W> {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        (**self).intersect(from, to)
    }
}

impl<W: WorldQuery + ?Sized> WorldQuery for Arc<W> {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        (**self).intersect(from, to)
    }
}
