//! Test utilities and mock worlds for gridcast development.
//!
//! Provides mock implementations of [`WorldQuery`] ([`EmptyWorld`],
//! [`BoxWorld`], [`CountingWorld`], [`FailingWorld`]) and reusable
//! fixtures in [`fixtures`] for building generation scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{cell_box, unit_config, RecordingProbe};

use std::sync::atomic::{AtomicUsize, Ordering};

use gridcast_core::{Point3, QueryError, RayHit, WorldQuery};
use indexmap::IndexMap;

/// A world with no collision geometry: every ray is clear.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyWorld;

impl WorldQuery for EmptyWorld {
    fn intersect(&self, _from: Point3, _to: Point3) -> Result<RayHit, QueryError> {
        Ok(RayHit::miss())
    }
}

/// An axis-aligned solid box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// A box covering `[min_x, max_x] x [min_y, max_y]` at every height.
    pub fn column(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Point3::new(min_x, min_y, f64::NEG_INFINITY),
            max: Point3::new(max_x, max_y, f64::INFINITY),
        }
    }

    /// Parametric entry point of segment `from -> to`, in `[0, 1]`.
    ///
    /// Slab test; boundaries are inclusive and a segment starting inside
    /// the box enters at `t = 0`.
    pub fn entry(&self, from: Point3, to: Point3) -> Option<f64> {
        let mut t_lo = 0.0_f64;
        let mut t_hi = 1.0_f64;
        let axes = [
            (from.x, to.x, self.min.x, self.max.x),
            (from.y, to.y, self.min.y, self.max.y),
            (from.z, to.z, self.min.z, self.max.z),
        ];
        for (p, q, lo, hi) in axes {
            let d = q - p;
            if d == 0.0 {
                if p < lo || p > hi {
                    return None;
                }
                continue;
            }
            let (mut t0, mut t1) = ((lo - p) / d, (hi - p) / d);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_lo = t_lo.max(t0);
            t_hi = t_hi.min(t1);
            if t_lo > t_hi {
                return None;
            }
        }
        Some(t_lo)
    }
}

/// A world made of named axis-aligned boxes.
///
/// Rays report the nearest box they enter. Ties resolve to the box that
/// was added first.
#[derive(Clone, Debug, Default)]
pub struct BoxWorld {
    boxes: IndexMap<String, Aabb>,
}

impl BoxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a named box.
    pub fn with_box(mut self, name: impl Into<String>, aabb: Aabb) -> Self {
        self.boxes.insert(name.into(), aabb);
        self
    }

    /// Add (or replace) a named full-height column over a planar rectangle.
    pub fn with_column(
        self,
        name: impl Into<String>,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        self.with_box(name, Aabb::column(min_x, min_y, max_x, max_y))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Aabb> {
        self.boxes.get(name)
    }
}

impl WorldQuery for BoxWorld {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        let mut best: Option<(f64, &str)> = None;
        for (name, aabb) in &self.boxes {
            if let Some(t) = aabb.entry(from, to) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, name.as_str()));
                }
            }
        }
        Ok(match best {
            Some((t, name)) => RayHit::hit(t * from.distance(&to), name),
            None => RayHit::miss(),
        })
    }
}

/// Wraps a world and counts the queries it answers.
///
/// Uses `AtomicUsize` so it stays `Sync`.
#[derive(Debug, Default)]
pub struct CountingWorld<W> {
    inner: W,
    calls: AtomicUsize,
}

impl<W> CountingWorld<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `intersect()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }
}

impl<W: WorldQuery> WorldQuery for CountingWorld<W> {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.intersect(from, to)
    }
}

/// Answers a configurable number of queries, then fails every call.
#[derive(Debug)]
pub struct FailingWorld<W> {
    inner: W,
    succeed_count: usize,
    calls: AtomicUsize,
}

impl<W> FailingWorld<W> {
    /// Create a world that answers `succeed_count` queries then fails.
    pub fn new(inner: W, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<W: WorldQuery> WorldQuery for FailingWorld<W> {
    fn intersect(&self, from: Point3, to: Point3) -> Result<RayHit, QueryError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(QueryError::Unavailable {
                reason: format!(
                    "deliberate failure after {} successful queries",
                    self.succeed_count
                ),
            });
        }
        self.inner.intersect(from, to)
    }
}
