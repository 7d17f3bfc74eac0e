//! Ray layouts used to sample a cell.
//!
//! A cell is sampled with a sequence of nested squares centred on the
//! cell, growing from `cell_length / steps` up to the full cell. Each
//! square contributes a handful of segments; which ones depends on the
//! [`ProbePattern`].
//!
//! ```text
//!   Outline (per step)      Diagonals (per step)
//!     +-----+                 \   /
//!     |     |                   X
//!     +-----+                 /   \
//! ```

use gridcast_core::Point3;
use smallvec::{smallvec, SmallVec};

/// Default number of nested squares per cell.
pub const DEFAULT_STEPS: u32 = 10;

/// Segments cast for one nested square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProbePattern {
    /// The four edges of the square: catches geometry anywhere on each
    /// nested outline, so small obstacles strictly inside the cell are
    /// found by an inner square. Four rays per step.
    #[default]
    Outline,
    /// The two diagonals of the square. Two rays per step.
    Diagonals,
}

impl ProbePattern {
    /// Rays cast per nested square.
    pub const fn rays_per_step(self) -> u32 {
        match self {
            Self::Outline => 4,
            Self::Diagonals => 2,
        }
    }

    /// Segments for a square of edge `side` centred on `center`.
    ///
    /// Outline segments run from the anti-diagonal corners
    /// `(c.x ± s/2, c.y ∓ s/2)` to the main-diagonal corners
    /// `(c.x ± s/2, c.y ± s/2)`, which traces all four edges.
    pub fn segments(self, center: Point3, side: f64) -> SmallVec<[(Point3, Point3); 4]> {
        let h = side / 2.0;
        let at = |dx: f64, dy: f64| Point3::new(center.x + dx, center.y + dy, center.z);
        match self {
            Self::Outline => {
                let mut out = SmallVec::new();
                for i in [-1.0, 1.0] {
                    let start = at(i * h, -i * h);
                    for j in [-1.0, 1.0] {
                        out.push((start, at(j * h, j * h)));
                    }
                }
                out
            }
            Self::Diagonals => smallvec![(at(-h, -h), at(h, h)), (at(-h, h), at(h, -h))],
        }
    }
}

/// How a [`RayProbe`](crate::RayProbe) samples a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeSettings {
    steps: u32,
    pattern: ProbePattern,
}

impl ProbeSettings {
    /// Settings with `steps` nested squares (clamped to at least 1) and
    /// the given pattern.
    pub fn new(steps: u32, pattern: ProbePattern) -> Self {
        Self {
            steps: steps.max(1),
            pattern,
        }
    }

    /// Replace the step count (clamped to at least 1).
    pub fn with_steps(self, steps: u32) -> Self {
        Self::new(steps, self.pattern)
    }

    /// Replace the pattern.
    pub fn with_pattern(self, pattern: ProbePattern) -> Self {
        Self { pattern, ..self }
    }

    /// Number of nested squares.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Segment layout per square.
    pub fn pattern(&self) -> ProbePattern {
        self.pattern
    }

    /// Upper bound on rays cast for one cell.
    pub fn max_rays(&self) -> u32 {
        self.steps * self.pattern.rays_per_step()
    }

    /// Edge length of square `step` (1-based) for a cell of `cell_length`.
    pub fn side(&self, cell_length: f64, step: u32) -> f64 {
        cell_length / f64::from(self.steps) * f64::from(step)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, ProbePattern::default())
    }
}
