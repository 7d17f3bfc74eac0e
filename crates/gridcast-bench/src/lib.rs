//! Benchmark profiles and worlds for the gridcast occupancy mapper.
//!
//! Provides pre-built [`GridConfig`] profiles and deterministic obstacle
//! worlds:
//!
//! - [`reference_profile`]: 10x10 m at 0.1 m (10K cells), the plugin defaults
//! - [`stress_profile`]: 30x30 m at 0.1 m (90K cells)
//! - [`scattered_world`]: seeded square posts scattered over a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridcast_core::{GridConfig, Point2};
use gridcast_test_utils::{Aabb, BoxWorld};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Placement tries allowed per requested post in [`scattered_world`].
pub const MAX_ATTEMPTS_PER_POST: usize = 1_000;

/// The default configuration: 100x100 cells of 0.1 m, seeded at the centre.
pub fn reference_profile() -> GridConfig {
    GridConfig::default()
}

/// A 300x300-cell profile for stress testing.
pub fn stress_profile() -> GridConfig {
    GridConfig {
        size_x: 30.0,
        size_y: 30.0,
        ..GridConfig::default()
    }
}

/// Scatter up to `count` square posts over `config`'s extent.
///
/// Post edges are between one and three cells long. The neighbourhood of
/// the start pose is kept clear so the flood always gets going. The same
/// `seed` always produces the same world. Placement gives up after
/// [`MAX_ATTEMPTS_PER_POST`] tries per requested post, so a profile too
/// small to hold posts away from the start yields fewer (possibly none).
pub fn scattered_world(config: &GridConfig, count: usize, seed: u64) -> BoxWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let corner = config.lower_corner();
    let r = config.resolution;
    let clear = 3.0 * r;

    let mut world = BoxWorld::new();
    let mut placed = 0;
    let attempts = count.saturating_mul(MAX_ATTEMPTS_PER_POST);
    for _ in 0..attempts {
        if placed == count {
            break;
        }
        let edge = rng.gen_range(r..3.0 * r);
        if edge >= config.size_x || edge >= config.size_y {
            continue;
        }
        let x = rng.gen_range(corner.x..corner.x + config.size_x - edge);
        let y = rng.gen_range(corner.y..corner.y + config.size_y - edge);
        let post = Aabb::column(x, y, x + edge, y + edge);
        if overlaps_start(&post, config.start, clear) {
            continue;
        }
        world = world.with_box(format!("post_{placed}"), post);
        placed += 1;
    }
    world
}

fn overlaps_start(post: &Aabb, start: Point2, clear: f64) -> bool {
    post.max.x >= start.x - clear
        && post.min.x <= start.x + clear
        && post.max.y >= start.y - clear
        && post.min.y <= start.y + clear
}
