//! Structural properties of the wavefront on random obstacle fields.
//!
//! Worlds are scattered with cell-sized boxes (inset so they never reach
//! a neighbouring cell's outline), which makes the expected result
//! computable independently: a cell is occupied exactly when it holds a
//! box, and the flood is a plain 8-connected BFS over box-free cells.

use std::collections::{HashMap, HashSet, VecDeque};

use gridcast_core::{CellCoord, CellState, GridConfig, Point2};
use gridcast_engine::{build_map, OccupancyGrid, Wavefront};
use gridcast_probe::RayProbe;
use gridcast_space::{NeighbourOrder, MOORE_OFFSETS};
use gridcast_test_utils::{cell_box, unit_config, BoxWorld, RecordingProbe};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WIDTH: u32 = 12;
const HEIGHT: u32 = 9;

struct Field {
    config: GridConfig,
    world: BoxWorld,
    blocked: HashSet<CellCoord>,
    start: CellCoord,
}

/// Scatter boxes over a non-square grid, keeping the start cell clear.
fn scatter(seed: u64, density: f64) -> Field {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let start = CellCoord::new(
        rng.gen_range(0..WIDTH as i32),
        rng.gen_range(0..HEIGHT as i32),
    );
    let probe_config = unit_config(WIDTH, HEIGHT, Point2::default());
    let corner = probe_config.lower_corner();
    let config = unit_config(
        WIDTH,
        HEIGHT,
        Point2::new(
            corner.x + f64::from(start.x) + 0.5,
            corner.y + f64::from(start.y) + 0.5,
        ),
    );

    let mut world = BoxWorld::new();
    let mut blocked = HashSet::new();
    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            let cell = CellCoord::new(x, y);
            if cell != start && rng.gen_bool(density) {
                world = world.with_box(format!("box_{x}_{y}"), cell_box(&config, x, y, 0.1));
                blocked.insert(cell);
            }
        }
    }
    Field {
        config,
        world,
        blocked,
        start,
    }
}

fn in_bounds(c: CellCoord) -> bool {
    (0..WIDTH as i32).contains(&c.x) && (0..HEIGHT as i32).contains(&c.y)
}

fn moore(c: CellCoord) -> impl Iterator<Item = CellCoord> {
    MOORE_OFFSETS
        .iter()
        .map(move |&(dx, dy)| c.offset(dx, dy))
        .filter(|&n| in_bounds(n))
}

/// Independent flood fill over the box layout.
fn expected(field: &Field) -> HashMap<CellCoord, CellState> {
    let mut out = HashMap::new();
    let mut queue = VecDeque::from([field.start]);
    out.insert(field.start, CellState::Free);
    while let Some(c) = queue.pop_front() {
        for n in moore(c) {
            if out.contains_key(&n) {
                continue;
            }
            if field.blocked.contains(&n) {
                out.insert(n, CellState::Occupied);
            } else {
                out.insert(n, CellState::Free);
                queue.push_back(n);
            }
        }
    }
    out
}

fn generate(field: &Field, order: NeighbourOrder) -> OccupancyGrid {
    let wavefront = Wavefront::new(RayProbe::new(&field.world)).with_order(order);
    build_map(&field.config, &wavefront).unwrap().0
}

fn reversed() -> NeighbourOrder {
    let mut offsets = MOORE_OFFSETS;
    offsets.reverse();
    NeighbourOrder::new(offsets).unwrap()
}

fn compass() -> NeighbourOrder {
    NeighbourOrder::new([
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ])
    .unwrap()
}

#[test]
fn fixed_seed_matches_reference_flood() {
    let field = scatter(7, 0.3);
    let grid = generate(&field, NeighbourOrder::default());
    let reference = expected(&field);
    for (cell, state) in grid.iter() {
        let want = reference.get(&cell).copied().unwrap_or(CellState::Unknown);
        assert_eq!(state, want, "cell {cell}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn classification_matches_reference_flood(seed in any::<u64>(), density in 0.0f64..0.6) {
        let field = scatter(seed, density);
        let grid = generate(&field, NeighbourOrder::default());
        let reference = expected(&field);
        for (cell, state) in grid.iter() {
            let want = reference.get(&cell).copied().unwrap_or(CellState::Unknown);
            prop_assert_eq!(state, want, "cell {}", cell);
        }
    }

    #[test]
    fn every_cell_is_probed_at_most_once(seed in any::<u64>(), density in 0.0f64..0.6) {
        let field = scatter(seed, density);
        let probe = RecordingProbe::new(RayProbe::new(&field.world));
        let wavefront = Wavefront::new(&probe);
        let (grid, metrics) = build_map(&field.config, &wavefront).unwrap();

        let centers = probe.centers();
        prop_assert_eq!(centers.len() as u64, metrics.cells_probed);
        let mut seen = HashSet::new();
        for c in centers {
            let cell = grid.world_to_cell(c.xy());
            prop_assert!(cell.is_some());
            let cell = cell.unwrap();
            prop_assert!(seen.insert(cell), "cell {} probed twice", cell);
            prop_assert_ne!(cell, field.start, "seed cell was probed");
        }
        // Every discovered cell other than the seed was probed.
        let discovered = grid.cells().iter().filter(|s| s.is_discovered()).count();
        prop_assert_eq!(seen.len(), discovered - 1);
    }

    #[test]
    fn neighbour_order_does_not_change_the_result(seed in any::<u64>(), density in 0.0f64..0.6) {
        let field = scatter(seed, density);
        let base = generate(&field, NeighbourOrder::default());
        for order in [reversed(), compass()] {
            let other = generate(&field, order);
            prop_assert_eq!(base.cells(), other.cells());
        }
    }

    #[test]
    fn free_cells_are_connected_to_the_seed(seed in any::<u64>(), density in 0.0f64..0.6) {
        let field = scatter(seed, density);
        let grid = generate(&field, NeighbourOrder::default());
        prop_assert_eq!(grid.state_at(field.start), Some(CellState::Free));

        let mut reached = HashSet::from([field.start]);
        let mut queue = VecDeque::from([field.start]);
        while let Some(c) = queue.pop_front() {
            for n in moore(c) {
                if grid.state_at(n) == Some(CellState::Free) && reached.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        prop_assert_eq!(reached.len(), grid.count(CellState::Free));
    }

    #[test]
    fn finished_grids_are_closed(seed in any::<u64>(), density in 0.0f64..0.6) {
        let field = scatter(seed, density);
        let grid = generate(&field, NeighbourOrder::default());
        prop_assert_eq!(grid.count(CellState::Frontier), 0);
        prop_assert!(grid
            .cells()
            .iter()
            .filter(|s| s.is_discovered())
            .all(|s| s.is_terminal()));
        // No free cell borders an unknown one, and every occupied cell
        // borders a free one.
        for (cell, state) in grid.iter() {
            let around: Vec<_> = moore(cell).filter_map(|n| grid.state_at(n)).collect();
            match state {
                CellState::Free => prop_assert!(!around.contains(&CellState::Unknown)),
                CellState::Occupied => prop_assert!(around.contains(&CellState::Free)),
                _ => {}
            }
        }
    }
}
