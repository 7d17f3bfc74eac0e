//! Conversions between world coordinates, cells and linear indices.

use crate::moore::NeighbourOrder;
use gridcast_core::{CellCoord, ConfigError, GridConfig, Point2, Point3};
use smallvec::SmallVec;

/// Linear index of `cell` in a `cells_x` by `cells_y` row-major buffer.
///
/// Returns `None` when either coordinate is negative or not below its
/// dimension. This is the only bounds gate in the mapper.
pub fn cell_to_index(cell: CellCoord, cells_x: u32, cells_y: u32) -> Option<usize> {
    if cell.x < 0 || cell.y < 0 {
        return None;
    }
    let (x, y) = (cell.x as u32, cell.y as u32);
    if x >= cells_x || y >= cells_y {
        return None;
    }
    Some(y as usize * cells_x as usize + x as usize)
}

/// Inverse of [`cell_to_index`].
///
/// Returns `None` for indices past the end of the buffer (or any grid
/// with a zero dimension).
pub fn index_to_cell(index: usize, cells_x: u32, cells_y: u32) -> Option<CellCoord> {
    if cells_x == 0 {
        return None;
    }
    let y = index / cells_x as usize;
    let x = index % cells_x as usize;
    if y >= cells_y as usize {
        return None;
    }
    Some(CellCoord::new(x as i32, y as i32))
}

/// World/cell/index conversions for one validated [`GridConfig`].
///
/// Cells are addressed by their lower corner: cell `(0, 0)` starts at
/// `origin - size / 2`. [`cell_center`](Self::cell_center) is the point
/// the occupancy probe is centred on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapper {
    resolution: f64,
    origin: Point3,
    half_x: f64,
    half_y: f64,
    cells_x: u32,
    cells_y: u32,
}

impl GridMapper {
    /// Build a mapper, validating `config` first.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        let (cells_x, cells_y) = config.cell_dims()?;
        Ok(Self {
            resolution: config.resolution,
            origin: config.origin,
            half_x: config.size_x / 2.0,
            half_y: config.size_y / 2.0,
            cells_x,
            cells_y,
        })
    }

    /// Cells along x (columns).
    pub fn cells_x(&self) -> u32 {
        self.cells_x
    }

    /// Cells along y (rows).
    pub fn cells_y(&self) -> u32 {
        self.cells_y
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells_x as usize * self.cells_y as usize
    }

    /// Cell edge length.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Height of the plane rays are cast in.
    pub fn plane_z(&self) -> f64 {
        self.origin.z
    }

    /// World position of the grid's lower-left corner, with `z` set to
    /// the casting plane.
    pub fn lower_corner(&self) -> Point3 {
        Point3::new(
            self.origin.x - self.half_x,
            self.origin.y - self.half_y,
            self.origin.z,
        )
    }

    /// `true` if `cell` lies inside the grid.
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell_to_index(cell, self.cells_x, self.cells_y).is_some()
    }

    /// World position of the lower corner of `cell`.
    pub fn cell_to_world(&self, cell: CellCoord) -> Point2 {
        Point2::new(
            (self.origin.x - self.half_x) + cell.x as f64 * self.resolution,
            (self.origin.y - self.half_y) + cell.y as f64 * self.resolution,
        )
    }

    /// World position of the centre of `cell`.
    pub fn cell_center(&self, cell: CellCoord) -> Point2 {
        let corner = self.cell_to_world(cell);
        let half = self.resolution / 2.0;
        Point2::new(corner.x + half, corner.y + half)
    }

    /// The cell containing world point `p`.
    ///
    /// Floors rather than rounds, and rather than truncating toward zero:
    /// points left of or below the grid map to negative cells. The result
    /// is not bounds-checked.
    pub fn world_to_cell(&self, p: Point2) -> CellCoord {
        let fx = ((p.x - self.origin.x + self.half_x) / self.resolution).floor();
        let fy = ((p.y - self.origin.y + self.half_y) / self.resolution).floor();
        // `as` saturates. No axis has more than i32::MAX cells, so a
        // saturated coordinate is always outside the grid.
        CellCoord::new(fx as i32, fy as i32)
    }

    /// Linear index of `cell`, or `None` if it lies outside the grid.
    pub fn cell_to_index(&self, cell: CellCoord) -> Option<usize> {
        cell_to_index(cell, self.cells_x, self.cells_y)
    }

    /// Cell at linear `index`, or `None` if the index is past the end.
    pub fn index_to_cell(&self, index: usize) -> Option<CellCoord> {
        index_to_cell(index, self.cells_x, self.cells_y)
    }

    /// In-bounds neighbours of `cell` with their indices, in `order`.
    pub fn neighbours(
        &self,
        cell: CellCoord,
        order: &NeighbourOrder,
    ) -> SmallVec<[(CellCoord, usize); 8]> {
        let mut result = SmallVec::new();
        for &(dx, dy) in order.offsets() {
            let nb = cell.offset(dx, dy);
            if let Some(index) = self.cell_to_index(nb) {
                result.push((nb, index));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moore::MOORE_OFFSETS;
    use proptest::prelude::*;

    fn mapper(resolution: f64, size_x: f64, size_y: f64) -> GridMapper {
        GridMapper::new(&GridConfig {
            resolution,
            size_x,
            size_y,
            ..GridConfig::default()
        })
        .unwrap()
    }

    fn c(x: i32, y: i32) -> CellCoord {
        CellCoord::new(x, y)
    }

    // ── Index tests ─────────────────────────────────────────────

    #[test]
    fn index_is_row_major() {
        assert_eq!(cell_to_index(c(0, 0), 4, 3), Some(0));
        assert_eq!(cell_to_index(c(3, 0), 4, 3), Some(3));
        assert_eq!(cell_to_index(c(0, 1), 4, 3), Some(4));
        assert_eq!(cell_to_index(c(3, 2), 4, 3), Some(11));
    }

    #[test]
    fn index_rejects_out_of_bounds() {
        assert_eq!(cell_to_index(c(-1, 0), 4, 3), None);
        assert_eq!(cell_to_index(c(0, -1), 4, 3), None);
        assert_eq!(cell_to_index(c(4, 0), 4, 3), None);
        assert_eq!(cell_to_index(c(0, 3), 4, 3), None);
        assert_eq!(cell_to_index(c(i32::MIN, i32::MAX), 4, 3), None);
    }

    #[test]
    fn index_to_cell_rejects_past_end() {
        assert_eq!(index_to_cell(11, 4, 3), Some(c(3, 2)));
        assert_eq!(index_to_cell(12, 4, 3), None);
        assert_eq!(index_to_cell(0, 0, 3), None);
    }

    #[test]
    fn non_square_grid_indices_stay_inside_buffer() {
        // 5 columns x 2 rows: every cell maps to a distinct index < 10.
        let m = mapper(1.0, 5.0, 2.0);
        let mut seen = vec![false; m.cell_count()];
        for y in 0..2 {
            for x in 0..5 {
                let i = m.cell_to_index(c(x, y)).unwrap();
                assert!(!seen[i], "index {i} produced twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    // ── World transform tests ───────────────────────────────────

    #[test]
    fn cell_to_world_is_lower_corner() {
        let m = mapper(1.0, 10.0, 10.0);
        assert_eq!(m.cell_to_world(c(0, 0)), Point2::new(-5.0, -5.0));
        assert_eq!(m.cell_to_world(c(5, 7)), Point2::new(0.0, 2.0));
        assert_eq!(m.cell_center(c(5, 7)), Point2::new(0.5, 2.5));
    }

    #[test]
    fn world_to_cell_floors() {
        let m = mapper(1.0, 10.0, 10.0);
        assert_eq!(m.world_to_cell(Point2::new(0.0, 0.0)), c(5, 5));
        assert_eq!(m.world_to_cell(Point2::new(0.99, -0.01)), c(5, 4));
        // Left of the grid: negative, not folded into column 0.
        assert_eq!(m.world_to_cell(Point2::new(-5.5, 0.0)), c(-1, 5));
        assert!(!m.contains(m.world_to_cell(Point2::new(-5.5, 0.0))));
    }

    #[test]
    fn world_to_cell_honours_offset_origin() {
        let m = GridMapper::new(&GridConfig {
            resolution: 0.5,
            origin: Point3::new(10.0, -4.0, 1.0),
            size_x: 4.0,
            size_y: 2.0,
            ..GridConfig::default()
        })
        .unwrap();
        assert_eq!((m.cells_x(), m.cells_y()), (8, 4));
        assert_eq!(m.lower_corner(), Point3::new(8.0, -5.0, 1.0));
        assert_eq!(m.world_to_cell(Point2::new(8.0, -5.0)), c(0, 0));
        assert_eq!(m.world_to_cell(Point2::new(11.9, -3.1)), c(7, 3));
        assert_eq!(m.plane_z(), 1.0);
    }

    #[test]
    fn world_to_cell_saturates_far_away_points() {
        let m = mapper(0.1, 10.0, 10.0);
        let far = m.world_to_cell(Point2::new(1e300, -1e300));
        assert_eq!(far, c(i32::MAX, i32::MIN));
        assert!(!m.contains(far));
    }

    #[test]
    fn widest_axis_keeps_saturated_points_outside() {
        let m = mapper(1.0, 2_147_483_647.0, 1.0);
        let last = c(i32::MAX - 1, 0);
        let index = m.cell_to_index(last).unwrap();
        assert_eq!(m.index_to_cell(index), Some(last));

        let far = m.world_to_cell(Point2::new(1e12, 0.0));
        assert_eq!(far, c(i32::MAX, 0));
        assert_eq!(m.cell_to_index(far), None);
    }

    #[test]
    fn axis_wider_than_i32_is_rejected() {
        let err = GridMapper::new(&GridConfig {
            resolution: 1.0,
            size_x: 3e9,
            size_y: 1.0,
            ..GridConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::AxisTooLong { axis: "size_x", .. }));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior_has_eight() {
        let m = mapper(1.0, 5.0, 5.0);
        let n = m.neighbours(c(2, 2), &NeighbourOrder::default());
        assert_eq!(n.len(), 8);
        for ((cell, index), (dx, dy)) in n.iter().zip(MOORE_OFFSETS) {
            assert_eq!(*cell, c(2 + dx, 2 + dy));
            assert_eq!(Some(*index), m.cell_to_index(*cell));
        }
    }

    #[test]
    fn neighbours_corner_has_three() {
        let m = mapper(1.0, 5.0, 5.0);
        let n = m.neighbours(c(0, 0), &NeighbourOrder::default());
        let cells: Vec<CellCoord> = n.iter().map(|(cell, _)| *cell).collect();
        assert_eq!(cells, vec![c(0, 1), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn neighbours_edge_has_five() {
        let m = mapper(1.0, 5.0, 5.0);
        assert_eq!(m.neighbours(c(4, 2), &NeighbourOrder::default()).len(), 5);
    }

    #[test]
    fn neighbours_single_cell_is_empty() {
        let m = mapper(1.0, 1.0, 1.0);
        assert!(m.neighbours(c(0, 0), &NeighbourOrder::default()).is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn index_round_trips(
            cells_x in 1u32..64,
            cells_y in 1u32..64,
            x in 0i32..64,
            y in 0i32..64,
        ) {
            let cell = c(x % cells_x as i32, y % cells_y as i32);
            let index = cell_to_index(cell, cells_x, cells_y).unwrap();
            prop_assert!(index < cells_x as usize * cells_y as usize);
            prop_assert_eq!(index_to_cell(index, cells_x, cells_y), Some(cell));
        }

        #[test]
        fn cell_round_trips_through_index(
            cells_x in 1u32..64,
            cells_y in 1u32..64,
            index in 0usize..4096,
        ) {
            let index = index % (cells_x as usize * cells_y as usize);
            let cell = index_to_cell(index, cells_x, cells_y).unwrap();
            prop_assert_eq!(cell_to_index(cell, cells_x, cells_y), Some(index));
        }

        #[test]
        fn out_of_range_cells_have_no_index(
            cells_x in 1u32..64,
            cells_y in 1u32..64,
            x in -1000i32..1000,
            y in -1000i32..1000,
        ) {
            let inside = x >= 0 && y >= 0 && x < cells_x as i32 && y < cells_y as i32;
            prop_assert_eq!(cell_to_index(c(x, y), cells_x, cells_y).is_some(), inside);
        }

        #[test]
        fn center_round_trips_for_any_resolution(
            resolution in 0.01f64..2.0,
            size_x in 1.0f64..20.0,
            size_y in 1.0f64..20.0,
            x in 0i32..2000,
            y in 0i32..2000,
        ) {
            prop_assume!(size_x >= resolution && size_y >= resolution);
            let m = mapper(resolution, size_x, size_y);
            let cell = c(x % m.cells_x() as i32, y % m.cells_y() as i32);
            prop_assert_eq!(m.world_to_cell(m.cell_center(cell)), cell);
        }

        #[test]
        fn corner_round_trips_for_dyadic_resolution(
            exp in 0u32..4,
            cells_x in 1u32..40,
            cells_y in 1u32..40,
            x in 0i32..40,
            y in 0i32..40,
        ) {
            // Powers of two keep corner arithmetic exact, so flooring
            // cannot drop to the previous cell.
            let resolution = 1.0 / f64::from(1u32 << exp);
            let m = mapper(
                resolution,
                f64::from(cells_x) * resolution,
                f64::from(cells_y) * resolution,
            );
            let cell = c(x % cells_x as i32, y % cells_y as i32);
            prop_assert_eq!(m.world_to_cell(m.cell_to_world(cell)), cell);
        }
    }
}
