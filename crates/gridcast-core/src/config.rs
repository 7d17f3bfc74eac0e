//! Generation configuration, validation, and TOML loading.
//!
//! [`GridConfig`] is supplied once before a generation run and never
//! mutated by it. [`validate()`](GridConfig::validate) checks structural
//! invariants; the seed placement check (start pose inside the grid) is
//! done by the engine when a run begins, since it needs the cell mapper.

use crate::error::ConfigError;
use crate::geometry::{Point2, Point3};
use serde::Deserialize;
use std::path::Path;

/// Default cell edge length in metric units.
pub const DEFAULT_RESOLUTION: f64 = 0.1;
/// Default metric extent along each axis.
pub const DEFAULT_EXTENT: f64 = 10.0;
/// Default frame label stamped on emitted grids.
pub const DEFAULT_FRAME_ID: &str = "odom";

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for one occupancy map generation.
///
/// The mapped region is the axis-aligned rectangle of `size_x` by
/// `size_y` centered on `origin`. Rays are cast in the plane
/// `z = origin.z`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Cell edge length in metric units. Default: 0.1.
    pub resolution: f64,
    /// Center of the mapped region. Default: `(0, 0, 0)`.
    pub origin: Point3,
    /// Metric extent along x. Default: 10.0.
    pub size_x: f64,
    /// Metric extent along y. Default: 10.0.
    pub size_y: f64,
    /// A pose known to be free, used as the flood-fill seed. Default: `(0, 0)`.
    pub start: Point2,
    /// Frame label carried by the emitted grid. Default: `"odom"`.
    pub frame_id: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            origin: Point3::default(),
            size_x: DEFAULT_EXTENT,
            size_y: DEFAULT_EXTENT,
            start: Point2::default(),
            frame_id: DEFAULT_FRAME_ID.to_string(),
        }
    }
}

impl GridConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cell_dims().map(|_| ())
    }

    /// Grid dimensions in cells, `(floor(size_x / resolution), floor(size_y / resolution))`.
    ///
    /// Validates the configuration on the way.
    pub fn cell_dims(&self) -> Result<(u32, u32), ConfigError> {
        // 1. Resolution must be finite and positive.
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(ConfigError::InvalidResolution {
                value: self.resolution,
            });
        }
        // 2. Extents must be finite and positive.
        for (axis, value) in [("size_x", self.size_x), ("size_y", self.size_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidExtent { axis, value });
            }
        }
        // 3. Origin and start must be finite.
        if !self.origin.is_finite() {
            return Err(ConfigError::NonFiniteOrigin);
        }
        if !self.start.is_finite() {
            return Err(ConfigError::NonFiniteStart);
        }
        // 4. At least one cell per axis, each axis addressable by an i32
        //    coordinate, and the total must fit in u32.
        //    The `as` casts saturate, so absurd ratios land on u64::MAX
        //    and are caught by the overflow check below.
        let cells_x = (self.size_x / self.resolution).floor() as u64;
        let cells_y = (self.size_y / self.resolution).floor() as u64;
        if cells_x == 0 || cells_y == 0 {
            return Err(ConfigError::EmptyGrid { cells_x, cells_y });
        }
        for (axis, cells) in [("size_x", cells_x), ("size_y", cells_y)] {
            if cells > i32::MAX as u64 {
                return Err(ConfigError::AxisTooLong { axis, cells });
            }
        }
        let total = cells_x.saturating_mul(cells_y);
        if total > u64::from(u32::MAX) {
            return Err(ConfigError::CellCountOverflow { value: total });
        }
        Ok((cells_x as u32, cells_y as u32))
    }

    /// World position of the grid's lower-left corner.
    pub fn lower_corner(&self) -> Point2 {
        Point2::new(
            self.origin.x - self.size_x / 2.0,
            self.origin.y - self.size_y / 2.0,
        )
    }

    /// Parse a configuration from TOML.
    ///
    /// Every key is optional and falls back to its default:
    ///
    /// ```toml
    /// map_resolution = 0.05
    /// map_origin = [1.0, 2.0, 0.3]
    /// init_robot_x = 1.0
    /// init_robot_y = 2.0
    /// map_size_x = 20.0
    /// map_size_y = 15.0
    /// frame_id = "map"
    /// ```
    ///
    /// The result is validated before it is returned.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: TomlGridConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        let config = raw.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }
}

// ── TOML schema ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TomlGridConfig {
    map_resolution: f64,
    map_origin: [f64; 3],
    init_robot_x: f64,
    init_robot_y: f64,
    map_size_x: f64,
    map_size_y: f64,
    frame_id: String,
}

impl Default for TomlGridConfig {
    fn default() -> Self {
        Self {
            map_resolution: DEFAULT_RESOLUTION,
            map_origin: [0.0; 3],
            init_robot_x: 0.0,
            init_robot_y: 0.0,
            map_size_x: DEFAULT_EXTENT,
            map_size_y: DEFAULT_EXTENT,
            frame_id: DEFAULT_FRAME_ID.to_string(),
        }
    }
}

impl TomlGridConfig {
    fn into_config(self) -> GridConfig {
        let [ox, oy, oz] = self.map_origin;
        GridConfig {
            resolution: self.map_resolution,
            origin: Point3::new(ox, oy, oz),
            size_x: self.map_size_x,
            size_y: self.map_size_y,
            start: Point2::new(self.init_robot_x, self.init_robot_y),
            frame_id: self.frame_id,
        }
    }
}
