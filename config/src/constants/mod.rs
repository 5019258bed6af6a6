//! Centralized configuration values shared by the mesh generators.
//!
//! Constants are grouped by concern: numeric tolerances, clamping minimums
//! and per-shape defaults. Generators read the minimums when normalizing
//! caller parameters and the defaults when building `Default` parameter sets.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for floating-point comparisons of single-precision geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1_f32 + 0.2 - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f32 = 1.0e-6;

/// Maximum deviation from unit length accepted for a vertex normal.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE;
/// let len = 0.99995_f32;
/// assert!((len - 1.0).abs() <= NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f32 = 1.0e-4;

/// Distance below which two positions are treated as the same point when
/// welding seams for topology checks.
///
/// # Examples
/// ```
/// use config::constants::POSITION_WELD_EPSILON;
/// assert!(POSITION_WELD_EPSILON > 0.0);
/// ```
pub const POSITION_WELD_EPSILON: f32 = 1.0e-4;

// =============================================================================
// CLAMPING MINIMUMS
// =============================================================================

/// Fewest slices around a circular sweep that still encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_ANGULAR_RESOLUTION;
/// assert_eq!(MIN_ANGULAR_RESOLUTION, 3);
/// ```
pub const MIN_ANGULAR_RESOLUTION: u32 = 3;

/// Fewest rings between the center and the rim of a disk-like surface.
pub const MIN_RADIAL_RESOLUTION: u32 = 1;

/// Fewest subdivisions along a linear sweep (height, cylinder band).
pub const MIN_VERTICAL_RESOLUTION: u32 = 1;

/// Fewest slices along the Lissajous sweep path.
///
/// The path oscillates vertically, so a triangle-shaped path is too coarse
/// to follow it.
pub const MIN_LISSAJOUS_MAJOR_RESOLUTION: u32 = 4;

/// Fewest grid points along one edge of a box face or extruded wall
/// (both end points included).
pub const MIN_GRID_POINTS: u32 = 2;

/// Fewest grid points along one edge of a cube-sphere face.
///
/// Two points per edge would collapse the sphere into an octahedron-like
/// hull, so the warp needs at least one interior point.
pub const MIN_CUBE_SPHERE_POINTS: u32 = 3;

/// Smallest squircle exponent accepted; `p = 1` is a diamond, `p = 2` a
/// circle and larger values approach a square.
pub const MIN_SQUIRCLE_EXPONENT: f32 = 1.0;

/// Upper bound on geodesic subdivision passes.
///
/// Each pass multiplies the triangle count by four; eight passes already
/// produce 1.3 million triangles.
///
/// # Examples
/// ```
/// use config::constants::MAX_SUBDIVISIONS;
/// assert_eq!(20 * 4_u64.pow(MAX_SUBDIVISIONS), 1_310_720);
/// ```
pub const MAX_SUBDIVISIONS: u32 = 8;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default slices around circular sweeps (planes, cone, cylinder, capsule).
pub const DEFAULT_ANGULAR_RESOLUTION: u32 = 24;

/// Default ring count from center to rim.
pub const DEFAULT_RADIAL_RESOLUTION: u32 = 1;

/// Default subdivisions along the height of cones, cylinders and capsules.
pub const DEFAULT_VERTICAL_RESOLUTION: u32 = 1;

/// Default tube and ring resolution of a torus.
pub const DEFAULT_TORUS_RESOLUTION: u32 = 24;

/// Default sweep resolution of a Lissajous torus.
pub const DEFAULT_LISSAJOUS_MAJOR_RESOLUTION: u32 = 96;

/// Default number of vertical oscillations per Lissajous revolution.
pub const DEFAULT_LISSAJOUS_CYCLES: u32 = 2;

/// Default grid points per cube-sphere face edge.
pub const DEFAULT_CUBE_SPHERE_RESOLUTION: u32 = 10;

/// Default grid points per box edge for cubes and rounded cubes.
pub const DEFAULT_BOX_RESOLUTION: u32 = 10;

/// Default points per rounded corner arc of the extruded pad.
pub const DEFAULT_PAD_ANGULAR_RESOLUTION: u32 = 6;

/// Default points per straight edge of the extruded pad.
pub const DEFAULT_PAD_EDGE_RESOLUTION: u32 = 2;

/// Default points along the pad's extrusion depth.
pub const DEFAULT_PAD_DEPTH_RESOLUTION: u32 = 2;

/// Default ring count of the pad's caps.
pub const DEFAULT_PAD_RADIAL_RESOLUTION: u32 = 2;

/// Default points per rounded corner arc of a rounded-rectangle plane.
pub const DEFAULT_ROUNDED_RECT_ANGULAR_RESOLUTION: u32 = 10;

/// Default points per straight edge of a rounded-rectangle plane.
pub const DEFAULT_ROUNDED_RECT_EDGE_RESOLUTION: u32 = 5;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of the tolerances used when checking generated meshes.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert!(config.normal_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Accepted deviation of a normal's length from 1.
    pub normal_tolerance: f32,
    /// Distance under which positions are welded for topology checks.
    pub weld_epsilon: f32,
}

impl GenerationConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(1.0e-3, 1.0e-5).expect("valid config");
    /// assert_eq!(cfg.normal_tolerance, 1.0e-3);
    /// ```
    pub fn new(normal_tolerance: f32, weld_epsilon: f32) -> Result<Self, ConfigError> {
        if !(normal_tolerance.is_finite() && normal_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(normal_tolerance));
        }
        if !(weld_epsilon.is_finite() && weld_epsilon > 0.0) {
            return Err(ConfigError::InvalidWeldEpsilon(weld_epsilon));
        }
        Ok(Self {
            normal_tolerance,
            weld_epsilon,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            normal_tolerance: NORMAL_TOLERANCE,
            weld_epsilon: POSITION_WELD_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the normal tolerance is zero, negative or not finite.
    InvalidTolerance(f32),
    /// Raised when the weld distance is zero, negative or not finite.
    InvalidWeldEpsilon(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "normal tolerance must be positive: {value}")
            }
            ConfigError::InvalidWeldEpsilon(value) => {
                write!(f, "weld epsilon must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
