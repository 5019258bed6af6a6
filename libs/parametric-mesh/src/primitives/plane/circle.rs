//! Circle plane: a disk tessellated in rings and slices.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{circle_outline, planar_uv, ring_grid, Facing};
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::clamp_resolution;
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a circle plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclePlaneParams {
    /// Disk radius
    pub radius: f32,
    /// Slices around the rim (min 3)
    pub angular_resolution: u32,
    /// Rings from center to rim (min 1)
    pub radial_resolution: u32,
    /// Polar UVs (`u` = angle fraction, `v` = radius fraction) instead of
    /// projected ones
    pub circle_uv: bool,
}

impl Default for CirclePlaneParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            radial_resolution: 1,
            circle_uv: true,
        }
    }
}

/// Builds the single part of a circle plane facing +Y.
///
/// The innermost ring collapses onto the center, so its cells degenerate
/// into fan triangles around the apex.
pub fn circle_plane_parts(params: &CirclePlaneParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "circle_plane",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let radial = clamp_resolution(
        "circle_plane",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );
    let radius = params.radius;
    let angular_f = angular as f32;

    let outer = circle_outline(radius, angular);
    let inner = vec![Vec2::ZERO; outer.len()];

    let mut part = MeshPart::with_capacity(
        "CirclePlane",
        0,
        outer.len() * (radial as usize + 1),
        (angular * radial * 2) as usize,
    );
    ring_grid(&mut part, &inner, &outer, radial, 0.0, Facing::Up, |a, t, p| {
        if params.circle_uv {
            Vec2::new(a as f32 / angular_f, t)
        } else {
            planar_uv(p, Vec2::splat(radius))
        }
    });

    vec![part]
}

/// Generates a circle plane.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_circle_plane, CirclePlaneParams};
///
/// let mesh = generate_circle_plane(&CirclePlaneParams {
///     radius: 0.1,
///     angular_resolution: 30,
///     radial_resolution: 5,
///     circle_uv: true,
/// })
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 31 * 6);
/// assert_eq!(mesh.triangle_count(), 30 * 5 * 2);
/// ```
pub fn generate_circle_plane(params: &CirclePlaneParams) -> MeshResult<MeshBuffer> {
    assemble(circle_plane_parts(params), MergePolicy::Unified)
}
