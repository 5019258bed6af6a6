//! # Cone
//!
//! Lateral surface plus a flat base disk, centered on the origin with the
//! apex at `+height/2`.
//!
//! ## Parts
//!
//! | Part         | Material | Surface                         |
//! |--------------|----------|---------------------------------|
//! | `ConeWall`   | 0        | `(vertical + 1) × (angular + 1)` grid |
//! | `ConeBottom` | 1        | `(radial + 1) × (angular + 1)` disk   |
//!
//! Wall normals come from the half-angle of the cone rather than from
//! face geometry, so shading stays smooth across the seam.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, DEFAULT_RADIAL_RESOLUTION, DEFAULT_VERTICAL_RESOLUTION,
    MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION, MIN_VERTICAL_RESOLUTION,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution, normalize_or};
use crate::mesh::{MeshBuffer, MeshPart};
use crate::primitives::plane::{circle_outline, planar_uv, ring_grid, Facing};

/// Parameters of a cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Base radius
    pub radius: f32,
    /// Distance from base to apex
    pub height: f32,
    /// Slices around the axis (min 3)
    pub angular_resolution: u32,
    /// Rings on the base disk (min 1)
    pub radial_resolution: u32,
    /// Rings on the wall (min 1)
    pub vertical_resolution: u32,
    /// Tag wall and base with separate materials
    pub split_faces: bool,
    /// Polar UVs on the base instead of projected ones
    pub circle_uv: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            radial_resolution: DEFAULT_RADIAL_RESOLUTION,
            vertical_resolution: DEFAULT_VERTICAL_RESOLUTION,
            split_faces: false,
            circle_uv: true,
        }
    }
}

/// Builds the wall and base parts of a cone.
pub fn cone_parts(params: &ConeParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "cone",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let radial = clamp_resolution(
        "cone",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );
    let vertical = clamp_resolution(
        "cone",
        "vertical_resolution",
        params.vertical_resolution,
        MIN_VERTICAL_RESOLUTION,
    );

    let radius = params.radius;
    let height = params.height;
    let angular_f = angular as f32;
    let vertical_f = vertical as f32;
    let y_offset = -0.5 * height;
    let per_loop = angular + 1;

    let mut wall = MeshPart::with_capacity(
        "ConeWall",
        0,
        (per_loop * (vertical + 1)) as usize,
        (angular * vertical * 2) as usize,
    );
    for v in 0..=vertical {
        let t = v as f32 / vertical_f;
        let y = y_offset + t * height;
        let ring_radius = radius * (1.0 - t);
        for a in 0..=angular {
            let angle = a as f32 / angular_f * TAU;
            let (sin, cos) = angle.sin_cos();
            let normal = normalize_or(Vec3::new(height * cos, radius, height * sin), Vec3::Y);
            wall.push_vertex(
                Vec3::new(ring_radius * cos, y, ring_radius * sin),
                normal,
                Vec2::new(1.0 - a as f32 / angular_f, t),
            );
        }
    }
    wall.push_grid(0, vertical + 1, per_loop, false);

    let outer = circle_outline(radius, angular);
    let center = vec![Vec2::ZERO; outer.len()];
    let mut bottom = MeshPart::with_capacity(
        "ConeBottom",
        1,
        (per_loop * (radial + 1)) as usize,
        (angular * radial * 2) as usize,
    );
    ring_grid(&mut bottom, &center, &outer, radial, y_offset, Facing::Down, |a, t, p| {
        if params.circle_uv {
            Vec2::new(a as f32 / angular_f, 1.0 - t)
        } else {
            planar_uv(p, Vec2::splat(radius.abs()))
        }
    });

    vec![wall, bottom]
}

/// Generates a cone.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_cone, ConeParams};
///
/// let mesh = generate_cone(&ConeParams { split_faces: true, ..Default::default() }).unwrap();
/// assert_eq!(mesh.material_groups(), vec![0, 1]);
/// ```
pub fn generate_cone(params: &ConeParams) -> MeshResult<MeshBuffer> {
    assemble(
        cone_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
