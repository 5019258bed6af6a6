//! # Cylinder
//!
//! A wall wrapped around the Y axis and two cap disks, centered on the
//! origin. The caps share one construction: the top faces +Y, the bottom
//! faces -Y with its winding and polar `u` mirrored, so both read the same
//! way seen from outside.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, DEFAULT_RADIAL_RESOLUTION, DEFAULT_VERTICAL_RESOLUTION,
    MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION, MIN_VERTICAL_RESOLUTION,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::clamp_resolution;
use crate::mesh::{MeshBuffer, MeshPart};
use crate::primitives::plane::{circle_outline, planar_uv, ring_grid, Facing};

/// Parameters of a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Radius of the wall and caps
    pub radius: f32,
    /// Distance between the caps
    pub height: f32,
    /// Slices around the axis (min 3)
    pub angular_resolution: u32,
    /// Rings on each cap (min 1)
    pub radial_resolution: u32,
    /// Rings on the wall (min 1)
    pub vertical_resolution: u32,
    /// Tag wall (0) and caps (1) with separate materials
    pub split_faces: bool,
    /// Polar UVs on the caps instead of projected ones
    pub circle_uv: bool,
}

impl Default for CylinderParams {
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

/// Builds the wall, top cap and bottom cap of a cylinder.
pub fn cylinder_parts(params: &CylinderParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "cylinder",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let radial = clamp_resolution(
        "cylinder",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );
    let vertical = clamp_resolution(
        "cylinder",
        "vertical_resolution",
        params.vertical_resolution,
        MIN_VERTICAL_RESOLUTION,
    );

    let radius = params.radius;
    let height = params.height;
    let angular_f = angular as f32;
    let vertical_f = vertical as f32;
    let per_loop = angular + 1;

    let mut wall = MeshPart::with_capacity(
        "CylinderWall",
        0,
        (per_loop * (vertical + 1)) as usize,
        (angular * vertical * 2) as usize,
    );
    for v in 0..=vertical {
        let t = v as f32 / vertical_f;
        let y = (t - 0.5) * height;
        for a in 0..=angular {
            let angle = a as f32 / angular_f * TAU;
            let (sin, cos) = angle.sin_cos();
            wall.push_vertex(
                Vec3::new(radius * cos, y, radius * sin),
                Vec3::new(cos, 0.0, sin),
                Vec2::new(1.0 - a as f32 / angular_f, t),
            );
        }
    }
    wall.push_grid(0, vertical + 1, per_loop, false);

    let outer = circle_outline(radius, angular);
    let center = vec![Vec2::ZERO; outer.len()];
    let cap = |name: &str, facing: Facing| {
        let y = match facing {
            Facing::Up => 0.5 * height,
            Facing::Down => -0.5 * height,
        };
        let mut part = MeshPart::with_capacity(
            name,
            1,
            (per_loop * (radial + 1)) as usize,
            (angular * radial * 2) as usize,
        );
        ring_grid(&mut part, &center, &outer, radial, y, facing, |a, t, p| {
            if params.circle_uv {
                let u = a as f32 / angular_f;
                Vec2::new(if facing == Facing::Up { u } else { 1.0 - u }, t)
            } else {
                let uv = planar_uv(p, Vec2::splat(radius.abs()));
                Vec2::new(if facing == Facing::Up { 1.0 - uv.x } else { uv.x }, uv.y)
            }
        });
        part
    };

    vec![
        wall,
        cap("CylinderTop", Facing::Up),
        cap("CylinderBottom", Facing::Down),
    ]
}

/// Generates a cylinder.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_cylinder, CylinderParams};
///
/// let mesh = generate_cylinder(&CylinderParams::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 24 * 2 + 2 * 24 * 2);
/// ```
pub fn generate_cylinder(params: &CylinderParams) -> MeshResult<MeshBuffer> {
    assemble(
        cylinder_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
