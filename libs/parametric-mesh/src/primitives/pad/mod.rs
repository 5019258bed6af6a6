//! # Extruded Rounded-Rect Pad
//!
//! A rounded rectangle in the XZ plane extruded along Y. The caps are the
//! rounded-rect plane at `±depth/2`; the bottom cap faces down with its
//! texture mirrored. The side wall extrudes the plane's perimeter loop.
//!
//! Wall `u` follows arc length around the perimeter (`1 − d/perimeter`)
//! and wall `v` follows the extrusion, so the texture wraps the wall
//! without stretching at the corners. Wall normals use the same
//! clamp-and-subtract rule as the rounded cube, flattened to the XZ plane.


use config::constants::{
    DEFAULT_PAD_ANGULAR_RESOLUTION, DEFAULT_PAD_DEPTH_RESOLUTION, DEFAULT_PAD_EDGE_RESOLUTION,
    DEFAULT_PAD_RADIAL_RESOLUTION, MIN_GRID_POINTS,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution, normalize_or};
use crate::mesh::{MeshBuffer, MeshPart};
use crate::primitives::plane::rounded_rect::{clamp_rounded_rect, rounded_rect_cap};
use crate::primitives::plane::{rounded_rect_outline, Facing};

/// Parameters of an extruded rounded-rect pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudedRoundedRectPadParams {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub height: f32,
    /// Extrusion length along Y
    pub depth: f32,
    /// Corner radius, clamped to half the smaller of width and height
    pub radius: f32,
    /// Points per quarter-circle corner, ends included (min 3)
    pub angular_resolution: u32,
    /// Points along each straight edge parallel to X (min 2)
    pub edge_x_resolution: u32,
    /// Points along each straight edge parallel to Z (min 2)
    pub edge_y_resolution: u32,
    /// Rings along the extrusion, ends included (min 2)
    pub depth_resolution: u32,
    /// Rings on each cap (min 1)
    pub radial_resolution: u32,
    /// Tag the wall (0) and the caps (1) with separate materials
    pub split_faces: bool,
    /// Perimeter UVs on the caps instead of projected ones
    pub circle_uv: bool,
}

impl Default for ExtrudedRoundedRectPadParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 0.5,
            radius: 0.25,
            angular_resolution: DEFAULT_PAD_ANGULAR_RESOLUTION,
            edge_x_resolution: DEFAULT_PAD_EDGE_RESOLUTION,
            edge_y_resolution: DEFAULT_PAD_EDGE_RESOLUTION,
            depth_resolution: DEFAULT_PAD_DEPTH_RESOLUTION,
            radial_resolution: DEFAULT_PAD_RADIAL_RESOLUTION,
            split_faces: false,
            circle_uv: false,
        }
    }
}

/// Builds the top cap, bottom cap and side wall of a pad.
pub fn extruded_rounded_rect_pad_parts(params: &ExtrudedRoundedRectPadParams) -> Vec<MeshPart> {
    let (radius, angular, edge_x, edge_y, radial) = clamp_rounded_rect(
        "extruded_rounded_rect_pad",
        params.width,
        params.height,
        params.radius,
        params.angular_resolution,
        params.edge_x_resolution,
        params.edge_y_resolution,
        params.radial_resolution,
    );
    let rings = clamp_resolution(
        "extruded_rounded_rect_pad",
        "depth_resolution",
        params.depth_resolution,
        MIN_GRID_POINTS,
    );

    let outline = rounded_rect_outline(params.width, params.height, radius, angular, edge_x, edge_y);
    let half = Vec2::new(params.width, params.height) * 0.5;
    let inner_half = (half - Vec2::splat(radius)).max(Vec2::ZERO);
    let half_depth = params.depth * 0.5;
    let loop_len = outline.len();
    let cap_vertices = loop_len * (radial as usize + 1);
    let cap_triangles = (loop_len - 1) * radial as usize * 2;

    let mut top = MeshPart::with_capacity("PadTop", 1, cap_vertices, cap_triangles);
    rounded_rect_cap(
        &mut top,
        &outline,
        half,
        radial,
        half_depth,
        Facing::Up,
        params.circle_uv,
    );

    let mut bottom = MeshPart::with_capacity("PadBottom", 1, cap_vertices, cap_triangles);
    rounded_rect_cap(
        &mut bottom,
        &outline,
        half,
        radial,
        -half_depth,
        Facing::Down,
        params.circle_uv,
    );

    let perimeter = outline.perimeter.max(f32::EPSILON);
    let mut wall = MeshPart::with_capacity(
        "PadWall",
        0,
        loop_len * rings as usize,
        (loop_len - 1) * (rings as usize - 1) * 2,
    );
    for j in 0..rings {
        let t = j as f32 / (rings - 1) as f32;
        let y = -half_depth + t * params.depth;
        for ((p, outward), distance) in outline
            .points
            .iter()
            .zip(&outline.normals)
            .zip(&outline.distances)
        {
            let offset = *p - p.clamp(-inner_half, inner_half);
            let normal = normalize_or(
                Vec3::new(offset.x, 0.0, offset.y),
                Vec3::new(outward.x, 0.0, outward.y),
            );
            wall.push_vertex(
                Vec3::new(p.x, y, p.y),
                normal,
                Vec2::new(1.0 - distance / perimeter, t),
            );
        }
    }
    wall.push_grid(0, rings, loop_len as u32, false);

    vec![top, bottom, wall]
}

/// Generates an extruded rounded-rect pad.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_extruded_rounded_rect_pad, ExtrudedRoundedRectPadParams};
///
/// let mesh = generate_extruded_rounded_rect_pad(&ExtrudedRoundedRectPadParams {
///     split_faces: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(mesh.material_groups(), vec![0, 1]);
/// ```
pub fn generate_extruded_rounded_rect_pad(
    params: &ExtrudedRoundedRectPadParams,
) -> MeshResult<MeshBuffer> {
    assemble(
        extruded_rounded_rect_pad_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
