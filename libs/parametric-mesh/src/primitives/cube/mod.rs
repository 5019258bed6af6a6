//! # Box Family
//!
//! Cube, rounded cube and cube sphere share one construction: six
//! independent rectangular grids, one per axis-aligned face, each seen from
//! outside with rows running top to bottom and columns left to right. The
//! three shapes differ only in how a grid point of the box is mapped onto
//! the final surface.
//!
//! ## Face layout
//!
//! | Face | Right | Up  | Material |
//! |------|-------|-----|----------|
//! | +X   | -Z    | +Y  | 0        |
//! | -X   | +Z    | +Y  | 0        |
//! | +Y   | +X    | -Z  | 1        |
//! | -Y   | -X    | -Z  | 1        |
//! | +Z   | +X    | +Y  | 2        |
//! | -Z   | -X    | +Y  | 2        |
//!
//! `right × up` is the outward normal, so the grid winding is
//! counter-clockwise from outside. Texture coordinates run `u` along
//! right and `v` along up, `[0, 1]` on every face.

mod rounded;
mod sphere;


pub use rounded::{generate_rounded_cube, rounded_cube_parts, RoundedCubeParams};
pub use sphere::{cube_sphere_parts, generate_cube_sphere, CubeSphereParams};

use config::constants::MIN_GRID_POINTS;
use glam::{UVec3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::clamp_resolution;
use crate::mesh::{MeshBuffer, MeshPart};

/// One face of the box grid.
#[derive(Debug, Clone, Copy)]
struct BoxFace {
    name: &'static str,
    normal: Vec3,
    right: Vec3,
    up: Vec3,
    material_index: u32,
}

const BOX_FACES: [BoxFace; 6] = [
    BoxFace {
        name: "PositiveX",
        normal: Vec3::X,
        right: Vec3::NEG_Z,
        up: Vec3::Y,
        material_index: 0,
    },
    BoxFace {
        name: "NegativeX",
        normal: Vec3::NEG_X,
        right: Vec3::Z,
        up: Vec3::Y,
        material_index: 0,
    },
    BoxFace {
        name: "PositiveY",
        normal: Vec3::Y,
        right: Vec3::X,
        up: Vec3::NEG_Z,
        material_index: 1,
    },
    BoxFace {
        name: "NegativeY",
        normal: Vec3::NEG_Y,
        right: Vec3::NEG_X,
        up: Vec3::NEG_Z,
        material_index: 1,
    },
    BoxFace {
        name: "PositiveZ",
        normal: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
        material_index: 2,
    },
    BoxFace {
        name: "NegativeZ",
        normal: Vec3::NEG_Z,
        right: Vec3::NEG_X,
        up: Vec3::Y,
        material_index: 2,
    },
];

/// Grid coordinate `k` of `points` evenly spaced over `[-1, 1]`.
///
/// Computed from integers so `k` and `points - 1 - k` give exactly opposite
/// values; faces meeting at an edge then produce identical positions.
#[inline]
fn grid_coordinate(k: u32, points: u32) -> f32 {
    let last = points as i64 - 1;
    (2 * k as i64 - last) as f32 / last as f32
}

/// Builds the six face parts of a box with `half` extents and `points`
/// grid points per axis.
///
/// `map` turns a box-surface point and its face normal into the final
/// `(position, normal)`.
fn box_parts(
    prefix: &str,
    half: Vec3,
    points: UVec3,
    map: impl Fn(Vec3, Vec3) -> (Vec3, Vec3),
) -> Vec<MeshPart> {
    BOX_FACES
        .iter()
        .map(|face| {
            let axis_points = |direction: Vec3| {
                let direction = direction.abs();
                if direction.x > 0.0 {
                    points.x
                } else if direction.y > 0.0 {
                    points.y
                } else {
                    points.z
                }
            };
            let columns = axis_points(face.right);
            let rows = axis_points(face.up);
            let center = face.normal * half;
            let right = face.right * half;
            let up = face.up * half;

            let mut part = MeshPart::with_capacity(
                format!("{prefix}{}", face.name),
                face.material_index,
                (rows * columns) as usize,
                ((rows - 1) * (columns - 1) * 2) as usize,
            );
            for j in 0..rows {
                let y = grid_coordinate(rows - 1 - j, rows);
                for i in 0..columns {
                    let x = grid_coordinate(i, columns);
                    let (position, normal) = map(center + right * x + up * y, face.normal);
                    part.push_vertex(
                        position,
                        normal,
                        Vec2::new(
                            i as f32 / (columns - 1) as f32,
                            1.0 - j as f32 / (rows - 1) as f32,
                        ),
                    );
                }
            }
            part.push_grid(0, rows, columns, false);
            part
        })
        .collect()
}

/// Parameters of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeParams {
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
    /// Extent along Z
    pub depth: f32,
    /// Grid points along X (min 2)
    pub width_resolution: u32,
    /// Grid points along Y (min 2)
    pub height_resolution: u32,
    /// Grid points along Z (min 2)
    pub depth_resolution: u32,
    /// Tag the X, Y and Z face pairs with materials 0, 1 and 2
    pub split_faces: bool,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            width_resolution: MIN_GRID_POINTS,
            height_resolution: MIN_GRID_POINTS,
            depth_resolution: MIN_GRID_POINTS,
            split_faces: false,
        }
    }
}

/// Clamps per-axis grid point counts to at least two.
fn clamp_box_resolution(generator: &str, width: u32, height: u32, depth: u32) -> UVec3 {
    UVec3::new(
        clamp_resolution(generator, "width_resolution", width, MIN_GRID_POINTS),
        clamp_resolution(generator, "height_resolution", height, MIN_GRID_POINTS),
        clamp_resolution(generator, "depth_resolution", depth, MIN_GRID_POINTS),
    )
}

/// Builds the six face parts of a box.
pub fn cube_parts(params: &CubeParams) -> Vec<MeshPart> {
    let points = clamp_box_resolution(
        "cube",
        params.width_resolution,
        params.height_resolution,
        params.depth_resolution,
    );
    let half = Vec3::new(params.width, params.height, params.depth) * 0.5;
    box_parts("Cube", half, points, |p, n| (p, n))
}

/// Generates an axis-aligned box with flat faces.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_cube, CubeParams};
///
/// let mesh = generate_cube(&CubeParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn generate_cube(params: &CubeParams) -> MeshResult<MeshBuffer> {
    assemble(
        cube_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
