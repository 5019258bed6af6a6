//! Rounded cube: the box grid projected onto a box with rounded edges and
//! corners.

use config::constants::DEFAULT_BOX_RESOLUTION;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{box_parts, clamp_box_resolution};
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_radius, round_box_point};
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a rounded cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedCubeParams {
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
    /// Extent along Z
    pub depth: f32,
    /// Rounding radius, clamped to half the smallest extent
    pub radius: f32,
    /// Grid points along X (min 2)
    pub width_resolution: u32,
    /// Grid points along Y (min 2)
    pub height_resolution: u32,
    /// Grid points along Z (min 2)
    pub depth_resolution: u32,
    /// Tag the X, Y and Z face pairs with materials 0, 1 and 2
    pub split_faces: bool,
}

impl Default for RoundedCubeParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            radius: 0.1,
            width_resolution: DEFAULT_BOX_RESOLUTION,
            height_resolution: DEFAULT_BOX_RESOLUTION,
            depth_resolution: DEFAULT_BOX_RESOLUTION,
            split_faces: false,
        }
    }
}

/// Builds the six face parts of a rounded cube.
///
/// Each grid point is clamped into the inner box shrunk by `radius`; the
/// offset from the clamp point is the normal and the surface sits `radius`
/// along it. A zero radius degenerates to the plain box with face normals.
pub fn rounded_cube_parts(params: &RoundedCubeParams) -> Vec<MeshPart> {
    let points = clamp_box_resolution(
        "rounded_cube",
        params.width_resolution,
        params.height_resolution,
        params.depth_resolution,
    );
    let half = Vec3::new(params.width, params.height, params.depth) * 0.5;
    let radius = clamp_radius("rounded_cube", params.radius, half.min_element().max(0.0)).max(0.0);
    let inner_half = (half - Vec3::splat(radius)).max(Vec3::ZERO);

    box_parts("RoundedCube", half, points, |p, face_normal| {
        round_box_point(p, inner_half, radius, face_normal)
    })
}

/// Generates a rounded cube.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_rounded_cube, RoundedCubeParams};
///
/// let mesh = generate_rounded_cube(&RoundedCubeParams {
///     split_faces: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(mesh.material_groups(), vec![0, 1, 2]);
/// assert_eq!(mesh.triangle_count(), 6 * 9 * 9 * 2);
/// ```
pub fn generate_rounded_cube(params: &RoundedCubeParams) -> MeshResult<MeshBuffer> {
    assemble(
        rounded_cube_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
