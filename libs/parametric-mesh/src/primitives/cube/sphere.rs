//! Cube sphere: the box grid warped onto a sphere.

use config::constants::{DEFAULT_CUBE_SPHERE_RESOLUTION, MIN_CUBE_SPHERE_POINTS};
use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::box_parts;
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution, cube_to_sphere, normalize_or};
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a cube sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeSphereParams {
    /// Sphere radius
    pub radius: f32,
    /// Grid points along each face edge (min 3)
    pub resolution: u32,
    /// Tag the X, Y and Z face pairs with materials 0, 1 and 2
    pub split_faces: bool,
}

impl Default for CubeSphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            resolution: DEFAULT_CUBE_SPHERE_RESOLUTION,
            split_faces: false,
        }
    }
}

/// Builds the six face parts of a cube sphere.
///
/// Face grids live on the unit cube and go through the area-preserving
/// cube-to-sphere remap before being scaled by `radius`.
pub fn cube_sphere_parts(params: &CubeSphereParams) -> Vec<MeshPart> {
    let edge = clamp_resolution(
        "cube_sphere",
        "resolution",
        params.resolution,
        MIN_CUBE_SPHERE_POINTS,
    );
    let radius = params.radius;

    box_parts("CubeSphere", Vec3::ONE, UVec3::splat(edge), |p, face_normal| {
        let normal = normalize_or(cube_to_sphere(p), face_normal);
        (normal * radius, normal)
    })
}

/// Generates a cube sphere with `6·(R−1)²·2` triangles for `R` points per
/// edge.
pub fn generate_cube_sphere(params: &CubeSphereParams) -> MeshResult<MeshBuffer> {
    assemble(
        cube_sphere_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}
