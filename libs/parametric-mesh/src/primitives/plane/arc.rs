//! Arc plane: an annular sector between two radii and two angles.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::{arc_outline, planar_uv, ring_grid, Facing};
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::clamp_resolution;
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of an arc plane. Angles are in radians, measured from +X
/// towards +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcPlaneParams {
    /// Radius of the inner edge; 0 gives a pie slice
    pub inner_radius: f32,
    /// Radius of the outer edge
    pub outer_radius: f32,
    /// Angle where the sweep starts
    pub start_angle: f32,
    /// Angle where the sweep ends
    pub end_angle: f32,
    /// Slices along the sweep (min 3)
    pub angular_resolution: u32,
    /// Rings between the two edges (min 1)
    pub radial_resolution: u32,
    /// Polar UVs instead of projected ones
    pub circle_uv: bool,
}

impl Default for ArcPlaneParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.25,
            outer_radius: 0.5,
            start_angle: 0.0,
            end_angle: PI,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            radial_resolution: 1,
            circle_uv: true,
        }
    }
}

/// Builds the single part of an arc plane facing +Y.
///
/// A reversed angle pair is swapped, and the inner radius is kept within
/// `[0, outer_radius]`, so the sweep always runs counter-clockwise.
pub fn arc_plane_parts(params: &ArcPlaneParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "arc_plane",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let radial = clamp_resolution(
        "arc_plane",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );

    let (start, end) = if params.end_angle < params.start_angle {
        (params.end_angle, params.start_angle)
    } else {
        (params.start_angle, params.end_angle)
    };
    let outer_radius = params.outer_radius;
    let inner_radius = params.inner_radius.clamp(0.0, outer_radius.max(0.0));
    let angular_f = angular as f32;

    let outer = arc_outline(outer_radius, start, end, angular);
    let inner = arc_outline(inner_radius, start, end, angular);

    let mut part = MeshPart::with_capacity(
        "ArcPlane",
        0,
        outer.len() * (radial as usize + 1),
        (angular * radial * 2) as usize,
    );
    ring_grid(&mut part, &inner, &outer, radial, 0.0, Facing::Up, |a, t, p| {
        if params.circle_uv {
            Vec2::new(a as f32 / angular_f, t)
        } else {
            planar_uv(p, Vec2::splat(outer_radius))
        }
    });

    vec![part]
}

/// Generates an arc plane.
pub fn generate_arc_plane(params: &ArcPlaneParams) -> MeshResult<MeshBuffer> {
    assemble(arc_plane_parts(params), MergePolicy::Unified)
}
