//! Squircle plane: the superellipse `|x|^p + |z|^p = (size/2)^p`.
//!
//! `p = 2` is a circle, larger exponents approach a square with rounded
//! corners.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION,
    MIN_SQUIRCLE_EXPONENT,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use tracing::warn;

use super::{planar_uv, ring_grid, Facing};
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::clamp_resolution;
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a squircle plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquirclePlaneParams {
    /// Edge length of the bounding square
    pub size: f32,
    /// Superellipse exponent (min 1)
    pub p: f32,
    /// Slices around the rim (min 3)
    pub angular_resolution: u32,
    /// Rings from center to rim (min 1)
    pub radial_resolution: u32,
    /// Polar UVs instead of projected ones
    pub circle_uv: bool,
}

impl Default for SquirclePlaneParams {
    fn default() -> Self {
        Self {
            size: 1.0,
            p: 4.0,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            radial_resolution: 1,
            circle_uv: true,
        }
    }
}

/// Distance from the center to the superellipse boundary along `angle`.
///
/// The larger of `|cos|` and `|sin|` is factored out so both powers stay
/// within `[0, 1]` and the sum within `[1, 2]`, which keeps large exponents
/// from underflowing to zero.
fn boundary_radius(half_size: f32, p: f32, angle: f32) -> f32 {
    let (c, s) = (angle.cos().abs(), angle.sin().abs());
    let m = c.max(s);
    let sum = (c / m).powf(p) + (s / m).powf(p);
    half_size / (m * sum.powf(1.0 / p))
}

/// Builds the single part of a squircle plane facing +Y.
pub fn squircle_plane_parts(params: &SquirclePlaneParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "squircle_plane",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let radial = clamp_resolution(
        "squircle_plane",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );
    let p = if params.p < MIN_SQUIRCLE_EXPONENT || !params.p.is_finite() {
        warn!(
            generator = "squircle_plane",
            requested = params.p,
            clamped = MIN_SQUIRCLE_EXPONENT,
            "exponent below minimum, clamping"
        );
        MIN_SQUIRCLE_EXPONENT
    } else {
        params.p
    };

    let half_size = params.size * 0.5;
    let angular_f = angular as f32;

    let outer: Vec<Vec2> = (0..=angular)
        .map(|a| {
            let angle = a as f32 / angular_f * TAU;
            Vec2::new(angle.cos(), angle.sin()) * boundary_radius(half_size, p, angle)
        })
        .collect();
    let inner = vec![Vec2::ZERO; outer.len()];

    let mut part = MeshPart::with_capacity(
        "SquirclePlane",
        0,
        outer.len() * (radial as usize + 1),
        (angular * radial * 2) as usize,
    );
    ring_grid(&mut part, &inner, &outer, radial, 0.0, Facing::Up, |a, t, point| {
        if params.circle_uv {
            Vec2::new(a as f32 / angular_f, t)
        } else {
            planar_uv(point, Vec2::splat(half_size))
        }
    });

    vec![part]
}

/// Generates a squircle plane.
pub fn generate_squircle_plane(params: &SquirclePlaneParams) -> MeshResult<MeshBuffer> {
    assemble(squircle_plane_parts(params), MergePolicy::Unified)
}
