//! # Torus
//!
//! A tube swept along a closed path around the Y axis. The standard torus
//! follows the circle of `major_radius` in the XZ plane; the Lissajous
//! variant follows `(R·cos θ, h/2·sin(c·θ), R·sin θ)`, oscillating `c`
//! times per revolution.
//!
//! At every path sample the cross-section is built by rotating the radial
//! direction `(cos θ, 0, sin θ)` about the path tangent, so the tube stays
//! perpendicular to the path however it bends.

use config::constants::{
    DEFAULT_LISSAJOUS_CYCLES, DEFAULT_LISSAJOUS_MAJOR_RESOLUTION, DEFAULT_TORUS_RESOLUTION,
    MIN_ANGULAR_RESOLUTION, MIN_LISSAJOUS_MAJOR_RESOLUTION,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution, normalize_or, rotate_about_axis};
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a torus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Radius of the tube
    pub minor_radius: f32,
    /// Distance from the Y axis to the tube center
    pub major_radius: f32,
    /// Segments around the tube (min 3)
    pub minor_resolution: u32,
    /// Segments along the path (min 3)
    pub major_resolution: u32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            minor_radius: 0.1,
            major_radius: 0.5,
            minor_resolution: DEFAULT_TORUS_RESOLUTION,
            major_resolution: DEFAULT_TORUS_RESOLUTION,
        }
    }
}

/// Parameters of a Lissajous-curve torus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LissajousTorusParams {
    /// Radius of the tube
    pub minor_radius: f32,
    /// Distance from the Y axis to the path
    pub major_radius: f32,
    /// Peak-to-peak vertical amplitude of the path
    pub height: f32,
    /// Vertical oscillations per revolution
    pub cycle_times: u32,
    /// Segments around the tube (min 3)
    pub minor_resolution: u32,
    /// Segments along the path (min 4)
    pub major_resolution: u32,
}

impl Default for LissajousTorusParams {
    fn default() -> Self {
        Self {
            minor_radius: 0.05,
            major_radius: 0.5,
            height: 0.2,
            cycle_times: DEFAULT_LISSAJOUS_CYCLES,
            minor_resolution: DEFAULT_TORUS_RESOLUTION,
            major_resolution: DEFAULT_LISSAJOUS_MAJOR_RESOLUTION,
        }
    }
}

/// Sweeps a circle of `minor_radius` along a closed path.
///
/// `path` maps the path angle to `(center, tangent)`; the tangent must be
/// unit length and perpendicular to the radial direction.
fn sweep_tube(
    name: &str,
    minor_radius: f32,
    angular: u32,
    slices: u32,
    path: impl Fn(f32) -> (Vec3, Vec3),
) -> MeshPart {
    let per_loop = angular + 1;
    let angular_f = angular as f32;
    let slices_f = slices as f32;

    let mut part = MeshPart::with_capacity(
        name,
        0,
        (per_loop * (slices + 1)) as usize,
        (angular * slices * 2) as usize,
    );
    for s in 0..=slices {
        let slice = s as f32 / slices_f * TAU;
        let (center, tangent) = path(slice);
        let radial = Vec3::new(slice.cos(), 0.0, slice.sin());
        for a in 0..=angular {
            let angle = a as f32 / angular_f * TAU;
            let normal = rotate_about_axis(radial, tangent, angle);
            part.push_vertex(
                center + normal * minor_radius,
                normal,
                Vec2::new(a as f32 / angular_f, s as f32 / slices_f),
            );
        }
    }
    part.push_grid(0, slices + 1, per_loop, true);
    part
}

/// Builds the single part of a torus.
pub fn torus_parts(params: &TorusParams) -> Vec<MeshPart> {
    let slices = clamp_resolution(
        "torus",
        "major_resolution",
        params.major_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let angular = clamp_resolution(
        "torus",
        "minor_resolution",
        params.minor_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let major_radius = params.major_radius;

    let part = sweep_tube("Torus", params.minor_radius, angular, slices, |slice| {
        let (sin, cos) = slice.sin_cos();
        (
            Vec3::new(cos * major_radius, 0.0, sin * major_radius),
            Vec3::new(-sin, 0.0, cos),
        )
    });
    vec![part]
}

/// Generates a torus.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_torus, TorusParams};
///
/// let mesh = generate_torus(&TorusParams {
///     minor_radius: 0.1,
///     major_radius: 1.0,
///     minor_resolution: 8,
///     major_resolution: 8,
/// })
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 81);
/// assert_eq!(mesh.triangle_count(), 128);
/// ```
pub fn generate_torus(params: &TorusParams) -> MeshResult<MeshBuffer> {
    assemble(torus_parts(params), MergePolicy::Unified)
}

/// Builds the single part of a Lissajous-curve torus.
pub fn lissajous_torus_parts(params: &LissajousTorusParams) -> Vec<MeshPart> {
    let slices = clamp_resolution(
        "lissajous_torus",
        "major_resolution",
        params.major_resolution,
        MIN_LISSAJOUS_MAJOR_RESOLUTION,
    );
    let angular = clamp_resolution(
        "lissajous_torus",
        "minor_resolution",
        params.minor_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let major_radius = params.major_radius;
    let amplitude = params.height * 0.5;
    let cycles = params.cycle_times as f32;

    let part = sweep_tube(
        "LissajousTorus",
        params.minor_radius,
        angular,
        slices,
        |slice| {
            let (sin, cos) = slice.sin_cos();
            let (sin_cycle, cos_cycle) = (cycles * slice).sin_cos();
            let center = Vec3::new(
                cos * major_radius,
                sin_cycle * amplitude,
                sin * major_radius,
            );
            let derivative = Vec3::new(
                -sin * major_radius,
                cos_cycle * cycles * amplitude,
                cos * major_radius,
            );
            (center, normalize_or(derivative, Vec3::new(-sin, 0.0, cos)))
        },
    );
    vec![part]
}

/// Generates a Lissajous-curve torus.
pub fn generate_lissajous_torus(params: &LissajousTorusParams) -> MeshResult<MeshBuffer> {
    assemble(lissajous_torus_parts(params), MergePolicy::Unified)
}
