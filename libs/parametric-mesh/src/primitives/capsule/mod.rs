//! # Capsule
//!
//! Two hemispherical caps joined by a cylindrical band along the Y axis.
//! `height` is the length of the band; the full extent is
//! `height + 2·radius`.
//!
//! Texture `v` runs by arc length over cap, band and cap, so the texture
//! stretches evenly: each cap takes `(π/2)·r / (h + π·r)` of the range and
//! the band `h / (h + π·r)`. With split faces every region gets the whole
//! `[0, 1]` range instead, and the bottom cap's texture is turned around.

use config::constants::{
    DEFAULT_ANGULAR_RESOLUTION, DEFAULT_RADIAL_RESOLUTION, DEFAULT_VERTICAL_RESOLUTION,
    EPSILON, MIN_ANGULAR_RESOLUTION, MIN_RADIAL_RESOLUTION, MIN_VERTICAL_RESOLUTION,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution, map_range};
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a capsule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleParams {
    /// Radius of the band and caps
    pub radius: f32,
    /// Length of the cylindrical band
    pub height: f32,
    /// Slices around the axis (min 3)
    pub angular_resolution: u32,
    /// Latitude rings per cap (min 1)
    pub radial_resolution: u32,
    /// Rings on the band (min 1)
    pub vertical_resolution: u32,
    /// Tag the band (0) and the caps (1) with separate materials
    pub split_faces: bool,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            radial_resolution: DEFAULT_RADIAL_RESOLUTION,
            vertical_resolution: DEFAULT_VERTICAL_RESOLUTION,
            split_faces: false,
        }
    }
}

/// Builds the top cap, bottom cap and band of a capsule.
pub fn capsule_parts(params: &CapsuleParams) -> Vec<MeshPart> {
    let angular = clamp_resolution(
        "capsule",
        "angular_resolution",
        params.angular_resolution,
        MIN_ANGULAR_RESOLUTION,
    );
    let rings = clamp_resolution(
        "capsule",
        "radial_resolution",
        params.radial_resolution,
        MIN_RADIAL_RESOLUTION,
    );
    let slices = clamp_resolution(
        "capsule",
        "vertical_resolution",
        params.vertical_resolution,
        MIN_VERTICAL_RESOLUTION,
    );

    let radius = params.radius;
    let half_height = params.height * 0.5;
    let split = params.split_faces;
    let angular_f = angular as f32;
    let rings_f = rings as f32;
    let slices_f = slices as f32;
    let per_loop = angular + 1;

    let total_length = (params.height + PI * radius).max(EPSILON);
    let v_per_cap = FRAC_PI_2 * radius / total_length;
    let v_per_band = params.height / total_length;

    let cap_vertices = (per_loop * (rings + 1)) as usize;
    let cap_triangles = (angular * rings * 2) as usize;

    // Top cap: ring 0 is the pole, rings walk down to the equator.
    let (top_min, top_max) = if split {
        (0.0, 1.0)
    } else {
        (v_per_cap + v_per_band, 1.0)
    };
    let mut top = MeshPart::with_capacity("CapsuleTop", 1, cap_vertices, cap_triangles);
    for t in 0..=rings {
        let theta = t as f32 / rings_f * FRAC_PI_2;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for a in 0..=angular {
            let phi = a as f32 / angular_f * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = Vec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            top.push_vertex(
                normal * radius + Vec3::new(0.0, half_height, 0.0),
                normal,
                Vec2::new(
                    1.0 - a as f32 / angular_f,
                    map_range(FRAC_PI_2 - theta, 0.0, FRAC_PI_2, top_min, top_max),
                ),
            );
        }
    }
    for t in 0..rings {
        for a in 0..angular {
            let tl = t * per_loop + a;
            let tr = tl + 1;
            let bl = tl + per_loop;
            let br = bl + 1;
            top.push_triangle(tl, tr, br);
            top.push_triangle(tl, br, bl);
        }
    }

    // Bottom cap: ring 0 is the pole, rings walk up to the equator.
    let (bottom_min, bottom_max) = if split { (1.0, 0.0) } else { (0.0, v_per_cap) };
    let mut bottom = MeshPart::with_capacity("CapsuleBottom", 1, cap_vertices, cap_triangles);
    for t in 0..=rings {
        let theta = t as f32 / rings_f * FRAC_PI_2;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for a in 0..=angular {
            let phi = a as f32 / angular_f * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = Vec3::new(cos_phi * sin_theta, -cos_theta, sin_phi * sin_theta);
            let u = a as f32 / angular_f;
            bottom.push_vertex(
                normal * radius - Vec3::new(0.0, half_height, 0.0),
                normal,
                Vec2::new(
                    if split { u } else { 1.0 - u },
                    map_range(theta - FRAC_PI_2, -FRAC_PI_2, 0.0, bottom_min, bottom_max),
                ),
            );
        }
    }
    bottom.push_grid(0, rings + 1, per_loop, false);

    let (band_min, band_max) = if split {
        (0.0, 1.0)
    } else {
        (v_per_cap, v_per_cap + v_per_band)
    };
    let mut band = MeshPart::with_capacity(
        "CapsuleBand",
        0,
        (per_loop * (slices + 1)) as usize,
        (angular * slices * 2) as usize,
    );
    for s in 0..=slices {
        let y = s as f32 / slices_f * params.height - half_height;
        for a in 0..=angular {
            let phi = a as f32 / angular_f * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();
            band.push_vertex(
                Vec3::new(radius * cos_phi, y, radius * sin_phi),
                Vec3::new(cos_phi, 0.0, sin_phi),
                Vec2::new(
                    1.0 - a as f32 / angular_f,
                    map_range(s as f32, 0.0, slices_f, band_min, band_max),
                ),
            );
        }
    }
    band.push_grid(0, slices + 1, per_loop, false);

    vec![top, bottom, band]
}

/// Generates a capsule.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_capsule, CapsuleParams};
///
/// let params = CapsuleParams { radius: 0.5, height: 1.0, split_faces: true, ..Default::default() };
/// let mesh = generate_capsule(&params).unwrap();
/// assert_eq!(mesh.material_groups(), vec![0, 1]);
/// ```
pub fn generate_capsule(params: &CapsuleParams) -> MeshResult<MeshBuffer> {
    assemble(
        capsule_parts(params),
        MergePolicy::from_split_faces(params.split_faces),
    )
}

#[cfg(test)]
mod tests;
