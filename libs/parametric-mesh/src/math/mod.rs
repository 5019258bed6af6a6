//! Shared math helpers for the shape generators.
//!
//! Range mapping, guarded normalization, quaternion rotation and the two
//! surface projections (rounded-box clamping and the cube-to-sphere remap)
//! used by more than one generator.

use config::constants::EPSILON;
use glam::{Quat, Vec2, Vec3};
use std::f32::consts::PI;
use tracing::warn;

/// Linearly maps `input` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The output range may be reversed (`out_min > out_max`).
///
/// # Examples
/// ```
/// use parametric_mesh::math::map_range;
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
/// assert_eq!(map_range(0.0, 0.0, 10.0, 1.0, 0.0), 1.0);
/// ```
#[inline]
pub fn map_range(input: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (input - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Normalizes `v`, returning `fallback` when `v` is too short to carry a
/// direction.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use parametric_mesh::math::normalize_or;
/// assert_eq!(normalize_or(Vec3::ZERO, Vec3::Y), Vec3::Y);
/// assert_eq!(normalize_or(Vec3::new(0.0, 0.0, 4.0), Vec3::Y), Vec3::Z);
/// ```
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let length = v.length();
    if length > EPSILON && length.is_finite() {
        v / length
    } else {
        fallback
    }
}

/// Rotates `v` by `angle` radians about the unit `axis`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use parametric_mesh::math::rotate_about_axis;
/// let v = rotate_about_axis(Vec3::X, Vec3::Z, std::f32::consts::FRAC_PI_2);
/// assert!((v - Vec3::Y).length() < 1e-6);
/// ```
#[inline]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis, angle) * v
}

/// Raises `value` to `min`, logging the adjustment.
///
/// Every resolution parameter goes through here: out-of-range values are
/// never an error.
pub fn clamp_resolution(generator: &str, parameter: &str, value: u32, min: u32) -> u32 {
    if value < min {
        warn!(
            generator,
            parameter,
            requested = value,
            clamped = min,
            "resolution below minimum, clamping"
        );
        min
    } else {
        value
    }
}

/// Lowers `value` to `max`, logging the adjustment.
pub fn clamp_resolution_max(generator: &str, parameter: &str, value: u32, max: u32) -> u32 {
    if value > max {
        warn!(
            generator,
            parameter,
            requested = value,
            clamped = max,
            "resolution above maximum, clamping"
        );
        max
    } else {
        value
    }
}

/// Lowers a rounding radius to `max`, logging the adjustment.
pub fn clamp_radius(generator: &str, radius: f32, max: f32) -> f32 {
    if radius > max {
        warn!(
            generator,
            requested = radius,
            clamped = max,
            "corner radius exceeds half the smallest dimension, clamping"
        );
        max
    } else {
        radius
    }
}

/// Spherical texture coordinates of a unit direction.
///
/// `u = |atan2(x, z)| / π`, `v = 1 - acos(y) / π`. The mapping mirrors
/// around the `z` axis instead of wrapping, so there is no hard seam to
/// split.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use parametric_mesh::math::spherical_uv;
/// let top = spherical_uv(Vec3::Y);
/// assert_eq!(top.y, 1.0);
/// ```
#[inline]
pub fn spherical_uv(n: Vec3) -> Vec2 {
    Vec2::new(
        n.x.atan2(n.z).abs() / PI,
        1.0 - n.y.clamp(-1.0, 1.0).acos() / PI,
    )
}

/// Maps a point of the cube `[-1, 1]³` onto the unit sphere with the
/// area-preserving remap
/// `x' = x·sqrt(1 − (y² + z²)/2 + y²z²/3)` (cyclic in `y`, `z`).
///
/// Points on the cube surface land on the unit sphere exactly (up to
/// rounding). Compared with plain normalization, grid cells near face
/// corners keep far more of their area.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use parametric_mesh::math::cube_to_sphere;
/// let corner = cube_to_sphere(Vec3::ONE);
/// assert!((corner.length() - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn cube_to_sphere(p: Vec3) -> Vec3 {
    let sq = p * p;
    Vec3::new(
        p.x * (1.0 - (sq.y + sq.z) * 0.5 + sq.y * sq.z / 3.0).max(0.0).sqrt(),
        p.y * (1.0 - (sq.x + sq.z) * 0.5 + sq.x * sq.z / 3.0).max(0.0).sqrt(),
        p.z * (1.0 - (sq.x + sq.y) * 0.5 + sq.x * sq.y / 3.0).max(0.0).sqrt(),
    )
}

/// Projects a point of a box surface onto the matching rounded box.
///
/// The point is clamped into the inner box `[-inner_half, inner_half]`;
/// the offset from the clamp point gives the outward normal, and the
/// rounded position sits `radius` along it. Face-interior points clamp to
/// a face of the inner box, edge points to an inner edge and corner points
/// to an inner corner, so faces, edges and corners blend without seams.
///
/// `fallback` is used as the normal when the point already lies on the
/// inner box (zero radius).
///
/// Returns `(position, normal)`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use parametric_mesh::math::round_box_point;
/// let (p, n) = round_box_point(Vec3::ONE, Vec3::splat(0.5), 0.5, Vec3::X);
/// assert!((n.length() - 1.0).abs() < 1e-6);
/// assert!((p - Vec3::splat(0.5)).length() - 0.5 < 1e-6);
/// ```
#[inline]
pub fn round_box_point(p: Vec3, inner_half: Vec3, radius: f32, fallback: Vec3) -> (Vec3, Vec3) {
    let inner = p.clamp(-inner_half, inner_half);
    let normal = normalize_or(p - inner, fallback);
    (inner + normal * radius, normal)
}

#[cfg(test)]
mod tests;
