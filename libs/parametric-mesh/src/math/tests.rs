//! Math helper tests.

use super::*;
use approx::assert_abs_diff_eq;
use std::f32::consts::FRAC_PI_2;

#[test]
fn test_map_range_endpoints() {
    assert_abs_diff_eq!(map_range(0.0, 0.0, FRAC_PI_2, 0.25, 1.0), 0.25);
    assert_abs_diff_eq!(map_range(FRAC_PI_2, 0.0, FRAC_PI_2, 0.25, 1.0), 1.0);
    assert_abs_diff_eq!(map_range(-0.5, -1.0, 0.0, 1.0, 0.0), 0.5);
}

#[test]
fn test_normalize_or_rejects_non_finite() {
    assert_eq!(normalize_or(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X), Vec3::X);
    assert_eq!(normalize_or(Vec3::splat(1.0e-9), Vec3::NEG_Y), Vec3::NEG_Y);
}

#[test]
fn test_rotation_keeps_perpendicular_vector_in_plane() {
    let axis = Vec3::new(0.0, 0.3, 1.0).normalize();
    let v = Vec3::X;
    for step in 0..8 {
        let rotated = rotate_about_axis(v, axis, step as f32 * 0.7);
        assert_abs_diff_eq!(rotated.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.dot(axis), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_clamp_resolution() {
    assert_eq!(clamp_resolution("test", "angular", 0, 3), 3);
    assert_eq!(clamp_resolution("test", "angular", 7, 3), 7);
    assert_eq!(clamp_resolution_max("test", "res", 12, 8), 8);
    assert_eq!(clamp_radius("test", 2.0, 0.5), 0.5);
    assert_eq!(clamp_radius("test", 0.25, 0.5), 0.25);
}

#[test]
fn test_spherical_uv_range() {
    for n in [Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z, Vec3::Y, Vec3::NEG_Y] {
        let uv = spherical_uv(n);
        assert!((0.0..=1.0).contains(&uv.x));
        assert!((0.0..=1.0).contains(&uv.y));
    }
    assert_abs_diff_eq!(spherical_uv(Vec3::NEG_Y).y, 0.0);
    assert_abs_diff_eq!(spherical_uv(Vec3::NEG_Z).x, 1.0);
}

#[test]
fn test_cube_to_sphere_lands_on_unit_sphere() {
    let samples = [
        Vec3::new(1.0, 0.3, -0.7),
        Vec3::new(-0.2, 1.0, 0.9),
        Vec3::new(0.5, -0.5, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    for p in samples {
        assert_abs_diff_eq!(cube_to_sphere(p).length(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_round_box_point_regions() {
    let inner = Vec3::new(0.5, 0.5, 0.5);
    let radius = 0.5;

    // face interior keeps the face normal
    let (p, n) = round_box_point(Vec3::new(1.0, 0.2, -0.1), inner, radius, Vec3::X);
    assert_abs_diff_eq!(n.x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-6);

    // edge points bend around the inner edge
    let (_, n) = round_box_point(Vec3::new(1.0, 1.0, 0.0), inner, radius, Vec3::X);
    assert_abs_diff_eq!(n.x, n.y, epsilon = 1e-6);
    assert_abs_diff_eq!(n.z, 0.0, epsilon = 1e-6);

    // zero radius uses the fallback normal
    let (p, n) = round_box_point(Vec3::ONE, Vec3::ONE, 0.0, Vec3::Y);
    assert_eq!(n, Vec3::Y);
    assert_eq!(p, Vec3::ONE);
}
