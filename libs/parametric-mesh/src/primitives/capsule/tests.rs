//! Capsule tests.

use super::*;
use approx::assert_abs_diff_eq;

fn params(split_faces: bool) -> CapsuleParams {
    CapsuleParams {
        radius: 0.5,
        height: 1.0,
        angular_resolution: 8,
        radial_resolution: 4,
        vertical_resolution: 2,
        split_faces,
    }
}

#[test]
fn test_capsule_parts_layout() {
    let parts = capsule_parts(&params(false));
    let names: Vec<_> = parts.iter().map(|part| part.name.as_str()).collect();
    assert_eq!(names, ["CapsuleTop", "CapsuleBottom", "CapsuleBand"]);
    assert_eq!(parts[0].material_index, 1);
    assert_eq!(parts[1].material_index, 1);
    assert_eq!(parts[2].material_index, 0);
    assert_eq!(parts[0].vertex_count(), 9 * 5);
    assert_eq!(parts[0].triangle_count(), 8 * 4 * 2);
    assert_eq!(parts[2].triangle_count(), 8 * 2 * 2);
}

#[test]
fn test_capsule_surface_distance() {
    // Every vertex lies at `radius` from the nearest point of the axis
    // segment.
    for part in capsule_parts(&params(false)) {
        for p in &part.positions {
            let axis = Vec3::new(0.0, p.y.clamp(-0.5, 0.5), 0.0);
            assert_abs_diff_eq!(p.distance(axis), 0.5, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_capsule_winding_is_outward() {
    for part in capsule_parts(&params(false)) {
        for triangle in part.indices.chunks_exact(3) {
            let a = part.positions[triangle[0] as usize];
            let b = part.positions[triangle[1] as usize];
            let c = part.positions[triangle[2] as usize];
            let cross = (b - a).cross(c - a);
            if cross.length() > 1e-9 {
                let centroid = (a + b + c) / 3.0;
                let axis = Vec3::new(0.0, centroid.y.clamp(-0.5, 0.5), 0.0);
                assert!(cross.dot(centroid - axis) > 0.0, "{}", part.name);
            }
        }
    }
}

#[test]
fn test_capsule_unified_uv_partition() {
    let parts = capsule_parts(&params(false));
    let total = 1.0 + std::f32::consts::PI * 0.5;
    let v_per_cap = std::f32::consts::FRAC_PI_2 * 0.5 / total;

    let (top, bottom, band) = (&parts[0], &parts[1], &parts[2]);
    assert_abs_diff_eq!(top.uvs[0].y, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bottom.uvs[0].y, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bottom.uvs.last().unwrap().y, v_per_cap, epsilon = 1e-6);
    assert_abs_diff_eq!(band.uvs[0].y, v_per_cap, epsilon = 1e-6);
    assert_abs_diff_eq!(
        band.uvs.last().unwrap().y,
        top.uvs.last().unwrap().y,
        epsilon = 1e-6
    );
}

#[test]
fn test_capsule_split_uv_ranges() {
    let parts = capsule_parts(&params(true));
    let (top, bottom, band) = (&parts[0], &parts[1], &parts[2]);
    assert_abs_diff_eq!(top.uvs.last().unwrap().y, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bottom.uvs[0].y, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bottom.uvs.last().unwrap().y, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(bottom.uvs[1].x, 1.0 / 8.0, epsilon = 1e-6);
    assert_abs_diff_eq!(band.uvs.last().unwrap().y, 1.0, epsilon = 1e-6);
}

#[test]
fn test_generate_capsule_split_groups() {
    let mesh = generate_capsule(&params(true)).unwrap();
    assert_eq!(mesh.material_groups(), vec![0, 1]);
    let materials = mesh.materials.as_ref().unwrap();
    assert_eq!(materials.iter().filter(|&&m| m == 0).count(), 8 * 2 * 2);
    assert!(mesh.has_unit_normals());
}
