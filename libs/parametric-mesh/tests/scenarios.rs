//! Concrete generation scenarios and triangle-count formulas.

use approx::assert_abs_diff_eq;
use glam::Vec3;
use parametric_mesh::batch::{generate_all, generate_parts_deferred};
use parametric_mesh::{
    assemble, generate_capsule, generate_circle_plane, generate_cube_sphere, generate_geosphere,
    generate_polyhedron, generate_squircle_plane, generate_torus, torus_parts, CapsuleParams,
    CirclePlaneParams, CubeSphereParams, GeoSphereParams, MergePolicy, MeshGenerationError,
    PolyhedronKind, PolyhedronParams, Shape, SquirclePlaneParams, TorusParams,
};

#[test]
fn cube_sphere_radius_one_resolution_three() {
    let mesh = generate_cube_sphere(&CubeSphereParams {
        radius: 1.0,
        resolution: 3,
        split_faces: false,
    })
    .unwrap();
    assert_eq!(mesh.vertex_count(), 6 * 3 * 3);
    assert_eq!(mesh.triangle_count(), 6 * 2 * 2 * 2);
    assert!(mesh.materials.is_none());
    for p in &mesh.positions {
        assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn torus_eight_by_eight() {
    let mesh = generate_torus(&TorusParams {
        minor_radius: 0.1,
        major_radius: 1.0,
        minor_resolution: 8,
        major_resolution: 8,
    })
    .unwrap();
    assert_eq!(mesh.vertex_count(), 81);
    assert_eq!(mesh.triangle_count(), 128);
    assert!(mesh.materials.is_none());

    // Every vertex sits on the tube surface.
    for p in &mesh.positions {
        let ring = Vec3::new(p.x, 0.0, p.z).normalize() * 1.0;
        assert_abs_diff_eq!(p.distance(ring), 0.1, epsilon = 1e-5);
    }
}

#[test]
fn capsule_split_has_two_material_groups() {
    let mesh = generate_capsule(&CapsuleParams {
        radius: 0.5,
        height: 1.0,
        split_faces: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(mesh.material_groups(), vec![0, 1]);

    // Band triangles are tagged 0 and lie within the band's height.
    let materials = mesh.materials.as_ref().unwrap();
    for (triangle, &material) in mesh.triangles().zip(materials) {
        let on_band = triangle
            .iter()
            .all(|&index| mesh.positions[index as usize].y.abs() <= 0.5 + 1e-6);
        if material == 0 {
            assert!(on_band);
        }
    }
}

#[test]
fn geosphere_counts_and_radius() {
    for res in 0..=4 {
        let mesh = generate_geosphere(&GeoSphereParams { radius: 2.0, res }).unwrap();
        assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(res));
        for p in &mesh.positions {
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn plane_triangles_per_ring_pair() {
    for (angular, radial) in [(3, 1), (8, 2), (30, 5)] {
        let circle = generate_circle_plane(&CirclePlaneParams {
            radius: 1.0,
            angular_resolution: angular,
            radial_resolution: radial,
            circle_uv: true,
        })
        .unwrap();
        assert_eq!(
            circle.triangle_count(),
            (angular * radial * 2) as usize,
            "circle {angular}x{radial}"
        );

        let squircle = generate_squircle_plane(&SquirclePlaneParams {
            size: 1.0,
            p: 4.0,
            angular_resolution: angular,
            radial_resolution: radial,
            circle_uv: false,
        })
        .unwrap();
        assert_eq!(squircle.triangle_count(), (angular * radial * 2) as usize);
        assert!(squircle.normals.iter().all(|n| *n == Vec3::Y));
    }
}

#[test]
fn cube_sphere_triangle_formula() {
    for resolution in [3u32, 4, 7, 12] {
        let mesh = generate_cube_sphere(&CubeSphereParams {
            radius: 1.0,
            resolution,
            split_faces: false,
        })
        .unwrap();
        let r = resolution as usize;
        assert_eq!(mesh.triangle_count(), 6 * (r - 1) * (r - 1) * 2);
    }
}

#[test]
fn polyhedron_triangle_formula() {
    for kind in PolyhedronKind::ALL {
        for res in 0..3 {
            let mesh = generate_polyhedron(&PolyhedronParams {
                kind,
                radius: 1.0,
                res,
                spherical: true,
            })
            .unwrap();
            assert_eq!(
                mesh.triangle_count(),
                kind.base_triangle_count() * 4usize.pow(res),
                "{kind:?} res {res}"
            );
        }
    }
}

#[test]
fn non_finite_parameters_are_rejected_at_assembly() {
    let result = generate_torus(&TorusParams {
        minor_radius: f32::NAN,
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(MeshGenerationError::NonFiniteVertex { .. })
    ));
}

#[test]
fn empty_part_list_is_rejected() {
    assert_eq!(
        assemble(Vec::new(), MergePolicy::SplitByMaterial),
        Err(MeshGenerationError::EmptyPrimitives)
    );
}

#[test]
fn unified_and_split_share_geometry() {
    let parts = torus_parts(&TorusParams::default());
    let unified = assemble(parts.clone(), MergePolicy::Unified).unwrap();
    let split = assemble(parts, MergePolicy::SplitByMaterial).unwrap();
    assert_eq!(unified.positions, split.positions);
    assert_eq!(unified.indices, split.indices);
    assert_eq!(split.material_groups(), vec![0]);
}

#[test]
fn batch_generation_matches_sequential() {
    let shapes = Shape::catalogue();
    let batch = generate_all(&shapes);
    let deferred = generate_parts_deferred(&shapes);
    assert_eq!(batch.len(), shapes.len());
    assert_eq!(deferred.len(), shapes.len());

    for ((shape, mesh), parts) in shapes.iter().zip(batch).zip(deferred) {
        let mesh = mesh.unwrap();
        let parts = parts.unwrap();
        assert_eq!(mesh, shape.generate().unwrap(), "{}", shape.name());
        let triangles: usize = parts.iter().map(|part| part.triangle_count()).sum();
        assert_eq!(triangles, mesh.triangle_count(), "{}", shape.name());
    }
}
