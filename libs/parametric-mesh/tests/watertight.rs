//! Closed solids must weld into a closed, consistently wound surface.

mod common;

use common::{assert_positive_volume, assert_watertight, directed_edges};
use config::constants::GenerationConfig;
use parametric_mesh::{
    CapsuleParams, CirclePlaneParams, ConeParams, CubeParams, CubeSphereParams, CylinderParams,
    ExtrudedRoundedRectPadParams, GeoSphereParams, LissajousTorusParams, PolyhedronKind,
    PolyhedronParams, RoundedCubeParams, Shape, TorusParams,
};

fn closed_solids() -> Vec<Shape> {
    let mut shapes = vec![
        Shape::Torus(TorusParams {
            minor_radius: 0.25,
            major_radius: 1.0,
            minor_resolution: 12,
            major_resolution: 16,
        }),
        Shape::LissajousTorus(LissajousTorusParams {
            minor_radius: 0.1,
            major_radius: 1.0,
            height: 0.5,
            cycle_times: 3,
            minor_resolution: 8,
            major_resolution: 48,
        }),
        Shape::GeoSphere(GeoSphereParams {
            radius: 1.0,
            res: 2,
        }),
        Shape::CubeSphere(CubeSphereParams {
            radius: 1.0,
            resolution: 6,
            split_faces: false,
        }),
        Shape::Cube(CubeParams {
            width: 1.0,
            height: 2.0,
            depth: 3.0,
            width_resolution: 3,
            height_resolution: 4,
            depth_resolution: 5,
            split_faces: true,
        }),
        Shape::RoundedCube(RoundedCubeParams {
            width: 1.0,
            height: 1.5,
            depth: 2.0,
            radius: 0.2,
            width_resolution: 6,
            height_resolution: 7,
            depth_resolution: 8,
            split_faces: false,
        }),
        Shape::Cone(ConeParams {
            radius: 0.5,
            height: 1.0,
            angular_resolution: 12,
            radial_resolution: 2,
            vertical_resolution: 3,
            split_faces: true,
            circle_uv: false,
        }),
        Shape::Cylinder(CylinderParams {
            radius: 0.5,
            height: 1.0,
            angular_resolution: 12,
            radial_resolution: 2,
            vertical_resolution: 3,
            split_faces: false,
            circle_uv: true,
        }),
        Shape::Capsule(CapsuleParams {
            radius: 0.5,
            height: 1.0,
            angular_resolution: 12,
            radial_resolution: 4,
            vertical_resolution: 2,
            split_faces: true,
        }),
        Shape::ExtrudedRoundedRectPad(ExtrudedRoundedRectPadParams {
            width: 2.0,
            height: 1.0,
            depth: 0.5,
            radius: 0.25,
            ..Default::default()
        }),
    ];
    for kind in PolyhedronKind::ALL {
        for spherical in [false, true] {
            shapes.push(Shape::Polyhedron(PolyhedronParams {
                kind,
                radius: 1.0,
                res: 1,
                spherical,
            }));
        }
    }
    shapes
}

#[test]
fn closed_solids_are_watertight() {
    let epsilon = GenerationConfig::default().weld_epsilon;
    for shape in closed_solids() {
        let mesh = shape.generate().unwrap();
        assert_watertight(shape.name(), &mesh, epsilon);
    }
}

#[test]
fn closed_solids_face_outward() {
    for shape in closed_solids() {
        let mesh = shape.generate().unwrap();
        assert_positive_volume(shape.name(), &mesh);
    }
}

#[test]
fn catalogue_solids_are_watertight() {
    // Demo sizes are small; weld tighter than the default.
    let epsilon = GenerationConfig::new(1.0e-4, 1.0e-6).unwrap().weld_epsilon;
    for shape in Shape::catalogue() {
        let closed = matches!(
            shape,
            Shape::Torus(_)
                | Shape::GeoSphere(_)
                | Shape::CubeSphere(_)
                | Shape::RoundedCube(_)
                | Shape::Polyhedron(_)
        );
        if closed {
            let mesh = shape.generate().unwrap();
            assert_watertight(shape.name(), &mesh, epsilon);
        }
    }
}

#[test]
fn planes_have_a_boundary() {
    let epsilon = GenerationConfig::default().weld_epsilon;
    let mesh = Shape::CirclePlane(CirclePlaneParams {
        radius: 1.0,
        angular_resolution: 16,
        radial_resolution: 3,
        circle_uv: true,
    })
    .generate()
    .unwrap();
    let edges = directed_edges(&mesh, epsilon);
    let boundary = edges
        .keys()
        .filter(|&&(a, b)| !edges.contains_key(&(b, a)))
        .count();
    assert_eq!(boundary, 16);
}
