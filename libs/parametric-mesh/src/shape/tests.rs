//! Shape dispatch tests.

use super::*;

#[test]
fn test_catalogue_order() {
    let names: Vec<&str> = Shape::catalogue().iter().map(Shape::name).collect();
    assert_eq!(
        names,
        [
            "CirclePlane",
            "ArcPlane",
            "SquirclePlane",
            "RoundedRectPlane",
            "Cone",
            "Cylinder",
            "Capsule",
            "Torus",
            "LissajousTorus",
            "Tetrahedron",
            "Hexahedron",
            "Octahedron",
            "Dodecahedron",
            "Icosahedron",
            "GeoSphere",
            "ExtrudedRoundedRectPad",
            "RoundedCube",
            "CubeSphere",
        ]
    );
}

#[test]
fn test_policy_follows_split_faces() {
    assert_eq!(
        Shape::Cone(ConeParams {
            split_faces: true,
            ..Default::default()
        })
        .policy(),
        MergePolicy::SplitByMaterial
    );
    assert_eq!(
        Shape::Cylinder(CylinderParams::default()).policy(),
        MergePolicy::Unified
    );
    assert_eq!(
        Shape::Torus(TorusParams::default()).policy(),
        MergePolicy::Unified
    );
}

#[test]
fn test_generate_matches_direct_call() {
    let params = CapsuleParams {
        split_faces: true,
        ..Default::default()
    };
    let direct = crate::primitives::generate_capsule(&params).unwrap();
    let dispatched = Shape::Capsule(params).generate().unwrap();
    assert_eq!(direct, dispatched);
}

#[test]
fn test_generate_parts() {
    let parts = Shape::Cylinder(CylinderParams {
        split_faces: true,
        ..Default::default()
    })
    .generate_parts()
    .unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "CylinderWall");
    assert_eq!(parts[1].material_index, 1);

    let unified = Shape::GeoSphere(GeoSphereParams::default())
        .generate_parts()
        .unwrap();
    assert_eq!(unified.len(), 1);
    assert_eq!(unified[0].name, "GeoSphere");
    assert_eq!(unified[0].triangle_count(), 20);
}

#[test]
fn test_deserialize_with_defaults() {
    let shape: Shape =
        serde_json::from_str(r#"{ "shape": "Torus", "minor_radius": 0.02 }"#).unwrap();
    assert_eq!(
        shape,
        Shape::Torus(TorusParams {
            minor_radius: 0.02,
            ..Default::default()
        })
    );

    let shape: Shape = serde_json::from_str(
        r#"{ "shape": "Polyhedron", "kind": "Dodecahedron", "spherical": true }"#,
    )
    .unwrap();
    assert_eq!(shape.name(), "Dodecahedron");
}

#[test]
fn test_serialize_round_trip() {
    for shape in Shape::catalogue() {
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(&format!("\"shape\":\"{}\"", json_tag(&shape))));
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}

fn json_tag(shape: &Shape) -> &'static str {
    match shape {
        Shape::Polyhedron(_) => "Polyhedron",
        other => other.name(),
    }
}

#[test]
fn test_unknown_shape_rejected() {
    assert!(serde_json::from_str::<Shape>(r#"{ "shape": "Teapot" }"#).is_err());
}
