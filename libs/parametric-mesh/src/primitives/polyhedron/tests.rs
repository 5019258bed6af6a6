//! Polyhedron and GeoSphere tests.

use super::*;
use approx::assert_abs_diff_eq;

fn assert_outward(part: &MeshPart) {
    for triangle in part.indices.chunks_exact(3) {
        let a = part.positions[triangle[0] as usize];
        let b = part.positions[triangle[1] as usize];
        let c = part.positions[triangle[2] as usize];
        let cross = (b - a).cross(c - a);
        assert!(cross.length() > 0.0, "{} has a degenerate triangle", part.name);
        assert!(
            cross.dot(a + b + c) > 0.0,
            "{} has an inward triangle",
            part.name
        );
    }
}

#[test]
fn test_base_solids_are_inscribed() {
    for kind in PolyhedronKind::ALL {
        let solid = BaseSolid::new(kind, 2.0);
        for p in &solid.points {
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-5);
        }
        let corners: usize = solid.faces.iter().map(Vec::len).sum();
        let fanned: usize = solid
            .faces
            .iter()
            .map(|face| if face.len() == 3 { 1 } else { face.len() })
            .sum();
        assert_eq!(fanned, kind.base_triangle_count(), "{kind:?}");
        // Euler: V - E + F = 2, every edge shared by two faces.
        let vertices = solid.points.len() as i64;
        let edges = corners as i64 / 2;
        let faces = solid.faces.len() as i64;
        assert_eq!(vertices - edges + faces, 2, "{kind:?}");
    }
}

#[test]
fn test_dodecahedron_is_regular() {
    let solid = BaseSolid::new(PolyhedronKind::Dodecahedron, 1.0);
    assert_eq!(solid.points.len(), 20);
    assert_eq!(solid.faces.len(), 12);

    let mut lengths = Vec::new();
    for face in &solid.faces {
        assert_eq!(face.len(), 5);
        for i in 0..5 {
            let p = solid.points[face[i] as usize];
            let q = solid.points[face[(i + 1) % 5] as usize];
            lengths.push(p.distance(q));
        }
    }
    let first = lengths[0];
    for length in lengths {
        assert_abs_diff_eq!(length, first, epsilon = 1e-5);
    }
}

#[test]
fn test_flat_solids_are_outward_and_flat() {
    for kind in PolyhedronKind::ALL {
        for res in 0..3 {
            let params = PolyhedronParams {
                kind,
                radius: 1.0,
                res,
                spherical: false,
            };
            let part = &polyhedron_parts(&params)[0];
            assert_eq!(part.name, kind.name());
            assert_eq!(
                part.triangle_count(),
                kind.base_triangle_count() * 4usize.pow(res)
            );
            assert_eq!(part.vertex_count(), part.triangle_count() * 3);
            assert_outward(part);

            // Every triangle's corners share its face normal, and the
            // geometric normal agrees with it.
            for triangle in part.indices.chunks_exact(3) {
                let n = part.normals[triangle[0] as usize];
                assert_eq!(n, part.normals[triangle[1] as usize]);
                assert_eq!(n, part.normals[triangle[2] as usize]);
                let a = part.positions[triangle[0] as usize];
                let b = part.positions[triangle[1] as usize];
                let c = part.positions[triangle[2] as usize];
                let geometric = (b - a).cross(c - a).normalize();
                assert_abs_diff_eq!(geometric, n, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn test_spherical_solids_lie_on_sphere() {
    for kind in PolyhedronKind::ALL {
        let params = PolyhedronParams {
            kind,
            radius: 0.75,
            res: 2,
            spherical: true,
        };
        let part = &polyhedron_parts(&params)[0];
        assert_outward(part);
        for (p, n) in part.positions.iter().zip(&part.normals) {
            assert_abs_diff_eq!(p.length(), 0.75, epsilon = 1e-5);
            assert_abs_diff_eq!(*p / 0.75, *n, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_geosphere_counts() {
    for res in 0..4 {
        let part = &geosphere_parts(&GeoSphereParams { radius: 1.0, res })[0];
        let growth = 4usize.pow(res);
        assert_eq!(part.triangle_count(), 20 * growth);
        assert_eq!(part.vertex_count(), 12 + 20 * (growth - 1));
    }
}

#[test]
fn test_geosphere_matches_spherical_icosahedron() {
    let geo = &geosphere_parts(&GeoSphereParams { radius: 1.0, res: 2 })[0];
    let ico = &polyhedron_parts(&PolyhedronParams {
        kind: PolyhedronKind::Icosahedron,
        radius: 1.0,
        res: 2,
        spherical: true,
    })[0];
    assert_eq!(geo.positions, ico.positions);
    assert_eq!(geo.indices, ico.indices);
    assert_eq!(geo.name, "GeoSphere");
}

#[test]
fn test_geosphere_uvs() {
    let part = &geosphere_parts(&GeoSphereParams::default())[0];
    for (uv, n) in part.uvs.iter().zip(&part.normals) {
        assert!((0.0..=1.0).contains(&uv.x));
        assert!((0.0..=1.0).contains(&uv.y));
        assert_abs_diff_eq!(uv.y, 1.0 - n.y.clamp(-1.0, 1.0).acos() / std::f32::consts::PI);
    }
}

#[test]
fn test_subdivisions_capped() {
    let capped = polyhedron_parts(&PolyhedronParams {
        kind: PolyhedronKind::Tetrahedron,
        radius: 1.0,
        res: 40,
        spherical: true,
    });
    assert_eq!(
        capped[0].triangle_count(),
        4 * 4usize.pow(MAX_SUBDIVISIONS)
    );
}
