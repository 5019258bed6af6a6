//! Base point and face tables of the five Platonic solids.
//!
//! Every solid is inscribed in the sphere of the requested radius and every
//! face lists its corners counter-clockwise seen from outside.

use glam::Vec3;

use super::PolyhedronKind;
use crate::math::normalize_or;

/// An indexed polygonal solid before triangulation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BaseSolid {
    pub points: Vec<Vec3>,
    pub faces: Vec<Vec<u32>>,
}

impl BaseSolid {
    /// Builds the solid of `kind` inscribed in a sphere of `radius`.
    pub fn new(kind: PolyhedronKind, radius: f32) -> Self {
        match kind {
            PolyhedronKind::Tetrahedron => tetrahedron(radius),
            PolyhedronKind::Hexahedron => hexahedron(radius),
            PolyhedronKind::Octahedron => octahedron(radius),
            PolyhedronKind::Dodecahedron => dodecahedron(radius),
            PolyhedronKind::Icosahedron => icosahedron(radius),
        }
    }

    /// Centroid of face `face`.
    pub fn face_center(&self, face: &[u32]) -> Vec3 {
        let sum: Vec3 = face.iter().map(|&i| self.points[i as usize]).sum();
        sum / face.len() as f32
    }
}

/// Scales unit-less directions onto the sphere of `radius`.
fn on_sphere(directions: &[[f32; 3]], radius: f32) -> Vec<Vec3> {
    directions
        .iter()
        .map(|&d| normalize_or(Vec3::from(d), Vec3::Y) * radius)
        .collect()
}

fn tetrahedron(radius: f32) -> BaseSolid {
    BaseSolid {
        points: on_sphere(
            &[
                [1.0, 1.0, 1.0],
                [1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0],
            ],
            radius,
        ),
        faces: vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]],
    }
}

fn hexahedron(radius: f32) -> BaseSolid {
    BaseSolid {
        points: on_sphere(
            &[
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0],
            ],
            radius,
        ),
        faces: vec![
            vec![1, 2, 6, 5],
            vec![0, 4, 7, 3],
            vec![3, 7, 6, 2],
            vec![0, 1, 5, 4],
            vec![4, 5, 6, 7],
            vec![0, 3, 2, 1],
        ],
    }
}

fn octahedron(radius: f32) -> BaseSolid {
    BaseSolid {
        points: on_sphere(
            &[
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
            ],
            radius,
        ),
        faces: vec![
            vec![0, 2, 4],
            vec![1, 4, 2],
            vec![0, 4, 3],
            vec![0, 5, 2],
            vec![1, 3, 4],
            vec![1, 2, 5],
            vec![0, 3, 5],
            vec![1, 5, 3],
        ],
    }
}

/// The golden-ratio icosahedron: `h = sqrt(r² / (1 + 1/φ²))`, `w = h/φ`.
fn icosahedron(radius: f32) -> BaseSolid {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let h = (radius * radius / (1.0 + 1.0 / (phi * phi))).sqrt();
    let w = h / phi;

    BaseSolid {
        points: vec![
            Vec3::new(0.0, h, w),
            Vec3::new(0.0, h, -w),
            Vec3::new(0.0, -h, w),
            Vec3::new(0.0, -h, -w),
            Vec3::new(h, -w, 0.0),
            Vec3::new(h, w, 0.0),
            Vec3::new(-h, -w, 0.0),
            Vec3::new(-h, w, 0.0),
            Vec3::new(-w, 0.0, -h),
            Vec3::new(w, 0.0, -h),
            Vec3::new(-w, 0.0, h),
            Vec3::new(w, 0.0, h),
        ],
        faces: vec![
            vec![0, 11, 5],
            vec![0, 5, 1],
            vec![0, 1, 7],
            vec![0, 7, 10],
            vec![0, 10, 11],
            vec![1, 5, 9],
            vec![5, 11, 4],
            vec![11, 10, 2],
            vec![10, 7, 6],
            vec![7, 1, 8],
            vec![3, 9, 4],
            vec![3, 4, 2],
            vec![3, 2, 6],
            vec![3, 6, 8],
            vec![3, 8, 9],
            vec![4, 9, 5],
            vec![2, 4, 11],
            vec![6, 2, 10],
            vec![8, 6, 7],
            vec![9, 8, 1],
        ],
    }
}

/// The dual of the icosahedron: one point per icosahedron face, one
/// pentagon per icosahedron vertex.
fn dodecahedron(radius: f32) -> BaseSolid {
    let ico = icosahedron(radius);
    let points: Vec<Vec3> = ico
        .faces
        .iter()
        .map(|face| normalize_or(ico.face_center(face), Vec3::Y) * radius)
        .collect();

    let faces = ico
        .points
        .iter()
        .enumerate()
        .map(|(vertex, &axis_point)| {
            let axis = normalize_or(axis_point, Vec3::Y);
            let mut around: Vec<u32> = ico
                .faces
                .iter()
                .enumerate()
                .filter(|(_, face)| face.contains(&(vertex as u32)))
                .map(|(index, _)| index as u32)
                .collect();

            // Order the surrounding points by angle about the vertex axis;
            // `v = axis × u` makes increasing angles counter-clockwise seen
            // from outside.
            let first = points[around[0] as usize];
            let u = normalize_or(first - axis * first.dot(axis), Vec3::X);
            let v = axis.cross(u);
            let angle = |index: &u32| {
                let p = points[*index as usize];
                p.dot(v).atan2(p.dot(u))
            };
            around.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
            around
        })
        .collect();

    BaseSolid { points, faces }
}
