//! # Platonic Solids and GeoSphere
//!
//! Each solid starts from a fixed point and face table (see `solids`).
//! Faces with more than three corners are fanned around their centroid,
//! then every subdivision pass splits each triangle into four by inserting
//! its edge midpoints:
//!
//! ```text
//!         i2
//!        /  \
//!       c -- b
//!      / \  / \
//!    i0 -- a -- i1
//! ```
//!
//! A pass appends three fresh points per triangle instead of sharing
//! midpoints between neighbors, so it needs no edge lookup. Neighbors still
//! compute bit-identical midpoints for a shared edge.
//!
//! With `spherical` every inserted point is pushed onto the sphere and
//! normals are radial; without it the facets stay flat and each keeps the
//! normal of the base face it came from. The GeoSphere is the spherical
//! icosahedron.

mod solids;

#[cfg(test)]
mod tests;

use config::constants::MAX_SUBDIVISIONS;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use self::solids::BaseSolid;
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_resolution_max, normalize_or, spherical_uv};
use crate::mesh::{MeshBuffer, MeshPart};

/// The five Platonic solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolyhedronKind {
    /// 4 triangles
    Tetrahedron,
    /// 6 squares
    Hexahedron,
    /// 8 triangles
    Octahedron,
    /// 12 pentagons
    Dodecahedron,
    /// 20 triangles
    #[default]
    Icosahedron,
}

impl PolyhedronKind {
    /// All kinds, in order of face count.
    pub const ALL: [PolyhedronKind; 5] = [
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::Hexahedron,
        PolyhedronKind::Octahedron,
        PolyhedronKind::Dodecahedron,
        PolyhedronKind::Icosahedron,
    ];

    /// Display name, also used as the part name.
    pub fn name(self) -> &'static str {
        match self {
            PolyhedronKind::Tetrahedron => "Tetrahedron",
            PolyhedronKind::Hexahedron => "Hexahedron",
            PolyhedronKind::Octahedron => "Octahedron",
            PolyhedronKind::Dodecahedron => "Dodecahedron",
            PolyhedronKind::Icosahedron => "Icosahedron",
        }
    }

    /// Triangles before any subdivision, after fanning.
    pub fn base_triangle_count(self) -> usize {
        match self {
            PolyhedronKind::Tetrahedron => 4,
            PolyhedronKind::Hexahedron => 6 * 4,
            PolyhedronKind::Octahedron => 8,
            PolyhedronKind::Dodecahedron => 12 * 5,
            PolyhedronKind::Icosahedron => 20,
        }
    }
}

/// Parameters of a Platonic solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyhedronParams {
    /// Which solid
    pub kind: PolyhedronKind,
    /// Circumscribed sphere radius
    pub radius: f32,
    /// Subdivision passes (max 8)
    pub res: u32,
    /// Push inserted points onto the sphere
    pub spherical: bool,
}

impl Default for PolyhedronParams {
    fn default() -> Self {
        Self {
            kind: PolyhedronKind::Icosahedron,
            radius: 0.5,
            res: 0,
            spherical: false,
        }
    }
}

/// Parameters of a geodesic sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSphereParams {
    /// Sphere radius
    pub radius: f32,
    /// Subdivision passes (max 8)
    pub res: u32,
}

impl Default for GeoSphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            res: 0,
        }
    }
}

/// Indexed triangles, each remembering the base face it came from.
struct Triangulation {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    faces: Vec<usize>,
}

impl Triangulation {
    /// Fans the faces of `solid` into triangles.
    fn fan(solid: &BaseSolid, radius: f32, spherical: bool) -> Self {
        let mut triangulation = Self {
            positions: solid.points.clone(),
            indices: Vec::new(),
            faces: Vec::new(),
        };

        for (face_index, face) in solid.faces.iter().enumerate() {
            if let &[a, b, c] = face.as_slice() {
                triangulation.indices.extend_from_slice(&[a, b, c]);
                triangulation.faces.push(face_index);
                continue;
            }

            let mut center = solid.face_center(face);
            if spherical {
                center = normalize_or(center, Vec3::Y) * radius;
            }
            let center_index = triangulation.positions.len() as u32;
            triangulation.positions.push(center);
            for (i, &corner) in face.iter().enumerate() {
                let next = face[(i + 1) % face.len()];
                triangulation
                    .indices
                    .extend_from_slice(&[center_index, corner, next]);
                triangulation.faces.push(face_index);
            }
        }

        triangulation
    }

    /// Runs one midpoint subdivision pass.
    fn subdivide(&mut self, radius: f32, spherical: bool) {
        let triangle_count = self.faces.len();
        let mut indices = Vec::with_capacity(triangle_count * 12);
        let mut faces = Vec::with_capacity(triangle_count * 4);
        self.positions.reserve(triangle_count * 3);

        let midpoint = |p: Vec3, q: Vec3| {
            let m = (p + q) * 0.5;
            if spherical {
                normalize_or(m, Vec3::Y) * radius
            } else {
                m
            }
        };

        for (triangle, &face) in self.indices.chunks_exact(3).zip(&self.faces) {
            let (i0, i1, i2) = (triangle[0], triangle[1], triangle[2]);
            let v0 = self.positions[i0 as usize];
            let v1 = self.positions[i1 as usize];
            let v2 = self.positions[i2 as usize];

            let a = self.positions.len() as u32;
            let b = a + 1;
            let c = a + 2;
            self.positions.push(midpoint(v0, v1));
            self.positions.push(midpoint(v1, v2));
            self.positions.push(midpoint(v2, v0));

            indices.extend_from_slice(&[i0, a, c, a, i1, b, a, b, c, c, b, i2]);
            faces.extend_from_slice(&[face; 4]);
        }

        self.indices = indices;
        self.faces = faces;
    }
}

/// Builds the single part of a subdivided solid.
fn solid_part(name: &str, kind: PolyhedronKind, radius: f32, res: u32, spherical: bool) -> MeshPart {
    let passes = clamp_resolution_max(name, "res", res, MAX_SUBDIVISIONS);
    let solid = BaseSolid::new(kind, radius);

    let mut triangulation = Triangulation::fan(&solid, radius, spherical);
    for _ in 0..passes {
        triangulation.subdivide(radius, spherical);
    }

    if spherical {
        let mut part = MeshPart::with_capacity(
            name,
            0,
            triangulation.positions.len(),
            triangulation.faces.len(),
        );
        for &p in &triangulation.positions {
            let normal = normalize_or(p, Vec3::Y);
            part.push_vertex(p, normal, spherical_uv(normal));
        }
        part.indices = triangulation.indices;
        return part;
    }

    let face_normals: Vec<Vec3> = solid
        .faces
        .iter()
        .map(|face| normalize_or(solid.face_center(face), Vec3::Y))
        .collect();
    let mut part = MeshPart::with_capacity(
        name,
        0,
        triangulation.faces.len() * 3,
        triangulation.faces.len(),
    );
    for (triangle, &face) in triangulation.indices.chunks_exact(3).zip(&triangulation.faces) {
        let normal = face_normals[face];
        let mut corners = [0; 3];
        for (corner, &index) in corners.iter_mut().zip(triangle) {
            let p = triangulation.positions[index as usize];
            *corner = part.push_vertex(p, normal, spherical_uv(normalize_or(p, normal)));
        }
        part.push_triangle(corners[0], corners[1], corners[2]);
    }
    part
}

/// Builds the single part of a Platonic solid.
pub fn polyhedron_parts(params: &PolyhedronParams) -> Vec<MeshPart> {
    vec![solid_part(
        params.kind.name(),
        params.kind,
        params.radius,
        params.res,
        params.spherical,
    )]
}

/// Generates a Platonic solid.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_polyhedron, PolyhedronKind, PolyhedronParams};
///
/// let mesh = generate_polyhedron(&PolyhedronParams {
///     kind: PolyhedronKind::Hexahedron,
///     radius: 1.0,
///     res: 1,
///     spherical: false,
/// })
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 6 * 4 * 4);
/// ```
pub fn generate_polyhedron(params: &PolyhedronParams) -> MeshResult<MeshBuffer> {
    assemble(polyhedron_parts(params), MergePolicy::Unified)
}

/// Builds the single part of a geodesic sphere.
pub fn geosphere_parts(params: &GeoSphereParams) -> Vec<MeshPart> {
    vec![solid_part(
        "GeoSphere",
        PolyhedronKind::Icosahedron,
        params.radius,
        params.res,
        true,
    )]
}

/// Generates a geodesic sphere with `20 × 4^res` triangles.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_geosphere, GeoSphereParams};
///
/// let mesh = generate_geosphere(&GeoSphereParams { radius: 1.0, res: 2 }).unwrap();
/// assert_eq!(mesh.triangle_count(), 20 * 16);
/// ```
pub fn generate_geosphere(params: &GeoSphereParams) -> MeshResult<MeshBuffer> {
    assemble(geosphere_parts(params), MergePolicy::Unified)
}
