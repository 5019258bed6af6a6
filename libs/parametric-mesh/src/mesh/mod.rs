//! # Mesh Data Structures
//!
//! `MeshPart` is the intermediate buffer a generator fills for one surface
//! region (a cone wall, a cube face pair). `MeshBuffer` is the assembled
//! output handed to the caller.

use config::constants::NORMAL_TOLERANCE;
use glam::{Vec2, Vec3};

use crate::error::{MeshGenerationError, MeshResult};

// =============================================================================
// MESH PART
// =============================================================================

/// A named sub-mesh tagged with a material index.
///
/// Parts are transient: a generator creates them, assembly consumes them.
///
/// # Example
///
/// ```rust
/// use glam::{Vec2, Vec3};
/// use parametric_mesh::MeshPart;
///
/// let mut part = MeshPart::new("Quad", 0);
/// let a = part.push_vertex(Vec3::ZERO, Vec3::Y, Vec2::ZERO);
/// let b = part.push_vertex(Vec3::X, Vec3::Y, Vec2::X);
/// let c = part.push_vertex(Vec3::NEG_Z, Vec3::Y, Vec2::Y);
/// part.push_triangle(a, b, c);
/// assert_eq!(part.triangle_count(), 1);
/// assert!(part.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    /// Identifier of the surface region (e.g. "CylinderWall")
    pub name: String,
    /// Material slot assigned to every triangle of this part
    pub material_index: u32,
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Unit vertex normals, one per position
    pub normals: Vec<Vec3>,
    /// Texture coordinates, one per position
    pub uvs: Vec<Vec2>,
    /// Triangle indices, three per triangle, counter-clockwise from outside
    pub indices: Vec<u32>,
}

impl MeshPart {
    /// Creates an empty part.
    pub fn new(name: impl Into<String>, material_index: u32) -> Self {
        Self {
            name: name.into(),
            material_index,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Creates an empty part with pre-allocated capacity.
    pub fn with_capacity(
        name: impl Into<String>,
        material_index: u32,
        vertex_count: usize,
        triangle_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            material_index,
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Adds a vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Adds the two triangles of a grid cell.
    ///
    /// `tl`/`tr` are consecutive points of one row, `bl`/`br` the points
    /// below them in the next row. The cell is split along `tr`–`bl` and
    /// wound `tl, bl, tr` / `tr, bl, br`; pass the corners mirrored to get
    /// the opposite winding.
    #[inline]
    pub fn push_quad(&mut self, tl: u32, tr: u32, bl: u32, br: u32) {
        self.indices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
    }

    /// Adds the triangles of a `rows × columns` vertex grid that starts at
    /// vertex `base` and is stored row-major.
    ///
    /// With `flip` the winding is reversed.
    pub fn push_grid(&mut self, base: u32, rows: u32, columns: u32, flip: bool) {
        for row in 0..rows.saturating_sub(1) {
            for column in 0..columns.saturating_sub(1) {
                let tl = base + row * columns + column;
                let tr = tl + 1;
                let bl = tl + columns;
                let br = bl + 1;
                if flip {
                    self.push_quad(tl, bl, tr, br);
                } else {
                    self.push_quad(tl, tr, bl, br);
                }
            }
        }
    }

    /// Appends another part, offsetting its indices past this part's
    /// vertices.
    pub fn extend(&mut self, other: &MeshPart) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|index| index + offset));
    }

    /// Reverses the winding of every triangle.
    pub fn flip_winding(&mut self) {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
    }

    /// Checks the structural invariants of the part.
    ///
    /// - per-vertex buffers have equal length
    /// - the index buffer holds whole triangles
    /// - every index refers to an existing vertex
    /// - positions and normals are finite
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return Err(MeshGenerationError::MismatchedBuffers {
                name: self.name.clone(),
                positions: vertex_count,
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshGenerationError::IncompleteTriangle {
                name: self.name.clone(),
                index_count: self.indices.len(),
            });
        }

        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshGenerationError::IndexOutOfRange {
                name: self.name.clone(),
                index,
                vertex_count,
            });
        }

        let non_finite = self
            .positions
            .iter()
            .zip(&self.normals)
            .position(|(p, n)| !p.is_finite() || !n.is_finite());
        if let Some(index) = non_finite {
            return Err(MeshGenerationError::NonFiniteVertex {
                name: self.name.clone(),
                index,
            });
        }

        Ok(())
    }
}

// =============================================================================
// MESH BUFFER
// =============================================================================

/// The assembled output of a generator.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{generate_cube_sphere, CubeSphereParams};
///
/// let mesh = generate_cube_sphere(&CubeSphereParams {
///     radius: 1.0,
///     resolution: 3,
///     split_faces: false,
/// })
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 54);
/// assert_eq!(mesh.triangle_count(), 48);
/// assert!(mesh.materials.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Unit vertex normals
    pub normals: Vec<Vec3>,
    /// Texture coordinates
    pub uvs: Vec<Vec2>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u32>,
    /// Per-triangle material index, present in split-material mode
    pub materials: Option<Vec<u32>>,
}

impl MeshBuffer {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|triangle| [triangle[0], triangle[1], triangle[2]])
    }

    /// Returns the distinct material indices in ascending order, or an
    /// empty list when the mesh carries a single material.
    pub fn material_groups(&self) -> Vec<u32> {
        let mut groups = self.materials.clone().unwrap_or_default();
        groups.sort_unstable();
        groups.dedup();
        groups
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.positions.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        self.positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Checks the structural invariants of the buffer.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.uvs.len() != vertex_count {
            return Err(MeshGenerationError::MismatchedBuffers {
                name: "mesh".to_string(),
                positions: vertex_count,
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshGenerationError::IncompleteTriangle {
                name: "mesh".to_string(),
                index_count: self.indices.len(),
            });
        }
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshGenerationError::IndexOutOfRange {
                name: "mesh".to_string(),
                index,
                vertex_count,
            });
        }
        if let Some(materials) = &self.materials {
            if materials.len() != self.triangle_count() {
                return Err(MeshGenerationError::MaterialCountMismatch {
                    materials: materials.len(),
                    triangles: self.triangle_count(),
                });
            }
        }
        Ok(())
    }

    /// Returns the index of the first normal whose length differs from 1 by
    /// more than `tolerance`, if any.
    pub fn check_normals(&self, tolerance: f32) -> Option<usize> {
        self.normals
            .iter()
            .position(|n| (n.length() - 1.0).abs() > tolerance)
    }

    /// Returns true if every normal is unit length within the default
    /// tolerance.
    pub fn has_unit_normals(&self) -> bool {
        self.check_normals(NORMAL_TOLERANCE).is_none()
    }

    /// Exports positions as a flattened `[x, y, z, ...]` array for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Exports normals as a flattened `[x, y, z, ...]` array.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Exports texture coordinates as a flattened `[u, v, ...]` array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|uv| uv.to_array()).collect()
    }
}
