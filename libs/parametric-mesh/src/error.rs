//! # Error Types
//!
//! Error types for mesh assembly. Shape parameters are never rejected (they
//! are clamped), so the only failure is a structurally invalid buffer set
//! reaching the assembly step.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised when generated buffers cannot form a mesh.
///
/// ## Example
///
/// ```rust
/// use parametric_mesh::{assemble, MergePolicy, MeshGenerationError};
///
/// match assemble(Vec::new(), MergePolicy::Unified) {
///     Err(MeshGenerationError::EmptyPrimitives) => {}
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshGenerationError {
    /// No part contributed a single triangle.
    #[error("Mesh has no primitives")]
    EmptyPrimitives,

    /// A part carries vertices but no triangles.
    #[error("Part '{name}' has no triangles")]
    EmptyPart {
        /// Name of the offending part
        name: String,
    },

    /// Per-vertex buffers disagree in length.
    #[error("Part '{name}' has mismatched buffers: {positions} positions, {normals} normals, {uvs} uvs")]
    MismatchedBuffers {
        /// Name of the offending part
        name: String,
        /// Number of positions
        positions: usize,
        /// Number of normals
        normals: usize,
        /// Number of texture coordinates
        uvs: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Part '{name}' references vertex {index} but only has {vertex_count}")]
    IndexOutOfRange {
        /// Name of the offending part
        name: String,
        /// The out-of-range index
        index: u32,
        /// Number of vertices in the part
        vertex_count: usize,
    },

    /// The index buffer does not hold whole triangles.
    #[error("Part '{name}' has {index_count} indices, not a multiple of 3")]
    IncompleteTriangle {
        /// Name of the offending part
        name: String,
        /// Length of the index buffer
        index_count: usize,
    },

    /// Per-triangle materials disagree with the triangle count.
    #[error("Material count {materials} does not match triangle count {triangles}")]
    MaterialCountMismatch {
        /// Number of material entries
        materials: usize,
        /// Number of triangles
        triangles: usize,
    },

    /// A position or normal is NaN or infinite.
    #[error("Part '{name}' has a non-finite vertex at {index}")]
    NonFiniteVertex {
        /// Name of the offending part
        name: String,
        /// Index of the first bad vertex
        index: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh generation.
///
/// ## Example
///
/// ```rust
/// use parametric_mesh::error::MeshResult;
/// use parametric_mesh::{generate_torus, MeshBuffer, TorusParams};
///
/// fn ring() -> MeshResult<MeshBuffer> {
///     generate_torus(&TorusParams::default())
/// }
/// # assert!(ring().is_ok());
/// ```
pub type MeshResult<T> = Result<T, MeshGenerationError>;

// =============================================================================
// TESTS
// =============================================================================
