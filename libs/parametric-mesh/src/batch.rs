//! # Batch Generation
//!
//! Generates independent shapes in parallel on the rayon thread pool. Each
//! shape is still built sequentially; parallelism is only across shapes.
//! Results keep the input order and one failing shape does not affect the
//! others.

use rayon::prelude::*;
use tracing::debug_span;

use crate::error::MeshResult;
use crate::mesh::{MeshBuffer, MeshPart};
use crate::shape::Shape;

/// Generates every shape into one buffer each.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::batch::generate_all;
/// use parametric_mesh::Shape;
///
/// let meshes = generate_all(&Shape::catalogue());
/// assert!(meshes.iter().all(Result::is_ok));
/// ```
pub fn generate_all(shapes: &[Shape]) -> Vec<MeshResult<MeshBuffer>> {
    shapes
        .par_iter()
        .enumerate()
        .map(|(index, shape)| {
            let _span = debug_span!("generate", index, shape = shape.name()).entered();
            shape.generate()
        })
        .collect()
}

/// Generates every shape as material-tagged parts.
///
/// Each shape's parts are built off the calling thread, then merged under
/// the shape's policy.
pub fn generate_parts_deferred(shapes: &[Shape]) -> Vec<MeshResult<Vec<MeshPart>>> {
    shapes
        .par_iter()
        .enumerate()
        .map(|(index, shape)| {
            let _span = debug_span!("generate_parts", index, shape = shape.name()).entered();
            shape.generate_parts()
        })
        .collect()
}
