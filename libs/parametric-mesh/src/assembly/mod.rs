//! # Mesh Assembly
//!
//! Merges the parts a generator produced into the caller-facing output.
//!
//! ## Policies
//!
//! - **Unified**: one surface, one material; `materials` is `None`
//! - **SplitByMaterial**: every triangle keeps its part's material index
//!
//! Both entry points validate every part first, so a structurally broken
//! buffer set surfaces as a `MeshGenerationError` instead of a corrupt mesh.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MeshGenerationError, MeshResult};
use crate::mesh::{MeshBuffer, MeshPart};

/// How the parts of a multi-region shape are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MergePolicy {
    /// Merge every part into one single-material surface.
    #[default]
    Unified,
    /// Keep one material index per surface region.
    SplitByMaterial,
}

impl MergePolicy {
    /// Maps a shape's `split_faces` flag onto a policy.
    ///
    /// # Examples
    /// ```
    /// use parametric_mesh::MergePolicy;
    /// assert_eq!(MergePolicy::from_split_faces(true), MergePolicy::SplitByMaterial);
    /// assert_eq!(MergePolicy::from_split_faces(false), MergePolicy::Unified);
    /// ```
    pub fn from_split_faces(split_faces: bool) -> Self {
        if split_faces {
            Self::SplitByMaterial
        } else {
            Self::Unified
        }
    }
}

/// Validates the parts and rejects a set without any triangle.
fn check_parts(parts: &[MeshPart]) -> MeshResult<()> {
    for part in parts {
        part.validate()?;
        if part.indices.is_empty() && !part.positions.is_empty() {
            return Err(MeshGenerationError::EmptyPart {
                name: part.name.clone(),
            });
        }
    }
    if parts.iter().all(|part| part.indices.is_empty()) {
        return Err(MeshGenerationError::EmptyPrimitives);
    }
    Ok(())
}

/// Assembles parts into a single buffer.
///
/// Parts are concatenated in order; each part's indices are offset by the
/// number of vertices already emitted. Under `SplitByMaterial` the buffer
/// carries one material index per triangle.
///
/// # Errors
///
/// Returns `MeshGenerationError` when the list is empty, a part has
/// mismatched buffers, or an index is out of range.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{assemble, cone_parts, ConeParams, MergePolicy};
///
/// let params = ConeParams::default();
/// let mesh = assemble(cone_parts(&params), MergePolicy::SplitByMaterial).unwrap();
/// assert_eq!(mesh.material_groups(), vec![0, 1]);
/// ```
pub fn assemble(parts: Vec<MeshPart>, policy: MergePolicy) -> MeshResult<MeshBuffer> {
    check_parts(&parts)?;

    let vertex_count = parts.iter().map(MeshPart::vertex_count).sum();
    let index_count = parts.iter().map(|part| part.indices.len()).sum();

    let mut buffer = MeshBuffer {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity(index_count),
        materials: None,
    };
    let mut materials = Vec::with_capacity(index_count / 3);

    for part in &parts {
        let offset = buffer.positions.len() as u32;
        buffer.positions.extend_from_slice(&part.positions);
        buffer.normals.extend_from_slice(&part.normals);
        buffer.uvs.extend_from_slice(&part.uvs);
        buffer
            .indices
            .extend(part.indices.iter().map(|index| index + offset));
        materials.extend(std::iter::repeat(part.material_index).take(part.triangle_count()));
    }

    if policy == MergePolicy::SplitByMaterial {
        buffer.materials = Some(materials);
    }

    debug!(
        vertices = buffer.vertex_count(),
        triangles = buffer.triangle_count(),
        parts = parts.len(),
        ?policy,
        "assembled mesh"
    );

    Ok(buffer)
}

/// Assembles parts into material-tagged sub-meshes.
///
/// Under `Unified` every part is merged into one part named `name` with
/// material 0. Under `SplitByMaterial` parts sharing a material index are
/// merged, yielding one part per distinct index in ascending order; each
/// merged part keeps the name of its first contributor.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::{assemble_parts, capsule_parts, CapsuleParams, MergePolicy};
///
/// let params = CapsuleParams { radius: 0.5, height: 1.0, split_faces: true, ..Default::default() };
/// let parts = assemble_parts("Capsule", capsule_parts(&params), MergePolicy::SplitByMaterial).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].material_index, 0);
/// ```
pub fn assemble_parts(
    name: &str,
    parts: Vec<MeshPart>,
    policy: MergePolicy,
) -> MeshResult<Vec<MeshPart>> {
    check_parts(&parts)?;

    let merged = match policy {
        MergePolicy::Unified => {
            let mut single = MeshPart::new(name, 0);
            for part in &parts {
                single.extend(part);
            }
            vec![single]
        }
        MergePolicy::SplitByMaterial => {
            let mut groups: Vec<MeshPart> = Vec::new();
            for part in &parts {
                match groups
                    .iter_mut()
                    .find(|group| group.material_index == part.material_index)
                {
                    Some(group) => group.extend(part),
                    None => groups.push(part.clone()),
                }
            }
            groups.sort_by_key(|group| group.material_index);
            groups
        }
    };

    debug!(name, parts = merged.len(), ?policy, "assembled mesh parts");

    Ok(merged)
}
