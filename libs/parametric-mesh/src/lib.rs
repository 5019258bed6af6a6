//! # Parametric Mesh
//!
//! Procedural mesh generation for a fixed catalogue of parametric surfaces
//! and solids: planes, cones, cylinders, capsules, tori, Platonic solids,
//! geodesic and cube spheres, rounded boxes and extruded pads.
//!
//! ## Architecture
//!
//! ```text
//! Params (clamped, never rejected) → *_parts (MeshPart per region)
//!                                  → assembly (Unified | SplitByMaterial)
//!                                  → MeshBuffer
//! ```
//!
//! Every generator is a pure function of its parameters. Out-of-range
//! resolutions are raised to their minimum with a `tracing` warning; the
//! only failure is a structurally invalid buffer reaching assembly.
//!
//! ## Conventions
//!
//! - Y is up; flat shapes lie in the XZ plane facing +Y.
//! - Triangles wind counter-clockwise seen from outside.
//! - Normals are unit length; seams get duplicated vertices so UVs can
//!   wrap.
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::{generate_capsule, CapsuleParams};
//!
//! let mesh = generate_capsule(&CapsuleParams {
//!     radius: 0.5,
//!     height: 1.0,
//!     split_faces: true,
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(mesh.material_groups(), vec![0, 1]);
//! ```

pub mod assembly;
pub mod batch;
pub mod error;
pub mod math;
pub mod mesh;
pub mod primitives;
pub mod shape;

pub use assembly::{assemble, assemble_parts, MergePolicy};
pub use error::{MeshGenerationError, MeshResult};
pub use mesh::{MeshBuffer, MeshPart};
pub use primitives::{
    arc_plane_parts, capsule_parts, circle_plane_parts, cone_parts, cube_parts, cube_sphere_parts,
    cylinder_parts, extruded_rounded_rect_pad_parts, generate_arc_plane, generate_capsule,
    generate_circle_plane, generate_cone, generate_cube, generate_cube_sphere, generate_cylinder,
    generate_extruded_rounded_rect_pad, generate_geosphere, generate_lissajous_torus,
    generate_polyhedron, generate_rounded_cube, generate_rounded_rect_plane,
    generate_squircle_plane, generate_torus, geosphere_parts, lissajous_torus_parts,
    polyhedron_parts, rounded_cube_parts, rounded_rect_outline, rounded_rect_plane_parts,
    squircle_plane_parts, torus_parts, ArcPlaneParams, CapsuleParams, CirclePlaneParams,
    ConeParams, CubeParams, CubeSphereParams, CylinderParams, ExtrudedRoundedRectPadParams,
    GeoSphereParams, LissajousTorusParams, Outline, PolyhedronKind, PolyhedronParams,
    RoundedCubeParams, RoundedRectPlaneParams, SquirclePlaneParams, TorusParams,
};
pub use shape::Shape;
