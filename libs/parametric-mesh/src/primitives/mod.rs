//! # Primitives
//!
//! One generator per shape family. Every generator comes in two forms:
//! `*_parts` returns the material-tagged surface regions, `generate_*`
//! assembles them into a `MeshBuffer` with the shape's merge policy.

pub mod capsule;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod pad;
pub mod plane;
pub mod polyhedron;
pub mod torus;

pub use capsule::{capsule_parts, generate_capsule, CapsuleParams};
pub use cone::{cone_parts, generate_cone, ConeParams};
pub use cube::{
    cube_parts, cube_sphere_parts, generate_cube, generate_cube_sphere, generate_rounded_cube,
    rounded_cube_parts, CubeParams, CubeSphereParams, RoundedCubeParams,
};
pub use cylinder::{cylinder_parts, generate_cylinder, CylinderParams};
pub use pad::{
    extruded_rounded_rect_pad_parts, generate_extruded_rounded_rect_pad,
    ExtrudedRoundedRectPadParams,
};
pub use plane::{
    arc_plane_parts, circle_plane_parts, generate_arc_plane, generate_circle_plane,
    generate_rounded_rect_plane, generate_squircle_plane, rounded_rect_outline,
    rounded_rect_plane_parts, squircle_plane_parts, ArcPlaneParams, CirclePlaneParams, Outline,
    RoundedRectPlaneParams, SquirclePlaneParams,
};
pub use polyhedron::{
    generate_geosphere, generate_polyhedron, geosphere_parts, polyhedron_parts, GeoSphereParams,
    PolyhedronKind, PolyhedronParams,
};
pub use torus::{
    generate_lissajous_torus, generate_torus, lissajous_torus_parts, torus_parts,
    LissajousTorusParams, TorusParams,
};
