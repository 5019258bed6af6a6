//! # Shape Dispatch
//!
//! `Shape` is the closed set of generators as one tagged value, so hosts
//! can keep shape descriptions in configuration documents and generate
//! them without matching on the generator themselves.
//!
//! ```json
//! { "shape": "Torus", "minor_radius": 0.02, "major_radius": 0.1 }
//! ```
//!
//! Missing fields take the generator's defaults.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::assembly::{assemble, assemble_parts, MergePolicy};
use crate::error::MeshResult;
use crate::mesh::{MeshBuffer, MeshPart};
use crate::primitives::{
    arc_plane_parts, capsule_parts, circle_plane_parts, cone_parts, cube_parts, cube_sphere_parts,
    cylinder_parts, extruded_rounded_rect_pad_parts, geosphere_parts, lissajous_torus_parts,
    polyhedron_parts, rounded_cube_parts, rounded_rect_plane_parts, squircle_plane_parts,
    torus_parts, ArcPlaneParams, CapsuleParams, CirclePlaneParams, ConeParams, CubeParams,
    CubeSphereParams, CylinderParams, ExtrudedRoundedRectPadParams, GeoSphereParams,
    LissajousTorusParams, PolyhedronKind, PolyhedronParams, RoundedCubeParams,
    RoundedRectPlaneParams, SquirclePlaneParams, TorusParams,
};

/// A parametric shape together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Shape {
    /// Disk in the XZ plane
    CirclePlane(CirclePlaneParams),
    /// Annular sector in the XZ plane
    ArcPlane(ArcPlaneParams),
    /// Superellipse in the XZ plane
    SquirclePlane(SquirclePlaneParams),
    /// Rounded rectangle in the XZ plane
    RoundedRectPlane(RoundedRectPlaneParams),
    /// Cone with a base disk
    Cone(ConeParams),
    /// Cylinder with two caps
    Cylinder(CylinderParams),
    /// Cylinder with hemispherical caps
    Capsule(CapsuleParams),
    /// Ring torus
    Torus(TorusParams),
    /// Tube swept along a Lissajous curve
    LissajousTorus(LissajousTorusParams),
    /// Platonic solid, optionally subdivided
    Polyhedron(PolyhedronParams),
    /// Subdivided icosahedron on a sphere
    GeoSphere(GeoSphereParams),
    /// Axis-aligned box
    Cube(CubeParams),
    /// Box with rounded edges and corners
    RoundedCube(RoundedCubeParams),
    /// Box grid warped onto a sphere
    CubeSphere(CubeSphereParams),
    /// Rounded rectangle extruded along Y
    ExtrudedRoundedRectPad(ExtrudedRoundedRectPadParams),
}

impl Shape {
    /// Display name of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::CirclePlane(_) => "CirclePlane",
            Shape::ArcPlane(_) => "ArcPlane",
            Shape::SquirclePlane(_) => "SquirclePlane",
            Shape::RoundedRectPlane(_) => "RoundedRectPlane",
            Shape::Cone(_) => "Cone",
            Shape::Cylinder(_) => "Cylinder",
            Shape::Capsule(_) => "Capsule",
            Shape::Torus(_) => "Torus",
            Shape::LissajousTorus(_) => "LissajousTorus",
            Shape::Polyhedron(params) => params.kind.name(),
            Shape::GeoSphere(_) => "GeoSphere",
            Shape::Cube(_) => "Cube",
            Shape::RoundedCube(_) => "RoundedCube",
            Shape::CubeSphere(_) => "CubeSphere",
            Shape::ExtrudedRoundedRectPad(_) => "ExtrudedRoundedRectPad",
        }
    }

    /// How the shape's parts are merged.
    ///
    /// Single-surface shapes are always unified; the others follow their
    /// `split_faces` flag.
    pub fn policy(&self) -> MergePolicy {
        let split_faces = match self {
            Shape::Cone(params) => params.split_faces,
            Shape::Cylinder(params) => params.split_faces,
            Shape::Capsule(params) => params.split_faces,
            Shape::Cube(params) => params.split_faces,
            Shape::RoundedCube(params) => params.split_faces,
            Shape::CubeSphere(params) => params.split_faces,
            Shape::ExtrudedRoundedRectPad(params) => params.split_faces,
            Shape::CirclePlane(_)
            | Shape::ArcPlane(_)
            | Shape::SquirclePlane(_)
            | Shape::RoundedRectPlane(_)
            | Shape::Torus(_)
            | Shape::LissajousTorus(_)
            | Shape::Polyhedron(_)
            | Shape::GeoSphere(_) => false,
        };
        MergePolicy::from_split_faces(split_faces)
    }

    /// Builds the shape's surface regions without assembling them.
    pub fn parts(&self) -> Vec<MeshPart> {
        match self {
            Shape::CirclePlane(params) => circle_plane_parts(params),
            Shape::ArcPlane(params) => arc_plane_parts(params),
            Shape::SquirclePlane(params) => squircle_plane_parts(params),
            Shape::RoundedRectPlane(params) => rounded_rect_plane_parts(params),
            Shape::Cone(params) => cone_parts(params),
            Shape::Cylinder(params) => cylinder_parts(params),
            Shape::Capsule(params) => capsule_parts(params),
            Shape::Torus(params) => torus_parts(params),
            Shape::LissajousTorus(params) => lissajous_torus_parts(params),
            Shape::Polyhedron(params) => polyhedron_parts(params),
            Shape::GeoSphere(params) => geosphere_parts(params),
            Shape::Cube(params) => cube_parts(params),
            Shape::RoundedCube(params) => rounded_cube_parts(params),
            Shape::CubeSphere(params) => cube_sphere_parts(params),
            Shape::ExtrudedRoundedRectPad(params) => extruded_rounded_rect_pad_parts(params),
        }
    }

    /// Generates the shape as one buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parametric_mesh::{Shape, TorusParams};
    ///
    /// let shape = Shape::Torus(TorusParams {
    ///     minor_radius: 0.1,
    ///     major_radius: 1.0,
    ///     minor_resolution: 8,
    ///     major_resolution: 8,
    /// });
    /// let mesh = shape.generate().unwrap();
    /// assert_eq!(mesh.vertex_count(), 81);
    /// assert_eq!(mesh.triangle_count(), 128);
    /// ```
    pub fn generate(&self) -> MeshResult<MeshBuffer> {
        assemble(self.parts(), self.policy())
    }

    /// Generates the shape as material-tagged parts, one per material
    /// under split faces.
    pub fn generate_parts(&self) -> MeshResult<Vec<MeshPart>> {
        assemble_parts(self.name(), self.parts(), self.policy())
    }

    /// The demo selection list, in display order.
    ///
    /// Sizes are in meters, scaled for a tabletop scene.
    pub fn catalogue() -> Vec<Shape> {
        let mut shapes = vec![
            Shape::CirclePlane(CirclePlaneParams {
                radius: 0.1,
                angular_resolution: 30,
                radial_resolution: 5,
                circle_uv: true,
            }),
            Shape::ArcPlane(ArcPlaneParams {
                inner_radius: 0.02,
                outer_radius: 0.1,
                start_angle: 0.0,
                end_angle: PI,
                angular_resolution: 30,
                radial_resolution: 5,
                circle_uv: true,
            }),
            Shape::SquirclePlane(SquirclePlaneParams {
                size: 0.2,
                p: 4.0,
                angular_resolution: 30,
                radial_resolution: 5,
                circle_uv: true,
            }),
            Shape::RoundedRectPlane(RoundedRectPlaneParams {
                width: 0.2,
                height: 0.2,
                radius: 0.05,
                angular_resolution: 10,
                edge_x_resolution: 5,
                edge_y_resolution: 5,
                radial_resolution: 5,
                circle_uv: true,
            }),
            Shape::Cone(ConeParams {
                radius: 0.1,
                height: 0.15,
                angular_resolution: 24,
                radial_resolution: 2,
                vertical_resolution: 3,
                split_faces: true,
                circle_uv: false,
            }),
            Shape::Cylinder(CylinderParams {
                radius: 0.05,
                height: 0.2,
                angular_resolution: 24,
                radial_resolution: 2,
                vertical_resolution: 3,
                split_faces: false,
                circle_uv: false,
            }),
            Shape::Capsule(CapsuleParams {
                radius: 0.05,
                height: 0.1,
                angular_resolution: 24,
                radial_resolution: 5,
                vertical_resolution: 3,
                split_faces: true,
            }),
            Shape::Torus(TorusParams {
                minor_radius: 0.02,
                major_radius: 0.1,
                ..Default::default()
            }),
            Shape::LissajousTorus(LissajousTorusParams {
                minor_radius: 0.008,
                major_radius: 0.1,
                height: 0.1,
                cycle_times: 4,
                ..Default::default()
            }),
        ];

        shapes.extend(PolyhedronKind::ALL.map(|kind| {
            Shape::Polyhedron(PolyhedronParams {
                kind,
                radius: 0.1,
                res: 3,
                spherical: false,
            })
        }));

        shapes.extend([
            Shape::GeoSphere(GeoSphereParams {
                radius: 0.1,
                res: 3,
            }),
            Shape::ExtrudedRoundedRectPad(ExtrudedRoundedRectPadParams {
                width: 0.2,
                height: 0.2,
                depth: 0.1,
                radius: 0.05,
                ..Default::default()
            }),
            Shape::RoundedCube(RoundedCubeParams {
                width: 0.2,
                height: 0.2,
                depth: 0.2,
                radius: 0.1,
                width_resolution: 20,
                height_resolution: 20,
                depth_resolution: 20,
                split_faces: false,
            }),
            Shape::CubeSphere(CubeSphereParams {
                radius: 0.1,
                resolution: 20,
                split_faces: false,
            }),
        ]);

        shapes
    }
}
