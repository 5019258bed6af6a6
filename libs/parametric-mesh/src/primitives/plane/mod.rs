//! # Plane Family
//!
//! Flat surfaces in the XZ plane: circle, arc, squircle and rounded
//! rectangle. Each is a polar-like grid: an outline of `angular + 1` points
//! (the last repeats the first so the texture seam gets its own vertices)
//! swept through `radial + 1` rings between an inner outline and the outer
//! one.
//!
//! The ring builder here is shared with the cone base, the cylinder caps and
//! the extruded pad caps.

pub mod arc;
pub mod circle;
pub mod rounded_rect;
pub mod squircle;


use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use crate::mesh::MeshPart;

pub use arc::{arc_plane_parts, generate_arc_plane, ArcPlaneParams};
pub use circle::{circle_plane_parts, generate_circle_plane, CirclePlaneParams};
pub use rounded_rect::{
    generate_rounded_rect_plane, rounded_rect_outline, rounded_rect_plane_parts, Outline,
    RoundedRectPlaneParams,
};
pub use squircle::{generate_squircle_plane, squircle_plane_parts, SquirclePlaneParams};

/// Which side of the XZ plane a flat grid faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    /// Normal `(0, 1, 0)`
    Up,
    /// Normal `(0, -1, 0)`
    Down,
}

impl Facing {
    fn normal(self) -> Vec3 {
        match self {
            Facing::Up => Vec3::Y,
            Facing::Down => Vec3::NEG_Y,
        }
    }
}

/// Fills `part` with a flat ring grid between `inner` and `outer`.
///
/// Both outlines hold `(x, z)` points, have the same length and run
/// counter-clockwise from +X towards +Z. Ring `k` interpolates
/// `inner → outer` by `k / radial`. `uv` receives the outline index, the
/// ring fraction and the 2-D point.
pub(crate) fn ring_grid(
    part: &mut MeshPart,
    inner: &[Vec2],
    outer: &[Vec2],
    radial: u32,
    y: f32,
    facing: Facing,
    uv: impl Fn(usize, f32, Vec2) -> Vec2,
) {
    debug_assert_eq!(inner.len(), outer.len());

    let base = part.vertex_count() as u32;
    let normal = facing.normal();
    let radial_f = radial as f32;

    for ring in 0..=radial {
        let t = ring as f32 / radial_f;
        for (index, (a, b)) in inner.iter().zip(outer).enumerate() {
            let p = a.lerp(*b, t);
            part.push_vertex(Vec3::new(p.x, y, p.y), normal, uv(index, t, p));
        }
    }

    part.push_grid(base, radial + 1, outer.len() as u32, facing == Facing::Up);
}

/// Points of a circular arc of `radius` from `start` to `end` radians,
/// `segments + 1` of them.
pub(crate) fn arc_outline(radius: f32, start: f32, end: f32, segments: u32) -> Vec<Vec2> {
    let increment = (end - start) / segments as f32;
    (0..=segments)
        .map(|i| {
            let angle = start + i as f32 * increment;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Points of a full circle, closing point included.
pub(crate) fn circle_outline(radius: f32, segments: u32) -> Vec<Vec2> {
    arc_outline(radius, 0.0, TAU, segments)
}

/// Projected texture coordinates of a point on a plane spanning
/// `[-half_extent, half_extent]`: `u` follows +X, `v` follows +Z.
///
/// Every flat disk and cap shares this mapping. Caps seen from below may
/// mirror `u`, never `v`.
pub(crate) fn planar_uv(p: Vec2, half_extent: Vec2) -> Vec2 {
    let extent = half_extent.max(Vec2::splat(config::constants::EPSILON));
    Vec2::splat(0.5) + 0.5 * p / extent
}
