//! Rounded-rectangle plane and the perimeter outline shared with the
//! extruded pad.

use config::constants::{
    DEFAULT_ROUNDED_RECT_ANGULAR_RESOLUTION, DEFAULT_ROUNDED_RECT_EDGE_RESOLUTION,
    MIN_ANGULAR_RESOLUTION, MIN_GRID_POINTS, MIN_RADIAL_RESOLUTION,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use super::{planar_uv, ring_grid, Facing};
use crate::assembly::{assemble, MergePolicy};
use crate::error::MeshResult;
use crate::math::{clamp_radius, clamp_resolution};
use crate::mesh::{MeshBuffer, MeshPart};

/// Parameters of a rounded-rectangle plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedRectPlaneParams {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub height: f32,
    /// Corner radius, clamped to half the smaller extent
    pub radius: f32,
    /// Points per quarter-circle corner, ends included (min 3)
    pub angular_resolution: u32,
    /// Points along each straight edge parallel to X (min 2)
    pub edge_x_resolution: u32,
    /// Points along each straight edge parallel to Z (min 2)
    pub edge_y_resolution: u32,
    /// Rings from center to rim (min 1)
    pub radial_resolution: u32,
    /// Perimeter UVs (`u` = arc length fraction, `v` = ring fraction)
    /// instead of projected ones
    pub circle_uv: bool,
}

impl Default for RoundedRectPlaneParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            radius: 0.25,
            angular_resolution: DEFAULT_ROUNDED_RECT_ANGULAR_RESOLUTION,
            edge_x_resolution: DEFAULT_ROUNDED_RECT_EDGE_RESOLUTION,
            edge_y_resolution: DEFAULT_ROUNDED_RECT_EDGE_RESOLUTION,
            radial_resolution: 1,
            circle_uv: false,
        }
    }
}

/// Closed perimeter of a rounded rectangle in the XZ plane.
///
/// Points run counter-clockwise (from +X towards +Z) starting at the middle
/// of the +X edge, which is where the perimeter UV seam lies; the last point
/// repeats the first. The upper half of the +X edge opens the loop and its
/// lower half closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// `(x, z)` positions
    pub points: Vec<Vec2>,
    /// Outward unit directions, one per point
    pub normals: Vec<Vec2>,
    /// Arc length from the first point, one per point
    pub distances: Vec<f32>,
    /// Total arc length of the loop
    pub perimeter: f32,
}

impl Outline {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
            distances: Vec::with_capacity(capacity),
            perimeter: 0.0,
        }
    }

    /// Number of points, closing duplicate included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point `step` further along the loop.
    fn push(&mut self, point: Vec2, normal: Vec2, step: f32) {
        self.perimeter += step;
        self.points.push(point);
        self.normals.push(normal);
        self.distances.push(self.perimeter);
    }

    /// Straight-line distance from the last point to `point`.
    fn straight_step(&self, point: Vec2) -> f32 {
        self.points.last().map_or(0.0, |last| last.distance(point))
    }
}

/// Builds the perimeter of a `width × height` rectangle with corners of
/// `radius`.
///
/// `radius` must already be within `[0, min(width, height) / 2]`;
/// resolutions below their minimum are raised silently. The +X edge keeps
/// its `edge_y` evenly spaced samples and gains the seam point at `z = 0`
/// at both ends of the loop; with an odd `edge_y` the middle sample is the
/// seam point. The outline therefore holds
/// `2·edge_x + 2·edge_y + 4·(angular − 2) + 2 − edge_y % 2` points.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::rounded_rect_outline;
///
/// let outline = rounded_rect_outline(2.0, 1.0, 0.25, 4, 3, 2);
/// assert_eq!(outline.len(), 2 * 3 + 2 * 2 + 4 * 2 + 2);
/// assert_eq!(outline.points[0].to_array(), [1.0, 0.0]);
/// let expected = 2.0 * 1.5 + 2.0 * 0.5 + std::f32::consts::TAU * 0.25;
/// assert!((outline.perimeter - expected).abs() < 1e-5);
/// ```
pub fn rounded_rect_outline(
    width: f32,
    height: f32,
    radius: f32,
    angular: u32,
    edge_x: u32,
    edge_y: u32,
) -> Outline {
    let angular = angular.max(MIN_ANGULAR_RESOLUTION);
    let edge_x = edge_x.max(MIN_GRID_POINTS);
    let edge_y = edge_y.max(MIN_GRID_POINTS);

    let half = Vec2::new(width, height) * 0.5;
    let inner = (half - Vec2::splat(radius)).max(Vec2::ZERO);
    let arc_increment = FRAC_PI_2 / (angular - 1) as f32;
    let arc_step = arc_increment * radius;

    let seam = Vec2::new(half.x, 0.0);
    let right_edge = |j: u32| {
        let t = j as f32 / (edge_y - 1) as f32;
        Vec2::new(half.x, -inner.y).lerp(Vec2::new(half.x, inner.y), t)
    };
    let corner_arc = |outline: &mut Outline, center: Vec2, base_angle: f32| {
        for k in 1..angular - 1 {
            let angle = base_angle + k as f32 * arc_increment;
            let direction = Vec2::new(angle.cos(), angle.sin());
            outline.push(center + direction * radius, direction, arc_step);
        }
    };

    // (corner center, angle where its arc starts, then the straight edge
    // after it: start, end, points, normal)
    let sides = [
        (
            Vec2::new(inner.x, inner.y),
            0.0,
            Vec2::new(inner.x, half.y),
            Vec2::new(-inner.x, half.y),
            edge_x,
            Vec2::Y,
        ),
        (
            Vec2::new(-inner.x, inner.y),
            FRAC_PI_2,
            Vec2::new(-half.x, inner.y),
            Vec2::new(-half.x, -inner.y),
            edge_y,
            Vec2::NEG_X,
        ),
        (
            Vec2::new(-inner.x, -inner.y),
            PI,
            Vec2::new(-inner.x, -half.y),
            Vec2::new(inner.x, -half.y),
            edge_x,
            Vec2::NEG_Y,
        ),
    ];

    let count = (2 * edge_x + 2 * edge_y + 4 * (angular - 2) + 2 - edge_y % 2) as usize;
    let mut outline = Outline::with_capacity(count);

    outline.push(seam, Vec2::X, 0.0);
    for j in (0..edge_y).filter(|&j| 2 * j > edge_y - 1) {
        let point = right_edge(j);
        outline.push(point, Vec2::X, outline.straight_step(point));
    }

    for &(corner, base_angle, start, end, points, normal) in &sides {
        corner_arc(&mut outline, corner, base_angle);
        for j in 0..points {
            let point = start.lerp(end, j as f32 / (points - 1) as f32);
            let step = if j == 0 { arc_step } else { outline.straight_step(point) };
            outline.push(point, normal, step);
        }
    }

    corner_arc(&mut outline, Vec2::new(inner.x, -inner.y), PI + FRAC_PI_2);
    for (n, j) in (0..edge_y).filter(|&j| 2 * j < edge_y - 1).enumerate() {
        let point = right_edge(j);
        let step = if n == 0 { arc_step } else { outline.straight_step(point) };
        outline.push(point, Vec2::X, step);
    }
    outline.push(seam, Vec2::X, outline.straight_step(seam));

    outline
}

/// Clamps the rounded-rectangle parameters shared by the plane and the
/// pad, returning `(radius, angular, edge_x, edge_y, radial)`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn clamp_rounded_rect(
    generator: &str,
    width: f32,
    height: f32,
    radius: f32,
    angular: u32,
    edge_x: u32,
    edge_y: u32,
    radial: u32,
) -> (f32, u32, u32, u32, u32) {
    let max_radius = (width.min(height) * 0.5).max(0.0);
    (
        clamp_radius(generator, radius, max_radius).max(0.0),
        clamp_resolution(generator, "angular_resolution", angular, MIN_ANGULAR_RESOLUTION),
        clamp_resolution(generator, "edge_x_resolution", edge_x, MIN_GRID_POINTS),
        clamp_resolution(generator, "edge_y_resolution", edge_y, MIN_GRID_POINTS),
        clamp_resolution(generator, "radial_resolution", radial, MIN_RADIAL_RESOLUTION),
    )
}

/// Fills `part` with the rounded-rectangle disk bounded by `outline`.
///
/// Facing down mirrors `u` so the texture reads correctly from below.
pub(crate) fn rounded_rect_cap(
    part: &mut MeshPart,
    outline: &Outline,
    half: Vec2,
    radial: u32,
    y: f32,
    facing: Facing,
    circle_uv: bool,
) {
    let center = vec![Vec2::ZERO; outline.len()];
    ring_grid(part, &center, &outline.points, radial, y, facing, |index, t, p| {
        let uv = if circle_uv {
            Vec2::new(outline.distances[index] / outline.perimeter.max(f32::EPSILON), t)
        } else {
            planar_uv(p, half)
        };
        match facing {
            Facing::Up => uv,
            Facing::Down => Vec2::new(1.0 - uv.x, uv.y),
        }
    });
}

/// Builds the single part of a rounded-rectangle plane facing +Y.
pub fn rounded_rect_plane_parts(params: &RoundedRectPlaneParams) -> Vec<MeshPart> {
    let (radius, angular, edge_x, edge_y, radial) = clamp_rounded_rect(
        "rounded_rect_plane",
        params.width,
        params.height,
        params.radius,
        params.angular_resolution,
        params.edge_x_resolution,
        params.edge_y_resolution,
        params.radial_resolution,
    );
    let outline = rounded_rect_outline(params.width, params.height, radius, angular, edge_x, edge_y);
    let half = Vec2::new(params.width, params.height) * 0.5;

    let mut part = MeshPart::with_capacity(
        "RoundedRectPlane",
        0,
        outline.len() * (radial as usize + 1),
        (outline.len() - 1) * radial as usize * 2,
    );
    rounded_rect_cap(&mut part, &outline, half, radial, 0.0, Facing::Up, params.circle_uv);

    vec![part]
}

/// Generates a rounded-rectangle plane.
pub fn generate_rounded_rect_plane(params: &RoundedRectPlaneParams) -> MeshResult<MeshBuffer> {
    assemble(rounded_rect_plane_parts(params), MergePolicy::Unified)
}
