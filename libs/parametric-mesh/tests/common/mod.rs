//! Topology helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use glam::Vec3;
use parametric_mesh::MeshBuffer;

/// Maps every vertex to the first earlier vertex within `epsilon`.
pub fn weld(positions: &[Vec3], epsilon: f32) -> Vec<u32> {
    let cell = epsilon * 4.0;
    let key = |p: Vec3| {
        (
            (p.x / cell).floor() as i64,
            (p.y / cell).floor() as i64,
            (p.z / cell).floor() as i64,
        )
    };

    let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    let mut ids = Vec::with_capacity(positions.len());
    for (index, &p) in positions.iter().enumerate() {
        let (x, y, z) = key(p);
        let mut found = None;
        'search: for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(candidates) = grid.get(&(x + dx, y + dy, z + dz)) {
                        if let Some(&other) = candidates
                            .iter()
                            .find(|&&other| positions[other as usize].distance(p) <= epsilon)
                        {
                            found = Some(other);
                            break 'search;
                        }
                    }
                }
            }
        }
        let id = match found {
            Some(other) => ids[other as usize],
            None => {
                grid.entry((x, y, z)).or_default().push(index as u32);
                index as u32
            }
        };
        ids.push(id);
    }
    ids
}

/// Counts directed edges of the welded mesh, skipping triangles that
/// collapse after welding.
pub fn directed_edges(mesh: &MeshBuffer, epsilon: f32) -> HashMap<(u32, u32), usize> {
    let ids = weld(&mesh.positions, epsilon);
    let mut edges = HashMap::new();
    for triangle in mesh.triangles() {
        let [a, b, c] = triangle.map(|index| ids[index as usize]);
        if a == b || b == c || c == a {
            continue;
        }
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }
    edges
}

/// Asserts that every welded edge is used exactly once in each direction,
/// which makes the surface closed and consistently wound.
pub fn assert_watertight(name: &str, mesh: &MeshBuffer, epsilon: f32) {
    let edges = directed_edges(mesh, epsilon);
    assert!(!edges.is_empty(), "{name} has no edges");
    for (&(a, b), &count) in &edges {
        assert_eq!(count, 1, "{name}: edge {a}->{b} used {count} times");
        assert_eq!(
            edges.get(&(b, a)).copied().unwrap_or(0),
            1,
            "{name}: edge {a}->{b} has no opposite"
        );
    }
}

/// Asserts the signed volume of a closed mesh is positive, meaning its
/// triangles face outward.
pub fn assert_positive_volume(name: &str, mesh: &MeshBuffer) {
    let volume: f32 = mesh
        .triangles()
        .map(|[a, b, c]| {
            let (a, b, c) = (
                mesh.positions[a as usize],
                mesh.positions[b as usize],
                mesh.positions[c as usize],
            );
            a.dot(b.cross(c)) / 6.0
        })
        .sum();
    assert!(volume > 0.0, "{name} has volume {volume}");
}
