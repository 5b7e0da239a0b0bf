//! # Mesh Assembler
//!
//! Builds the four vertex-aligned buffers from a row-major position grid.
//!
//! ## Normals
//!
//! Each node gets tangents along both grid axes from its neighbours: central
//! differences inside the grid, one-sided differences on the border. The normal
//! is `normalize(t_one × t_two)`. When the tangents do not span a plane the
//! node gets [`DEFAULT_NORMAL`] instead. "Span a plane" is judged relative to
//! the tangent lengths, so a millimetre grid behaves like a kilometre one.
//!
//! ## Winding
//!
//! Every cell `(i, j)` is split along the same diagonal:
//!
//! ```text
//!  (i, j+1) d ---- c (i+1, j+1)
//!           |    / |
//!           |  /   |
//!    (i, j) a ---- b (i+1, j)
//!
//!  [a, b, c] then [a, c, d]
//! ```
//!
//! `(b - a) × (c - a)` points the same way as `t_one × t_two`, so each
//! triangle is counter-clockwise seen from the side its normals face.

use ::config::constants::DEFAULT_NORMAL;
use glam::{DVec2, DVec3};
use tracing::trace;

use crate::config::{StepCount, TextureRepeat};

/// Vertex-aligned buffers for one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Positions, row-major
    pub positions: Vec<DVec3>,
    /// Unit normals, same order as positions
    pub normals: Vec<DVec3>,
    /// Texture coordinates, same order as positions
    pub uvs: Vec<DVec2>,
    /// Flat triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

/// Assembles all buffers for a position grid.
///
/// `positions.len()` must equal `steps.vertex_count()`.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use mesh_geometry::{assemble, StepCount, TextureRepeat};
///
/// let positions = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 1.0),
/// ];
/// let buffers = assemble(positions, StepCount::new(1, 1), TextureRepeat::default(), 1e-12);
/// assert_eq!(buffers.indices, vec![0, 2, 3, 0, 3, 1]);
/// ```
pub fn assemble(
    positions: Vec<DVec3>,
    steps: StepCount,
    texture_repeat: TextureRepeat,
    normal_tolerance: f64,
) -> MeshBuffers {
    let normals = compute_normals(&positions, steps, normal_tolerance);
    let uvs = compute_uvs(steps, texture_repeat);
    let indices = compute_indices(steps);

    MeshBuffers {
        positions,
        normals,
        uvs,
        indices,
    }
}

/// Per-node normals from grid-neighbour tangents.
pub fn compute_normals(positions: &[DVec3], steps: StepCount, tolerance: f64) -> Vec<DVec3> {
    let rows = steps.nodes_one();
    let columns = steps.nodes_two();
    let at = |i: usize, j: usize| positions[i * columns + j];
    let fallback = DVec3::from_array(DEFAULT_NORMAL);

    let mut fallbacks = 0usize;
    let mut normals = Vec::with_capacity(positions.len());

    for i in 0..rows {
        let (prev_i, next_i) = neighbours(i, rows);
        for j in 0..columns {
            let (prev_j, next_j) = neighbours(j, columns);
            let tangent_one = at(next_i, j) - at(prev_i, j);
            let tangent_two = at(i, next_j) - at(i, prev_j);

            let normal = surface_normal(tangent_one, tangent_two, tolerance).unwrap_or_else(|| {
                fallbacks += 1;
                fallback
            });
            normals.push(normal);
        }
    }

    if fallbacks > 0 {
        trace!(fallbacks, total = normals.len(), "default normal substituted");
    }
    normals
}

/// Indices of the nodes used for the difference at `k` on an axis of `len` nodes.
///
/// Interior nodes use both neighbours; the first and last fall back to a
/// forward or backward difference. A single-node axis yields `(0, 0)`, which
/// produces a zero tangent.
#[inline]
fn neighbours(k: usize, len: usize) -> (usize, usize) {
    (k.saturating_sub(1), (k + 1).min(len - 1))
}

/// `normalize(t_one × t_two)`, or `None` if the tangents are (nearly)
/// parallel, zero or not finite.
///
/// `|t_one × t_two| = |t_one| |t_two| sin(angle)`, so `tolerance` bounds the
/// sine of the angle between the tangents.
#[inline]
fn surface_normal(tangent_one: DVec3, tangent_two: DVec3, tolerance: f64) -> Option<DVec3> {
    let cross = tangent_one.cross(tangent_two);
    let length = cross.length();
    let scale = tangent_one.length() * tangent_two.length();
    if length.is_finite() && scale.is_finite() && length > tolerance * scale {
        Some(cross / length)
    } else {
        None
    }
}

/// Texture coordinates `(i / steps.one * repeat.one, j / steps.two * repeat.two)`.
///
/// A zero-step axis maps to a constant 0.
pub fn compute_uvs(steps: StepCount, texture_repeat: TextureRepeat) -> Vec<DVec2> {
    let scale_one = axis_uv_scale(steps.one, texture_repeat.one);
    let scale_two = axis_uv_scale(steps.two, texture_repeat.two);

    let mut uvs = Vec::with_capacity(steps.vertex_count());
    for i in 0..steps.nodes_one() {
        for j in 0..steps.nodes_two() {
            uvs.push(DVec2::new(
                uv_coordinate(i, steps.one, scale_one),
                uv_coordinate(j, steps.two, scale_two),
            ));
        }
    }
    uvs
}

#[inline]
fn axis_uv_scale(steps: u32, repeat: u32) -> f64 {
    if steps == 0 {
        0.0
    } else {
        f64::from(repeat)
    }
}

#[inline]
fn uv_coordinate(k: usize, steps: u32, scale: f64) -> f64 {
    if steps == 0 {
        0.0
    } else {
        k as f64 / f64::from(steps) * scale
    }
}

/// Two triangles per cell with a fixed diagonal, see the module docs.
///
/// Empty when either axis has zero steps.
pub fn compute_indices(steps: StepCount) -> Vec<u32> {
    let columns = steps.nodes_two() as u32;
    let mut indices = Vec::with_capacity(steps.cell_count() * 6);

    for i in 0..steps.one {
        for j in 0..steps.two {
            let a = i * columns + j;
            let b = (i + 1) * columns + j;
            let c = (i + 1) * columns + j + 1;
            let d = i * columns + j + 1;

            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[a, c, d]);
        }
    }

    indices
}
