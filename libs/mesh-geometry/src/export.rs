//! # Wavefront OBJ Export
//!
//! Writes a [`Geometry`] as positions, texture coordinates, normals and
//! faces. Vertex attributes share one index per vertex, so every face
//! corner is written as `i/i/i` (OBJ indices are 1-based).

use std::io::{self, Write};

use tracing::debug;

use crate::geometry::Geometry;

/// Writes `geometry` to `writer` in Wavefront OBJ text format.
///
/// # Examples
/// ```
/// use mesh_geometry::{write_obj, CartesianMeshBuilder, Range, StepCount};
///
/// let geometry = CartesianMeshBuilder::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0))
///     .with_steps(StepCount::new(1, 1))
///     .build(|_, _| 0.0)
///     .unwrap();
/// let mut out = Vec::new();
/// write_obj(&geometry, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2);
/// ```
pub fn write_obj<W: Write>(geometry: &Geometry, mut writer: W) -> io::Result<()> {
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        geometry.vertex_count(),
        geometry.triangle_count()
    )?;

    for p in geometry.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in geometry.uvs() {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in geometry.normals() {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for [a, b, c] in geometry.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    writer.flush()?;
    debug!(
        vertices = geometry.vertex_count(),
        triangles = geometry.triangle_count(),
        "wrote obj"
    );
    Ok(())
}
