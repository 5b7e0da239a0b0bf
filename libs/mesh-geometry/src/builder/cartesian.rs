//! Height fields `y(x, z)` over the x/z plane.

use crate::config::{MeshConfig, Range};
use crate::error::GeometryResult;
use crate::geometry::Geometry;
use crate::mapping::CoordinateSystem;

use super::MeshGeometryBuilder;

/// Builds a surface whose height at `(x, z)` is the sampled value.
///
/// # Examples
/// ```
/// use mesh_geometry::{CartesianMeshBuilder, Range, StepCount, TextureRepeat};
///
/// let geometry = CartesianMeshBuilder::new(Range::new(-3.0, 3.0), Range::new(-3.0, 3.0))
///     .with_steps(StepCount::new(30, 30))
///     .with_texture_repeat(TextureRepeat::new(4, 4))
///     .build(|x, z| (x * x + z * z).sqrt().sin())
///     .unwrap();
/// assert_eq!(geometry.vertex_count(), 31 * 31);
/// ```
#[derive(Debug, Clone)]
pub struct CartesianMeshBuilder {
    inner: MeshGeometryBuilder<CoordinateSystem>,
}

impl CartesianMeshBuilder {
    /// Creates a builder over `x_range × z_range` with default steps and tiling.
    pub fn new(x_range: Range, z_range: Range) -> Self {
        Self {
            inner: MeshGeometryBuilder::new(
                CoordinateSystem::Cartesian,
                MeshConfig::new(x_range, z_range),
            ),
        }
    }

    /// Domain of x.
    pub fn x_range(&self) -> Range {
        self.inner.config().range_one
    }

    /// Domain of z.
    pub fn z_range(&self) -> Range {
        self.inner.config().range_two
    }

    /// Builds the surface `y = function(x, z)`.
    pub fn build<F>(&self, function: F) -> GeometryResult<Geometry>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.inner.build(function)
    }

    delegate_build!();
}
