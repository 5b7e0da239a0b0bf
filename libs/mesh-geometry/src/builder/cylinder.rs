//! Radius functions `r(theta, y)` around the y axis.

use crate::config::{MeshConfig, Range};
use crate::error::GeometryResult;
use crate::geometry::Geometry;
use crate::mapping::CoordinateSystem;

use super::MeshGeometryBuilder;

/// Builds a surface of revolution-like shape where the sampled value is the
/// distance from the y axis.
///
/// A full turn (`theta` over `[0, 2π]`) leaves the first and last columns as
/// separate, coincident vertices.
///
/// # Examples
/// ```
/// use std::f64::consts::TAU;
/// use mesh_geometry::{CylinderMeshBuilder, Range, StepCount};
///
/// // Vase: radius swells with height
/// let geometry = CylinderMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, 4.0))
///     .with_steps(StepCount::new(48, 16))
///     .build(|_, y| 1.0 + 0.3 * (y * 1.5).sin())
///     .unwrap();
/// assert_eq!(geometry.triangle_count(), 2 * 48 * 16);
/// ```
#[derive(Debug, Clone)]
pub struct CylinderMeshBuilder {
    inner: MeshGeometryBuilder<CoordinateSystem>,
}

impl CylinderMeshBuilder {
    /// Creates a builder over `theta_range × y_range` with default steps and tiling.
    pub fn new(theta_range: Range, y_range: Range) -> Self {
        Self {
            inner: MeshGeometryBuilder::new(
                CoordinateSystem::Cylindrical,
                MeshConfig::new(theta_range, y_range),
            ),
        }
    }

    /// Angular domain in radians.
    pub fn theta_range(&self) -> Range {
        self.inner.config().range_one
    }

    /// Height domain.
    pub fn y_range(&self) -> Range {
        self.inner.config().range_two
    }

    /// Builds the surface `r = function(theta, y)`.
    pub fn build<F>(&self, function: F) -> GeometryResult<Geometry>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.inner.build(function)
    }

    delegate_build!();
}
