//! Radius functions `r(theta, psi)` around the origin.

use crate::config::{MeshConfig, Range};
use crate::error::GeometryResult;
use crate::geometry::Geometry;
use crate::mapping::CoordinateSystem;

use super::MeshGeometryBuilder;

/// Builds a star-shaped surface where the sampled value is the distance from
/// the origin. `psi` is the polar angle from +Y, `theta` the azimuth.
///
/// # Examples
/// ```
/// use std::f64::consts::{PI, TAU};
/// use mesh_geometry::{Range, SphereMeshBuilder, StepCount};
///
/// let geometry = SphereMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, PI))
///     .with_steps(StepCount::new(32, 16))
///     .build(|_, _| 2.0)
///     .unwrap();
/// let (min, max) = geometry.bounding_box();
/// assert!((max.y - 2.0).abs() < 1e-9 && (min.y + 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SphereMeshBuilder {
    inner: MeshGeometryBuilder<CoordinateSystem>,
}

impl SphereMeshBuilder {
    /// Creates a builder over `theta_range × psi_range` with default steps and tiling.
    pub fn new(theta_range: Range, psi_range: Range) -> Self {
        Self {
            inner: MeshGeometryBuilder::new(
                CoordinateSystem::Spherical,
                MeshConfig::new(theta_range, psi_range),
            ),
        }
    }

    /// Azimuth domain in radians.
    pub fn theta_range(&self) -> Range {
        self.inner.config().range_one
    }

    /// Polar-angle domain in radians.
    pub fn psi_range(&self) -> Range {
        self.inner.config().range_two
    }

    /// Builds the surface `r = function(theta, psi)`.
    pub fn build<F>(&self, function: F) -> GeometryResult<Geometry>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.inner.build(function)
    }

    delegate_build!();
}
