//! # Mesh Geometry Builders
//!
//! [`MeshGeometryBuilder`] runs the whole pipeline for any
//! [`CoordinateMapper`]:
//!
//! ```text
//! validate config → sample grid → map positions → assemble → package
//! ```
//!
//! The coordinate-specific builders in the submodules name the parameter
//! ranges after their axes and supply their own defaults.

/// Shared surface of the coordinate-specific builders.
///
/// Reached by textual scope, so it must stay above the submodule declarations.
macro_rules! delegate_build {
    () => {
        /// Replaces the step counts.
        #[must_use]
        pub fn with_steps(mut self, steps: $crate::StepCount) -> Self {
            self.inner = self.inner.with_steps(steps);
            self
        }

        /// Replaces the texture repeat counts.
        #[must_use]
        pub fn with_texture_repeat(mut self, texture_repeat: $crate::TextureRepeat) -> Self {
            self.inner = self.inner.with_texture_repeat(texture_repeat);
            self
        }

        /// Subdivisions per axis.
        pub fn steps_per_axis(&self) -> $crate::StepCount {
            self.inner.config().steps
        }

        /// Texture tiles per axis.
        pub fn texture_repeat(&self) -> $crate::TextureRepeat {
            self.inner.config().texture_repeat
        }

        /// Full configuration snapshot.
        pub fn config(&self) -> &$crate::MeshConfig {
            self.inner.config()
        }

        /// Fallible form of `build`.
        pub fn try_build<F, E>(&self, function: F) -> Result<$crate::Geometry, $crate::BuildError<E>>
        where
            F: FnMut(f64, f64) -> Result<f64, E>,
        {
            self.inner.try_build(function)
        }

        /// Parallel form of `build`; the function must be safe to call concurrently.
        pub fn par_build<F>(&self, function: F) -> $crate::GeometryResult<$crate::Geometry>
        where
            F: Fn(f64, f64) -> f64 + Sync,
        {
            self.inner.par_build(function)
        }
    };
}

mod cartesian;
mod cylinder;
mod sphere;

pub use cartesian::CartesianMeshBuilder;
pub use cylinder::CylinderMeshBuilder;
pub use sphere::SphereMeshBuilder;

use std::convert::Infallible;

use glam::DVec3;
use tracing::debug;

use crate::assembler::assemble;
use crate::config::{MeshConfig, StepCount, TextureRepeat};
use crate::error::{Axis, BuildError, GeometryResult};
use crate::geometry::Geometry;
use crate::mapping::CoordinateMapper;
use crate::sampler::{par_sample_grid, sample_grid, SampleGrid};

/// Generic builder over a coordinate mapper and a configuration snapshot.
///
/// # Examples
/// ```
/// use mesh_geometry::{CoordinateSystem, MeshConfig, MeshGeometryBuilder, Range, StepCount};
///
/// let config = MeshConfig::new(Range::new(-1.0, 1.0), Range::new(-1.0, 1.0))
///     .with_steps(StepCount::new(8, 8));
/// let builder = MeshGeometryBuilder::new(CoordinateSystem::Cartesian, config);
/// let geometry = builder.build(|x, z| x * x - z * z).unwrap();
/// assert_eq!(geometry.vertex_count(), 81);
/// assert_eq!(geometry.triangle_count(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct MeshGeometryBuilder<M> {
    mapper: M,
    config: MeshConfig,
}

impl<M: CoordinateMapper> MeshGeometryBuilder<M> {
    /// Creates a builder from a mapper and a configuration.
    pub fn new(mapper: M, config: MeshConfig) -> Self {
        Self { mapper, config }
    }

    /// The coordinate mapper.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// The configuration used by the next build.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Replaces the step counts.
    #[must_use]
    pub fn with_steps(mut self, steps: StepCount) -> Self {
        self.config = self.config.with_steps(steps);
        self
    }

    /// Replaces the texture repeat counts.
    #[must_use]
    pub fn with_texture_repeat(mut self, texture_repeat: TextureRepeat) -> Self {
        self.config = self.config.with_texture_repeat(texture_repeat);
        self
    }

    /// Builds geometry from an infallible sample function.
    pub fn build<F>(&self, mut function: F) -> GeometryResult<Geometry>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.try_build(|one, two| Ok::<f64, Infallible>(function(one, two)))
            .map_err(|err| match err {
                BuildError::Geometry(err) => err,
                BuildError::Sampling(never) => match never {},
            })
    }

    /// Builds geometry from a sample function that may fail.
    ///
    /// The configuration is checked before the first call. The first sampling
    /// error aborts the build and comes back as [`BuildError::Sampling`].
    pub fn try_build<F, E>(&self, function: F) -> Result<Geometry, BuildError<E>>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
    {
        self.config.validate()?;
        self.log_start("sampling mesh grid");

        let grid = sample_grid(&self.config, function).map_err(BuildError::Sampling)?;
        let positions = grid.map_positions(&self.mapper);
        Ok(self.finish(grid, positions)?)
    }

    fn log_start(&self, message: &str) {
        debug!(
            steps_one = self.config.steps.one,
            steps_two = self.config.steps.two,
            "{message}"
        );
        for (axis, range) in [
            (Axis::One, self.config.range_one),
            (Axis::Two, self.config.range_two),
        ] {
            if range.is_degenerate() {
                debug!(%axis, value = range.min, "degenerate range, nodes on this axis coincide");
            }
        }
    }

    fn finish(&self, grid: SampleGrid, positions: Vec<DVec3>) -> GeometryResult<Geometry> {
        let buffers = assemble(
            positions,
            grid.steps(),
            self.config.texture_repeat,
            self.config.normal_tolerance,
        );
        let geometry = Geometry::package(buffers)?;
        debug!(
            vertices = geometry.vertex_count(),
            triangles = geometry.triangle_count(),
            "mesh geometry built"
        );
        Ok(geometry)
    }
}

impl<M: CoordinateMapper + Sync> MeshGeometryBuilder<M> {
    /// Builds geometry, sampling and mapping nodes on the rayon pool.
    ///
    /// Output is identical to [`MeshGeometryBuilder::build`]. The function is
    /// called concurrently and in no particular order, so it must not rely on
    /// call order or shared mutable state.
    pub fn par_build<F>(&self, function: F) -> GeometryResult<Geometry>
    where
        F: Fn(f64, f64) -> f64 + Sync,
    {
        self.try_par_build(|one, two| Ok::<f64, Infallible>(function(one, two)))
            .map_err(|err| match err {
                BuildError::Geometry(err) => err,
                BuildError::Sampling(never) => match never {},
            })
    }

    /// Parallel [`MeshGeometryBuilder::try_build`].
    pub fn try_par_build<F, E>(&self, function: F) -> Result<Geometry, BuildError<E>>
    where
        F: Fn(f64, f64) -> Result<f64, E> + Sync,
        E: Send,
    {
        self.config.validate()?;
        self.log_start("sampling mesh grid in parallel");

        let grid = par_sample_grid(&self.config, function).map_err(BuildError::Sampling)?;
        let positions = grid.par_map_positions(&self.mapper);
        Ok(self.finish(grid, positions)?)
    }
}
