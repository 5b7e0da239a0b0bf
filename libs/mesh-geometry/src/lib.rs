//! # Mesh Geometry
//!
//! Triangle meshes from scalar functions sampled over a rectangular 2D
//! parameter grid, in cartesian, cylindrical and spherical coordinates.
//!
//! ## Architecture
//!
//! ```text
//! MeshConfig + f(one, two) → sampler → mapping → assembler → Geometry
//! ```
//!
//! - [`sampler`]: evaluates the function at every grid node, row-major
//! - [`mapping`]: places each sample in 3D space
//! - [`assembler`]: normals, texture coordinates and triangle indices
//! - [`geometry`]: the validated buffers plus a default material
//! - [`export`]: Wavefront OBJ output
//!
//! ## Usage
//!
//! ```rust
//! use std::f64::consts::{PI, TAU};
//! use mesh_geometry::{SphereMeshBuilder, Range, StepCount};
//!
//! let geometry = SphereMeshBuilder::new(Range::new(0.0, TAU), Range::new(0.0, PI))
//!     .with_steps(StepCount::new(64, 32))
//!     .build(|theta, psi| 1.0 + 0.1 * (5.0 * theta).sin() * psi.sin())
//!     .unwrap();
//!
//! assert_eq!(geometry.vertex_count(), 65 * 33);
//! assert_eq!(geometry.indices().len(), 6 * 64 * 32);
//! ```

pub mod assembler;
pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod mapping;
pub mod sampler;

pub use assembler::{assemble, MeshBuffers};
pub use builder::{CartesianMeshBuilder, CylinderMeshBuilder, MeshGeometryBuilder, SphereMeshBuilder};
pub use config::{MeshConfig, Range, StepCount, TextureRepeat};
pub use error::{Axis, BuildError, GeometryError, GeometryResult};
pub use export::write_obj;
pub use geometry::{Geometry, GpuBuffers, Material, Shading, Vertex};
pub use mapping::{CoordinateMapper, CoordinateSystem};
pub use sampler::{par_sample_grid, sample_grid, SampleGrid};
