//! # Config Crate
//!
//! Centralized configuration constants for the mesh geometry pipeline.
//! Default grid resolution, texture tiling, numeric tolerances and the
//! default material colour are defined here so the builders never carry
//! literal values of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_STEPS_PER_AXIS, DEFAULT_TEXTURE_REPEAT, EPSILON};
//!
//! // Vertices per axis are one more than the subdivision count
//! let vertices_per_axis = DEFAULT_STEPS_PER_AXIS as usize + 1;
//! assert_eq!(vertices_per_axis, 101);
//!
//! // A single texture tile spans the whole parameter domain by default
//! assert_eq!(DEFAULT_TEXTURE_REPEAT, 1);
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer Agnostic**: No values tied to a particular graphics API
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
