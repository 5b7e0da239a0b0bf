//! # Error Types
//!
//! Error types for mesh geometry builds. Every failure is local to a single
//! build call and is reported before any geometry leaves the builder.
//!
//! ## Error Policy
//!
//! - Configuration problems are detected before the sample function runs
//! - Sample function failures are carried back to the caller by value
//! - Degenerate grids and zero-length normals are NOT errors

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Which parameter axis a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First parameter (x, or theta).
    One,
    /// Second parameter (z, y, or psi).
    Two,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::One => f.write_str("one"),
            Axis::Two => f.write_str("two"),
        }
    }
}

/// Errors raised by the engine itself.
///
/// ## Example
///
/// ```rust
/// use mesh_geometry::{CartesianMeshBuilder, GeometryError, Range};
///
/// let builder = CartesianMeshBuilder::new(Range::new(1.0, -1.0), Range::new(0.0, 1.0));
/// match builder.build(|_, _| 0.0) {
///     Err(GeometryError::InvalidRange { axis, .. }) => println!("bad range on axis {axis}"),
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(geometry) => println!("{} vertices", geometry.vertex_count()),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A parameter range has `min > max` or a non-finite bound.
    #[error("Invalid range on axis {axis}: [{min}, {max}]")]
    InvalidRange {
        /// Offending axis
        axis: Axis,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// The grid would need more vertices than a `u32` index can address.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Largest supported vertex count
        max: usize,
    },

    /// Assembled buffers disagree in length or reference missing vertices.
    #[error("Inconsistent geometry buffers: {message}")]
    InconsistentBuffers {
        /// Description of the mismatch
        message: String,
    },
}

impl GeometryError {
    /// Creates an inconsistent buffers error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentBuffers {
            message: message.into(),
        }
    }
}

/// Errors from a build whose sample function can fail.
///
/// `E` is the caller's own error type and is returned exactly as the sample
/// function produced it.
///
/// ## Example
///
/// ```rust
/// use mesh_geometry::{BuildError, CartesianMeshBuilder, Range};
///
/// let builder = CartesianMeshBuilder::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0));
/// let result = builder.try_build(|x, _| if x > 0.5 { Err("too far") } else { Ok(0.0) });
/// assert!(matches!(result, Err(BuildError::Sampling("too far"))));
/// ```
#[derive(Debug, Error)]
pub enum BuildError<E> {
    /// The configuration or the assembled buffers were rejected.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The sample function returned an error.
    #[error("Sample function failed: {0}")]
    Sampling(E),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for engine operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let range_err = GeometryError::InvalidRange {
            axis: Axis::Two,
            min: 2.0,
            max: 1.0,
        };
        assert!(range_err.to_string().contains("axis two"));
        assert!(range_err.to_string().contains("[2, 1]"));

        let buf_err = GeometryError::inconsistent("normals shorter than positions");
        assert!(buf_err.to_string().contains("normals shorter"));
    }

    #[test]
    fn test_build_error_wraps_geometry_transparently() {
        let err: BuildError<std::fmt::Error> = GeometryError::TooManyVertices { count: 10, max: 5 }.into();
        assert_eq!(err.to_string(), "Too many vertices: 10 (max: 5)");
    }

    #[test]
    fn test_sampling_error_is_kept_by_value() {
        let err: BuildError<&str> = BuildError::Sampling("boom");
        assert!(matches!(err, BuildError::Sampling("boom")));
        assert_eq!(err.to_string(), "Sample function failed: boom");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
        assert_send_sync::<BuildError<std::io::Error>>();
    }
}
