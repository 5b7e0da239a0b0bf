//! Centralized configuration values shared across the mesh geometry crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest sine of the angle between two tangents that still defines a normal.
///
/// The cross product is compared against `|t_one| * |t_two|`, so the test does
/// not depend on the size of the mesh. Anything below is degenerate and gets
/// [`DEFAULT_NORMAL`].
///
/// # Examples
/// ```
/// use config::constants::NORMAL_EPSILON;
/// assert!(NORMAL_EPSILON > 0.0 && NORMAL_EPSILON < 1.0e-6);
/// ```
pub const NORMAL_EPSILON: f64 = 1.0e-12;

/// Normal assigned to vertices whose tangents do not span a plane.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_NORMAL;
/// assert_eq!(DEFAULT_NORMAL, [0.0, 1.0, 0.0]);
/// ```
pub const DEFAULT_NORMAL: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of subdivisions along each parameter axis.
///
/// A grid with `n` steps has `n + 1` vertices on that axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_STEPS_PER_AXIS;
///
/// let user_steps: Option<u32> = None;
/// let steps = user_steps.unwrap_or(DEFAULT_STEPS_PER_AXIS);
/// assert_eq!(steps, 100);
/// ```
pub const DEFAULT_STEPS_PER_AXIS: u32 = 100;

/// Default number of texture tiles across each parameter axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TEXTURE_REPEAT;
///
/// // u runs from 0 to DEFAULT_TEXTURE_REPEAT across the domain
/// let u_max = 1.0 * DEFAULT_TEXTURE_REPEAT as f64;
/// assert_eq!(u_max, 1.0);
/// ```
pub const DEFAULT_TEXTURE_REPEAT: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated grid.
///
/// Triangle indices are emitted as `u32`, so the vertex count must fit in that
/// index space.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 101 * 101;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default diffuse color when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.normal_tolerance > 0.0);
/// assert_eq!(config.default_steps, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Relative normal tolerance, see [`NORMAL_EPSILON`].
    pub normal_tolerance: f64,
    /// Subdivisions per axis used when a builder is not told otherwise.
    pub default_steps: u32,
    /// Texture tiles per axis used when a builder is not told otherwise.
    pub default_texture_repeat: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance, default steps and default texture repeat.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-9, 24, 2).expect("valid config");
    /// assert_eq!(cfg.default_steps, 24);
    /// ```
    pub fn new(
        normal_tolerance: f64,
        default_steps: u32,
        default_texture_repeat: u32,
    ) -> Result<Self, ConfigError> {
        if !normal_tolerance.is_finite() || normal_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(normal_tolerance));
        }
        if default_steps == 0 {
            return Err(ConfigError::InvalidSteps(default_steps));
        }
        if default_texture_repeat == 0 {
            return Err(ConfigError::InvalidTextureRepeat(default_texture_repeat));
        }
        Ok(Self {
            normal_tolerance,
            default_steps,
            default_texture_repeat,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            normal_tolerance: NORMAL_EPSILON,
            default_steps: DEFAULT_STEPS_PER_AXIS,
            default_texture_repeat: DEFAULT_TEXTURE_REPEAT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the default step count would produce no triangles.
    InvalidSteps(u32),
    /// Raised when the default texture repeat would collapse every UV to zero.
    InvalidTextureRepeat(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidSteps(value) => {
                write!(f, "default_steps must be >= 1: {value}")
            }
            ConfigError::InvalidTextureRepeat(value) => {
                write!(f, "default_texture_repeat must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
