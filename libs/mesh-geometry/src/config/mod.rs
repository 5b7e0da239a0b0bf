//! Build configuration: parameter ranges, step counts and texture tiling.
//!
//! Defaults come from the shared `config` crate so the builders stay
//! decoupled from literal constants.

use ::config::constants::{approx_zero, GlobalConfig, MAX_VERTICES};
use serde::{Deserialize, Serialize};

use crate::error::{Axis, GeometryError, GeometryResult};

/// A closed interval `[min, max]` over one parameter axis.
///
/// `min == max` is legal and collapses the axis to a single repeated value.
/// Ordering is checked when a build starts, not here.
///
/// # Examples
/// ```
/// use mesh_geometry::Range;
/// let r = Range::new(-1.0, 1.0);
/// assert_eq!(r.span(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Range {
    /// Creates a range between `min` and `max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the interval.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the interval has (approximately) zero length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.span())
    }

    /// Checks `min <= max` with finite bounds and a finite span.
    pub fn validate(&self, axis: Axis) -> GeometryResult<()> {
        if !self.span().is_finite() || self.min > self.max {
            return Err(GeometryError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Distance between neighbouring grid nodes for `steps` subdivisions.
    ///
    /// Zero steps means a single sample at `min`, so the step is zero.
    #[inline]
    pub fn step(&self, steps: u32) -> f64 {
        if steps == 0 {
            0.0
        } else {
            self.span() / f64::from(steps)
        }
    }
}

/// Subdivision counts for the two parameter axes.
///
/// These are steps, not vertices: an axis with `n` steps has `n + 1` nodes.
///
/// # Examples
/// ```
/// use mesh_geometry::StepCount;
/// let steps = StepCount::new(4, 2);
/// assert_eq!(steps.vertex_count(), 15);
/// assert_eq!(steps.cell_count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCount {
    /// Steps along the first axis
    pub one: u32,
    /// Steps along the second axis
    pub two: u32,
}

impl StepCount {
    /// Creates a step count pair.
    pub const fn new(one: u32, two: u32) -> Self {
        Self { one, two }
    }

    /// Same step count on both axes.
    pub const fn uniform(steps: u32) -> Self {
        Self::new(steps, steps)
    }

    /// Nodes along the first axis.
    #[inline]
    pub fn nodes_one(&self) -> usize {
        self.one as usize + 1
    }

    /// Nodes along the second axis.
    #[inline]
    pub fn nodes_two(&self) -> usize {
        self.two as usize + 1
    }

    /// Total grid nodes, `(one + 1) * (two + 1)`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.nodes_one() * self.nodes_two()
    }

    /// Number of quad cells, `one * two`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.one as usize * self.two as usize
    }
}

/// How many times the texture tiles across each parameter axis.
///
/// # Examples
/// ```
/// use mesh_geometry::TextureRepeat;
/// assert_eq!(TextureRepeat::default(), TextureRepeat::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRepeat {
    /// Tiles along the first axis
    pub one: u32,
    /// Tiles along the second axis
    pub two: u32,
}

impl TextureRepeat {
    /// Creates a texture repeat pair.
    pub const fn new(one: u32, two: u32) -> Self {
        Self { one, two }
    }
}

impl Default for TextureRepeat {
    fn default() -> Self {
        let global = GlobalConfig::default();
        Self::new(global.default_texture_repeat, global.default_texture_repeat)
    }
}

/// Everything a single build needs besides the mapper and the function.
///
/// # Examples
/// ```
/// use mesh_geometry::{MeshConfig, Range, StepCount, TextureRepeat};
///
/// let cfg = MeshConfig::new(Range::new(0.0, 1.0), Range::new(0.0, 2.0))
///     .with_steps(StepCount::new(10, 20))
///     .with_texture_repeat(TextureRepeat::new(2, 4));
/// assert_eq!(cfg.steps.two, 20);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Domain of the first parameter
    pub range_one: Range,
    /// Domain of the second parameter
    pub range_two: Range,
    /// Subdivisions per axis
    pub steps: StepCount,
    /// UV tiling per axis
    pub texture_repeat: TextureRepeat,
    /// Smallest tangent angle sine that still counts as a normal
    pub normal_tolerance: f64,
}

impl MeshConfig {
    /// Creates a configuration with the workspace defaults.
    pub fn new(range_one: Range, range_two: Range) -> Self {
        Self::from_global(range_one, range_two, &GlobalConfig::default())
    }

    /// Creates a configuration from an explicit global snapshot.
    pub fn from_global(range_one: Range, range_two: Range, global: &GlobalConfig) -> Self {
        Self {
            range_one,
            range_two,
            steps: StepCount::uniform(global.default_steps),
            texture_repeat: TextureRepeat::new(
                global.default_texture_repeat,
                global.default_texture_repeat,
            ),
            normal_tolerance: global.normal_tolerance,
        }
    }

    /// Replaces the step counts.
    #[must_use]
    pub fn with_steps(mut self, steps: StepCount) -> Self {
        self.steps = steps;
        self
    }

    /// Replaces the texture repeat counts.
    #[must_use]
    pub fn with_texture_repeat(mut self, texture_repeat: TextureRepeat) -> Self {
        self.texture_repeat = texture_repeat;
        self
    }

    /// Checks everything that must hold before sampling starts.
    pub fn validate(&self) -> GeometryResult<()> {
        self.range_one.validate(Axis::One)?;
        self.range_two.validate(Axis::Two)?;

        let count = (u64::from(self.steps.one) + 1)
            .checked_mul(u64::from(self.steps.two) + 1)
            .and_then(|count| usize::try_from(count).ok());
        match count {
            Some(count) if count <= MAX_VERTICES => Ok(()),
            count => Err(GeometryError::TooManyVertices {
                count: count.unwrap_or(usize::MAX),
                max: MAX_VERTICES,
            }),
        }
    }
}
