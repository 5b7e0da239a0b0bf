//! # Grid Sampler
//!
//! Evaluates the sample function on a uniform `(steps.one + 1) × (steps.two + 1)`
//! lattice and stores the raw values in row-major order, so node `(i, j)`
//! lives at `i * (steps.two + 1) + j`.
//!
//! Node parameters are computed as `min + i * step` rather than accumulated,
//! which keeps the last node within rounding of `max`.

use glam::DVec3;
use rayon::prelude::*;
use tracing::warn;

use crate::config::{MeshConfig, StepCount};
use crate::mapping::CoordinateMapper;

/// Raw function values on the parameter lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    steps: StepCount,
    min_one: f64,
    min_two: f64,
    step_one: f64,
    step_two: f64,
    values: Vec<f64>,
}

impl SampleGrid {
    /// Lattice with no values yet; used to describe node parameters.
    fn lattice(config: &MeshConfig) -> Self {
        Self {
            steps: config.steps,
            min_one: config.range_one.min,
            min_two: config.range_two.min,
            step_one: config.range_one.step(config.steps.one),
            step_two: config.range_two.step(config.steps.two),
            values: Vec::new(),
        }
    }

    /// Step counts the grid was sampled with.
    #[inline]
    pub fn steps(&self) -> StepCount {
        self.steps
    }

    /// First parameter of row `i`.
    #[inline]
    pub fn param_one(&self, i: usize) -> f64 {
        self.min_one + i as f64 * self.step_one
    }

    /// Second parameter of column `j`.
    #[inline]
    pub fn param_two(&self, j: usize) -> f64 {
        self.min_two + j as f64 * self.step_two
    }

    /// Node `(i, j)` for a row-major index.
    #[inline]
    pub fn node(&self, index: usize) -> (usize, usize) {
        let columns = self.steps.nodes_two();
        (index / columns, index % columns)
    }

    /// All sampled values, row-major.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of grid nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been sampled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maps every node through `mapper`, keeping row-major order.
    pub fn map_positions<M: CoordinateMapper + ?Sized>(&self, mapper: &M) -> Vec<DVec3> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let (i, j) = self.node(index);
                mapper.map(self.param_one(i), self.param_two(j), value)
            })
            .collect()
    }

    /// Parallel [`SampleGrid::map_positions`]; output order is unchanged.
    pub fn par_map_positions<M: CoordinateMapper + Sync + ?Sized>(&self, mapper: &M) -> Vec<DVec3> {
        self.values
            .par_iter()
            .enumerate()
            .map(|(index, &value)| {
                let (i, j) = self.node(index);
                mapper.map(self.param_one(i), self.param_two(j), value)
            })
            .collect()
    }

    fn warn_non_finite(&self) {
        let non_finite = self.values.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            warn!(
                non_finite,
                total = self.values.len(),
                "sample function returned non-finite values"
            );
        }
    }
}

/// Samples `function` once per node in row-major order.
///
/// The first error stops sampling and is returned as is.
///
/// # Examples
/// ```
/// use mesh_geometry::{sample_grid, MeshConfig, Range, StepCount};
///
/// let cfg = MeshConfig::new(Range::new(0.0, 1.0), Range::new(0.0, 2.0))
///     .with_steps(StepCount::new(1, 2));
/// let grid = sample_grid(&cfg, |a, b| Ok::<_, ()>(a + b)).unwrap();
/// assert_eq!(grid.values(), &[0.0, 1.0, 2.0, 1.0, 2.0, 3.0]);
/// ```
pub fn sample_grid<F, E>(config: &MeshConfig, mut function: F) -> Result<SampleGrid, E>
where
    F: FnMut(f64, f64) -> Result<f64, E>,
{
    let mut grid = SampleGrid::lattice(config);
    let mut values = Vec::with_capacity(config.steps.vertex_count());

    for i in 0..config.steps.nodes_one() {
        let one = grid.param_one(i);
        for j in 0..config.steps.nodes_two() {
            values.push(function(one, grid.param_two(j))?);
        }
    }

    grid.values = values;
    grid.warn_non_finite();
    Ok(grid)
}

/// Samples `function` on the rayon pool.
///
/// Call order is unspecified, but values are stored row-major exactly as
/// [`sample_grid`] would store them. The function must be safe to call
/// concurrently.
pub fn par_sample_grid<F, E>(config: &MeshConfig, function: F) -> Result<SampleGrid, E>
where
    F: Fn(f64, f64) -> Result<f64, E> + Sync,
    E: Send,
{
    let mut grid = SampleGrid::lattice(config);
    let lattice = &grid;

    let values = (0..config.steps.vertex_count())
        .into_par_iter()
        .map(|index| {
            let (i, j) = lattice.node(index);
            function(lattice.param_one(i), lattice.param_two(j))
        })
        .collect::<Result<Vec<f64>, E>>()?;

    grid.values = values;
    grid.warn_non_finite();
    Ok(grid)
}
