//! # Coordinate Mapping
//!
//! Turns a sampled `(one, two, value)` triple into a point in right-handed
//! 3D space. The sampler and assembler only ever see [`CoordinateMapper`], so
//! one tessellation routine serves every coordinate system.
//!
//! | System | `one` | `two` | `value` | Position |
//! |---|---|---|---|---|
//! | Cartesian | x | z | height | `(x, value, z)` |
//! | Cylindrical | theta | y | radius | `(r cos θ, y, r sin θ)` |
//! | Spherical | theta | psi | radius | `(r sin ψ cos θ, r cos ψ, r sin ψ sin θ)` |
//!
//! Angles are radians. Psi is measured from the +Y pole.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Maps grid parameters and a sampled value to a position.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use mesh_geometry::CoordinateMapper;
///
/// /// Height field lying in the x/y plane instead of x/z.
/// struct Upright;
///
/// impl CoordinateMapper for Upright {
///     fn map(&self, one: f64, two: f64, value: f64) -> DVec3 {
///         DVec3::new(one, two, value)
///     }
/// }
///
/// assert_eq!(Upright.map(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 3.0));
/// ```
pub trait CoordinateMapper {
    /// Converts one grid sample to a position.
    fn map(&self, one: f64, two: f64, value: f64) -> DVec3;
}

/// The built-in coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// Height `y(x, z)` over the x/z plane.
    Cartesian,
    /// Radius `r(theta, y)` around the y axis.
    Cylindrical,
    /// Radius `r(theta, psi)` around the origin.
    Spherical,
}

impl CoordinateMapper for CoordinateSystem {
    #[inline]
    fn map(&self, one: f64, two: f64, value: f64) -> DVec3 {
        match self {
            CoordinateSystem::Cartesian => cartesian(one, two, value),
            CoordinateSystem::Cylindrical => cylindrical(one, two, value),
            CoordinateSystem::Spherical => spherical(one, two, value),
        }
    }
}

impl<M: CoordinateMapper + ?Sized> CoordinateMapper for &M {
    #[inline]
    fn map(&self, one: f64, two: f64, value: f64) -> DVec3 {
        (**self).map(one, two, value)
    }
}

/// `(x, height, z)`
#[inline]
pub fn cartesian(x: f64, z: f64, height: f64) -> DVec3 {
    DVec3::new(x, height, z)
}

/// `(r cos θ, y, r sin θ)`
#[inline]
pub fn cylindrical(theta: f64, y: f64, radius: f64) -> DVec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(radius * cos_theta, y, radius * sin_theta)
}

/// `(r sin ψ cos θ, r cos ψ, r sin ψ sin θ)`
#[inline]
pub fn spherical(theta: f64, psi: f64, radius: f64) -> DVec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_psi, cos_psi) = psi.sin_cos();
    DVec3::new(
        radius * sin_psi * cos_theta,
        radius * cos_psi,
        radius * sin_psi * sin_theta,
    )
}
