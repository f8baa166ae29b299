mod cylinder;
mod plane;

pub use cylinder::Cylinder;
pub use plane::Plane;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Computes the unit surface normal at parameters `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate.
    fn normal(&self, u: f64, v: f64) -> Result<Vector3>;

    /// Computes the `(u, v)` parameters of a point on (or projected onto) the surface.
    fn inverse(&self, point: &Point3) -> (f64, f64);
}
