use crate::error::Result;
use crate::geometry::{orthonormal_pair, positive_length};
use crate::math::{Isometry3, Point3, Vector3};

use super::{conic_point, conic_tangent, Curve};

/// A circle in 3D space, also carried by arc edges.
///
/// `P(t) = center + radius * (cos(t) * ref_dir + sin(t) * (normal x ref_dir))`,
/// so `t` turns counter-clockwise around `normal`.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
}

impl Circle {
    /// Creates a circle whose angle zero points along `ref_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or `ref_dir` does not
    /// lie in the plane of `normal`.
    pub fn new(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        let radius = positive_length(radius, "circle radius")?;
        let (normal, ref_dir) = orthonormal_pair(&normal, &ref_dir)?;
        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit normal of the circle plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// The radius-long axes `(u, v)` with `P(t) = center + u cos t + v sin t`.
    #[must_use]
    pub fn axes(&self) -> (Vector3, Vector3) {
        (
            self.ref_dir * self.radius,
            self.normal.cross(&self.ref_dir) * self.radius,
        )
    }

    /// Returns this circle moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        Self {
            center: iso * self.center,
            normal: iso * self.normal,
            ref_dir: iso * self.ref_dir,
            ..*self
        }
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(conic_point(&self.center, self.axes(), t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        conic_tangent(self.axes(), t)
    }
}
