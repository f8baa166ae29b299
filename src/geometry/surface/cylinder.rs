use crate::error::Result;
use crate::geometry::{orthonormal_pair, positive_length};
use crate::math::{Isometry3, Point3, Vector3};

use super::Surface;

/// The side surface of a cylinder.
///
/// `u` is the angle from `ref_dir` towards `axis x ref_dir` and `v` the
/// signed distance along `axis` from `center`. Normals point away from the
/// axis.
#[derive(Debug, Clone)]
pub struct Cylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    ref_dir: Vector3,
}

impl Cylinder {
    /// Creates a cylinder around the axis line through `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or `ref_dir` is not
    /// perpendicular to `axis`.
    pub fn new(center: Point3, radius: f64, axis: Vector3, ref_dir: Vector3) -> Result<Self> {
        let radius = positive_length(radius, "cylinder radius")?;
        let (axis, ref_dir) = orthonormal_pair(&axis, &ref_dir)?;
        Ok(Self {
            center,
            radius,
            axis,
            ref_dir,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns this cylinder moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        Self {
            center: iso * self.center,
            axis: iso * self.axis,
            ref_dir: iso * self.ref_dir,
            ..*self
        }
    }
}

impl Surface for Cylinder {
    fn normal(&self, u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.ref_dir * u.cos() + self.axis.cross(&self.ref_dir) * u.sin())
    }

    /// `u` lies in `(-pi, pi]`.
    fn inverse(&self, point: &Point3) -> (f64, f64) {
        let d = point - self.center;
        let across = self.axis.cross(&self.ref_dir);
        (d.dot(&across).atan2(d.dot(&self.ref_dir)), d.dot(&self.axis))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn inverse_gives_angle_and_height() {
        let c = Cylinder::new(p(0.0, 0.0, 1.0), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let (u, v) = c.inverse(&p(0.0, 2.0, 4.0));
        assert!((u - FRAC_PI_2).abs() < 1e-12);
        assert!((v - 3.0).abs() < 1e-12);
    }

    #[test]
    fn side_normal_points_away_from_axis() {
        let axis = Vector3::new(1.0, -1.0, 2.0).normalize();
        let radial = Vector3::new(1.0, 1.0, 0.0).normalize();
        let c = Cylinder::new(p(3.0, 0.0, 0.0), 0.5, axis, Vector3::new(0.0, 2.0, 1.0)).unwrap();
        let on_side = p(3.0, 0.0, 0.0) + axis * 7.0 + radial * 0.5;
        let (u, v) = c.inverse(&on_side);
        assert!((v - 7.0).abs() < 1e-12);
        assert!((c.normal(u, v).unwrap() - radial).norm() < 1e-12);
    }

    #[test]
    fn transformed_keeps_parameters() {
        let c = Cylinder::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x()).unwrap();
        let iso = Isometry3::new(Vector3::new(5.0, 0.0, 0.0), Vector3::x() * FRAC_PI_2);
        let moved = c.transformed(&iso);
        let point = p(0.6, 0.8, 2.0);
        let (u, v) = c.inverse(&point);
        let (mu, mv) = moved.inverse(&(iso * point));
        assert!((u - mu).abs() < 1e-12);
        assert!((v - mv).abs() < 1e-12);
    }

    #[test]
    fn reference_must_cross_the_axis() {
        let r = Cylinder::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::new(0.0, 1.0, 1.0));
        assert!(r.is_err());
        assert!(Cylinder::new(p(0.0, 0.0, 0.0), -1.0, Vector3::z(), Vector3::x()).is_err());
    }
}
