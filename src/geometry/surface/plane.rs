use crate::error::{GeometryError, Result};
use crate::math::{construct_perpendicular, Isometry3, Point3, Vector3, TOLERANCE};

use super::Surface;

/// An infinite plane through `origin`.
///
/// `P(u, v) = origin + u * u_dir + v * v_dir` with `u_dir x v_dir = normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates the plane through `origin` facing `normal`.
    ///
    /// `u_dir` is [`construct_perpendicular`] of the normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let normal = normal
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector)?;
        let u_dir = construct_perpendicular(&normal)?;
        Ok(Self {
            origin,
            u_dir,
            v_dir: normal.cross(&u_dir),
            normal,
        })
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns this plane moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        Self {
            origin: iso * self.origin,
            u_dir: iso * self.u_dir,
            v_dir: iso * self.v_dir,
            normal: iso * self.normal,
        }
    }
}

impl Surface for Plane {
    fn normal(&self, _u: f64, _v: f64) -> Result<Vector3> {
        Ok(self.normal)
    }

    fn inverse(&self, point: &Point3) -> (f64, f64) {
        let dp = point - self.origin;
        (dp.dot(&self.u_dir), dp.dot(&self.v_dir))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn from_normal_builds_right_handed_frame() {
        let n = Vector3::new(1.0, -2.0, 0.5);
        let plane = Plane::from_normal(Point3::new(1.0, 2.0, 3.0), n).unwrap();
        let cross = plane.u_dir().cross(plane.v_dir());
        assert!((cross - n.normalize()).norm() < 1e-12);
    }

    #[test]
    fn inverse_reads_in_plane_coordinates() {
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 2.0), Vector3::z()).unwrap();
        let p = plane.origin() + plane.u_dir() * 1.5 - plane.v_dir() * 0.25 + Vector3::z();
        let (u, v) = plane.inverse(&p);
        assert!((u - 1.5).abs() < 1e-12);
        assert!((v + 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_normal_fails() {
        assert!(Plane::from_normal(Point3::origin(), Vector3::zeros()).is_err());
    }

    #[test]
    fn transformed_normal_follows_rotation() {
        let plane = Plane::from_normal(Point3::origin(), Vector3::z()).unwrap();
        let iso = Isometry3::rotation(Vector3::x() * FRAC_PI_2);
        let moved = plane.transformed(&iso);
        let n = moved.normal(0.0, 0.0).unwrap();
        assert!((n - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }
}
