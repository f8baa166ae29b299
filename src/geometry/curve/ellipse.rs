use crate::error::{GeometryError, Result};
use crate::geometry::{orthonormal_pair, positive_length};
use crate::math::{Isometry3, Point3, Vector3, TOLERANCE};

use super::{conic_point, conic_tangent, Curve};

/// An ellipse in 3D space, also carried by elliptical arc edges.
///
/// `P(t) = center + semi_major * cos(t) * major_dir
///        + semi_minor * sin(t) * (normal x major_dir)`.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point3,
    semi_major: f64,
    semi_minor: f64,
    normal: Vector3,
    major_dir: Vector3,
}

impl Ellipse {
    /// Creates an ellipse with its long axis along `major_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis length is not positive, the minor axis is
    /// longer than the major axis, or `major_dir` does not lie in the plane
    /// of `normal`.
    pub fn new(
        center: Point3,
        semi_major: f64,
        semi_minor: f64,
        normal: Vector3,
        major_dir: Vector3,
    ) -> Result<Self> {
        let semi_major = positive_length(semi_major, "semi-major axis")?;
        let semi_minor = positive_length(semi_minor, "semi-minor axis")?;
        if semi_minor > semi_major + TOLERANCE {
            return Err(GeometryError::Degenerate(
                "semi-minor axis is longer than the semi-major axis".into(),
            )
            .into());
        }
        let (normal, major_dir) = orthonormal_pair(&normal, &major_dir)?;
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            normal,
            major_dir,
        })
    }

    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Unit direction of the long axis.
    #[must_use]
    pub fn major_dir(&self) -> &Vector3 {
        &self.major_dir
    }

    /// The semi-axes as vectors `(u, v)` with `P(t) = center + u cos t + v sin t`.
    #[must_use]
    pub fn axes(&self) -> (Vector3, Vector3) {
        (
            self.major_dir * self.semi_major,
            self.normal.cross(&self.major_dir) * self.semi_minor,
        )
    }

    /// Returns this ellipse moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        Self {
            center: iso * self.center,
            normal: iso * self.normal,
            major_dir: iso * self.major_dir,
            ..*self
        }
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(conic_point(&self.center, self.axes(), t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        conic_tangent(self.axes(), t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn slanted() -> Ellipse {
        let major = Vector3::new(1.0, 1.0, 0.0);
        Ellipse::new(Point3::new(0.0, 0.0, 2.0), 4.0, 1.0, Vector3::z(), major).unwrap()
    }

    #[test]
    fn ends_of_the_major_axis() {
        let e = slanted();
        let tip = e.evaluate(0.0).unwrap();
        let expected = Point3::new(0.0, 0.0, 2.0) + e.major_dir() * 4.0;
        assert!((tip - expected).norm() < 1e-12);
        // the tangent there runs along the minor axis
        let minor = Vector3::z().cross(e.major_dir());
        assert!((e.tangent(0.0).unwrap() - minor).norm() < 1e-12);
        let side = e.evaluate(FRAC_PI_2).unwrap();
        assert!((side - Point3::new(0.0, 0.0, 2.0) - minor).norm() < 1e-12);
    }

    #[test]
    fn axes_are_perpendicular_and_scaled() {
        let (u, v) = slanted().axes();
        assert!((u.norm() - 4.0).abs() < 1e-12);
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!(u.dot(&v).abs() < 1e-12);
    }

    #[test]
    fn transformed_keeps_the_long_axis() {
        let e = slanted();
        let iso = Isometry3::rotation(Vector3::x() * FRAC_PI_2);
        let moved = e.transformed(&iso);
        assert!((moved.major_dir() - iso * e.major_dir()).norm() < 1e-12);
        assert!((moved.evaluate(1.0).unwrap() - iso * e.evaluate(1.0).unwrap()).norm() < 1e-12);
    }

    #[test]
    fn minor_axis_may_not_exceed_major() {
        let r = Ellipse::new(Point3::origin(), 1.0, 2.0, Vector3::z(), Vector3::x());
        assert!(r.is_err());
        let round = Ellipse::new(Point3::origin(), 2.0, 2.0, Vector3::z(), Vector3::x());
        assert!(round.is_ok());
        assert!(Ellipse::new(Point3::origin(), 1.0, 0.0, Vector3::z(), Vector3::x()).is_err());
    }
}
