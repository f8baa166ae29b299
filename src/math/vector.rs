use crate::error::{GeometryError, Result};

use super::Vector3;

/// Default epsilon for [`is_axis_aligned`].
pub const AXIS_EPSILON: f64 = 1e-6;

/// Returns a unit vector perpendicular to `v`.
///
/// Takes the first nonzero component `i`, sets `r[(i + 1) % 3] = v[i]` and
/// `r[i] = -v[(i + 1) % 3]`, leaves the third component at zero and
/// normalizes. The rule is fixed, so the same input always yields the same
/// perpendicular.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is the zero vector.
#[allow(clippy::float_cmp)]
pub fn construct_perpendicular(v: &Vector3) -> Result<Vector3> {
    let i = (0..3)
        .find(|&i| v[i] != 0.0)
        .ok_or(GeometryError::ZeroVector)?;
    let j = (i + 1) % 3;

    let mut perp = Vector3::zeros();
    perp[j] = v[i];
    perp[i] = -v[j];

    let len = perp.norm();
    if len == 0.0 {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(perp / len)
}

/// Returns `true` if `v` is parallel to one of the coordinate axes, i.e.
/// exactly two of its components are within `epsilon` of zero.
#[must_use]
pub fn is_axis_aligned(v: &Vector3, epsilon: f64) -> bool {
    v.iter().filter(|c| c.abs() <= epsilon).count() == 2
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn perpendicular_of_z_is_x() {
        // i = 2, j = 0: r[0] = v[2], r[2] = -v[0]
        let p = construct_perpendicular(&Vector3::z()).unwrap();
        assert!((p - Vector3::x()).norm() < TOLERANCE);
    }

    #[test]
    fn perpendicular_of_x_is_y() {
        let p = construct_perpendicular(&Vector3::x()).unwrap();
        assert!((p - Vector3::y()).norm() < TOLERANCE);
    }

    #[test]
    fn perpendicular_of_negative_y() {
        // i = 1, j = 2: r[2] = -1, r[1] = -v[2] = 0
        let p = construct_perpendicular(&Vector3::new(0.0, -1.0, 0.0)).unwrap();
        assert!((p - Vector3::new(0.0, 0.0, -1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn perpendicular_is_unit_and_orthogonal() {
        for v in [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.3, 0.0, 7.0),
            Vector3::new(0.0, 4.0, -2.0),
            Vector3::new(1e-3, 1e3, 0.5),
        ] {
            let p = construct_perpendicular(&v).unwrap();
            assert!((p.norm() - 1.0).abs() < 1e-12, "not unit for {v:?}");
            assert!(p.dot(&v).abs() < 1e-9, "not perpendicular for {v:?}");
        }
    }

    #[test]
    fn perpendicular_is_deterministic() {
        let v = Vector3::new(0.2, -0.7, 0.1);
        let a = construct_perpendicular(&v).unwrap();
        let b = construct_perpendicular(&v).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn perpendicular_of_zero_fails() {
        assert!(construct_perpendicular(&Vector3::zeros()).is_err());
    }

    #[test]
    fn axis_aligned_vectors() {
        assert!(is_axis_aligned(&Vector3::x(), AXIS_EPSILON));
        assert!(is_axis_aligned(&Vector3::new(0.0, -3.0, 0.0), AXIS_EPSILON));
        assert!(is_axis_aligned(&Vector3::new(1e-9, 0.0, 1.0), AXIS_EPSILON));
    }

    #[test]
    fn non_axis_aligned_vectors() {
        assert!(!is_axis_aligned(&Vector3::new(1.0, 1.0, 0.0), AXIS_EPSILON));
        assert!(!is_axis_aligned(&Vector3::new(1.0, 1.0, 1.0), AXIS_EPSILON));
        // three near-zero components is a zero vector, not an axis
        assert!(!is_axis_aligned(&Vector3::zeros(), AXIS_EPSILON));
    }
}
