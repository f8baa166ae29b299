use approx::AbsDiffEq;
use crate::operations::query::Aabb;

/// Extents of a part, sorted so that `length >= width >= height`.
///
/// Two dimensions are equal when every component differs by strictly less
/// than the tolerance. That relation is reflexive and symmetric but not
/// transitive: `a ~ b` and `b ~ c` do not imply `a ~ c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Tolerance used by [`AbsDiffEq::default_epsilon`].
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    /// Creates dimensions from three extents in any order.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let mut sorted = [x, y, z];
        sorted.sort_by(|a, b| b.total_cmp(a));
        let [length, width, height] = sorted;
        Self {
            length,
            width,
            height,
        }
    }

    /// Creates dimensions from the extents of a bounding box.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let e = aabb.extents();
        Self::new(e.x, e.y, e.z)
    }

    /// Returns `true` if every component differs by less than `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.length - other.length).abs() < tolerance
            && (self.width - other.width).abs() < tolerance
            && (self.height - other.height).abs() < tolerance
    }
}

impl AbsDiffEq for Dimensions {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Self::DEFAULT_TOLERANCE
    }

    // strict comparison, unlike the f64 impl
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::{abs_diff_eq, abs_diff_ne};

    #[test]
    fn extents_are_sorted_descending() {
        let d = Dimensions::new(2.0, 10.0, 5.0);
        assert_eq!(d, Dimensions { length: 10.0, width: 5.0, height: 2.0 });
    }

    #[test]
    fn from_aabb() {
        let aabb = Aabb::from_points(&[Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 8.0, 2.0)])
            .unwrap();
        let d = Dimensions::from_aabb(&aabb);
        assert_eq!(d, Dimensions::new(7.0, 2.0, 1.0));
    }

    #[test]
    fn equality_within_tolerance() {
        let a = Dimensions::new(10.0, 5.0, 2.0);
        let b = Dimensions::new(10.00005, 5.0, 2.0);
        assert!(abs_diff_eq!(a, b));
        assert!(abs_diff_eq!(b, a));
        assert!(abs_diff_eq!(a, a));
        assert!(abs_diff_ne!(a, Dimensions::new(10.001, 5.0, 2.0)));
    }

    #[test]
    fn difference_equal_to_tolerance_is_not_equal() {
        let a = Dimensions::new(4.0, 2.0, 1.0);
        let b = Dimensions::new(4.5, 2.0, 1.0);
        assert!(!a.approx_eq(&b, 0.5));
        assert!(a.approx_eq(&b, 0.5 + 1e-9));
    }

    #[test]
    fn equality_is_not_transitive() {
        let tol = Dimensions::DEFAULT_TOLERANCE;
        let a = Dimensions::new(10.0, 5.0, 2.0);
        let b = Dimensions::new(10.0 + 0.75 * tol, 5.0, 2.0);
        let c = Dimensions::new(10.0 + 1.5 * tol, 5.0, 2.0);
        assert!(a.approx_eq(&b, tol));
        assert!(b.approx_eq(&c, tol));
        assert!(!a.approx_eq(&c, tol));
    }
}
