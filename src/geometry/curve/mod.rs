mod circle;
mod ellipse;
mod line;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Trait for parametric curves in 3D space.
///
/// Curves are unbounded in their parameter; an edge selects the portion it
/// uses through its own parameter range.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;
}

/// `center + u cos t + v sin t`, the form shared by circles and ellipses.
fn conic_point(center: &Point3, (u, v): (Vector3, Vector3), t: f64) -> Point3 {
    center + u * t.cos() + v * t.sin()
}

/// Unit derivative of [`conic_point`] with respect to `t`.
fn conic_tangent((u, v): (Vector3, Vector3), t: f64) -> Result<Vector3> {
    (v * t.cos() - u * t.sin())
        .try_normalize(TOLERANCE)
        .ok_or_else(|| GeometryError::ZeroVector.into())
}
