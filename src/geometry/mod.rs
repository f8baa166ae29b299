pub mod curve;
pub mod surface;

pub use curve::{Circle, Curve, Ellipse, Line};
pub use surface::{Cylinder, Plane, Surface};

use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// Normalizes an axis and a reference direction lying across it.
///
/// Fails if either vector is zero-length or they are not perpendicular.
pub(crate) fn orthonormal_pair(axis: &Vector3, reference: &Vector3) -> Result<(Vector3, Vector3)> {
    let axis = axis.try_normalize(TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    let reference = reference
        .try_normalize(TOLERANCE)
        .ok_or(GeometryError::ZeroVector)?;
    if axis.dot(&reference).abs() > TOLERANCE {
        return Err(GeometryError::Degenerate(
            "reference direction must be perpendicular to the axis".into(),
        )
        .into());
    }
    Ok((axis, reference))
}

/// Returns `value` if it is a usable length, naming `what` otherwise.
pub(crate) fn positive_length(value: f64, what: &str) -> Result<f64> {
    if value < TOLERANCE {
        return Err(GeometryError::Degenerate(format!("{what} must be positive")).into());
    }
    Ok(value)
}
