use crate::error::{OperationError, Result};
use crate::math::{Isometry3, Point3, Rotation3, Vector3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::RigidTransform;

/// Rotates a solid around an axis.
pub struct Rotate {
    solid: SolidId,
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(solid: SolidId, axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            solid,
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let rotation = Rotation3::from_scaled_axis(self.axis_direction / len * self.angle);

        // Rotate about the axis origin: p' = o + R (p - o).
        let origin = self.axis_origin.coords;
        let translation = origin - rotation * origin;
        let iso = Isometry3::from_parts(translation.into(), rotation);

        RigidTransform::new(self.solid, iso).execute(store)
    }
}
