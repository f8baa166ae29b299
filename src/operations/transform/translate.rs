use crate::error::Result;
use crate::math::{Isometry3, Rotation3, Vector3};
use crate::topology::{SolidId, TopologyStore};

use super::RigidTransform;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity of the solid is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let iso = Isometry3::from_parts(self.displacement.into(), Rotation3::identity());
        RigidTransform::new(self.solid, iso).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;

    #[test]
    fn translated_box_moves_its_bounds() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        Translate::new(solid, Vector3::new(5.0, -1.0, 0.5))
            .execute(&mut store)
            .unwrap();
        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert!((aabb.min - Point3::new(5.0, -1.0, 0.5)).norm() < 1e-12);
        assert!((aabb.max - Point3::new(6.0, 1.0, 3.5)).norm() < 1e-12);
    }
}
