use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::math::{
    construct_perpendicular, is_axis_aligned, Isometry3, Matrix3, Rotation3, Vector3,
    AXIS_EPSILON, TOLERANCE,
};
use crate::operations::creation::CopySolid;
use crate::operations::query::{Aabb, BoundingBox, FaceCentroid, FaceNormal};
use crate::operations::transform::RigidTransform;
use crate::topology::{SolidId, TopologyStore};

use super::{EdgeOrientation, FindLargestPlanarConvexFace, FindLongestOrientableEdge};

/// Orthonormal frame built from a reference face normal and an in-plane
/// direction hint.
///
/// `x` is the hint projected into the face plane, `z` the normal and
/// `y = z.cross(x)`, so the frame is right-handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalFrame {
    x: Vector3,
    y: Vector3,
    z: Vector3,
}

impl CanonicalFrame {
    /// Builds the frame.
    ///
    /// If `orientation` is parallel to `normal` it has no in-plane part;
    /// `x` then falls back to [`construct_perpendicular`] of the normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `normal` is zero-length.
    pub fn new(normal: Vector3, orientation: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let z = normal / len;

        let projected = orientation - z * orientation.dot(&z);
        let projected_len = projected.norm();
        let x = if projected_len < TOLERANCE {
            warn!(?normal, ?orientation, "orientation is parallel to the face normal");
            construct_perpendicular(&z)?
        } else {
            projected / projected_len
        };
        let y = z.cross(&x);
        Ok(Self { x, y, z })
    }

    /// In-plane reference direction.
    #[must_use]
    pub fn x_axis(&self) -> &Vector3 {
        &self.x
    }

    /// In-plane direction completing the frame.
    #[must_use]
    pub fn y_axis(&self) -> &Vector3 {
        &self.y
    }

    /// Face normal.
    #[must_use]
    pub fn z_axis(&self) -> &Vector3 {
        &self.z
    }

    /// Rotation taking the frame onto the world axes.
    #[must_use]
    pub fn rotation(&self) -> Rotation3 {
        let m = Matrix3::from_rows(&[self.x.transpose(), self.y.transpose(), self.z.transpose()]);
        Rotation3::from_rotation_matrix(&nalgebra::Rotation3::from_matrix_unchecked(m))
    }

    /// Returns `true` if every frame axis lies along a world axis.
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|axis| is_axis_aligned(axis, AXIS_EPSILON))
    }
}

/// Computes the bounding box a solid would have after a rigid motion,
/// without touching the solid.
///
/// When the motion only permutes and flips axes the native box is moved
/// directly. Otherwise the solid is copied into a scratch store owned by
/// this call, moved there, and measured.
pub struct PlacedBoundingBox {
    solid: SolidId,
    isometry: Isometry3,
}

impl PlacedBoundingBox {
    /// Creates a new `PlacedBoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId, isometry: Isometry3) -> Self {
        Self { solid, isometry }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be copied or measured.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let rotation = self.isometry.rotation.to_rotation_matrix();
        let permutes_axes = rotation
            .matrix()
            .column_iter()
            .all(|c| is_axis_aligned(&c.into_owned(), AXIS_EPSILON));
        if permutes_axes {
            return Ok(BoundingBox::new(self.solid)
                .execute(store)?
                .transformed(&self.isometry));
        }

        let mut scratch = TopologyStore::new();
        let copy = CopySolid::new(self.solid).execute(store, &mut scratch)?;
        RigidTransform::new(copy, self.isometry).execute(&mut scratch)?;
        BoundingBox::new(copy).execute(&scratch)
    }
}

/// Computes the orientation-independent bounding box of a solid.
///
/// The solid is turned so that its largest planar convex face lies in the
/// XY plane facing +Z and the longest orientable edge of that face runs
/// along X. Solids without such a face keep their native box.
pub struct CanonicalBoundingBox {
    solid: SolidId,
}

impl CanonicalBoundingBox {
    /// Creates a new `CanonicalBoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be measured.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let Some(face) = FindLargestPlanarConvexFace::new(self.solid).execute(store)? else {
            debug!(solid = ?self.solid, "no planar convex face, using native bounding box");
            return BoundingBox::new(self.solid).execute(store);
        };

        let centroid = FaceCentroid::new(face).execute(store)?;
        let normal = FaceNormal::new(face, centroid).execute(store)?;
        let orientation = match FindLongestOrientableEdge::new(face).execute(store)? {
            Some(edge) => EdgeOrientation::new(edge)
                .execute(store)?
                .unwrap_or_else(Vector3::x),
            None => Vector3::x(),
        };

        let frame = CanonicalFrame::new(normal, orientation)?;
        let isometry = Isometry3::from_parts(Vector3::zeros().into(), frame.rotation());
        PlacedBoundingBox::new(self.solid, isometry).execute(store)
    }
}
