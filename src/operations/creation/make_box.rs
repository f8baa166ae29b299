use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{SolidId, TopologyStore};

use super::MakePolyhedron;

/// Face loops of an axis-aligned box, counter-clockwise seen from outside.
///
/// Corners 0..4 run around the bottom (`z = min`) starting at `min`, corners
/// 4..8 are the same positions on the top.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [1, 2, 6, 5], // +x
    [2, 3, 7, 6], // +y
    [3, 0, 4, 7], // -x
];

/// Creates a box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any extent is not positive.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let (lo, hi) = (self.min_corner, self.max_corner);
        if (0..3).any(|i| hi[i] - lo[i] < TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box extents must be positive, got {lo} to {hi}"
            ))
            .into());
        }

        let corners = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ];
        let faces = BOX_FACES.iter().map(|f| f.to_vec()).collect();
        MakePolyhedron::new(corners, faces).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::topology::FaceSurface;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_has_six_faces_twelve_edges_eight_vertices() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(10.0, 5.0, 2.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.solid_faces(solid).unwrap().len(), 6);
        assert_eq!(store.solid_edges(solid).unwrap().len(), 12);
        assert_eq!(store.solid_vertices(solid).unwrap().len(), 8);
        assert!(store.is_closed_solid(solid).unwrap());
    }

    #[test]
    fn face_normals_point_outward() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        for face_id in store.solid_faces(solid).unwrap() {
            let face = store.face(face_id).unwrap();
            let FaceSurface::Plane(plane) = &face.surface else {
                panic!("box faces are planar");
            };
            // The plane origin is the face centroid, which lies along the normal.
            let outward: Vector3 = plane.origin().coords;
            assert!((plane.plane_normal() - outward).norm() < 1e-12);
        }
    }

    #[test]
    fn flat_box_fails() {
        let mut store = TopologyStore::new();
        let result = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 1.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
