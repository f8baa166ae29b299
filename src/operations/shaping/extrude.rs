use crate::error::{OperationError, Result};
use crate::math::polygon::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::MakePolyhedron;
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{FaceId, SolidId, TopologyStore};

/// Extrudes a face along a direction vector to create a prism.
///
/// The profile is the sampled outer wire of the face. The prism's faces
/// share their edges, so the result supports adjacency queries.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length,
    /// lies in the profile plane, or the face has inner wires.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }

        let mut base = TessellateWire::new(face.outer_wire, TessellationParams::default())
            .execute(store)?;
        let normal = newell_normal(&base);
        let along = normal.dot(&self.direction);
        if along.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the profile plane".into(),
            )
            .into());
        }
        // Base runs counter-clockwise around the direction so the side
        // loops come out facing outward.
        if along < 0.0 {
            base.reverse();
        }

        let n = base.len();
        let mut vertices: Vec<Point3> = base.clone();
        vertices.extend(base.iter().map(|p| p + self.direction));

        let mut faces = Vec::with_capacity(n + 2);
        faces.push((0..n).rev().collect());
        faces.push((n..2 * n).collect());
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(vec![i, j, n + j, n + i]);
        }

        MakePolyhedron::new(vertices, faces).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeFace, MakeWire};
    use crate::operations::query::IsValid;
    use crate::topology::FaceSurface;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn make_face(store: &mut TopologyStore, points: Vec<Point3>) -> FaceId {
        let wire = MakeWire::new(points, true).execute(store).unwrap();
        MakeFace::new(wire, vec![]).execute(store).unwrap()
    }

    #[test]
    fn unit_cube_has_6_faces() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 1.0))
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.solid_faces(solid).unwrap().len(), 6);
        assert_eq!(store.solid_edges(solid).unwrap().len(), 12);
        assert!(store.is_closed_solid(solid).unwrap());
        assert!(IsValid::new(solid).execute(&store));
    }

    #[test]
    fn triangle_prism_has_5_faces() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(1.5, 2.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.solid_faces(solid).unwrap().len(), 5);
    }

    #[test]
    fn clockwise_profile_against_direction_is_still_outward() {
        let mut store = TopologyStore::new();
        // Clockwise seen from +z, extruded along +z.
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(2.0, 2.0, 0.0), p(2.0, 0.0, 0.0)],
        );
        let solid = Extrude::new(face, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();

        let centroid = p(1.0, 1.0, 1.5);
        for face_id in store.solid_faces(solid).unwrap() {
            let face_data = store.face(face_id).unwrap();
            let FaceSurface::Plane(plane) = &face_data.surface else {
                panic!("prism faces are planar");
            };
            let to_face = plane.origin() - centroid;
            assert!(
                plane.plane_normal().dot(&to_face) > 0.0,
                "face normal {:?} should point outward",
                plane.plane_normal()
            );
        }
    }

    #[test]
    fn zero_direction_returns_error() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)],
        );
        let result = Extrude::new(face, Vector3::zeros()).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn in_plane_direction_returns_error() {
        let mut store = TopologyStore::new();
        let face = make_face(
            &mut store,
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)],
        );
        let result = Extrude::new(face, Vector3::x()).execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn face_with_holes_returns_error() {
        let mut store = TopologyStore::new();
        let outer = vec![
            p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0),
            p(10.0, 10.0, 0.0), p(0.0, 10.0, 0.0),
        ];
        let inner = vec![
            p(2.0, 2.0, 0.0), p(8.0, 2.0, 0.0),
            p(8.0, 8.0, 0.0), p(2.0, 8.0, 0.0),
        ];
        let outer_wire = MakeWire::new(outer, true).execute(&mut store).unwrap();
        let inner_wire = MakeWire::new(inner, true).execute(&mut store).unwrap();
        let face = MakeFace::new(outer_wire, vec![inner_wire])
            .execute(&mut store)
            .unwrap();

        let result = Extrude::new(face, Vector3::new(0.0, 0.0, 1.0)).execute(&mut store);
        assert!(result.is_err());
    }
}
