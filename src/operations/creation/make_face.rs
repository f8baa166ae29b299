use crate::error::{OperationError, Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::math::polygon::{newell_normal, polygon_centroid};
use crate::math::TOLERANCE;
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore, WireId};

/// Creates a planar face from a closed wire boundary.
///
/// The plane normal follows the right-hand rule on the outer wire.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is open or the outer wire encloses no area.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for &wire in std::iter::once(&self.outer_wire).chain(&self.inner_wires) {
            if !store.wire(wire)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let polygon = TessellateWire::new(self.outer_wire, TessellationParams::default())
            .execute(store)?;
        let normal = newell_normal(&polygon);
        if normal.norm() < TOLERANCE {
            return Err(
                OperationError::Failed("degenerate polygon: cannot compute normal".into()).into(),
            );
        }
        let centroid = polygon_centroid(&polygon).ok_or_else(|| {
            OperationError::Failed("face boundary has no points".into())
        })?;

        let plane = Plane::from_normal(centroid, normal)?;
        Ok(store.add_face(FaceData {
            surface: FaceSurface::Plane(plane),
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeWire;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn counter_clockwise_square_faces_up() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let FaceSurface::Plane(plane) = &store.face(face).unwrap().surface else {
            panic!("expected a plane");
        };
        assert!((plane.plane_normal() - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn open_wire_fails() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }

    #[test]
    fn collinear_wire_fails() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)], true)
            .execute(&mut store)
            .unwrap();
        assert!(MakeFace::new(wire, vec![]).execute(&mut store).is_err());
    }
}
