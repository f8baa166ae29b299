use tracing::debug;

use crate::error::Result;
use crate::operations::query::{ConvexEdges, FaceArea, Length};
use crate::topology::{EdgeId, FaceId, SolidId, TopologyStore};

/// Finds the largest planar face of a solid bounded only by convex edges.
///
/// Such a face is not recessed into the solid, so it is a stable reference
/// plane: roughly the face the part would rest on. Ties keep the first face
/// in shell order.
pub struct FindLargestPlanarConvexFace {
    solid: SolidId,
}

impl FindLargestPlanarConvexFace {
    /// Creates a new `FindLargestPlanarConvexFace` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning `None` when no face qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing or a face cannot be measured.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<FaceId>> {
        let convex = ConvexEdges::new(self.solid).execute(store)?;

        let mut best: Option<(FaceId, f64)> = None;
        for face_id in store.solid_faces(self.solid)? {
            if !store.face(face_id)?.surface.is_planar() {
                continue;
            }
            let outer = store.face_outer_edges(face_id)?;
            if !outer.iter().all(|e| convex.contains(e)) {
                continue;
            }
            let area = FaceArea::new(face_id).execute(store)?;
            if best.is_none_or(|(_, a)| area > a) {
                best = Some((face_id, area));
            }
        }

        if let Some((face, area)) = best {
            debug!(?face, area, "reference face");
        }
        Ok(best.map(|(face, _)| face))
    }
}

/// Finds the edge of a face that best indicates its in-plane direction.
///
/// The longest straight edge wins. Without straight edges the longest
/// orientable curved edge is used. Both outer and inner wires are scanned.
pub struct FindLongestOrientableEdge {
    face: FaceId,
}

impl FindLongestOrientableEdge {
    /// Creates a new `FindLongestOrientableEdge` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning `None` when no edge is orientable.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its edges is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<EdgeId>> {
        let mut linear: Option<(EdgeId, f64)> = None;
        let mut curved: Option<(EdgeId, f64)> = None;

        for oe in store.face_edges(self.face)? {
            let curve_type = store.edge(oe.edge)?.curve_type();
            if !curve_type.is_orientable() {
                continue;
            }
            let length = Length::new(oe.edge).execute(store)?;
            let slot = if curve_type.is_linear() {
                &mut linear
            } else {
                &mut curved
            };
            if slot.is_none_or(|(_, l)| length > l) {
                *slot = Some((oe.edge, length));
            }
        }

        Ok(linear.or(curved).map(|(edge, _)| edge))
    }
}
