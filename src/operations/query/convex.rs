use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::Result;
use crate::math::ANGULAR_TOLERANCE;
use crate::topology::{EdgeId, FaceId, SolidId, TopologyStore};

use super::FaceNormal;

/// Collects the convex edges of a solid.
///
/// An edge shared by two face loops is convex when the faces meet at an
/// interior angle of at most 180 degrees. With outward normals `n1`, `n2`
/// taken at the edge midpoint and `t` the edge tangent in the first face's
/// traversal direction, that is `(n1 x n2) . t >= 0`. Tangent-continuous
/// edges (including cylinder seams) count as convex. Edges bounding a single
/// loop, or more than two, are never convex.
pub struct ConvexEdges {
    solid: SolidId,
}

impl ConvexEdges {
    /// Creates a new `ConvexEdges` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing or a normal cannot be
    /// evaluated.
    pub fn execute(&self, store: &TopologyStore) -> Result<HashSet<EdgeId>> {
        let mut uses: HashMap<EdgeId, Vec<(FaceId, bool)>> = HashMap::new();
        let mut order = Vec::new();
        for face in store.solid_faces(self.solid)? {
            for oe in store.face_edges(face)? {
                let entry = uses.entry(oe.edge).or_default();
                if entry.is_empty() {
                    order.push(oe.edge);
                }
                entry.push((face, oe.forward));
            }
        }

        let mut convex = HashSet::new();
        for edge_id in order {
            let &[(f1, forward), (f2, _)] = uses[&edge_id].as_slice() else {
                trace!(?edge_id, "edge is not shared by exactly two loops");
                continue;
            };
            let edge = store.edge(edge_id)?;
            let t_mid = 0.5 * (edge.t_start + edge.t_end);
            let point = edge.curve.point_at(t_mid)?;
            let mut tangent = edge.curve.tangent_at(t_mid)?;
            if !forward {
                tangent = -tangent;
            }
            let n1 = FaceNormal::new(f1, point).execute(store)?;
            let n2 = FaceNormal::new(f2, point).execute(store)?;
            if n1.cross(&n2).dot(&tangent) >= -ANGULAR_TOLERANCE {
                convex.insert(edge_id);
            }
        }
        Ok(convex)
    }
}
