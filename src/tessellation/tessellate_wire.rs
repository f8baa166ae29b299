use crate::error::Result;
use crate::math::Point3;
use crate::topology::{TopologyStore, WireId};

use super::{TessellateCurve, TessellationParams};

/// Samples a closed wire into a polygon in traversal order.
///
/// Each oriented edge contributes its polyline without the final point,
/// which is the first point of the next edge.
pub struct TessellateWire {
    wire: WireId,
    params: TessellationParams,
}

impl TessellateWire {
    /// Creates a new `TessellateWire` operation.
    #[must_use]
    pub fn new(wire: WireId, params: TessellationParams) -> Self {
        Self { wire, params }
    }

    /// Executes the sampling, returning the polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or one of its edges is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<Point3>> {
        let wire = store.wire(self.wire)?;
        let mut polygon = Vec::new();
        for oe in &wire.edges {
            let mut points = TessellateCurve::new(oe.edge, self.params)
                .execute(store)?
                .points;
            if !oe.forward {
                points.reverse();
            }
            points.pop();
            polygon.extend(points);
        }
        Ok(polygon)
    }
}
