use crate::error::Result;
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

use super::{Polyline, TessellationParams};

/// Tessellates a curve (edge) into a polyline running from the edge's start
/// vertex to its end vertex.
pub struct TessellateCurve {
    edge: EdgeId,
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(edge: EdgeId, params: TessellationParams) -> Self {
        Self { edge, params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// Straight edges produce their two end points. Conics are sampled with
    /// a segment count bounded by the chord error tolerance. Free-form
    /// curves return their sample points.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found or evaluation fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Polyline> {
        let edge = store.edge(self.edge)?;
        let sweep = edge.t_end - edge.t_start;

        let segments = match &edge.curve {
            EdgeCurve::Line(_) | EdgeCurve::InfiniteLine(_) => 1,
            EdgeCurve::Arc(circle) | EdgeCurve::Circle(circle) => {
                self.params.angular_segments(circle.radius(), sweep)
            }
            EdgeCurve::Ellipse(ellipse) => {
                self.params.angular_segments(ellipse.semi_major(), sweep)
            }
            EdgeCurve::Freeform(points) => {
                return Ok(Polyline {
                    points: points.clone(),
                });
            }
        };

        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            #[allow(clippy::cast_precision_loss)]
            let t = edge.t_start + sweep * (i as f64 / segments as f64);
            points.push(edge.curve.point_at(t)?);
        }
        Ok(Polyline { points })
    }
}
