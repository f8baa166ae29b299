use tracing::trace;

use crate::error::{Result, TopologyError};
use crate::math::{construct_perpendicular, Vector3, TOLERANCE};
use crate::topology::{CurveType, EdgeCurve, EdgeData, EdgeId, TopologyStore};

/// Estimates a unit vector along the "long axis" of an edge.
///
/// Open curves use the start-to-end chord, which for arcs is an
/// approximation of their direction. A full circle has no preferred
/// direction and yields a fixed perpendicular of its normal. A full ellipse
/// yields its major axis. Curves without a rule return `None`.
pub struct EdgeOrientation {
    edge: EdgeId,
}

impl EdgeOrientation {
    /// Creates a new `EdgeOrientation` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its vertices are missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<Option<Vector3>> {
        let edge = store.edge(self.edge)?;
        let direction = match edge.curve_type() {
            CurveType::Line
            | CurveType::InfiniteLine
            | CurveType::Arc
            | CurveType::EllipticalArc => chord_direction(store, edge)?,
            CurveType::Circle | CurveType::Ellipse => closed_conic_direction(&edge.curve)?,
            CurveType::Other => {
                trace!(edge = ?self.edge, "edge is not orientable");
                return Ok(None);
            }
        };
        Ok(Some(direction))
    }
}

/// Normalized start-to-end vector. When the ends meet, conics fall back to
/// a perpendicular of their plane normal and straight curves to their
/// direction.
fn chord_direction(store: &TopologyStore, edge: &EdgeData) -> Result<Vector3> {
    let start = store.vertex(edge.start)?.point;
    let end = store.vertex(edge.end)?.point;
    let chord = end - start;
    let len = chord.norm();
    if len >= TOLERANCE {
        return Ok(chord / len);
    }
    match &edge.curve {
        EdgeCurve::Arc(circle) | EdgeCurve::Circle(circle) => {
            construct_perpendicular(circle.normal())
        }
        EdgeCurve::Ellipse(ellipse) => construct_perpendicular(ellipse.normal()),
        EdgeCurve::Line(_) | EdgeCurve::InfiniteLine(_) | EdgeCurve::Freeform(_) => {
            edge.curve.tangent_at(edge.t_start)
        }
    }
}

fn closed_conic_direction(curve: &EdgeCurve) -> Result<Vector3> {
    match curve {
        EdgeCurve::Circle(circle) => construct_perpendicular(circle.normal()),
        EdgeCurve::Ellipse(ellipse) => Ok(*ellipse.major_dir()),
        EdgeCurve::Line(_)
        | EdgeCurve::InfiniteLine(_)
        | EdgeCurve::Arc(_)
        | EdgeCurve::Freeform(_) => Err(TopologyError::InvalidTopology(
            "closed conic orientation requested for an open curve".into(),
        )
        .into()),
    }
}
