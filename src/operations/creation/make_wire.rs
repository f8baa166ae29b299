use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::math::Point3;
use crate::topology::{
    EdgeCurve, EdgeData, OrientedEdge, TopologyStore, VertexData, WireData, WireId,
};

/// Creates a wire of line segments from a sequence of 3D points.
pub struct MakeWire {
    points: Vec<Point3>,
    close: bool,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given (three for a
    /// closed wire) or two consecutive points coincide.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "wire needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let vertices: Vec<_> = self
            .points
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        let segment_count = if self.close {
            vertices.len()
        } else {
            vertices.len() - 1
        };

        let mut edges = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let j = (i + 1) % vertices.len();
            let (line, length) = Line::through(self.points[i], self.points[j])?;
            let edge = store.add_edge(EdgeData {
                start: vertices[i],
                end: vertices[j],
                curve: EdgeCurve::Line(line),
                t_start: 0.0,
                t_end: length,
            });
            edges.push(OrientedEdge::new(edge, true));
        }

        Ok(store.add_wire(WireData {
            edges,
            is_closed: self.close,
        }))
    }
}
