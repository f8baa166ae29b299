use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{OperationError, Result};
use crate::geometry::curve::Line;
use crate::geometry::surface::Plane;
use crate::math::polygon::{newell_normal, polygon_centroid};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, FaceData, FaceSurface, OrientedEdge, ShellData, SolidId,
    TopologyStore, VertexData, VertexId, WireData,
};

use super::MakeSolid;

/// Creates a planar-faced solid from a vertex list and face index loops.
///
/// Each face loop lists vertex indices counter-clockwise when seen from
/// outside. Faces that meet along a pair of vertices share one edge, so
/// edge adjacency is available to later queries. The shell is marked closed
/// when every edge is used by exactly two loops in opposite directions.
pub struct MakePolyhedron {
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a loop has fewer than three vertices, references
    /// a vertex out of range, repeats an edge in the same direction, or is
    /// degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        self.validate()?;

        let vertex_ids: Vec<VertexId> = self
            .vertices
            .iter()
            .map(|&p| store.add_vertex(VertexData::new(p)))
            .collect();

        // (min, max) vertex index -> (edge, start index, forward uses, backward uses)
        let mut edges: HashMap<(usize, usize), (EdgeId, usize, usize, usize)> = HashMap::new();
        let mut face_ids = Vec::with_capacity(self.faces.len());

        for indices in &self.faces {
            let mut loop_edges = Vec::with_capacity(indices.len());
            for (k, &a) in indices.iter().enumerate() {
                let b = indices[(k + 1) % indices.len()];
                let key = (a.min(b), a.max(b));
                let entry = match edges.entry(key) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(slot) => {
                        let (line, length) = Line::through(self.vertices[a], self.vertices[b])?;
                        let edge = store.add_edge(EdgeData {
                            start: vertex_ids[a],
                            end: vertex_ids[b],
                            curve: EdgeCurve::Line(line),
                            t_start: 0.0,
                            t_end: length,
                        });
                        slot.insert((edge, a, 0, 0))
                    }
                };
                let forward = entry.1 == a;
                if forward {
                    entry.2 += 1;
                } else {
                    entry.3 += 1;
                }
                loop_edges.push(OrientedEdge::new(entry.0, forward));
            }

            let points: Vec<Point3> = indices.iter().map(|&i| self.vertices[i]).collect();
            let normal = newell_normal(&points);
            if normal.norm() < TOLERANCE {
                return Err(OperationError::InvalidInput(
                    "polyhedron face has no area".into(),
                )
                .into());
            }
            let centroid = polygon_centroid(&points)
                .ok_or_else(|| OperationError::InvalidInput("empty polyhedron face".into()))?;

            let wire = store.add_wire(WireData::closed(loop_edges));
            face_ids.push(store.add_face(FaceData {
                surface: FaceSurface::Plane(Plane::from_normal(centroid, normal)?),
                outer_wire: wire,
                inner_wires: Vec::new(),
                same_sense: true,
            }));
        }

        if edges.values().any(|&(_, _, fwd, back)| fwd > 1 || back > 1) {
            return Err(OperationError::InvalidInput(
                "polyhedron faces are inconsistently oriented".into(),
            )
            .into());
        }
        let is_closed = edges.values().all(|&(_, _, fwd, back)| fwd == 1 && back == 1);

        let shell = store.add_shell(ShellData::new(face_ids, is_closed));
        MakeSolid::new(shell, Vec::new()).execute(store)
    }

    fn validate(&self) -> Result<()> {
        for indices in &self.faces {
            if indices.len() < 3 {
                return Err(OperationError::InvalidInput(format!(
                    "face loop needs at least 3 vertices, got {}",
                    indices.len()
                ))
                .into());
            }
            if let Some(&bad) = indices.iter().find(|&&i| i >= self.vertices.len()) {
                return Err(OperationError::InvalidInput(format!(
                    "vertex index {bad} out of range for {} vertices",
                    self.vertices.len()
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tetrahedron() -> MakePolyhedron {
        MakePolyhedron::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)],
            vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
        )
    }

    #[test]
    fn tetrahedron_shares_edges() {
        let mut store = TopologyStore::new();
        let solid = tetrahedron().execute(&mut store).unwrap();
        assert_eq!(store.solid_faces(solid).unwrap().len(), 4);
        assert_eq!(store.solid_edges(solid).unwrap().len(), 6);
        assert_eq!(store.solid_vertices(solid).unwrap().len(), 4);
        assert!(store.is_closed_solid(solid).unwrap());
    }

    #[test]
    fn missing_face_leaves_shell_open() {
        let mut store = TopologyStore::new();
        let solid = MakePolyhedron::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)],
            vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3]],
        )
        .execute(&mut store)
        .unwrap();
        assert!(!store.is_closed_solid(solid).unwrap());
    }

    #[test]
    fn inconsistent_orientation_fails() {
        let mut store = TopologyStore::new();
        let result = MakePolyhedron::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)],
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
        )
        .execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn index_out_of_range_fails() {
        let mut store = TopologyStore::new();
        let result = MakePolyhedron::new(vec![p(0.0, 0.0, 0.0)], vec![vec![0, 1, 2]])
            .execute(&mut store);
        assert!(result.is_err());
    }
}
