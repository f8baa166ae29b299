use std::collections::HashMap;

use crate::error::Result;
use crate::topology::{EdgeId, SolidId, TopologyStore, VertexId, WireId};

/// Validates the topological consistency of a solid.
///
/// Checks that every wire is closed and chains end to start, and that a
/// shell flagged closed uses each edge exactly once in each direction.
pub struct IsValid {
    solid: SolidId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    /// Missing entities make the solid invalid.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        self.check(store).unwrap_or(false)
    }

    fn check(&self, store: &TopologyStore) -> Result<bool> {
        let solid = store.solid(self.solid)?;
        for &shell_id in std::iter::once(&solid.outer_shell).chain(&solid.inner_shells) {
            let shell = store.shell(shell_id)?;
            let mut uses: HashMap<EdgeId, (usize, usize)> = HashMap::new();
            for &face_id in &shell.faces {
                let face = store.face(face_id)?;
                for &wire in std::iter::once(&face.outer_wire).chain(&face.inner_wires) {
                    if !wire_is_chained(store, wire)? {
                        return Ok(false);
                    }
                    for oe in &store.wire(wire)?.edges {
                        let count = uses.entry(oe.edge).or_default();
                        if oe.forward {
                            count.0 += 1;
                        } else {
                            count.1 += 1;
                        }
                    }
                }
            }
            if shell.is_closed && uses.values().any(|&c| c != (1, 1)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn wire_is_chained(store: &TopologyStore, wire_id: WireId) -> Result<bool> {
    let wire = store.wire(wire_id)?;
    if !wire.is_closed || wire.edges.is_empty() {
        return Ok(false);
    }
    let mut ends: Vec<(VertexId, VertexId)> = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = store.edge(oe.edge)?;
        ends.push(if oe.forward {
            (edge.start, edge.end)
        } else {
            (edge.end, edge.start)
        });
    }
    let n = ends.len();
    Ok((0..n).all(|i| ends[i].1 == ends[(i + 1) % n].0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder, MakePolyhedron};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn primitives_are_valid() {
        let mut store = TopologyStore::new();
        let cube = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let cylinder = MakeCylinder::new(p(0.0, 0.0, 0.0), 1.0, Vector3::x(), 2.0)
            .execute(&mut store)
            .unwrap();
        assert!(IsValid::new(cube).execute(&store));
        assert!(IsValid::new(cylinder).execute(&store));
    }

    #[test]
    fn open_polyhedron_is_valid_but_not_closed() {
        let mut store = TopologyStore::new();
        let solid = MakePolyhedron::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)],
            vec![vec![0, 2, 1], vec![0, 1, 3]],
        )
        .execute(&mut store)
        .unwrap();
        assert!(IsValid::new(solid).execute(&store));
        assert!(!store.is_closed_solid(solid).unwrap());
    }

    #[test]
    fn missing_solid_is_invalid() {
        let mut other = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut other)
            .unwrap();
        assert!(!IsValid::new(solid).execute(&TopologyStore::new()));
    }
}
