use std::collections::HashMap;

use crate::error::Result;
use crate::topology::{
    EdgeData, EdgeId, FaceData, OrientedEdge, ShellData, ShellId, SolidData, SolidId,
    TopologyStore, VertexId, WireData, WireId,
};

/// Copies a solid from one store into another.
///
/// Shared vertices and edges stay shared in the copy, so adjacency queries
/// on the copy see the same structure as on the source.
pub struct CopySolid {
    solid: SolidId,
}

/// Old-to-new id tables built while copying.
#[derive(Default)]
struct IdMap {
    vertices: HashMap<VertexId, VertexId>,
    edges: HashMap<EdgeId, EdgeId>,
    wires: HashMap<WireId, WireId>,
}

impl CopySolid {
    /// Creates a new `CopySolid` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the copy and returns the id of the new solid in `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if any entity of the source solid is missing.
    pub fn execute(&self, source: &TopologyStore, target: &mut TopologyStore) -> Result<SolidId> {
        let solid = source.solid(self.solid)?;
        let mut map = IdMap::default();

        let outer_shell = copy_shell(source, target, &mut map, solid.outer_shell)?;
        let mut inner_shells = Vec::with_capacity(solid.inner_shells.len());
        for &shell in &solid.inner_shells {
            inner_shells.push(copy_shell(source, target, &mut map, shell)?);
        }

        Ok(target.add_solid(SolidData {
            outer_shell,
            inner_shells,
        }))
    }
}

fn copy_shell(
    source: &TopologyStore,
    target: &mut TopologyStore,
    map: &mut IdMap,
    id: ShellId,
) -> Result<ShellId> {
    let shell = source.shell(id)?;
    let mut faces = Vec::with_capacity(shell.faces.len());
    for &face_id in &shell.faces {
        let face = source.face(face_id)?;
        let outer_wire = copy_wire(source, target, map, face.outer_wire)?;
        let mut inner_wires = Vec::with_capacity(face.inner_wires.len());
        for &wire in &face.inner_wires {
            inner_wires.push(copy_wire(source, target, map, wire)?);
        }
        faces.push(target.add_face(FaceData {
            surface: face.surface.clone(),
            outer_wire,
            inner_wires,
            same_sense: face.same_sense,
        }));
    }
    Ok(target.add_shell(ShellData::new(faces, shell.is_closed)))
}

fn copy_wire(
    source: &TopologyStore,
    target: &mut TopologyStore,
    map: &mut IdMap,
    id: WireId,
) -> Result<WireId> {
    if let Some(&copied) = map.wires.get(&id) {
        return Ok(copied);
    }
    let wire = source.wire(id)?;
    let mut edges = Vec::with_capacity(wire.edges.len());
    for oe in &wire.edges {
        let edge = copy_edge(source, target, map, oe.edge)?;
        edges.push(OrientedEdge::new(edge, oe.forward));
    }
    let copied = target.add_wire(WireData {
        edges,
        is_closed: wire.is_closed,
    });
    map.wires.insert(id, copied);
    Ok(copied)
}

fn copy_edge(
    source: &TopologyStore,
    target: &mut TopologyStore,
    map: &mut IdMap,
    id: EdgeId,
) -> Result<EdgeId> {
    if let Some(&copied) = map.edges.get(&id) {
        return Ok(copied);
    }
    let edge = source.edge(id)?;
    let start = copy_vertex(source, target, map, edge.start)?;
    let end = copy_vertex(source, target, map, edge.end)?;
    let copied = target.add_edge(EdgeData {
        start,
        end,
        curve: edge.curve.clone(),
        t_start: edge.t_start,
        t_end: edge.t_end,
    });
    map.edges.insert(id, copied);
    Ok(copied)
}

fn copy_vertex(
    source: &TopologyStore,
    target: &mut TopologyStore,
    map: &mut IdMap,
    id: VertexId,
) -> Result<VertexId> {
    if let Some(&copied) = map.vertices.get(&id) {
        return Ok(copied);
    }
    let copied = target.add_vertex(source.vertex(id)?.clone());
    map.vertices.insert(id, copied);
    Ok(copied)
}
