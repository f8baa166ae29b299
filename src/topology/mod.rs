pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{CurveType, EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use std::collections::HashSet;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// The store plays the part of the host geometry system: it answers face
/// and edge enumeration queries and hands out stable ids.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Wire operations ---

    /// Inserts a wire and returns its ID.
    pub fn add_wire(&mut self, data: WireData) -> WireId {
        self.wires.insert(data)
    }

    /// Returns a reference to the wire data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wire(&self, id: WireId) -> Result<&WireData, TopologyError> {
        self.wires
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wire".into()))
    }


    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Shell operations ---

    /// Inserts a shell and returns its ID.
    pub fn add_shell(&mut self, data: ShellData) -> ShellId {
        self.shells.insert(data)
    }

    /// Returns a reference to the shell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn shell(&self, id: ShellId) -> Result<&ShellData, TopologyError> {
        self.shells
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("shell".into()))
    }

    // --- Solid operations ---

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    // --- Traversal ---

    /// Returns the faces of a solid, outer shell first, then inner shells.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its shells is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let solid = self.solid(id)?;
        let mut faces = self.shell(solid.outer_shell)?.faces.clone();
        for &inner in &solid.inner_shells {
            faces.extend_from_slice(&self.shell(inner)?.faces);
        }
        Ok(faces)
    }

    /// Returns every oriented edge of a face, outer wire first.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its wires is missing.
    pub fn face_edges(&self, id: FaceId) -> Result<Vec<OrientedEdge>, TopologyError> {
        let face = self.face(id)?;
        let mut edges = self.wire(face.outer_wire)?.edges.clone();
        for &inner in &face.inner_wires {
            edges.extend_from_slice(&self.wire(inner)?.edges);
        }
        Ok(edges)
    }

    /// Returns the edges of the outer wire of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or its outer wire is missing.
    pub fn face_outer_edges(&self, id: FaceId) -> Result<Vec<EdgeId>, TopologyError> {
        let face = self.face(id)?;
        Ok(self
            .wire(face.outer_wire)?
            .edges
            .iter()
            .map(|oe| oe.edge)
            .collect())
    }

    /// Returns the unique edges of a solid in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if any entity of the solid is missing.
    pub fn solid_edges(&self, id: SolidId) -> Result<Vec<EdgeId>, TopologyError> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for face in self.solid_faces(id)? {
            for oe in self.face_edges(face)? {
                if seen.insert(oe.edge) {
                    edges.push(oe.edge);
                }
            }
        }
        Ok(edges)
    }

    /// Returns the unique vertices of a solid in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if any entity of the solid is missing.
    pub fn solid_vertices(&self, id: SolidId) -> Result<Vec<VertexId>, TopologyError> {
        let mut seen = HashSet::new();
        let mut vertices = Vec::new();
        for edge_id in self.solid_edges(id)? {
            let edge = self.edge(edge_id)?;
            for vid in [edge.start, edge.end] {
                if seen.insert(vid) {
                    vertices.push(vid);
                }
            }
        }
        Ok(vertices)
    }

    /// Returns `true` if the outer shell of the solid is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or its outer shell is missing.
    pub fn is_closed_solid(&self, id: SolidId) -> Result<bool, TopologyError> {
        let solid = self.solid(id)?;
        Ok(self.shell(solid.outer_shell)?.is_closed)
    }
}
