//! The assembly tree a cut list is collected from.

mod entity;

pub use entity::{
    BodyData, BodyId, ComponentData, ComponentId, Entity, Material, OccurrenceData,
    OccurrenceId,
};

use slotmap::SlotMap;

use crate::error::AssemblyError;

/// Arena of components, occurrences and bodies.
///
/// Geometry lives in a separate [`TopologyStore`](crate::topology::TopologyStore);
/// bodies refer to it by [`SolidId`](crate::topology::SolidId).
#[derive(Debug, Default)]
pub struct Design {
    components: SlotMap<ComponentId, ComponentData>,
    occurrences: SlotMap<OccurrenceId, OccurrenceData>,
    bodies: SlotMap<BodyId, BodyData>,
}

impl Design {
    /// Creates a new, empty design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty component definition and returns its ID.
    pub fn add_component(&mut self, name: impl Into<String>) -> ComponentId {
        self.components.insert(ComponentData {
            name: name.into(),
            ..ComponentData::default()
        })
    }

    /// Adds a body to a component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component does not exist.
    pub fn add_body(
        &mut self,
        component: ComponentId,
        body: BodyData,
    ) -> Result<BodyId, AssemblyError> {
        if !self.components.contains_key(component) {
            return Err(AssemblyError::EntityNotFound("component".into()));
        }
        let id = self.bodies.insert(body);
        self.component_mut(component)?.bodies.push(id);
        Ok(id)
    }

    /// Places an occurrence inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent or the instantiated component does
    /// not exist.
    pub fn add_occurrence(
        &mut self,
        parent: ComponentId,
        occurrence: OccurrenceData,
    ) -> Result<OccurrenceId, AssemblyError> {
        if !self.components.contains_key(parent)
            || !self.components.contains_key(occurrence.component)
        {
            return Err(AssemblyError::EntityNotFound("component".into()));
        }
        let id = self.occurrences.insert(occurrence);
        self.component_mut(parent)?.occurrences.push(id);
        Ok(id)
    }

    /// Returns a reference to the component data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found.
    pub fn component(&self, id: ComponentId) -> Result<&ComponentData, AssemblyError> {
        self.components
            .get(id)
            .ok_or_else(|| AssemblyError::EntityNotFound("component".into()))
    }

    fn component_mut(&mut self, id: ComponentId) -> Result<&mut ComponentData, AssemblyError> {
        self.components
            .get_mut(id)
            .ok_or_else(|| AssemblyError::EntityNotFound("component".into()))
    }

    /// Returns a reference to the occurrence data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found.
    pub fn occurrence(&self, id: OccurrenceId) -> Result<&OccurrenceData, AssemblyError> {
        self.occurrences
            .get(id)
            .ok_or_else(|| AssemblyError::EntityNotFound("occurrence".into()))
    }

    /// Returns a reference to the body data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found.
    pub fn body(&self, id: BodyId) -> Result<&BodyData, AssemblyError> {
        self.bodies
            .get(id)
            .ok_or_else(|| AssemblyError::EntityNotFound("body".into()))
    }

    /// Returns a mutable reference to the body data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found.
    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut BodyData, AssemblyError> {
        self.bodies
            .get_mut(id)
            .ok_or_else(|| AssemblyError::EntityNotFound("body".into()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::topology::TopologyStore;

    #[test]
    fn building_a_tree() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let mut design = Design::new();
        let root = design.add_component("Root");
        let leg = design.add_component("Leg");
        let body = design
            .add_body(leg, BodyData::new("Body1", solid).with_material(Material::new("Oak")))
            .unwrap();
        let occ = design
            .add_occurrence(root, OccurrenceData::new("Leg:1", leg))
            .unwrap();

        assert_eq!(design.component(leg).unwrap().bodies, vec![body]);
        assert_eq!(design.component(root).unwrap().occurrences, vec![occ]);
        assert_eq!(design.occurrence(occ).unwrap().component, leg);
        assert_eq!(
            design.body(body).unwrap().material.as_ref().unwrap().name,
            "Oak"
        );
        assert_eq!(Entity::from(body), Entity::Body(body));
    }

    #[test]
    fn unknown_ids_fail() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();

        let mut design = Design::new();
        let c = design.add_component("A");
        design.add_body(c, BodyData::new("b", solid)).unwrap();

        let mut other = Design::new();
        let oc = other.add_component("A");
        other.add_body(oc, BodyData::new("b", solid)).unwrap();
        let foreign = other.add_body(oc, BodyData::new("c", solid)).unwrap();
        let foreign_component = other.add_component("B");

        assert!(design.body(foreign).is_err());
        assert!(design
            .add_occurrence(c, OccurrenceData::new("x", foreign_component))
            .is_err());
    }
}
