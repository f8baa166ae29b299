use crate::math::Isometry3;
use crate::topology::SolidId;

slotmap::new_key_type! {
    /// Unique identifier for a component definition in a [`Design`](super::Design).
    pub struct ComponentId;
}

slotmap::new_key_type! {
    /// Unique identifier for a placed component instance.
    pub struct OccurrenceId;
}

slotmap::new_key_type! {
    /// Unique identifier for a body.
    pub struct BodyId;
}

/// A named physical material.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Material {
    /// Display name, also the material's identity.
    pub name: String,
}

impl Material {
    /// Creates a material with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A body: one solid owned by a component.
#[derive(Debug, Clone)]
pub struct BodyData {
    /// Display name.
    pub name: String,
    /// The geometry, in the owning component's coordinates.
    pub solid: SolidId,
    /// Assigned material, if any.
    pub material: Option<Material>,
    /// The body's own visibility flag.
    pub visible: bool,
}

impl BodyData {
    /// Creates a visible body without material.
    #[must_use]
    pub fn new(name: impl Into<String>, solid: SolidId) -> Self {
        Self {
            name: name.into(),
            solid,
            material: None,
            visible: true,
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Sets the visibility flag.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// A component definition: bodies plus placed child components.
#[derive(Debug, Clone, Default)]
pub struct ComponentData {
    /// Display name.
    pub name: String,
    /// Bodies defined directly in this component.
    pub bodies: Vec<BodyId>,
    /// Child occurrences placed in this component.
    pub occurrences: Vec<OccurrenceId>,
}

/// A placed instance of a component.
#[derive(Debug, Clone)]
pub struct OccurrenceData {
    /// Display name of the instance.
    pub name: String,
    /// The instantiated component.
    pub component: ComponentId,
    /// Placement relative to the parent component.
    pub transform: Isometry3,
    /// Visibility; hiding an occurrence hides everything below it.
    pub visible: bool,
    /// `true` if the component is defined in another document.
    pub referenced: bool,
}

impl OccurrenceData {
    /// Creates a visible, local occurrence at the identity placement.
    #[must_use]
    pub fn new(name: impl Into<String>, component: ComponentId) -> Self {
        Self {
            name: name.into(),
            component,
            transform: Isometry3::identity(),
            visible: true,
            referenced: false,
        }
    }

    /// Sets the placement.
    #[must_use]
    pub fn with_transform(mut self, transform: Isometry3) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the visibility flag.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Marks the occurrence as referencing an external component.
    #[must_use]
    pub fn with_referenced(mut self, referenced: bool) -> Self {
        self.referenced = referenced;
        self
    }
}

/// Anything a user can select for export.
///
/// `Other` carries the host's type name of a selection that is none of the
/// supported kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Body(BodyId),
    Occurrence(OccurrenceId),
    Component(ComponentId),
    Other { object_type: String },
}

impl From<BodyId> for Entity {
    fn from(id: BodyId) -> Self {
        Self::Body(id)
    }
}

impl From<OccurrenceId> for Entity {
    fn from(id: OccurrenceId) -> Self {
        Self::Occurrence(id)
    }
}

impl From<ComponentId> for Entity {
    fn from(id: ComponentId) -> Self {
        Self::Component(id)
    }
}
