//! Grouping of bodies into a deduplicated cut list.
//!
//! [`CutList::add`] walks a selection depth first. Every solid body it
//! reaches is measured, either in its canonical orientation or as placed
//! in the assembly, and folded into the first item with matching
//! dimensions (and material, depending on [`GroupBy`]).

mod dimensions;
mod item;
mod options;

pub use dimensions::Dimensions;
pub use item::CutListItem;
pub use options::{CutListOptions, GroupBy};

use tracing::{debug, trace};

use crate::assembly::{BodyId, ComponentId, Design, Entity, OccurrenceId};
use crate::error::{AssemblyError, Result};
use crate::math::Isometry3;
use crate::orientation::{CanonicalBoundingBox, PlacedBoundingBox};
use crate::topology::TopologyStore;

/// World placement and effective visibility accumulated during traversal.
#[derive(Debug, Clone, Copy)]
struct Placement {
    transform: Isometry3,
    visible: bool,
}

impl Placement {
    fn root() -> Self {
        Self {
            transform: Isometry3::identity(),
            visible: true,
        }
    }
}

/// An ordered collection of cut list items.
#[derive(Debug, Clone)]
pub struct CutList {
    options: CutListOptions,
    items: Vec<CutListItem>,
}

impl CutList {
    /// Creates an empty cut list.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: CutListOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            items: Vec::new(),
        })
    }

    /// Returns the options this list was created with.
    #[must_use]
    pub fn options(&self) -> &CutListOptions {
        &self.options
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CutListItem] {
        &self.items
    }

    /// Returns the total number of instances over all items.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.items.iter().map(CutListItem::count).sum()
    }

    /// Adds a selected entity and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::UnsupportedEntityKind`] for [`Entity::Other`],
    /// or any error raised while measuring a body. The list may hold a
    /// partial result afterwards.
    pub fn add(&mut self, design: &Design, store: &TopologyStore, entity: &Entity) -> Result<()> {
        self.add_with_prefix(design, store, entity, "")
    }

    /// Like [`add`](Self::add), prepending `name_prefix` to every instance name.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_with_prefix(
        &mut self,
        design: &Design,
        store: &TopologyStore,
        entity: &Entity,
        name_prefix: &str,
    ) -> Result<()> {
        let root = Placement::root();
        match entity {
            Entity::Body(id) => {
                let name = self.join_name(&[name_prefix, design.body(*id)?.name.as_str()]);
                self.add_body(design, store, *id, name, &root)
            }
            Entity::Occurrence(id) => self.add_occurrence(design, store, *id, name_prefix, &root),
            Entity::Component(id) => {
                let component = design.component(*id)?;
                let path = self.join_name(&[name_prefix, component.name.as_str()]);
                self.add_contents(design, store, *id, &path, &root)
            }
            Entity::Other { object_type } => {
                Err(AssemblyError::UnsupportedEntityKind(object_type.clone()).into())
            }
        }
    }

    /// Returns the items ordered by material name (unassigned first), then
    /// descending count, then descending length, width and height.
    ///
    /// The sort is stable, so items that compare equal keep insertion order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&CutListItem> {
        let mut items: Vec<&CutListItem> = self.items.iter().collect();
        items.sort_by(|a, b| {
            let (da, db) = (a.dimensions(), b.dimensions());
            a.material_name()
                .cmp(&b.material_name())
                .then_with(|| b.count().cmp(&a.count()))
                .then_with(|| db.length.total_cmp(&da.length))
                .then_with(|| db.width.total_cmp(&da.width))
                .then_with(|| db.height.total_cmp(&da.height))
        });
        items
    }

    fn add_occurrence(
        &mut self,
        design: &Design,
        store: &TopologyStore,
        id: OccurrenceId,
        prefix: &str,
        parent: &Placement,
    ) -> Result<()> {
        let occurrence = design.occurrence(id)?;
        if occurrence.referenced && self.options.ignore_external {
            trace!(occurrence = %occurrence.name, "skipping external occurrence");
            return Ok(());
        }

        let placement = Placement {
            transform: parent.transform * occurrence.transform,
            visible: parent.visible && occurrence.visible,
        };
        let component = design.component(occurrence.component)?;
        let path = self.join_name(&[prefix, component.name.as_str()]);
        self.add_contents(design, store, occurrence.component, &path, &placement)
    }

    /// Adds the bodies and child occurrences of a component found at `path`.
    fn add_contents(
        &mut self,
        design: &Design,
        store: &TopologyStore,
        id: ComponentId,
        path: &str,
        placement: &Placement,
    ) -> Result<()> {
        let component = design.component(id)?;
        for &body in &component.bodies {
            let name = self.join_name(&[path, design.body(body)?.name.as_str()]);
            self.add_body(design, store, body, name, placement)?;
        }
        for &child in &component.occurrences {
            self.add_occurrence(design, store, child, path, placement)?;
        }
        Ok(())
    }

    fn add_body(
        &mut self,
        design: &Design,
        store: &TopologyStore,
        id: BodyId,
        name: String,
        placement: &Placement,
    ) -> Result<()> {
        let body = design.body(id)?;
        if !store.is_closed_solid(body.solid)? {
            trace!(%name, "skipping non-solid body");
            return Ok(());
        }
        if self.options.ignore_hidden && !(placement.visible && body.visible) {
            trace!(%name, "skipping hidden body");
            return Ok(());
        }

        let aabb = if self.options.axis_aligned {
            PlacedBoundingBox::new(body.solid, placement.transform).execute(store)?
        } else {
            CanonicalBoundingBox::new(body.solid).execute(store)?
        };
        let dimensions = Dimensions::from_aabb(&aabb);
        let material = body.material.as_ref();

        let (tolerance, group_by) = (self.options.tolerance, self.options.group_by);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&dimensions, material, tolerance, group_by))
        {
            trace!(%name, count = item.count() + 1, "folded into existing item");
            item.push_name(name);
        } else {
            debug!(
                %name,
                length = dimensions.length,
                width = dimensions.width,
                height = dimensions.height,
                "new cut list item"
            );
            self.items
                .push(CutListItem::new(dimensions, body.material.clone(), name));
        }
        Ok(())
    }

    /// Joins path segments with the separator, skipping empty ones.
    fn join_name(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .copied()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(&self.options.name_separator)
    }
}
