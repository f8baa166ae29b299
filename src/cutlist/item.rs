use crate::assembly::Material;

use super::{Dimensions, GroupBy};

/// One line of a cut list: identical parts and the names of their instances.
#[derive(Debug, Clone, PartialEq)]
pub struct CutListItem {
    dimensions: Dimensions,
    material: Option<Material>,
    names: Vec<String>,
}

impl CutListItem {
    /// Creates an item holding a single instance.
    #[must_use]
    pub fn new(dimensions: Dimensions, material: Option<Material>, name: String) -> Self {
        Self {
            dimensions,
            material,
            names: vec![name],
        }
    }

    /// Returns the dimensions of the first instance.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the material of the first instance.
    #[must_use]
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Returns the material name, if any.
    #[must_use]
    pub fn material_name(&self) -> Option<&str> {
        self.material.as_ref().map(|m| m.name.as_str())
    }

    /// Returns instance names in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub(super) fn matches(
        &self,
        dimensions: &Dimensions,
        material: Option<&Material>,
        tolerance: f64,
        group_by: GroupBy,
    ) -> bool {
        self.dimensions.approx_eq(dimensions, tolerance)
            && match group_by {
                GroupBy::Dimensions => true,
                GroupBy::DimensionsAndMaterial => self.material.as_ref() == material,
            }
    }

    pub(crate) fn push_name(&mut self, name: String) {
        self.names.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(material: &str) -> CutListItem {
        CutListItem::new(
            Dimensions::new(10.0, 5.0, 2.0),
            Some(Material::new(material)),
            "Body1".into(),
        )
    }

    #[test]
    fn new_item_has_one_instance() {
        let item = item("Wood");
        assert_eq!(item.count(), 1);
        assert_eq!(item.names(), ["Body1"]);
        assert_eq!(item.material_name(), Some("Wood"));
    }

    #[test]
    fn material_only_matters_when_grouped_by_it() {
        let item = item("Wood");
        let dims = Dimensions::new(2.0, 5.0, 10.0);
        let steel = Material::new("Steel");
        assert!(!item.matches(&dims, Some(&steel), 1e-4, GroupBy::DimensionsAndMaterial));
        assert!(item.matches(&dims, Some(&steel), 1e-4, GroupBy::Dimensions));
        assert!(!item.matches(&dims, None, 1e-4, GroupBy::DimensionsAndMaterial));
    }

    #[test]
    fn dimensions_must_match() {
        let item = item("Wood");
        let dims = Dimensions::new(10.0, 5.0, 3.0);
        assert!(!item.matches(&dims, item.material(), 1e-4, GroupBy::Dimensions));
    }
}
