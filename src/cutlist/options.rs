use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::Dimensions;

/// How bodies are grouped into items. Dimensions always take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Bodies match on dimensions alone; the item keeps the first body's material.
    Dimensions,
    /// Bodies must also share a material.
    #[default]
    DimensionsAndMaterial,
}

/// Settings consumed while collecting a cut list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutListOptions {
    /// Per-component tolerance for matching dimensions, in internal units.
    pub tolerance: f64,
    pub group_by: GroupBy,
    /// Skip bodies that are hidden themselves or through a hidden occurrence.
    pub ignore_hidden: bool,
    /// Skip occurrences of components defined in other documents.
    pub ignore_external: bool,
    /// Measure bodies as placed instead of in their canonical orientation.
    pub axis_aligned: bool,
    /// Separator between path segments of instance names.
    pub name_separator: String,
}

impl Default for CutListOptions {
    fn default() -> Self {
        Self {
            tolerance: Dimensions::DEFAULT_TOLERANCE,
            group_by: GroupBy::default(),
            ignore_hidden: true,
            ignore_external: false,
            axis_aligned: false,
            name_separator: "/".into(),
        }
    }
}

impl CutListOptions {
    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] unless the tolerance is a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTolerance(self.tolerance))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CutListOptions::default();
        assert!(options.ignore_hidden);
        assert!(!options.ignore_external);
        assert!(!options.axis_aligned);
        assert_eq!(options.group_by, GroupBy::DimensionsAndMaterial);
        assert_eq!(options.name_separator, "/");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        for tolerance in [0.0, -1.0, f64::NAN] {
            let options = CutListOptions {
                tolerance,
                ..CutListOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(ConfigError::InvalidTolerance(_))
            ));
        }
    }
}
