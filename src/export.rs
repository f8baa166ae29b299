//! Single-shot export: collect, sort and render a cut list.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembly::{Design, Entity};
use crate::cutlist::{CutList, CutListOptions};
use crate::error::{ConfigError, Result};
use crate::format::{Format, LengthUnit, UnitFormatter};
use crate::topology::TopologyStore;

/// Everything an export needs besides the selection.
///
/// The host persists these between runs, typically through
/// [`to_toml_string`](Self::to_toml_string) and
/// [`from_toml_str`](Self::from_toml_str). Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: Format,
    /// Unit the design is modeled in.
    pub internal_unit: LengthUnit,
    /// Unit lengths are written in.
    pub display_unit: LengthUnit,
    /// Decimal places of written lengths.
    pub precision: u8,
    pub cutlist: CutListOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        let units = UnitFormatter::default();
        Self {
            format: Format::default(),
            internal_unit: units.internal,
            display_unit: units.display,
            precision: units.precision,
            cutlist: CutListOptions::default(),
        }
    }
}

impl ExportOptions {
    /// Parses and validates options from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for these options or
    /// the tolerance is not positive.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let options: Self = toml::from_str(s)?;
        options.cutlist.validate()?;
        Ok(options)
    }

    /// Serializes the options to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Returns the unit formatter described by these options.
    #[must_use]
    pub fn units(&self) -> UnitFormatter {
        UnitFormatter {
            internal: self.internal_unit,
            display: self.display_unit,
            precision: self.precision,
        }
    }
}

/// Builds a cut list from `selection` and renders it.
///
/// Nothing is returned unless every selected entity was added.
///
/// # Errors
///
/// Returns an error if an entity is unsupported or missing, a body cannot
/// be measured, or rendering fails.
pub fn export(
    design: &Design,
    store: &TopologyStore,
    selection: &[Entity],
    options: &ExportOptions,
    title: &str,
) -> Result<String> {
    let mut cutlist = CutList::new(options.cutlist.clone())?;
    for entity in selection {
        cutlist.add(design, store, entity)?;
    }

    let items = cutlist.sorted_items();
    let text = options.format.format(&items, &options.units(), title)?;
    info!(
        format = %options.format,
        items = items.len(),
        bodies = cutlist.instance_count(),
        "exported cut list"
    );
    Ok(text)
}
