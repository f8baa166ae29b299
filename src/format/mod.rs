//! Text renderings of a sorted cut list.
//!
//! Every format is a pure function of the sorted items, a
//! [`UnitFormatter`] and a document title.

mod delimited;
mod html;
mod json;
mod table;
mod units;

pub use units::{LengthUnit, UnitFormatter};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cutlist::CutListItem;
use crate::error::{FormatError, Result};

use self::delimited::Layout;

/// A file type offered in a save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extension: &'static str,
}

impl fmt::Display for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (*.{})", self.name, self.extension)
    }
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Format {
    #[default]
    Table,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "HTML")]
    Html,
    /// Import CSV of cutlistoptimizer.com.
    #[serde(rename = "Cutlist Optimizer")]
    CutlistOptimizer,
    /// Tab separated import format of cutlistevo.com.
    #[serde(rename = "Cutlist Evo")]
    CutlistEvo,
}

impl Format {
    /// Every format, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Table,
        Self::Csv,
        Self::Json,
        Self::Html,
        Self::CutlistOptimizer,
        Self::CutlistEvo,
    ];

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::CutlistOptimizer => "Cutlist Optimizer",
            Self::CutlistEvo => "Cutlist Evo",
        }
    }

    #[must_use]
    pub fn file_filter(self) -> FileFilter {
        let (name, extension) = match self {
            Self::Table | Self::CutlistEvo => ("Text Files", "txt"),
            Self::Csv | Self::CutlistOptimizer => ("CSV Files", "csv"),
            Self::Json => ("JSON Files", "json"),
            Self::Html => ("HTML Files", "html"),
        };
        FileFilter { name, extension }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        self.file_filter().extension
    }

    /// Suggests a file name for a document: lower case, spaces replaced by
    /// underscores, with this format's extension.
    #[must_use]
    pub fn file_name(self, document_name: &str) -> String {
        let stem = document_name.to_lowercase().replace(' ', "_");
        format!("{stem}.{}", self.extension())
    }

    /// Renders sorted items.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format(
        self,
        items: &[&CutListItem],
        units: &UnitFormatter,
        title: &str,
    ) -> Result<String> {
        match self {
            Self::Table => Ok(table::format(items, units)),
            Self::Csv => delimited::format(items, units, Layout::Plain),
            Self::Json => json::format(items, units),
            Self::Html => Ok(html::format(items, units, title)),
            Self::CutlistOptimizer => delimited::format(items, units, Layout::Optimizer),
            Self::CutlistEvo => delimited::format(items, units, Layout::Evo),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::assembly::Material;
    use crate::cutlist::Dimensions;

    fn items() -> Vec<CutListItem> {
        let shelf = CutListItem::new(
            Dimensions::new(600.0, 300.0, 18.0),
            Some(Material::new("Oak")),
            "Shelf/Body1".into(),
        );
        let side = CutListItem::new(
            Dimensions::new(720.5, 300.0, 18.0),
            None,
            "Side <left>".into(),
        );
        vec![shelf, side]
    }

    fn render(format: Format) -> String {
        let items = items();
        let refs: Vec<&CutListItem> = items.iter().collect();
        format
            .format(&refs, &UnitFormatter::default(), "My Desk")
            .unwrap()
    }

    #[test]
    fn names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert!(matches!(
            "XML".parse::<Format>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn file_names() {
        assert_eq!(Format::Json.file_name("My Desk"), "my_desk.json");
        assert_eq!(Format::CutlistEvo.file_name("Desk"), "desk.txt");
        assert_eq!(Format::Csv.file_filter().to_string(), "CSV Files (*.csv)");
    }

    #[test]
    fn json_layout() {
        let value: serde_json::Value = serde_json::from_str(&render(Format::Json)).unwrap();
        let first = &value[0];
        assert_eq!(first["count"], 1);
        assert_eq!(first["material"], "Oak");
        assert_eq!(first["dimensions"]["units"], "mm");
        assert_eq!(first["dimensions"]["length"], 600);
        assert_eq!(first["dimensions"]["height"], 18);
        assert_eq!(first["names"][0], "Shelf/Body1");
        assert_eq!(value[1]["material"], serde_json::Value::Null);
        assert_eq!(value[1]["dimensions"]["length"], 720.5);
    }

    #[test]
    fn csv_layout() {
        let text = render(Format::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "count,material,length (mm),width (mm),height (mm),names"
        );
        assert_eq!(lines[1], "1,Oak,600.00,300.00,18.00,Shelf/Body1");
        assert_eq!(lines[2], "1,,720.50,300.00,18.00,Side <left>");
    }

    #[test]
    fn cutlist_optimizer_layout() {
        let text = render(Format::CutlistOptimizer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Length,Width,Qty,Label,Enabled");
        assert_eq!(lines[1], "600.00,300.00,1,Shelf/Body1,true");
    }

    #[test]
    fn cutlist_evo_repeats_per_instance() {
        let mut item = CutListItem::new(
            Dimensions::new(10.0, 5.0, 2.0),
            Some(Material::new("Wood")),
            "a".into(),
        );
        item.push_name("b".into());
        let refs = [&item];
        let text = Format::CutlistEvo
            .format(&refs, &UnitFormatter::default(), "")
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Length\tWidth\tThickness\tQuantity\tRotation\tName\tMaterial\tBanding"
        );
        assert_eq!(lines[1], "10.00\t5.00\t2.00\t2\tL,L\ta,b\tWood\tN,N");
    }

    #[test]
    fn table_layout() {
        let text = render(Format::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("count   material   length (mm)"));
        assert!(lines[1].chars().all(|c| c == '='));
        assert!(lines[2].contains("600.00") && lines[2].ends_with("Shelf/Body1"));
        assert!(lines[3].chars().all(|c| c == '-'));
    }

    #[test]
    fn html_is_escaped() {
        let text = render(Format::Html);
        assert!(text.contains("<title>My Desk Cutlist</title>"));
        assert!(text.contains("<th>Length (mm)</th>"));
        assert!(text.contains("Side &lt;left&gt;"));
        assert!(!text.contains("<left>"));
    }
}
