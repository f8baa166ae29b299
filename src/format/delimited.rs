use csv::{Terminator, WriterBuilder};

use crate::cutlist::CutListItem;
use crate::error::{FormatError, Result};

use super::UnitFormatter;

/// Column layouts sharing the csv writer.
#[derive(Debug, Clone, Copy)]
pub(super) enum Layout {
    Plain,
    Optimizer,
    Evo,
}

impl Layout {
    fn delimiter(self) -> u8 {
        match self {
            Self::Plain | Self::Optimizer => b',',
            Self::Evo => b'\t',
        }
    }

    fn header(self, units: &UnitFormatter) -> Vec<String> {
        match self {
            Self::Plain => {
                let u = units.symbol();
                vec![
                    "count".into(),
                    "material".into(),
                    format!("length ({u})"),
                    format!("width ({u})"),
                    format!("height ({u})"),
                    "names".into(),
                ]
            }
            Self::Optimizer => ["Length", "Width", "Qty", "Label", "Enabled"]
                .map(String::from)
                .to_vec(),
            Self::Evo => [
                "Length",
                "Width",
                "Thickness",
                "Quantity",
                "Rotation",
                "Name",
                "Material",
                "Banding",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    fn record(self, item: &CutListItem, units: &UnitFormatter) -> Vec<String> {
        let d = item.dimensions();
        let count = item.count();
        let names = item.names().join(",");
        let material = item.material_name().unwrap_or_default().to_string();
        match self {
            Self::Plain => vec![
                count.to_string(),
                material,
                units.format(d.length),
                units.format(d.width),
                units.format(d.height),
                names,
            ],
            Self::Optimizer => vec![
                units.format(d.length),
                units.format(d.width),
                count.to_string(),
                names,
                "true".into(),
            ],
            Self::Evo => vec![
                units.format(d.length),
                units.format(d.width),
                units.format(d.height),
                count.to_string(),
                vec!["L"; count].join(","),
                names,
                material,
                vec!["N"; count].join(","),
            ],
        }
    }
}

pub(super) fn format(
    items: &[&CutListItem],
    units: &UnitFormatter,
    layout: Layout,
) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(layout.delimiter())
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(layout.header(units))
        .map_err(FormatError::from)?;
    for item in items {
        writer
            .write_record(layout.record(item, units))
            .map_err(FormatError::from)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| FormatError::from(e).into())
}
