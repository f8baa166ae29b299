use serde::Serialize;
use serde_json::Value;

use crate::cutlist::CutListItem;
use crate::error::{FormatError, Result};

use super::UnitFormatter;

#[derive(Serialize)]
struct JsonDimensions {
    units: &'static str,
    length: Value,
    width: Value,
    height: Value,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    count: usize,
    dimensions: JsonDimensions,
    material: Option<&'a str>,
    names: &'a [String],
}

/// Whole numbers are written without a fractional part.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

pub(super) fn format(items: &[&CutListItem], units: &UnitFormatter) -> Result<String> {
    let rows: Vec<JsonItem<'_>> = items
        .iter()
        .map(|item| {
            let d = item.dimensions();
            JsonItem {
                count: item.count(),
                dimensions: JsonDimensions {
                    units: units.symbol(),
                    length: number(units.round(d.length)),
                    width: number(units.round(d.width)),
                    height: number(units.round(d.height)),
                },
                material: item.material_name(),
                names: item.names(),
            }
        })
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|e| FormatError::from(e).into())
}
