use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    /// Every supported unit.
    pub const ALL: [Self; 5] = [
        Self::Millimeter,
        Self::Centimeter,
        Self::Meter,
        Self::Inch,
        Self::Foot,
    ];

    /// Returns the unit symbol, e.g. `"mm"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }

    /// Returns the length of one unit in millimeters.
    #[must_use]
    pub fn millimeters(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => 25.4,
            Self::Foot => 304.8,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::UnknownUnit(s.to_string()))
    }
}

/// Converts internal lengths to display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitFormatter {
    /// Unit the geometry is modeled in.
    pub internal: LengthUnit,
    /// Unit written to the output.
    pub display: LengthUnit,
    /// Number of decimal places.
    pub precision: u8,
}

impl Default for UnitFormatter {
    fn default() -> Self {
        Self {
            internal: LengthUnit::Millimeter,
            display: LengthUnit::Millimeter,
            precision: 2,
        }
    }
}

impl UnitFormatter {
    /// Converts an internal length to display units.
    #[must_use]
    pub fn convert(&self, value: f64) -> f64 {
        value * self.internal.millimeters() / self.display.millimeters()
    }

    /// Converts and rounds to the configured precision.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(i32::from(self.precision));
        (self.convert(value) * scale).round() / scale
    }

    /// Converts and formats with exactly `precision` decimals, without unit.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", usize::from(self.precision), self.convert(value))
    }

    /// Returns the display unit symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.display.symbol()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeter);
        assert_eq!(" IN ".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
        assert!(matches!(
            "furlong".parse::<LengthUnit>(),
            Err(FormatError::UnknownUnit(_))
        ));
    }

    #[test]
    fn conversion() {
        let units = UnitFormatter {
            internal: LengthUnit::Centimeter,
            display: LengthUnit::Inch,
            precision: 3,
        };
        assert!((units.convert(2.54) - 1.0).abs() < 1e-12);
        assert_eq!(units.format(2.54), "1.000");
        assert!((units.round(10.0) - 3.937).abs() < 1e-12);
    }

    #[test]
    fn zero_precision() {
        let units = UnitFormatter {
            precision: 0,
            ..UnitFormatter::default()
        };
        assert_eq!(units.format(9.6), "10");
        assert!((units.round(9.4) - 9.0).abs() < 1e-12);
    }
}
