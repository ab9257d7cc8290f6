//! Reinforcing Bar Catalogue
//!
//! Closed enumeration of the bar designations a designer may pick for
//! stirrups, ties and longitudinal steel. Each maps to a nominal diameter and
//! cross-sectional area in centimeters.
//!
//! ## Designations
//!
//! - Imperial-numbered bars: #3 (3/8"), #4 (1/2"), #5 (5/8"), #6 (3/4"), #8 (1")
//! - Metric bars: 6 mm, 8 mm, 12 mm

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Standard reinforcing bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum BarSize {
    /// 6 mm (Ø 0.60 cm, 0.28 cm²)
    #[serde(rename = "6mm")]
    Mm6,
    /// 8 mm (Ø 0.80 cm, 0.50 cm²)
    #[serde(rename = "8mm")]
    Mm8,
    /// #3 - 3/8" (Ø 0.95 cm, 0.71 cm²)
    #[default]
    #[serde(rename = "#3")]
    No3,
    /// 12 mm (Ø 1.20 cm, 1.13 cm²)
    #[serde(rename = "12mm")]
    Mm12,
    /// #4 - 1/2" (Ø 1.27 cm, 1.29 cm²)
    #[serde(rename = "#4")]
    No4,
    /// #5 - 5/8" (Ø 1.59 cm, 1.99 cm²)
    #[serde(rename = "#5")]
    No5,
    /// #6 - 3/4" (Ø 1.91 cm, 2.84 cm²)
    #[serde(rename = "#6")]
    No6,
    /// #8 - 1" (Ø 2.54 cm, 5.10 cm²)
    #[serde(rename = "#8")]
    No8,
}

impl BarSize {
    /// All bar sizes, smallest first
    pub const ALL: [BarSize; 8] = [
        BarSize::Mm6,
        BarSize::Mm8,
        BarSize::No3,
        BarSize::Mm12,
        BarSize::No4,
        BarSize::No5,
        BarSize::No6,
        BarSize::No8,
    ];

    /// Sizes commonly used as stirrups or ties
    pub const TRANSVERSE: [BarSize; 4] = [BarSize::Mm6, BarSize::Mm8, BarSize::No3, BarSize::No4];

    /// Nominal diameter in centimeters
    pub fn diameter_cm(&self) -> f64 {
        match self {
            BarSize::Mm6 => 0.60,
            BarSize::Mm8 => 0.80,
            BarSize::No3 => 0.95,
            BarSize::Mm12 => 1.20,
            BarSize::No4 => 1.27,
            BarSize::No5 => 1.59,
            BarSize::No6 => 1.91,
            BarSize::No8 => 2.54,
        }
    }

    /// Nominal cross-sectional area of one bar in cm²
    pub fn area_cm2(&self) -> f64 {
        match self {
            BarSize::Mm6 => 0.28,
            BarSize::Mm8 => 0.50,
            BarSize::No3 => 0.71,
            BarSize::Mm12 => 1.13,
            BarSize::No4 => 1.29,
            BarSize::No5 => 1.99,
            BarSize::No6 => 2.84,
            BarSize::No8 => 5.10,
        }
    }

    /// Display name (e.g., "#3", "12mm")
    pub fn display_name(&self) -> &'static str {
        match self {
            BarSize::Mm6 => "6mm",
            BarSize::Mm8 => "8mm",
            BarSize::No3 => "#3",
            BarSize::Mm12 => "12mm",
            BarSize::No4 => "#4",
            BarSize::No5 => "#5",
            BarSize::No6 => "#6",
            BarSize::No8 => "#8",
        }
    }
}

impl fmt::Display for BarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BarSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(' ', "");
        BarSize::ALL
            .iter()
            .copied()
            .find(|bar| bar.display_name() == key)
            .ok_or_else(|| CalcError::unsupported_code("bar size", s))
    }
}

impl TryFrom<String> for BarSize {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no3() {
        assert_eq!(BarSize::default(), BarSize::No3);
        assert_eq!(BarSize::default().area_cm2(), 0.71);
    }

    #[test]
    fn test_all_sorted_by_area() {
        for pair in BarSize::ALL.windows(2) {
            assert!(pair[0].area_cm2() < pair[1].area_cm2());
            assert!(pair[0].diameter_cm() < pair[1].diameter_cm());
        }
    }

    #[test]
    fn test_parse_display_names() {
        for bar in BarSize::ALL {
            let parsed: BarSize = bar.display_name().parse().unwrap();
            assert_eq!(parsed, bar);
        }
        assert_eq!("12 MM".parse::<BarSize>().unwrap(), BarSize::Mm12);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "#11".parse::<BarSize>().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CODE");
    }

    #[test]
    fn test_serialization_uses_display_name() {
        let json = serde_json::to_string(&BarSize::No6).unwrap();
        assert_eq!(json, "\"#6\"");
        let roundtrip: BarSize = serde_json::from_str("\"8mm\"").unwrap();
        assert_eq!(roundtrip, BarSize::Mm8);
        let spaced: BarSize = serde_json::from_str("\"12 MM\"").unwrap();
        assert_eq!(spaced, BarSize::Mm12);
        assert!(serde_json::from_str::<BarSize>("\"#11\"").is_err());
    }
}
