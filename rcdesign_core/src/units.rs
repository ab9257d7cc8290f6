//! # Unit Types
//!
//! Type-safe wrappers for the metric-technical units used throughout the
//! engine. They are plain f64 newtypes that serialize as bare numbers.
//!
//! The engine performs no unit conversion on caller input: spans arrive in
//! meters, section dimensions in centimeters, stresses in kgf/cm², forces in
//! kgf. These wrappers exist for the few places where a calculation moves
//! between units internally (span in m to layout lengths in cm, base shear in
//! kgf to tonnes-force).
//!
//! ## Example
//!
//! ```rust
//! use rcdesign_core::units::{Centimeters, Kgf, Meters, TonnesForce};
//!
//! let span = Meters(6.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 600.0);
//!
//! let shear: TonnesForce = Kgf(44_642.0).into();
//! assert!((shear.0 - 44.642).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilograms-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

/// Force in tonnes-force (1 tf = 1000 kgf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonnesForce(pub f64);

impl From<Kgf> for TonnesForce {
    fn from(kgf: Kgf) -> Self {
        TonnesForce(kgf.0 / 1000.0)
    }
}

impl From<TonnesForce> for Kgf {
    fn from(tf: TonnesForce) -> Self {
        Kgf(tf.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

// Differences and scaling, the only operations layout and sizing need
macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Kgf);
impl_arithmetic!(TonnesForce);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(6.0).into();
        assert_eq!(cm.0, 600.0);
        let m: Meters = Centimeters(54.0).into();
        assert!((m.0 - 0.54).abs() < 1e-12);
    }

    #[test]
    fn test_kgf_to_tonnes() {
        let tf: TonnesForce = Kgf(2500.0).into();
        assert_eq!(tf.0, 2.5);
        let back: Kgf = tf.into();
        assert_eq!(back.0, 2500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(600.0);
        let b = Centimeters(54.0);
        assert_eq!((a - b).value(), 546.0);
        assert_eq!((a / 2.0).value(), 300.0);
        assert_eq!((Kgf(44_642.0) - Kgf(642.0)).value(), 44_000.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Meters(6.5)).unwrap();
        assert_eq!(json, "6.5");
        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Meters(6.5));
    }
}
