//! # rcdesign_core - Reinforced-Concrete Calculation Engine
//!
//! `rcdesign_core` computes internal-force diagrams, reinforcement quantities
//! and simplified seismic demands for concrete beams, columns and footings.
//! All inputs and outputs are JSON-serializable records, so the engine can sit
//! behind any front end or report generator.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and settings and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Policies**: Every simplification is a named setting in [`settings`]
//!
//! ## Quick Start
//!
//! ```rust
//! use rcdesign_core::calculations::{CalculationItem, CalculationOutput, SeismicInput, SeismicZone, SoilProfile};
//! use rcdesign_core::settings::DesignSettings;
//!
//! let item = CalculationItem::Seismic(SeismicInput {
//!     label: "Block A".to_string(),
//!     zone: SeismicZone::Z3,
//!     soil: SoilProfile::S2,
//!     importance_u: 1.0,
//!     weight_t: 500.0,
//! });
//!
//! let output = item.run(&DesignSettings::default()).unwrap();
//! if let CalculationOutput::Seismic(result) = output {
//!     assert!((result.base_shear_tf.value() - 44.64).abs() < 0.01);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Force analysis, section design, seismic and predimensioning
//! - [`equations`] - Closed-form beam and concrete formulas
//! - [`materials`] - Concrete and steel properties, rebar catalogue
//! - [`settings`] - Design policies and tunable constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//!
//! ## Units
//!
//! Spans in m, section dimensions in cm, stresses in kgf/cm², forces in kgf,
//! line loads in kgf/m. Beam moments are kgf·m; section moments are kgf·cm.

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{parse_batch, run_batch, run_requests, CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use materials::{BarSize, MaterialSet};
pub use settings::DesignSettings;
