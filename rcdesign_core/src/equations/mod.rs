//! # Structural Equations
//!
//! The closed-form expressions every calculation is built from, kept in one
//! place so they can be checked against the code references line by line.
//!
//! ## Modules
//!
//! - [`beam`] - Reactions, shears, moments and fixed-end moments
//! - [`concrete`] - ACI 318 / E.060 section capacity and ratio formulas
//!
//! ## Units
//!
//! - Beam formulas: m, kgf, kgf/m, kgf·m
//! - Section formulas: cm, kgf, kgf/cm², kgf·cm

pub mod beam;
pub mod concrete;

pub use beam::{
    fixed_fixed_point_end_moments,
    fixed_fixed_point_reactions,
    fixed_fixed_uniform_end_moments,
    point_load_moment,
    point_load_reactions,
    point_load_shear,
    two_span_interior_moment,
    two_span_reactions,
    uniform_load_max_moment,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
};

pub use concrete::{
    balanced_ratio,
    column_squash_load,
    concrete_shear_capacity,
    max_stirrup_spacing,
    maximum_flexural_ratio,
    minimum_flexural_ratio,
    minimum_shear_steel,
    nominal_moment,
    punching_perimeter,
    stirrup_shear_capacity,
    stirrup_shear_limit,
    stirrup_spacing,
    stress_block_depth,
    tie_spacing_limit,
    PHI_FLEXURE,
    PHI_SHEAR,
    PHI_TIED_COLUMN,
};
