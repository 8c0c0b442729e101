//! Ingredient density lookup for volume-to-weight conversion.
//!
//! This crate provides density estimates (grams per millilitre) for common
//! cooking ingredients, keyed by Spanish and English keywords.
//!
//! # Example
//!
//! ```
//! use ingredient_density::{find_density, ML_PER_CUP};
//!
//! if let Some(grams_per_ml) = find_density("harina de trigo") {
//!     let grams = 2.0 * ML_PER_CUP * grams_per_ml;
//!     println!("2 tazas de harina = {grams}g");
//! }
//! ```

mod density_lookup;

pub use density_lookup::{
    find_density, find_density_entry, normalize_ingredient_name, DensityEntry, DENSITY_TABLE,
    ML_PER_CUP, WATER_GRAMS_PER_ML,
};
