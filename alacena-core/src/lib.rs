//! Quantity and unit engine for recipes and shopping lists.
//!
//! Every operation is a pure function over its arguments and the static unit
//! and density tables. Failures are represented as data: unparseable text is
//! an empty [`Quantity`], impossible conversions are unsuccessful
//! [`ConversionResult`]s, and irreconcilable quantities are concatenated.

pub mod combine;
pub mod config;
pub mod conversion;
pub mod error;
pub mod format;
pub mod quantity_parser;
pub mod scaling;
pub mod secondary_measurement;
pub mod shopping_list;
pub mod units;

pub use combine::combine;
pub use config::{ConversionOptions, CrossCategoryFallback, EngineConfig};
pub use conversion::{convert, convert_with, ConversionResult};
pub use error::ConfigError;
pub use format::format_quantity;
pub use ingredient_density::normalize_ingredient_name;
pub use quantity_parser::{parse_quantity, Quantity};
pub use scaling::{scale, step_quantity};
pub use secondary_measurement::{
    add_secondary_measurement, add_secondary_measurements, IngredientLine,
    SecondaryMeasurementStats,
};
pub use shopping_list::{build_shopping_list, PlannedIngredient, ShoppingItem};
pub use units::{
    classify, is_volume_unit, is_weight_unit, suggested_target, UnitCategory, UnitClass,
    UnitDefinition,
};
