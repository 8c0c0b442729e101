//! Unit conversion between volume and weight measurements.
//!
//! Same-category conversions (cup → ml, lb → g) use fixed factors and are
//! exact. Volume ↔ weight conversions go through an ingredient density and
//! are always marked approximate.

use ingredient_density::{find_density_entry, WATER_GRAMS_PER_ML};
use serde::{Deserialize, Serialize};

use crate::config::{ConversionOptions, CrossCategoryFallback};
use crate::format::format_amount;
use crate::units::{classify, lookup_unit, UnitCategory};

/// Outcome of a conversion request, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// True when an estimated density was involved.
    pub approximate: bool,
}

impl ConversionResult {
    fn failed() -> Self {
        Self {
            success: false,
            amount: None,
            unit: None,
            approximate: false,
        }
    }
}

/// A converted amount before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedAmount {
    pub value: f64,
    pub approximate: bool,
}

/// Convert `amount` from one unit to another with the default options.
///
/// Cross-category conversions without a density for `ingredient` fall back to
/// the density of water.
pub fn convert(amount: f64, from: &str, to: &str, ingredient: Option<&str>) -> ConversionResult {
    convert_with(&ConversionOptions::default(), amount, from, to, ingredient)
}

/// Convert `amount` from one unit to another.
///
/// Fails when either unit is unknown, or when a density is needed, none
/// matches and the options forbid guessing.
pub fn convert_with(
    options: &ConversionOptions,
    amount: f64,
    from: &str,
    to: &str,
    ingredient: Option<&str>,
) -> ConversionResult {
    let Some(converted) = convert_amount(options, amount, from, to, ingredient) else {
        return ConversionResult::failed();
    };

    // convert_amount already proved the target unit exists
    let unit = lookup_unit(to).map(|def| def.canonical.to_string());

    ConversionResult {
        success: true,
        amount: Some(format_amount(converted.value)),
        unit,
        approximate: converted.approximate,
    }
}

/// Numeric core of the conversion, without rounding.
pub fn convert_amount(
    options: &ConversionOptions,
    amount: f64,
    from: &str,
    to: &str,
    ingredient: Option<&str>,
) -> Option<ConvertedAmount> {
    let from_class = classify(from);
    let to_class = classify(to);

    if from_class.category == UnitCategory::Unknown || to_class.category == UnitCategory::Unknown
    {
        tracing::trace!(from, to, "conversion skipped: unknown unit");
        return None;
    }

    let base = amount * from_class.factor_to_base;

    if from_class.category == to_class.category {
        return Some(ConvertedAmount {
            value: base / to_class.factor_to_base,
            approximate: false,
        });
    }

    let grams_per_ml = density_for(options, ingredient)?;

    // base is ml for a volume source and grams for a weight source
    let target_base = match from_class.category {
        UnitCategory::Volume => base * grams_per_ml,
        _ => base / grams_per_ml,
    };

    Some(ConvertedAmount {
        value: target_base / to_class.factor_to_base,
        approximate: true,
    })
}

/// Resolve the density to use for a cross-category conversion.
fn density_for(options: &ConversionOptions, ingredient: Option<&str>) -> Option<f64> {
    if let Some(entry) = ingredient.and_then(find_density_entry) {
        tracing::trace!(
            ingredient,
            keyword = entry.keyword,
            grams_per_ml = entry.grams_per_ml,
            "density matched"
        );
        return Some(entry.grams_per_ml);
    }

    match options.cross_category_fallback {
        CrossCategoryFallback::WaterDensity => {
            tracing::debug!(ingredient, "no density match, assuming water");
            Some(WATER_GRAMS_PER_ML)
        }
        CrossCategoryFallback::Fail => {
            tracing::debug!(ingredient, "no density match, conversion refused");
            None
        }
    }
}
