//! Secondary measurements for the ingredient editor.
//!
//! Fills in an alternative amount/unit next to an ingredient's primary one:
//! grams for volume measurements and cups for weight measurements.

use serde::{Deserialize, Serialize};

use crate::config::ConversionOptions;
use crate::conversion::convert_with;
use crate::quantity_parser::parse_quantity;
use crate::units::suggested_target;

/// An ingredient line as edited in a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
    #[serde(default)]
    pub secondary_amount: Option<String>,
    #[serde(default)]
    pub secondary_unit: Option<String>,
}

/// Statistics about secondary measurement generation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SecondaryMeasurementStats {
    pub converted: usize,
    /// Conversions that relied on an estimated density.
    pub approximate: usize,
    pub skipped_already_has_secondary: usize,
    pub skipped_no_unit: usize,
    pub skipped_unknown_unit: usize,
    pub skipped_unparseable: usize,
    pub skipped_conversion_failed: usize,
    /// Units that could not be classified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_units: Vec<String>,
}

/// Add a secondary measurement to an ingredient line if possible.
///
/// Only converts when:
/// 1. No secondary measurement exists yet
/// 2. The primary unit is a known volume or weight unit
/// 3. The primary amount parses as a number
/// 4. The conversion succeeds under `options`
pub fn add_secondary_measurement(
    mut line: IngredientLine,
    options: &ConversionOptions,
    stats: &mut SecondaryMeasurementStats,
) -> IngredientLine {
    if line.secondary_amount.is_some() {
        stats.skipped_already_has_secondary += 1;
        return line;
    }

    let Some(unit) = line.unit.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        stats.skipped_no_unit += 1;
        return line;
    };

    let Some(target) = suggested_target(unit) else {
        stats.skipped_unknown_unit += 1;
        stats.unknown_units.push(unit.to_string());
        return line;
    };

    let Some(amount) = line.amount.as_deref().and_then(|a| parse_quantity(a).amount) else {
        stats.skipped_unparseable += 1;
        return line;
    };

    let result = convert_with(options, amount, unit, target, Some(line.name.as_str()));
    if !result.success {
        stats.skipped_conversion_failed += 1;
        return line;
    }

    if result.approximate {
        stats.approximate += 1;
    }
    stats.converted += 1;
    line.secondary_amount = result.amount;
    line.secondary_unit = result.unit;
    line
}

/// Add secondary measurements to every line of a recipe.
pub fn add_secondary_measurements(
    lines: Vec<IngredientLine>,
    options: &ConversionOptions,
) -> (Vec<IngredientLine>, SecondaryMeasurementStats) {
    let mut stats = SecondaryMeasurementStats::default();
    let lines = lines
        .into_iter()
        .map(|line| add_secondary_measurement(line, options, &mut stats))
        .collect();
    (lines, stats)
}
