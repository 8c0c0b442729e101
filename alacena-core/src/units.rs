//! Unit table and unit classification.
//!
//! Every recognized unit belongs to the volume category (base: millilitres)
//! or the weight category (base: grams). Anything else is `Unknown` and only
//! ever passes through untouched.

use serde::{Deserialize, Serialize};

/// Canonical unit suggested when converting a volume into a weight.
pub const DEFAULT_WEIGHT_UNIT: &str = "g";

/// Canonical unit suggested when converting a weight into a volume.
pub const DEFAULT_VOLUME_UNIT: &str = "taza";

/// Measurement category of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Volume,
    Weight,
    Unknown,
}

/// A row of the unit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    /// Normalized value used as the lookup result and conversion output.
    pub canonical: &'static str,
    /// Human-readable label for pickers.
    pub label: &'static str,
    /// Additional spellings, lowercase and without accents.
    pub aliases: &'static [&'static str],
    pub category: UnitCategory,
    /// Multiplier to the category base unit (ml or g).
    pub factor_to_base: f64,
}

/// Result of classifying a unit string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitClass {
    pub category: UnitCategory,
    pub factor_to_base: f64,
}

impl UnitClass {
    const UNKNOWN: UnitClass = UnitClass {
        category: UnitCategory::Unknown,
        factor_to_base: 0.0,
    };
}

const fn volume(
    canonical: &'static str,
    label: &'static str,
    aliases: &'static [&'static str],
    ml: f64,
) -> UnitDefinition {
    UnitDefinition {
        canonical,
        label,
        aliases,
        category: UnitCategory::Volume,
        factor_to_base: ml,
    }
}

const fn weight(
    canonical: &'static str,
    label: &'static str,
    aliases: &'static [&'static str],
    grams: f64,
) -> UnitDefinition {
    UnitDefinition {
        canonical,
        label,
        aliases,
        category: UnitCategory::Weight,
        factor_to_base: grams,
    }
}

/// All recognized units.
pub static UNIT_TABLE: &[UnitDefinition] = &[
    // Volume - metric
    volume(
        "ml",
        "mililitros",
        &["mililitro", "mililitros", "milliliter", "milliliters", "millilitre", "millilitres", "cc"],
        1.0,
    ),
    volume(
        "l",
        "litros",
        &["lt", "lts", "litro", "litros", "liter", "liters", "litre", "litres"],
        1000.0,
    ),
    // Volume - kitchen
    volume("taza", "tazas", &["tazas", "cup", "cups", "c"], 236.588),
    volume(
        "cda",
        "cucharadas",
        &["cdas", "cucharada", "cucharadas", "tbsp", "tbs", "tablespoon", "tablespoons"],
        14.7868,
    ),
    volume(
        "cdta",
        "cucharaditas",
        &["cdtas", "cdita", "cditas", "cucharadita", "cucharaditas", "tsp", "teaspoon", "teaspoons"],
        4.92892,
    ),
    volume(
        "fl oz",
        "onzas liquidas",
        &["fl. oz", "onza liquida", "onzas liquidas", "fluid ounce", "fluid ounces"],
        29.5735,
    ),
    volume("pinta", "pintas", &["pintas", "pint", "pints", "pt"], 473.176),
    volume("cuarto", "cuartos de galon", &["quart", "quarts", "qt"], 946.353),
    volume("galon", "galones", &["galones", "gallon", "gallons", "gal"], 3785.41),
    // Weight - metric
    weight("g", "gramos", &["gr", "grs", "gramo", "gramos", "gram", "grams"], 1.0),
    weight(
        "kg",
        "kilogramos",
        &["kgs", "kilo", "kilos", "kilogramo", "kilogramos", "kilogram", "kilograms"],
        1000.0,
    ),
    weight(
        "mg",
        "miligramos",
        &["miligramo", "miligramos", "milligram", "milligrams"],
        0.001,
    ),
    // Weight - imperial
    weight("oz", "onzas", &["onza", "onzas", "ounce", "ounces"], 28.3495),
    weight("lb", "libras", &["lbs", "libra", "libras", "pound", "pounds"], 453.592),
];

/// Normalize a unit string for lookup: trim, lowercase, drop a trailing
/// period ("oz." → "oz") and strip accents.
pub fn normalize_unit(unit: &str) -> String {
    let trimmed = unit.trim().trim_end_matches('.').trim_end();
    ingredient_density::normalize_ingredient_name(trimmed)
}

/// Look up a unit by canonical value or alias.
pub fn lookup_unit(unit: &str) -> Option<&'static UnitDefinition> {
    let normalized = normalize_unit(unit);
    if normalized.is_empty() {
        return None;
    }
    UNIT_TABLE
        .iter()
        .find(|def| def.canonical == normalized || def.aliases.contains(&normalized.as_str()))
}

/// Classify a unit string. Unknown units are inert for conversion purposes.
pub fn classify(unit: &str) -> UnitClass {
    match lookup_unit(unit) {
        Some(def) => UnitClass {
            category: def.category,
            factor_to_base: def.factor_to_base,
        },
        None => UnitClass::UNKNOWN,
    }
}

pub fn is_volume_unit(unit: &str) -> bool {
    classify(unit).category == UnitCategory::Volume
}

pub fn is_weight_unit(unit: &str) -> bool {
    classify(unit).category == UnitCategory::Weight
}

/// Suggest the unit to pre-fill a one-click conversion with.
///
/// Volume units suggest grams and weight units suggest cups. Unknown units
/// have no natural counterpart.
pub fn suggested_target(unit: &str) -> Option<&'static str> {
    match classify(unit).category {
        UnitCategory::Volume => Some(DEFAULT_WEIGHT_UNIT),
        UnitCategory::Weight => Some(DEFAULT_VOLUME_UNIT),
        UnitCategory::Unknown => None,
    }
}

/// Whether two unit strings refer to the same unit.
///
/// Known units compare by canonical value; unknown units compare by their
/// normalized text, so "Piezas" and "piezas" are the same unit.
pub fn same_unit(a: &str, b: &str) -> bool {
    match (lookup_unit(a), lookup_unit(b)) {
        (Some(x), Some(y)) => x.canonical == y.canonical,
        (None, None) => normalize_unit(a) == normalize_unit(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_volume() {
        let class = classify("cup");
        assert_eq!(class.category, UnitCategory::Volume);
        assert!((class.factor_to_base - 236.588).abs() < 1e-9);
        assert_eq!(classify("ml").factor_to_base, 1.0);
        assert_eq!(classify("Litros").factor_to_base, 1000.0);
    }

    #[test]
    fn test_classify_weight() {
        assert_eq!(classify("g").category, UnitCategory::Weight);
        assert_eq!(classify("kg").factor_to_base, 1000.0);
        assert_eq!(classify("gramos").factor_to_base, 1.0);
    }

    #[test]
    fn test_classify_normalizes() {
        assert_eq!(classify("  TAZAS ").category, UnitCategory::Volume);
        assert_eq!(classify("oz.").category, UnitCategory::Weight);
        assert_eq!(classify("galón").category, UnitCategory::Volume);
        assert_eq!(classify("fl oz").category, UnitCategory::Volume);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("piezas").category, UnitCategory::Unknown);
        assert_eq!(classify("").category, UnitCategory::Unknown);
        assert_eq!(classify("al gusto").category, UnitCategory::Unknown);
    }

    #[test]
    fn test_predicates() {
        assert!(is_volume_unit("cda"));
        assert!(is_volume_unit("tsp"));
        assert!(!is_volume_unit("lb"));
        assert!(is_weight_unit("libras"));
        assert!(!is_weight_unit("taza"));
        assert!(!is_weight_unit("pizca"));
    }

    #[test]
    fn test_suggested_target() {
        assert_eq!(suggested_target("taza"), Some("g"));
        assert_eq!(suggested_target("ml"), Some("g"));
        assert_eq!(suggested_target("g"), Some("taza"));
        assert_eq!(suggested_target("lb"), Some("taza"));
        assert_eq!(suggested_target("dientes"), None);
    }

    #[test]
    fn test_same_unit() {
        assert!(same_unit("cup", "tazas"));
        assert!(same_unit("Piezas", "piezas"));
        assert!(!same_unit("g", "kg"));
        assert!(!same_unit("g", "piezas"));
    }

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in UNIT_TABLE {
            assert!(seen.insert(def.canonical), "duplicate {}", def.canonical);
            for alias in def.aliases {
                assert!(seen.insert(*alias), "duplicate alias {alias}");
            }
        }
    }
}
