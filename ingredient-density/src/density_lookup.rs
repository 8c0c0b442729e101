//! Ingredient density lookup for volume-to-weight conversion.
//!
//! Densities are stored as grams per millilitre. Most values were curated as
//! grams per US cup (236.588 ml) from baking references and are divided down
//! at compile time, so the source figure stays visible in the table.

use std::cmp::Reverse;

/// Millilitres in a US cup, the unit most density figures are quoted in.
pub const ML_PER_CUP: f64 = 236.588;

/// Density of water, used when no ingredient-specific entry applies.
pub const WATER_GRAMS_PER_ML: f64 = 1.0;

/// One row of the density table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEntry {
    /// Normalized keyword (lowercase, no accents).
    pub keyword: &'static str,
    pub grams_per_ml: f64,
}

const fn per_cup(keyword: &'static str, grams_per_cup: f64) -> DensityEntry {
    DensityEntry {
        keyword,
        grams_per_ml: grams_per_cup / ML_PER_CUP,
    }
}

const fn per_ml(keyword: &'static str, grams_per_ml: f64) -> DensityEntry {
    DensityEntry {
        keyword,
        grams_per_ml,
    }
}

// =============================================================================
// Data
// =============================================================================

/// Density table, in audit order. On equal keyword length the earlier row wins.
pub static DENSITY_TABLE: &[DensityEntry] = &[
    // Flours
    per_cup("harina", 125.0),
    per_cup("harina de trigo", 125.0),
    per_cup("harina integral", 120.0),
    per_cup("harina de almendra", 96.0),
    per_cup("harina de coco", 112.0),
    per_cup("harina de maiz", 116.0),
    per_cup("flour", 125.0),
    per_cup("almond flour", 96.0),
    per_cup("maicena", 128.0),
    per_cup("fecula de maiz", 128.0),
    per_cup("cornstarch", 128.0),
    // Sugars and syrups
    per_cup("azucar", 200.0),
    per_cup("azucar moreno", 220.0),
    per_cup("azucar morena", 220.0),
    per_cup("azucar glas", 120.0),
    per_cup("azucar glass", 120.0),
    per_cup("azucar impalpable", 120.0),
    per_cup("sugar", 200.0),
    per_cup("brown sugar", 220.0),
    per_cup("powdered sugar", 120.0),
    per_cup("miel", 340.0),
    per_cup("honey", 340.0),
    per_cup("jarabe de arce", 315.0),
    per_cup("maple syrup", 315.0),
    // Dairy
    per_cup("mantequilla", 227.0),
    per_cup("manteca", 227.0),
    per_cup("butter", 227.0),
    per_cup("leche", 245.0),
    per_cup("milk", 245.0),
    per_cup("crema", 238.0),
    per_cup("nata", 238.0),
    per_cup("heavy cream", 238.0),
    per_cup("yogur", 245.0),
    per_cup("queso crema", 232.0),
    per_cup("queso rallado", 100.0),
    // Fats and oils
    per_cup("aceite", 218.0),
    per_cup("aceite de oliva", 216.0),
    per_cup("oil", 218.0),
    per_cup("olive oil", 216.0),
    // Grains, cocoa, other pantry
    per_cup("arroz", 185.0),
    per_cup("rice", 185.0),
    per_cup("avena", 80.0),
    per_cup("oats", 80.0),
    per_cup("cacao en polvo", 86.0),
    per_cup("cocoa powder", 86.0),
    per_cup("pan rallado", 108.0),
    per_cup("mantequilla de mani", 258.0),
    per_cup("peanut butter", 258.0),
    per_cup("sal", 292.0),
    per_cup("salt", 292.0),
    per_cup("polvo para hornear", 192.0),
    per_cup("bicarbonato", 220.0),
    // Liquids close to water
    per_ml("agua", WATER_GRAMS_PER_ML),
    per_ml("water", WATER_GRAMS_PER_ML),
    per_ml("caldo", 1.01),
    per_ml("vino", 0.99),
    per_ml("jugo de limon", 1.03),
    per_ml("vinagre", 1.01),
    per_ml("salsa de soja", 1.2),
];

// =============================================================================
// Name normalization
// =============================================================================

/// Fold a lowercase character to its unaccented form.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Normalize an ingredient name for matching and grouping.
///
/// Lowercases, strips accents, trims and collapses internal whitespace, so
/// "  Azúcar   Morena" and "azucar morena" produce the same key.
pub fn normalize_ingredient_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase().chars().map(fold_accent).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Public API
// =============================================================================

/// Find the density entry that best matches an ingredient name.
///
/// Matching is substring containment on normalized text. Entries whose
/// keyword appears inside the name are preferred, longest keyword first, so
/// "harina de almendra" beats "harina". Only when no keyword is contained in
/// the name does the reverse direction apply (the name appears inside a
/// keyword, e.g. "almendra" inside "harina de almendra"); then the shortest
/// such keyword is the closest match. Ties keep table order.
pub fn find_density_entry(ingredient: &str) -> Option<&'static DensityEntry> {
    let name = normalize_ingredient_name(ingredient);
    if name.is_empty() {
        return None;
    }

    let forward = DENSITY_TABLE
        .iter()
        .enumerate()
        .filter(|(_, entry)| name.contains(entry.keyword))
        .min_by_key(|(idx, entry)| (Reverse(entry.keyword.len()), *idx))
        .map(|(_, entry)| entry);
    if forward.is_some() {
        return forward;
    }

    DENSITY_TABLE
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.keyword.contains(name.as_str()))
        .min_by_key(|(idx, entry)| (entry.keyword.len(), *idx))
        .map(|(_, entry)| entry)
}

/// Find the density (grams per millilitre) for an ingredient name.
pub fn find_density(ingredient: &str) -> Option<f64> {
    find_density_entry(ingredient).map(|entry| entry.grams_per_ml)
}

// =============================================================================
// Tests
// =============================================================================
