//! Merging two quantities of the same ingredient into one display string.
//!
//! When both sides are numeric and their units can be reconciled, the result
//! is a single sum expressed in the first side's unit. Otherwise the two
//! strings are joined with " + " so no information is ever dropped.

use crate::config::ConversionOptions;
use crate::conversion::convert_amount;
use crate::format::format_quantity;
use crate::quantity_parser::parse_quantity;
use crate::units::same_unit;

/// Separator used when two quantities cannot be summed.
pub const COMBINE_SEPARATOR: &str = " + ";

/// Combine two quantity strings for `ingredient`.
///
/// - Identical strings are returned as-is.
/// - A blank side yields the other side.
/// - Numeric sides with the same unit, or with units of the same category,
///   are summed into `a`'s unit.
/// - Numeric volume and weight sides are summed through the ingredient's
///   density when one is known. No water fallback applies here.
/// - Anything else is concatenated: `"<a> + <b>"`.
pub fn combine(a: &str, b: &str, ingredient: &str) -> String {
    if a == b {
        return a.to_string();
    }
    if b.trim().is_empty() {
        return a.to_string();
    }
    if a.trim().is_empty() {
        return b.to_string();
    }

    match try_sum(a, b, ingredient) {
        Some(sum) => sum,
        None => {
            tracing::debug!(a, b, ingredient, "quantities not reconcilable, concatenating");
            format!("{a}{COMBINE_SEPARATOR}{b}")
        }
    }
}

/// Sum two quantity strings into `a`'s unit, if their units allow it.
fn try_sum(a: &str, b: &str, ingredient: &str) -> Option<String> {
    let left = parse_quantity(a);
    let right = parse_quantity(b);
    let left_amount = left.amount?;
    let right_amount = right.amount?;

    let right_in_left_unit = match (left.unit.as_deref(), right.unit.as_deref()) {
        // Bare counts: "2" + "3"
        (None, None) => right_amount,
        (Some(left_unit), Some(right_unit)) if same_unit(left_unit, right_unit) => right_amount,
        (Some(left_unit), Some(right_unit)) => {
            let ingredient = Some(ingredient).filter(|name| !name.trim().is_empty());
            convert_amount(
                &ConversionOptions::strict(),
                right_amount,
                right_unit,
                left_unit,
                ingredient,
            )?
            .value
        }
        _ => return None,
    };

    Some(format_quantity(
        Some(left_amount + right_in_left_unit),
        left.unit.as_deref(),
    ))
}
