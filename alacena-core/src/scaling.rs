//! Serving-size scaling of quantity strings.

use crate::format::{format_quantity, round_amount};
use crate::quantity_parser::parse_quantity;

/// Multiply the amount in `raw` by `multiplier`, keeping its unit.
///
/// Qualitative text ("al gusto") has no amount and comes back unchanged.
/// The multiplier is not validated; callers constrain it.
pub fn scale(raw: &str, multiplier: f64) -> String {
    let quantity = parse_quantity(raw);
    let Some(amount) = quantity.amount else {
        return raw.to_string();
    };

    let scaled = round_amount(amount * multiplier);
    format_quantity(Some(scaled), quantity.unit.as_deref())
}

/// Adjust the amount in `raw` by `delta` units (the +/- stepper).
///
/// Returns `raw` unchanged for qualitative text, for a zero amount, and for
/// steps that would bring the amount to zero or below.
pub fn step_quantity(raw: &str, delta: f64) -> String {
    let Some(amount) = parse_quantity(raw).amount else {
        return raw.to_string();
    };

    let stepped = amount + delta;
    if amount <= 0.0 || stepped <= 0.0 {
        return raw.to_string();
    }

    scale(raw, stepped / amount)
}
