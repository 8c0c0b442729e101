//! Quantity formatting.

/// Round to two decimal places using standard rounding (not banker's).
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a number for display: two decimals at most, no trailing zeros.
///
/// `500.0` → "500", `1.5` → "1.5", `0.125` → "0.13".
pub fn format_amount(amount: f64) -> String {
    let rounded = round_amount(amount);
    // Avoid printing "-0" for tiny negative rounding noise.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format an amount/unit pair for display.
///
/// A missing amount yields the unit alone; a missing unit yields the bare
/// number.
pub fn format_quantity(amount: Option<f64>, unit: Option<&str>) -> String {
    let unit = unit.map(str::trim).filter(|u| !u.is_empty());
    match (amount, unit) {
        (Some(amount), Some(unit)) => format!("{} {}", format_amount(amount), unit),
        (Some(amount), None) => format_amount(amount),
        (None, Some(unit)) => unit.to_string(),
        (None, None) => String::new(),
    }
}
