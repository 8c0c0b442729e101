//! Quantity parsing module.
//!
//! Parses free-text quantities (e.g., "500g", "1 ½ taza", "al gusto") into an
//! amount and a unit.

use serde::{Deserialize, Serialize};

/// An amount/unit pair extracted from free text.
///
/// `amount` is `None` when the text has no leading number; the caller keeps
/// the raw text for display in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn is_numeric(&self) -> bool {
        self.amount.is_some()
    }
}

/// Parse a quantity string.
///
/// Recognizes:
/// - Integers and decimals with `.` or `,`: "2", "2.5", "2,5"
/// - Fractions: "1/2"
/// - Mixed numbers: "1 1/2"
/// - Vulgar fraction glyphs, alone or after an integer: "½", "1 ½", "1½"
///
/// Whatever follows the number (trimmed) is the unit. Text without a leading
/// number, including negative numbers, yields an empty `Quantity`.
pub fn parse_quantity(raw: &str) -> Quantity {
    let text = raw.trim();
    let Some((amount, rest)) = parse_leading_amount(text) else {
        return Quantity::default();
    };

    let rest = rest.trim();
    Quantity {
        amount: Some(amount),
        unit: if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        },
    }
}

/// Extract the numeric prefix of a string.
/// Returns (value, remaining_string).
fn parse_leading_amount(s: &str) -> Option<(f64, &str)> {
    if let Some(found) = take_vulgar_fraction(s) {
        return Some(found);
    }

    // Bare decimal: ".5"
    if let Some(after_dot) = s.strip_prefix('.') {
        let (digits, after) = take_digits(after_dot);
        if !digits.is_empty() {
            let value: f64 = format!("0.{digits}").parse().ok()?;
            return Some((value, after));
        }
        return None;
    }

    let (whole_digits, rest) = take_digits(s);
    if whole_digits.is_empty() {
        return None;
    }

    // Decimal with either separator: "2.5", "2,5"
    if let Some(after_sep) = rest.strip_prefix(['.', ',']) {
        let (frac_digits, after) = take_digits(after_sep);
        if !frac_digits.is_empty() {
            let value: f64 = format!("{whole_digits}.{frac_digits}").parse().ok()?;
            return Some((value, after));
        }
    }

    // Fraction: "1/2"
    if let Some(after_slash) = rest.strip_prefix('/') {
        let (denom, after) = take_digits(after_slash);
        if !denom.is_empty() {
            return ratio(whole_digits, denom).map(|value| (value, after));
        }
    }

    let whole: f64 = whole_digits.parse().ok()?;
    let after_ws = rest.trim_start();

    // Glyph after the integer: "1½", "1 ½"
    if let Some((frac, after)) = take_vulgar_fraction(after_ws) {
        return Some((whole + frac, after));
    }

    // Mixed number: "1 1/2"
    if after_ws.len() < rest.len() {
        let (num, after_num) = take_digits(after_ws);
        if !num.is_empty() {
            if let Some(after_slash) = after_num.strip_prefix('/') {
                let (denom, after) = take_digits(after_slash);
                if !denom.is_empty() {
                    return ratio(num, denom).map(|frac| (whole + frac, after));
                }
            }
        }
    }

    Some((whole, rest))
}

/// Split off the leading ASCII digits.
fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Divide two digit strings. A zero denominator is not a number.
fn ratio(num: &str, denom: &str) -> Option<f64> {
    let num: f64 = num.parse().ok()?;
    let denom: f64 = denom.parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

fn take_vulgar_fraction(s: &str) -> Option<(f64, &str)> {
    let mut chars = s.chars();
    let value = vulgar_fraction_value(chars.next()?)?;
    Some((value, chars.as_str()))
}

fn vulgar_fraction_value(c: char) -> Option<f64> {
    match c {
        '½' => Some(1.0 / 2.0),
        '¼' => Some(1.0 / 4.0),
        '¾' => Some(3.0 / 4.0),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '⅛' => Some(1.0 / 8.0),
        '⅜' => Some(3.0 / 8.0),
        _ => None,
    }
}
