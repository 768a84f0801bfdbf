//! Value-field and quick-entry parsing
//!
//! The widget's numeric field is forgiving: surrounding whitespace and comma
//! decimal separators are accepted, and anything else blanks the result
//! instead of raising an error. Quick entry goes further and pulls an amount
//! plus a catalog unit out of free text like "100cm" or "12 kg".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::catalog::{self, Category, UnitDef};
use crate::shared::error::{AppError, AppResult};

/// Parse the raw text of the value field.
///
/// `None` means "blank the result"; it is defined behavior, not an error,
/// so the engine is never invoked with an unparseable value.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Normalize comma decimal separators to dots
    let normalized = trimmed.replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

// Compiled once; matches an optionally signed number followed by a unit token
static QUANTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z]+)").expect("quantity pattern is valid")
});

// Unit aliases accepted by quick entry, mapped to catalog ids
fn normalize_unit(token: &str) -> Option<(Category, &'static str)> {
    let lower = token.to_lowercase();
    match lower.as_str() {
        // Length
        "mm" | "millimeter" | "millimeters" => Some((Category::Length, "mm")),
        "cm" | "centimeter" | "centimeters" => Some((Category::Length, "cm")),
        "m" | "meter" | "meters" => Some((Category::Length, "m")),
        "km" | "kilometer" | "kilometers" => Some((Category::Length, "km")),
        "in" | "inch" | "inches" => Some((Category::Length, "inch")),
        "ft" | "foot" | "feet" => Some((Category::Length, "ft")),
        // Weight
        "mg" | "milligram" | "milligrams" => Some((Category::Weight, "mg")),
        "g" | "gram" | "grams" => Some((Category::Weight, "g")),
        "kg" | "kilogram" | "kilograms" => Some((Category::Weight, "kg")),
        "oz" | "ounce" | "ounces" => Some((Category::Weight, "oz")),
        "lb" | "lbs" | "pound" | "pounds" => Some((Category::Weight, "lb")),
        // Temperature
        "c" | "celsius" => Some((Category::Temperature, "celsius")),
        "f" | "fahrenheit" => Some((Category::Temperature, "fahrenheit")),
        "k" | "kelvin" => Some((Category::Temperature, "kelvin")),
        _ => None,
    }
}

/// Extract an amount and a catalog unit from free text (e.g. "100cm",
/// "12 kg", "3.5 inches"). The first number/unit pair found anywhere in the
/// string wins.
pub fn parse_quantity(text: &str) -> AppResult<(f64, &'static UnitDef)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Empty text".to_string()));
    }

    let normalized = trimmed.replace(',', ".");

    if let Some(caps) = QUANTITY_PATTERN.captures(&normalized) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            if let Some((category, unit_id)) = normalize_unit(&caps[2]) {
                let unit = catalog::find_unit(category, unit_id)?;
                return Ok((amount, unit));
            }
        }
    }

    Err(AppError::Validation(format!(
        "Could not parse a quantity from '{}'",
        trimmed
    )))
}
