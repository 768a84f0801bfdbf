//! Conversion engine
//!
//! A pure function over the catalog: no ambient selection state, no
//! formatting. The caller builds one request per interaction and renders the
//! result itself (see `core::format` for the display rounding).

use crate::core::catalog::{self, Category};
use crate::shared::error::{AppError, AppResult};

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// The result keeps full f64 precision; rounding is a display concern.
pub fn convert_value(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> AppResult<f64> {
    // The command layer never forwards unparseable input, so this guard
    // should not fire in normal operation.
    if !value.is_finite() {
        return Err(AppError::Validation(format!(
            "Value must be a finite number, got {}",
            value
        )));
    }

    // Same unit, no conversion needed
    if from_unit == to_unit {
        return Ok(value);
    }

    let from_def = catalog::find_unit(category, from_unit)?;
    let to_def = catalog::find_unit(category, to_unit)?;

    Ok(from_def.convert_towards(to_def, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::format_result;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_same_unit_is_identity() {
        for category in [Category::Length, Category::Weight, Category::Temperature] {
            for unit in catalog::units_for(category) {
                assert_eq!(convert_value(category, unit.id, unit.id, 42.5).unwrap(), 42.5);
            }
        }
    }

    #[test]
    fn test_linear_matches_ratio_quotient() {
        // result = value * ratio(from) / ratio(to), bit for bit
        assert_eq!(
            convert_value(Category::Length, "inch", "ft", 12.0).unwrap(),
            12.0 * 25.4 / 304.8
        );
        assert_eq!(
            convert_value(Category::Weight, "oz", "lb", 16.0).unwrap(),
            16.0 * 28349.5 / 453592.0
        );
    }

    #[test]
    fn test_meters_to_centimeters() {
        let result = convert_value(Category::Length, "m", "cm", 1.0).unwrap();
        assert_eq!(format_result(Category::Length, result), "100.0000");
    }

    #[test]
    fn test_kilograms_to_grams() {
        let result = convert_value(Category::Weight, "kg", "g", 1.0).unwrap();
        assert_eq!(format_result(Category::Weight, result), "1000.0000");
    }

    #[test]
    fn test_linear_round_trip() {
        for category in [Category::Length, Category::Weight] {
            let units = catalog::units_for(category);
            for a in units {
                for b in units {
                    let out = convert_value(category, a.id, b.id, 123.456).unwrap();
                    let back = convert_value(category, b.id, a.id, out).unwrap();
                    assert!(
                        (back - 123.456).abs() < EPS,
                        "{} -> {} -> {} gave {}",
                        a.id,
                        b.id,
                        a.id,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_linear_scale_invariance() {
        let v = 3.7;
        let k = 250.0;
        let scaled = convert_value(Category::Length, "inch", "cm", k * v).unwrap();
        let unscaled = convert_value(Category::Length, "inch", "cm", v).unwrap();
        assert!((scaled - k * unscaled).abs() < EPS * scaled.abs().max(1.0));
    }

    #[test]
    fn test_temperature_fixtures() {
        let cases = [
            ("celsius", "fahrenheit", 0.0, "32.00"),
            ("celsius", "kelvin", 0.0, "273.15"),
            ("fahrenheit", "celsius", 32.0, "0.00"),
            ("fahrenheit", "kelvin", 32.0, "273.15"),
            ("kelvin", "celsius", 273.15, "0.00"),
            ("kelvin", "fahrenheit", 273.15, "32.00"),
        ];

        for (from, to, value, expected) in cases {
            let result = convert_value(Category::Temperature, from, to, value).unwrap();
            assert_eq!(
                format_result(Category::Temperature, result),
                expected,
                "{} {} -> {}",
                value,
                from,
                to
            );
        }
    }

    #[test]
    fn test_body_temperature() {
        let result = convert_value(Category::Temperature, "fahrenheit", "celsius", 98.6).unwrap();
        assert_eq!(format_result(Category::Temperature, result), "37.00");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = convert_value(Category::Length, "m", "furlong", 1.0).unwrap_err();
        assert!(matches!(err, AppError::UnknownUnit(_)));

        let err = convert_value(Category::Weight, "stone", "g", 1.0).unwrap_err();
        assert!(matches!(err, AppError::UnknownUnit(_)));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert_value(Category::Length, "m", "cm", bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
