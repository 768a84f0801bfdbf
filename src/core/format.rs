//! Result display formatting
//!
//! Rounding happens here and only here: the engine returns full-precision
//! values, and the widget's result field shows a fixed number of decimals
//! (trailing zeros kept, so "1 m" reads as "100.0000 cm").

use crate::core::catalog::Category;

/// Format an engine result for the widget's result field.
pub fn format_result(category: Category, value: f64) -> String {
    format!("{:.*}", category.decimal_places(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_categories_show_four_decimals() {
        assert_eq!(format_result(Category::Length, 100.0), "100.0000");
        assert_eq!(format_result(Category::Weight, 0.5), "0.5000");
    }

    #[test]
    fn test_temperature_shows_two_decimals() {
        assert_eq!(format_result(Category::Temperature, 273.15), "273.15");
        assert_eq!(format_result(Category::Temperature, 32.0), "32.00");
    }

    #[test]
    fn test_rounds_float_noise_away() {
        assert_eq!(format_result(Category::Temperature, 31.999999999999943), "32.00");
        assert_eq!(format_result(Category::Temperature, 2.8e-14), "0.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_result(Category::Temperature, -40.00000000000003), "-40.00");
        assert_eq!(format_result(Category::Length, -2.54), "-2.5400");
    }
}
