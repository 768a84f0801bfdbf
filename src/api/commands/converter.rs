//! Unit catalog and conversion commands.

use crate::core::catalog::{self, Category};
use crate::core::convert::convert_value;
use crate::core::format::format_result;
use crate::core::parsing;
use crate::shared::error::AppResult;
use crate::shared::types::{
    ConvertRequest, ConvertResponse, GetUnitsResponse, ParseQuantityResponse, RawConvertRequest,
    RawConvertResponse, UnitDto,
};

/// All units of one category, in display order, for the widget's select boxes
pub fn get_units(category: &str) -> AppResult<GetUnitsResponse> {
    let category = Category::parse(category)?;

    let units = catalog::units_for(category)
        .iter()
        .map(|def| UnitDto {
            id: def.id.to_string(),
            label: def.name.to_string(),
            category: category.as_str().to_string(),
        })
        .collect();

    Ok(GetUnitsResponse { units })
}

/// Convert an already-parsed amount
pub fn convert_units(request: &ConvertRequest) -> AppResult<ConvertResponse> {
    let category = Category::parse(&request.category)?;
    let result = convert_value(category, &request.from_unit, &request.to_unit, request.amount)?;

    Ok(ConvertResponse {
        result,
        formatted_result: format_result(category, result),
        from_unit: request.from_unit.clone(),
        to_unit: request.to_unit.clone(),
    })
}

/// Convert the raw text of the value field. Text with no usable number
/// clears the result field instead of failing.
pub fn convert_raw(request: &RawConvertRequest) -> AppResult<RawConvertResponse> {
    let amount = match parsing::parse_value(&request.raw_value) {
        Some(amount) => amount,
        None => {
            return Ok(RawConvertResponse {
                formatted_result: String::new(),
            })
        }
    };

    let category = Category::parse(&request.category)?;
    let result = convert_value(category, &request.from_unit, &request.to_unit, amount)?;

    Ok(RawConvertResponse {
        formatted_result: format_result(category, result),
    })
}

/// Quick entry: pull an amount and unit out of free text like "100 cm"
pub fn parse_quantity(text: &str) -> AppResult<ParseQuantityResponse> {
    let (amount, unit) = parsing::parse_quantity(text)?;

    Ok(ParseQuantityResponse {
        amount,
        unit: unit.id.to_string(),
        category: unit.category.as_str().to_string(),
    })
}
