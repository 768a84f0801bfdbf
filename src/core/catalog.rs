//! Unit catalog
//!
//! Static tables describing the three conversion categories. Definition order
//! is display order, so the tables are arrays, not maps. Each unit carries a
//! [`UnitScale`]: a linear ratio against the category base, or an affine rule
//! through a canonical base for the non-linear temperature scales. Dispatch
//! over the two shapes goes through the single [`Scale`] interface instead of
//! per-category branching at call sites.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::error::{AppError, AppResult};

/// Conversion categories offered by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" => Ok(Category::Temperature),
            _ => Err(AppError::Validation(format!("Unknown category: {}", s))),
        }
    }

    /// Decimal places shown in the result field. Formatting policy only;
    /// the engine itself keeps full precision.
    pub fn decimal_places(&self) -> usize {
        match self {
            Category::Length | Category::Weight => 4,
            Category::Temperature => 2,
        }
    }
}

/// A unit's rule for reaching its category base
#[enum_dispatch]
pub trait Scale {
    fn to_base(&self, value: f64) -> f64;
    fn from_base(&self, base_value: f64) -> f64;
}

/// Multiplicative factor against the category base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub ratio: f64,
}

impl Scale for LinearScale {
    fn to_base(&self, value: f64) -> f64 {
        value * self.ratio
    }

    fn from_base(&self, base_value: f64) -> f64 {
        base_value / self.ratio
    }
}

/// Affine rule: base_value = (value + offset) * factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineScale {
    pub factor: f64,
    pub offset: f64,
}

impl Scale for AffineScale {
    fn to_base(&self, value: f64) -> f64 {
        (value + self.offset) * self.factor
    }

    fn from_base(&self, base_value: f64) -> f64 {
        base_value / self.factor - self.offset
    }
}

#[enum_dispatch(Scale)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    Linear(LinearScale),
    Affine(AffineScale),
}

/// Unit definition
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub scale: UnitScale,
}

impl UnitDef {
    /// Convert a value expressed in this unit into `target`'s unit.
    pub fn convert_towards(&self, target: &UnitDef, value: f64) -> f64 {
        target.scale.from_base(self.scale.to_base(value))
    }
}

// Length (base: millimeters)
static LENGTH_UNITS: [UnitDef; 6] = [
    UnitDef { id: "mm", name: "Millimeters", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 1.0 }) },
    UnitDef { id: "cm", name: "Centimeters", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 10.0 }) },
    UnitDef { id: "m", name: "Meters", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 1000.0 }) },
    UnitDef { id: "km", name: "Kilometers", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 1_000_000.0 }) },
    UnitDef { id: "inch", name: "Inches", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 25.4 }) },
    UnitDef { id: "ft", name: "Feet", category: Category::Length, scale: UnitScale::Linear(LinearScale { ratio: 304.8 }) },
];

// Weight (base: milligrams)
static WEIGHT_UNITS: [UnitDef; 5] = [
    UnitDef { id: "mg", name: "Milligrams", category: Category::Weight, scale: UnitScale::Linear(LinearScale { ratio: 1.0 }) },
    UnitDef { id: "g", name: "Grams", category: Category::Weight, scale: UnitScale::Linear(LinearScale { ratio: 1000.0 }) },
    UnitDef { id: "kg", name: "Kilograms", category: Category::Weight, scale: UnitScale::Linear(LinearScale { ratio: 1_000_000.0 }) },
    UnitDef { id: "oz", name: "Ounces", category: Category::Weight, scale: UnitScale::Linear(LinearScale { ratio: 28349.5 }) },
    UnitDef { id: "lb", name: "Pounds", category: Category::Weight, scale: UnitScale::Linear(LinearScale { ratio: 453592.0 }) },
];

// Temperature (base: kelvin)
// Affine form keeps every pair correct even if a fourth scale is added.
static TEMPERATURE_UNITS: [UnitDef; 3] = [
    UnitDef { id: "celsius", name: "Celsius", category: Category::Temperature, scale: UnitScale::Affine(AffineScale { factor: 1.0, offset: 273.15 }) },
    UnitDef { id: "fahrenheit", name: "Fahrenheit", category: Category::Temperature, scale: UnitScale::Affine(AffineScale { factor: 5.0 / 9.0, offset: 459.67 }) },
    UnitDef { id: "kelvin", name: "Kelvin", category: Category::Temperature, scale: UnitScale::Affine(AffineScale { factor: 1.0, offset: 0.0 }) },
];

/// All units of a category, in display order
pub fn units_for(category: Category) -> &'static [UnitDef] {
    match category {
        Category::Length => &LENGTH_UNITS,
        Category::Weight => &WEIGHT_UNITS,
        Category::Temperature => &TEMPERATURE_UNITS,
    }
}

/// Look up a unit by id within a category
pub fn find_unit(category: Category, unit_id: &str) -> AppResult<&'static UnitDef> {
    units_for(category)
        .iter()
        .find(|unit| unit.id == unit_id)
        .ok_or_else(|| {
            AppError::UnknownUnit(format!("'{}' is not a {} unit", unit_id, category.as_str()))
        })
}
