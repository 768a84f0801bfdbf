//! Wire types shared with the webview frontend.
//!
//! Everything here crosses the bridge as JSON; the ts-rs derives keep the
//! frontend's TypeScript in lockstep (see `types_test.rs`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::events::Notice;

// Rich unit data transfer object for the widget's select boxes
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UnitDto {
    pub id: String,       // Unit key (e.g., "mm", "celsius")
    pub label: String,    // Display name (e.g., "Millimeters")
    pub category: String, // Category key (e.g., "length")
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
}

/// Conversion driven by the raw text of the value field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RawConvertRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub raw_value: String,
}

/// Result-field text; empty when the input held no usable number.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RawConvertResponse {
    pub formatted_result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParseQuantityResponse {
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

/// A saved conversion.
///
/// The serialized field names (`type`, `fromValue`, ...) are fixed: they are
/// the persisted layout of the favorites blob and must stay readable by
/// existing installations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct FavoriteRecord {
    #[serde(rename = "type")]
    pub category: String,
    pub from_value: String,
    pub to_value: String,
    pub from_unit: String,
    pub to_unit: String,
}

/// One favorite plus its ready-to-render list line.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FavoriteListItem {
    pub display: String,
    pub record: FavoriteRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteListItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SaveFavoriteResponse {
    pub favorites: Vec<FavoriteListItem>,
    pub notice: Notice,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RemoveFavoriteResponse {
    pub favorites: Vec<FavoriteListItem>,
    pub notice: Notice,
}
