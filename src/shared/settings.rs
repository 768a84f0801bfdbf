use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use directories::ProjectDirs;
use ts_rs::TS;

use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WidgetSettings {
    pub preferences: ConverterPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConverterPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            preferences: ConverterPreferences {
                default_category: "length".to_string(),
                default_from_unit: "m".to_string(),
                default_to_unit: "ft".to_string(),
            },
        }
    }
}

impl WidgetSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "unit-converter-widget")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Storage("Failed to determine config directory".to_string()))
    }

    pub fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save()?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| AppError::Storage(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Validation(format!("Failed to parse settings: {}", e)))
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Validation(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| AppError::Storage(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let settings = WidgetSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: WidgetSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.preferences.default_category, "length");
        assert_eq!(parsed.preferences.default_from_unit, "m");
        assert_eq!(parsed.preferences.default_to_unit, "ft");
    }
}
