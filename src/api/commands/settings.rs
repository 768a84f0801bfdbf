//! Settings command module
//!
//! Handles widget settings persistence.

use crate::shared::error::AppResult;
use crate::shared::settings::WidgetSettings;

/// Get current widget settings
pub fn get_settings() -> AppResult<WidgetSettings> {
    WidgetSettings::load()
}

/// Save widget settings
pub fn save_settings(settings: &WidgetSettings) -> AppResult<()> {
    settings.save()
}
