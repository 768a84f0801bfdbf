use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::settings::WidgetSettings;
use super::types::FavoriteRecord;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "bindings/")]
pub enum AppEvent {
    #[serde(rename = "favorites://updated")]
    FavoritesUpdated(Vec<FavoriteRecord>),

    #[serde(rename = "settings://updated")]
    SettingsUpdated(WidgetSettings),

    #[serde(rename = "widget://ready")]
    WidgetReady,
}

/// Severity of a user-facing notice; maps onto the frontend's toast icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
    Question,
}

/// A transient user-facing signal. The backend states what happened; the
/// frontend decides how to render it (toast, dialog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn question(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Question, message: message.into() }
    }
}
