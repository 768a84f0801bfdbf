//! Favorites commands
//!
//! The store stays free of presentation concerns: these adapters turn store
//! results into response DTOs and notices, and the deletion flow is split in
//! two so the frontend can gate the actual removal behind its confirmation
//! dialog.

use crate::core::catalog::{self, Category};
use crate::core::favorites::FavoritesStore;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::Notice;
use crate::shared::types::{
    FavoriteListItem, FavoriteRecord, FavoritesResponse, RemoveFavoriteResponse,
    SaveFavoriteResponse,
};

fn unit_label(category: Category, unit_id: &str) -> String {
    catalog::find_unit(category, unit_id)
        .map(|def| def.name.to_string())
        .unwrap_or_else(|_| unit_id.to_string())
}

/// Widget-facing line for one saved conversion, e.g.
/// "Length: 1 Meters → 100.0000 Centimeters"
fn display_string(record: &FavoriteRecord) -> String {
    match Category::parse(&record.category) {
        Ok(category) => format!(
            "{}: {} {} → {} {}",
            category.label(),
            record.from_value,
            unit_label(category, &record.from_unit),
            record.to_value,
            unit_label(category, &record.to_unit),
        ),
        // Records from an older catalog still render, just unprettified
        Err(_) => format!(
            "{}: {} {} → {} {}",
            record.category, record.from_value, record.from_unit, record.to_value, record.to_unit
        ),
    }
}

fn list_items(store: &FavoritesStore) -> Vec<FavoriteListItem> {
    store
        .list()
        .into_iter()
        .map(|record| FavoriteListItem {
            display: display_string(&record),
            record,
        })
        .collect()
}

/// Saved conversions in insertion order
pub fn list_favorites(store: &FavoritesStore) -> FavoritesResponse {
    FavoritesResponse {
        favorites: list_items(store),
    }
}

/// Append a conversion to the favorites and persist immediately.
///
/// An empty source value comes back as a Validation error the frontend shows
/// as a warning toast.
pub fn save_favorite(
    store: &FavoritesStore,
    record: FavoriteRecord,
) -> AppResult<SaveFavoriteResponse> {
    store.add(record)?;

    Ok(SaveFavoriteResponse {
        favorites: list_items(store),
        notice: Notice::success("Added to favorites."),
    })
}

/// The confirmation prompt shown before removal. Validates the index so the
/// prompt can never target a nonexistent favorite.
pub fn confirm_remove_favorite(store: &FavoritesStore, index: usize) -> AppResult<Notice> {
    let count = store.count();
    if index >= count {
        return Err(AppError::IndexOutOfRange(format!(
            "No favorite at position {} (have {})",
            index, count
        )));
    }

    Ok(Notice::question("Remove this favorite?"))
}

/// Remove the favorite at `index`. Called only after the confirmation prompt
/// was accepted.
pub fn remove_favorite(store: &FavoritesStore, index: usize) -> AppResult<RemoveFavoriteResponse> {
    store.remove_at(index)?;

    Ok(RemoveFavoriteResponse {
        favorites: list_items(store),
        notice: Notice::success("Favorite removed."),
    })
}

/// One-time readiness notice shown when the widget finishes loading
pub fn startup_notice() -> Notice {
    Notice::info("Unit converter is ready.")
}
