//! Favorites persistence
//!
//! Saved conversions form one ordered list, serialized wholesale into a
//! single key of an embedded database. Every mutation rewrites the entire
//! blob (replace-on-write); the widget is the only writer, so there is no
//! append log and no partial-write recovery.

use std::path::Path;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::FavoriteRecord;

/// Redb table for the favorites blob.
/// Key: storage slot name, Value: JSON array of FavoriteRecord
const FAVORITES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("favorites");

/// Storage slot the serialized list lives under
const FAVORITES_KEY: &str = "unitConverterFavorites";

/// Storage backend for the favorites list
pub trait Storage: Send + Sync {
    /// The whole persisted list; absent or unreadable data reads as empty.
    fn load_all(&self) -> Vec<FavoriteRecord>;
    /// Replace the whole persisted list.
    fn store_all(&self, records: &[FavoriteRecord]) -> AppResult<()>;
}

/// Redb-based storage implementation
pub struct RedbStorage {
    db: Arc<Mutex<Database>>,
}

impl RedbStorage {
    /// Open (or create) the database in the platform data directory.
    pub fn new() -> AppResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "antigravity", "unit-converter-widget")
            .ok_or_else(|| AppError::Storage("Failed to get project directories".to_string()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| AppError::Storage(format!("Failed to create data directory: {}", e)))?;

        Self::open(&data_dir.join("favorites.redb"))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(path: &Path) -> AppResult<Self> {
        let db = Database::create(path)
            .map_err(|e| AppError::Storage(format!("Failed to open database: {}", e)))?;

        // Initialize table so reads never see a missing table
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| AppError::Storage(format!("Failed to begin write transaction: {}", e)))?;
            {
                let _table = write_txn
                    .open_table(FAVORITES_TABLE)
                    .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;
            }
            write_txn
                .commit()
                .map_err(|e| AppError::Storage(format!("Failed to commit transaction: {}", e)))?;
        }

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    fn read_blob(&self) -> AppResult<Option<String>> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let read_txn = db
            .begin_read()
            .map_err(|e| AppError::Storage(format!("Failed to begin read: {}", e)))?;

        let table = read_txn
            .open_table(FAVORITES_TABLE)
            .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;

        let blob = table
            .get(FAVORITES_KEY)
            .map_err(|e| AppError::Storage(format!("Failed to read favorites slot: {}", e)))?
            .map(|guard| guard.value().to_string());

        Ok(blob)
    }
}

impl Storage for RedbStorage {
    fn load_all(&self) -> Vec<FavoriteRecord> {
        let blob = match self.read_blob() {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                eprintln!("[FavoritesStore] Failed to read favorites: {}", e);
                return Vec::new();
            }
        };

        // A corrupt payload reads as empty rather than breaking the widget;
        // the next successful mutation overwrites it wholesale
        serde_json::from_str(&blob).unwrap_or_else(|e| {
            eprintln!("[FavoritesStore] Discarding corrupt favorites payload: {}", e);
            Vec::new()
        })
    }

    fn store_all(&self, records: &[FavoriteRecord]) -> AppResult<()> {
        let serialized = serde_json::to_string(records)
            .map_err(|e| AppError::Storage(format!("Failed to serialize favorites: {}", e)))?;

        let db = self
            .db
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;

        let write_txn = db
            .begin_write()
            .map_err(|e| AppError::Storage(format!("Failed to begin write: {}", e)))?;

        {
            let mut table = write_txn
                .open_table(FAVORITES_TABLE)
                .map_err(|e| AppError::Storage(format!("Failed to open table: {}", e)))?;

            table
                .insert(FAVORITES_KEY, serialized.as_str())
                .map_err(|e| AppError::Storage(format!("Failed to write favorites slot: {}", e)))?;
        }

        write_txn
            .commit()
            .map_err(|e| AppError::Storage(format!("Failed to commit: {}", e)))?;

        Ok(())
    }
}

/// In-memory storage (fallback when the database cannot be opened, and the
/// unit-test double)
pub struct InMemoryStorage {
    records: Mutex<Vec<FavoriteRecord>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn load_all(&self) -> Vec<FavoriteRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store_all(&self, records: &[FavoriteRecord]) -> AppResult<()> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| AppError::Storage(format!("Mutex poisoned: {}", e)))?;
        *guard = records.to_vec();
        Ok(())
    }
}

/// Ordered favorites list over a storage backend
pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
}

impl FavoritesStore {
    /// Create a store backed by the on-disk database, falling back to memory
    /// if the database cannot be opened.
    pub fn new() -> Self {
        let storage: Arc<dyn Storage> = match RedbStorage::new() {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                eprintln!(
                    "[FavoritesStore] Failed to initialize database: {}, using in-memory fallback",
                    e
                );
                Arc::new(InMemoryStorage::new())
            }
        };

        Self { storage }
    }

    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All saved conversions, oldest first.
    pub fn list(&self) -> Vec<FavoriteRecord> {
        self.storage.load_all()
    }

    /// Number of saved conversions.
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Append a record and persist the full list immediately.
    ///
    /// A record with an empty source value is rejected; the frontend surfaces
    /// that as a warning instead of silently ignoring the save.
    pub fn add(&self, record: FavoriteRecord) -> AppResult<()> {
        if record.from_value.trim().is_empty() {
            return Err(AppError::Validation(
                "Enter a value to convert before saving".to_string(),
            ));
        }

        let mut records = self.storage.load_all();
        records.push(record);
        self.storage.store_all(&records)
    }

    /// Remove the record at `index`, shifting later records down by one.
    ///
    /// An out-of-range index fails before anything is persisted.
    pub fn remove_at(&self, index: usize) -> AppResult<FavoriteRecord> {
        let mut records = self.storage.load_all();

        if index >= records.len() {
            return Err(AppError::IndexOutOfRange(format!(
                "No favorite at position {} (have {})",
                index,
                records.len()
            )));
        }

        let removed = records.remove(index);
        self.storage.store_all(&records)?;
        Ok(removed)
    }

    /// Get a clone sharing the same backend.
    pub fn clone_arc(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> FavoritesStore {
        FavoritesStore::with_storage(Arc::new(InMemoryStorage::new()))
    }

    fn record(from_value: &str, to_value: &str) -> FavoriteRecord {
        FavoriteRecord {
            category: "length".to_string(),
            from_value: from_value.to_string(),
            to_value: to_value.to_string(),
            from_unit: "m".to_string(),
            to_unit: "cm".to_string(),
        }
    }

    #[test]
    fn test_add_then_list_appends() {
        let store = memory_store();

        store.add(record("1", "100.0000")).unwrap();
        store.add(record("2", "200.0000")).unwrap();

        let records = store.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records.last().unwrap(), &record("2", "200.0000"));
    }

    #[test]
    fn test_add_rejects_empty_source_value() {
        let store = memory_store();

        let err = store.add(record("", "")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = store.add(record("   ", "")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_remove_at_shifts_later_records() {
        let store = memory_store();
        store.add(record("1", "a")).unwrap();
        store.add(record("2", "b")).unwrap();
        store.add(record("3", "c")).unwrap();

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.from_value, "2");

        let records = store.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].from_value, "1");
        assert_eq!(records[1].from_value, "3");
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_list_untouched() {
        let store = memory_store();
        store.add(record("1", "a")).unwrap();

        let err = store.remove_at(1).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange(_)));

        let err = store.remove_at(5).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange(_)));

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(memory_store().list().is_empty());
    }

    #[test]
    fn test_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.redb");

        {
            let store =
                FavoritesStore::with_storage(Arc::new(RedbStorage::open(&path).unwrap()));
            store.add(record("1", "100.0000")).unwrap();
            store.add(record("2", "200.0000")).unwrap();
        }

        // Fresh handle on the same file, as after a widget restart
        let store = FavoritesStore::with_storage(Arc::new(RedbStorage::open(&path).unwrap()));
        let records = store.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].from_value, "1");
        assert_eq!(records[1].from_value, "2");
    }

    #[test]
    fn test_corrupt_payload_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.redb");

        {
            let db = Database::create(&path).unwrap();
            let write_txn = db.begin_write().unwrap();
            {
                let mut table = write_txn.open_table(FAVORITES_TABLE).unwrap();
                table.insert(FAVORITES_KEY, "not json at all").unwrap();
            }
            write_txn.commit().unwrap();
        }

        let store = FavoritesStore::with_storage(Arc::new(RedbStorage::open(&path).unwrap()));
        assert!(store.list().is_empty());

        // The next mutation replaces the corrupt blob entirely
        store.add(record("1", "100.0000")).unwrap();
        assert_eq!(store.count(), 1);
    }
}
