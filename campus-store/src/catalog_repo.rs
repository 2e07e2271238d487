use crate::storage::{StorageAdapter, StorageError};
use campus_domain::Event;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Document key the event catalog persists under.
pub const EVENTS_KEY: &str = "usiu_events_v1";

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Base sample events. If storage holds a saved catalog, that wins.
pub fn bootstrap_events() -> Vec<Event> {
    vec![
        Event::new("e1", "Orientation & Clubs Fair", seed_date(2025, 9, 5), "Main Quad", 40),
        Event::new("e2", "Tech Talk: AI in Africa", seed_date(2025, 9, 12), "Lecture Hall 2", 30),
        Event::new("e3", "Mental Health Workshop", seed_date(2025, 9, 19), "Counseling Centre", 25),
        Event::new("e4", "Career Fair", seed_date(2025, 10, 3), "Auditorium", 60),
        Event::new("e5", "Homecoming Concert", seed_date(2025, 10, 10), "Sports Grounds", 150),
    ]
}

/// Repository for the event catalog document.
pub struct CatalogStore {
    storage: Arc<dyn StorageAdapter>,
    key: String,
}

impl CatalogStore {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self::with_key(storage, EVENTS_KEY)
    }

    pub fn with_key(storage: Arc<dyn StorageAdapter>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persisted catalog if present, else the bootstrap sequence.
    /// Never writes; seeding storage is `initialize`'s job.
    pub fn load(&self) -> Result<Vec<Event>, StorageError> {
        match self.storage.read(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => Ok(bootstrap_events()),
        }
    }

    /// First-run hook: persist the bootstrap catalog when no document exists,
    /// so every later load sees the same stable sequence.
    pub fn initialize(&self) -> Result<(), StorageError> {
        if self.storage.read(&self.key)?.is_none() {
            info!("No catalog document found under '{}', seeding bootstrap events", self.key);
            self.save(&bootstrap_events())?;
        }

        Ok(())
    }

    /// Serialize and fully overwrite the catalog document (last writer wins).
    pub fn save(&self, events: &[Event]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(events).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;

        self.storage.write(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn store() -> CatalogStore {
        CatalogStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_falls_back_to_bootstrap() {
        let catalog = store();
        let events = catalog.load().unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(events[0].id, "e1");
        assert_eq!(events[4].slots, 150);
    }

    #[test]
    fn test_load_alone_does_not_seed_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let catalog = CatalogStore::new(storage.clone());

        catalog.load().unwrap();
        assert!(storage.read(EVENTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_initialize_seeds_once() {
        let storage = Arc::new(MemoryStorage::new());
        let catalog = CatalogStore::new(storage.clone());

        catalog.initialize().unwrap();
        assert!(storage.read(EVENTS_KEY).unwrap().is_some());

        // A second initialize must not clobber saved state.
        let mut events = catalog.load().unwrap();
        events[0].slots -= 1;
        catalog.save(&events).unwrap();

        catalog.initialize().unwrap();
        assert_eq!(catalog.load().unwrap()[0].slots, 39);
    }

    #[test]
    fn test_save_load_round_trip_preserves_order_and_fields() {
        let catalog = store();
        let events = bootstrap_events();

        catalog.save(&events).unwrap();
        assert_eq!(catalog.load().unwrap(), events);
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(EVENTS_KEY, "not json").unwrap();

        let catalog = CatalogStore::new(storage);
        assert!(matches!(
            catalog.load(),
            Err(StorageError::Corrupt { .. })
        ));
    }
}
