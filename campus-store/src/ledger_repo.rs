use crate::storage::{StorageAdapter, StorageError};
use campus_domain::Booking;
use std::sync::Arc;

/// Document key the booking ledger persists under.
pub const BOOKINGS_KEY: &str = "usiu_bookings_v1";

/// Repository for the booking ledger document. Append-only by convention:
/// callers add entries, nothing edits or removes them.
pub struct LedgerStore {
    storage: Arc<dyn StorageAdapter>,
    key: String,
}

impl LedgerStore {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self::with_key(storage, BOOKINGS_KEY)
    }

    pub fn with_key(storage: Arc<dyn StorageAdapter>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persisted ledger if present, else the empty sequence.
    pub fn load(&self) -> Result<Vec<Booking>, StorageError> {
        match self.storage.read(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and fully overwrite the ledger document.
    pub fn save(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(bookings).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;

        self.storage.write(&self.key, &raw)
    }

    /// Reload, append one entry, persist.
    pub fn append(&self, booking: &Booking) -> Result<(), StorageError> {
        let mut bookings = self.load()?;
        bookings.push(booking.clone());
        self.save(&bookings)
    }
}
