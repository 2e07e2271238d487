pub mod app_config;
pub mod catalog_repo;
pub mod file;
pub mod ledger_repo;
pub mod memory;
pub mod storage;

pub use app_config::Config;
pub use catalog_repo::{bootstrap_events, CatalogStore, EVENTS_KEY};
pub use file::FileStorage;
pub use ledger_repo::{LedgerStore, BOOKINGS_KEY};
pub use memory::MemoryStorage;
pub use storage::{StorageAdapter, StorageError};
