use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub documents: DocumentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory `FileStorage` keeps its documents in.
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    pub events_key: String,
    pub bookings_key: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("storage.data_dir", "data")?
            .set_default("documents.events_key", crate::EVENTS_KEY)?
            .set_default("documents.bookings_key", crate::BOOKINGS_KEY)?
            // Optional configuration files layered over the defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `CAMPUS_STORAGE__DATA_DIR=/var/lib/campus`
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
