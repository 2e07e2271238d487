use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed registration. Appended to the ledger once, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub name: String,
    pub sid: String,
    pub event_id: String,
    pub when: DateTime<Utc>,
}

impl Booking {
    pub fn new(name: impl Into<String>, sid: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sid: sid.into(),
            event_id: event_id.into(),
            when: Utc::now(),
        }
    }
}
