use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event, derived from its remaining capacity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Open,
    Full,
}

/// A bookable campus event with remaining capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    pub slots: u32,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: NaiveDate, venue: impl Into<String>, slots: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            venue: venue.into(),
            slots,
        }
    }

    pub fn status(&self) -> EventStatus {
        if self.slots > 0 {
            EventStatus::Open
        } else {
            EventStatus::Full
        }
    }

    pub fn is_open(&self) -> bool {
        self.slots > 0
    }

    /// Consume one slot. Refuses at zero so capacity can never go negative.
    pub fn take_slot(&mut self) -> Result<(), CapacityError> {
        if self.slots == 0 {
            return Err(CapacityError::Exhausted {
                event: self.name.clone(),
            });
        }

        self.slots -= 1;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("Event is fully booked: {event}")]
    Exhausted { event: String },
}
