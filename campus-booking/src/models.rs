use campus_domain::Booking;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of the row-level quick-register action.
///
/// This path adjusts capacity only; it never writes a ledger entry. The
/// non-booked outcomes are silent no-ops for the host to render as it sees
/// fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickRegisterOutcome {
    Booked { event_name: String },
    EventNotFound,
    Full,
}

/// What a successful full registration reports back: the persisted ledger
/// entry plus the chosen event's name for the confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReceipt {
    pub booking: Booking,
    pub event_name: String,
}

/// Form fields checked at submit time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormField {
    Name,
    StudentId,
    Event,
}

/// One failed field with the message to show inline.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// A ledger entry joined with the current catalog for display.
#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: Uuid,
    pub student: String,
    pub sid: String,
    pub event_name: String,
    pub when: DateTime<Utc>,
}
