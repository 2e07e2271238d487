use crate::models::{BookingView, FieldError, FormField, QuickRegisterOutcome, RegistrationReceipt};
use campus_domain::{validation, Booking, Event};
use campus_store::{CatalogStore, LedgerStore, StorageAdapter, StorageError};
use std::sync::Arc;
use tracing::{info, warn};

/// Shown in booking feeds when a ledger entry references an event id that no
/// longer resolves (the catalog was reset under it).
pub const DELETED_EVENT_PLACEHOLDER: &str = "(deleted event)";

/// Orchestrates catalog, ledger and validation into the two registration
/// entry points.
///
/// Every operation reloads fresh from storage before mutating, so there is no
/// shared in-memory state between invocations. Single writer assumed: two
/// hosts over one storage race as last-write-wins on `slots`.
pub struct RegistrationService {
    catalog: CatalogStore,
    ledger: LedgerStore,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Registration form is invalid")]
    Validation(Vec<FieldError>),

    #[error("Selected event not found.")]
    EventNotFound,

    #[error("Sorry, this event is fully booked.")]
    CapacityExhausted { event: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RegistrationService {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            catalog: CatalogStore::new(storage.clone()),
            ledger: LedgerStore::new(storage),
        }
    }

    /// Build over pre-configured stores (custom document keys).
    pub fn with_stores(catalog: CatalogStore, ledger: LedgerStore) -> Self {
        Self { catalog, ledger }
    }

    /// First-run hook: persist the bootstrap catalog before anything renders.
    pub fn initialize(&self) -> Result<(), StorageError> {
        self.catalog.initialize()
    }

    /// Current catalog, for the events table and the selection list.
    pub fn catalog(&self) -> Result<Vec<Event>, StorageError> {
        self.catalog.load()
    }

    /// Row-level register: consume one slot if the event exists and is open.
    ///
    /// Deliberately does NOT create a ledger entry, so capacity taken here
    /// leaves no booking trail. Unknown ids and exhausted events are no-ops.
    pub fn quick_register(&self, event_id: &str) -> Result<QuickRegisterOutcome, StorageError> {
        let mut events = self.catalog.load()?;

        let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(QuickRegisterOutcome::EventNotFound);
        };

        if event.take_slot().is_err() {
            return Ok(QuickRegisterOutcome::Full);
        }

        let event_name = event.name.clone();
        self.catalog.save(&events)?;
        info!("Booked 1 slot for '{}' via quick register", event_name);

        Ok(QuickRegisterOutcome::Booked { event_name })
    }

    /// Full registration: validate, consume one slot, record the booking.
    ///
    /// The catalog write always precedes the ledger write. If the ledger
    /// write fails the decrement stands and the error surfaces, so a ledger
    /// entry can never exist for an event that did not lose capacity.
    pub fn submit_registration(
        &self,
        name: &str,
        sid: &str,
        event_id: &str,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        let name = name.trim();
        let sid = sid.trim();

        // Check every field so the host can show all errors together.
        let mut field_errors = Vec::new();
        if !validation::is_valid_name(name) {
            field_errors.push(FieldError {
                field: FormField::Name,
                message: "Please enter your full name.".to_string(),
            });
        }
        if !validation::is_valid_student_id(sid) {
            field_errors.push(FieldError {
                field: FormField::StudentId,
                message: "Student ID should be 6–10 letters/digits and include a number (e.g., USIU123456).".to_string(),
            });
        }
        if event_id.is_empty() {
            field_errors.push(FieldError {
                field: FormField::Event,
                message: "Please choose an event.".to_string(),
            });
        }
        if !field_errors.is_empty() {
            return Err(RegistrationError::Validation(field_errors));
        }

        let mut events = self.catalog.load()?;
        let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
            return Err(RegistrationError::EventNotFound);
        };

        // Capacity may have run out between render and submit; that lands
        // here as a rejection, never as a negative count.
        if event.take_slot().is_err() {
            warn!("Registration rejected, '{}' is fully booked", event.name);
            return Err(RegistrationError::CapacityExhausted {
                event: event.name.clone(),
            });
        }

        let event_name = event.name.clone();
        self.catalog.save(&events)?;

        let booking = Booking::new(name, sid, event_id);
        self.ledger.append(&booking)?;
        info!(
            "Registration confirmed: {} ({}) for '{}', booking {}",
            name, sid, event_name, booking.id
        );

        Ok(RegistrationReceipt {
            booking,
            event_name,
        })
    }

    /// Ledger in reverse chronological order, each entry's event id resolved
    /// against the current catalog.
    pub fn recent_bookings(&self) -> Result<Vec<BookingView>, StorageError> {
        let events = self.catalog.load()?;
        let bookings = self.ledger.load()?;

        Ok(bookings
            .into_iter()
            .rev()
            .map(|booking| {
                let event_name = events
                    .iter()
                    .find(|e| e.id == booking.event_id)
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| DELETED_EVENT_PLACEHOLDER.to_string());

                BookingView {
                    id: booking.id,
                    student: booking.name,
                    sid: booking.sid,
                    event_name,
                    when: booking.when,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_store::MemoryStorage;

    fn service() -> RegistrationService {
        let service = RegistrationService::new(Arc::new(MemoryStorage::new()));
        service.initialize().unwrap();
        service
    }

    fn slots_of(service: &RegistrationService, event_id: &str) -> u32 {
        service
            .catalog()
            .unwrap()
            .into_iter()
            .find(|e| e.id == event_id)
            .unwrap()
            .slots
    }

    #[test]
    fn test_quick_register_consumes_one_slot_without_ledger_entry() {
        let service = service();

        let outcome = service.quick_register("e1").unwrap();
        assert_eq!(
            outcome,
            QuickRegisterOutcome::Booked {
                event_name: "Orientation & Clubs Fair".to_string()
            }
        );
        assert_eq!(slots_of(&service, "e1"), 39);
        assert!(service.recent_bookings().unwrap().is_empty());
    }

    #[test]
    fn test_quick_register_unknown_event_is_a_no_op() {
        let service = service();
        assert_eq!(
            service.quick_register("e9").unwrap(),
            QuickRegisterOutcome::EventNotFound
        );
        assert_eq!(service.catalog().unwrap(), campus_store::bootstrap_events());
    }

    #[test]
    fn test_validation_collects_every_failing_field() {
        let service = service();

        let err = service.submit_registration("J", "ABCDEF", "").unwrap_err();
        let RegistrationError::Validation(fields) = err else {
            panic!("expected validation error");
        };

        let failed: Vec<FormField> = fields.iter().map(|f| f.field).collect();
        assert_eq!(failed, vec![FormField::Name, FormField::StudentId, FormField::Event]);

        // Nothing mutated.
        assert_eq!(service.catalog().unwrap(), campus_store::bootstrap_events());
        assert!(service.recent_bookings().unwrap().is_empty());
    }

    #[test]
    fn test_submit_trims_name_and_sid() {
        let service = service();

        let receipt = service
            .submit_registration("  Jane Doe  ", " USIU000001 ", "e3")
            .unwrap();
        assert_eq!(receipt.booking.name, "Jane Doe");
        assert_eq!(receipt.booking.sid, "USIU000001");
    }

    #[test]
    fn test_submit_unknown_event_reports_not_found() {
        let service = service();
        let err = service
            .submit_registration("Jane Doe", "USIU000001", "e9")
            .unwrap_err();
        assert!(matches!(err, RegistrationError::EventNotFound));
        assert!(service.recent_bookings().unwrap().is_empty());
    }

    #[test]
    fn test_recent_bookings_resolve_names_newest_first() {
        let service = service();
        service
            .submit_registration("Jane Doe", "USIU000001", "e3")
            .unwrap();
        service
            .submit_registration("John Mwangi", "USIU000002", "e1")
            .unwrap();

        let feed = service.recent_bookings().unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].student, "John Mwangi");
        assert_eq!(feed[0].event_name, "Orientation & Clubs Fair");
        assert_eq!(feed[1].student, "Jane Doe");
        assert_eq!(feed[1].event_name, "Mental Health Workshop");
    }

    #[test]
    fn test_recent_bookings_placeholder_for_vanished_event() {
        let storage: Arc<dyn StorageAdapter> = Arc::new(MemoryStorage::new());
        let service = RegistrationService::new(storage.clone());
        service.initialize().unwrap();
        service
            .submit_registration("Jane Doe", "USIU000001", "e3")
            .unwrap();

        // Catalog reset drops e3; the ledger entry survives as a weak ref.
        let catalog = CatalogStore::new(storage);
        catalog.save(&[]).unwrap();

        let feed = service.recent_bookings().unwrap();
        assert_eq!(feed[0].event_name, DELETED_EVENT_PLACEHOLDER);
    }
}
