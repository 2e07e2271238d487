pub mod models;
pub mod registration;

pub use models::{BookingView, FieldError, FormField, QuickRegisterOutcome, RegistrationReceipt};
pub use registration::{RegistrationError, RegistrationService, DELETED_EVENT_PLACEHOLDER};
