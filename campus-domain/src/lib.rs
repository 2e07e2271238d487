pub mod booking;
pub mod event;
pub mod validation;

pub use booking::Booking;
pub use event::{CapacityError, Event, EventStatus};
pub use validation::{is_valid_event_selection, is_valid_name, is_valid_student_id};
