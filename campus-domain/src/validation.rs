use crate::event::Event;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 6-10 alphanumeric characters, e.g. USIU123456 or 12345678 or AA123456
    static ref STUDENT_ID: Regex = Regex::new(r"^[A-Za-z0-9]{6,10}$").unwrap();
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
}

/// A student id is 6-10 alphanumeric characters containing at least one digit.
pub fn is_valid_student_id(sid: &str) -> bool {
    STUDENT_ID.is_match(sid) && HAS_DIGIT.is_match(sid)
}

/// A name is anything at least two characters long after trimming.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// An event selection is a non-empty id that resolves in the given catalog.
pub fn is_valid_event_selection(event_id: &str, events: &[Event]) -> bool {
    !event_id.is_empty() && events.iter().any(|event| event.id == event_id)
}
