//! # Session State
//!
//! Explicit state owned by one open calendar view.
//!
//! Everything that the original UI kept in ambient component state lives
//! here in plain structs: the week anchor and appointment cache, and the
//! modal/delete-confirmation state. All mutation is routed through the
//! calendar session so the behavior is testable without a rendering
//! environment.

pub mod calendar_state;
pub mod modal_state;

pub use calendar_state::CalendarState;
pub use modal_state::{AppointmentModal, ModalIntent, ModalState};
