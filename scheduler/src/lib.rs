//! # Dental Scheduler
//!
//! View-model for the clinic's weekly appointment calendar.
//!
//! The crate maps appointments onto a fixed weekly time grid, keeps the
//! week navigation and appointment cache state for one open calendar view,
//! and routes create/edit/delete interactions to the clinic's remote CRUD
//! API behind the [`api::ClinicApi`] port. It owns no transport, no
//! persistence, and no rendering; those concerns belong to the
//! collaborators and the UI layer respectively.
//!
//! ## Module Organization
//!
//! - **domain**: pure business logic (grid computation, form validation)
//! - **api**: collaborator ports and the in-memory reference implementation
//! - **state**: explicit session state (week anchor, cache, modal)
//! - **session**: the single controller entry point tying it all together

pub mod api;
pub mod domain;
pub mod session;
pub mod state;

pub use session::CalendarSession;
