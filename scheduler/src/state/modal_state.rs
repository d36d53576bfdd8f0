//! # Modal State Module
//!
//! This module contains all state related to the appointment modal and the
//! delete-confirmation flow.
//!
//! ## Responsibilities:
//! - The single open create/edit modal instance and its form buffer
//! - Field-scoped validation errors and submission progress
//! - The pending delete awaiting explicit confirmation
//!
//! ## Purpose:
//! This centralizes modal-related state management so that only one modal
//! can ever be open and the open/submit/close lifecycle stays coordinated.

use chrono::NaiveDateTime;
use shared::{AppointmentStatus, Patient, Staff};

use crate::domain::appointment_form::{AppointmentDraft, AppointmentField, AppointmentFormError};

/// What an open modal is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalIntent {
    /// Creating a new appointment
    Create,
    /// Editing the appointment with this id
    Edit { appointment_id: String },
}

/// One open create/edit modal instance.
///
/// Lifecycle: opened → (edited, possibly rejected with field errors) →
/// submitting → closed on success, or reopened with a submit error on
/// failure.
#[derive(Debug, Clone)]
pub struct AppointmentModal {
    pub intent: ModalIntent,
    pub draft: AppointmentDraft,

    /// Validation errors from the last rejected submission
    pub field_errors: Vec<AppointmentFormError>,

    /// Remote failure from the last submission attempt
    pub submit_error: Option<String>,

    /// Whether a submission is currently in flight
    pub submitting: bool,

    /// Patient options, reloaded every time a modal opens
    pub patients: Vec<Patient>,

    /// Dentist options, reloaded every time a modal opens
    pub dentists: Vec<Staff>,
}

impl AppointmentModal {
    /// Modal for a create intent.
    pub fn create(draft: AppointmentDraft) -> Self {
        Self::with_intent(ModalIntent::Create, draft)
    }

    /// Modal for an edit intent, keyed by the appointment id.
    pub fn edit(appointment_id: String, draft: AppointmentDraft) -> Self {
        Self::with_intent(ModalIntent::Edit { appointment_id }, draft)
    }

    fn with_intent(intent: ModalIntent, draft: AppointmentDraft) -> Self {
        Self {
            intent,
            draft,
            field_errors: Vec::new(),
            submit_error: None,
            submitting: false,
            patients: Vec::new(),
            dentists: Vec::new(),
        }
    }

    /// First error scoped to the given field, if any.
    pub fn field_error(&self, field: AppointmentField) -> Option<&AppointmentFormError> {
        self.field_errors.iter().find(|error| error.field() == field)
    }

    pub fn set_patient(&mut self, patient_id: impl Into<String>) {
        self.draft.patient_id = patient_id.into();
        self.clear_field_error(AppointmentField::PatientId);
    }

    pub fn set_dentist(&mut self, dentist_id: impl Into<String>) {
        self.draft.dentist_id = dentist_id.into();
        self.clear_field_error(AppointmentField::DentistId);
    }

    pub fn set_start_time(&mut self, start_time: Option<NaiveDateTime>) {
        self.draft.start_time = start_time;
        self.clear_field_error(AppointmentField::StartTime);
    }

    pub fn set_duration_minutes(&mut self, duration_minutes: u32) {
        self.draft.duration_minutes = duration_minutes;
        self.clear_field_error(AppointmentField::DurationMinutes);
    }

    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.draft.status = Some(status);
        self.clear_field_error(AppointmentField::Status);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Editing a field clears that field's error, leaving the others.
    fn clear_field_error(&mut self, field: AppointmentField) {
        self.field_errors.retain(|error| error.field() != field);
    }
}

/// Modal visibility and delete-confirmation state for the calendar view.
#[derive(Debug, Default)]
pub struct ModalState {
    /// The open modal, if any. Only one may be open at a time.
    pub active: Option<AppointmentModal>,

    /// Appointment id awaiting an explicit delete confirmation
    pub pending_delete: Option<String>,
}

impl ModalState {
    /// Create modal state with no modal open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a modal, closing any previously open one first.
    pub fn open(&mut self, modal: AppointmentModal) {
        if self.active.is_some() {
            log::info!("📅 Closing previously open modal before opening a new one");
        }
        self.active = Some(modal);
    }

    /// Close the open modal, if any.
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> AppointmentDraft {
        AppointmentDraft::for_slot(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(), 14)
    }

    #[test]
    fn test_opening_replaces_prior_modal() {
        let mut state = ModalState::new();
        state.open(AppointmentModal::create(draft()));
        state.open(AppointmentModal::edit("a1".to_string(), draft()));

        let active = state.active.as_ref().unwrap();
        assert_eq!(
            active.intent,
            ModalIntent::Edit {
                appointment_id: "a1".to_string()
            }
        );
        assert!(state.is_open());

        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut modal = AppointmentModal::create(draft());
        modal.field_errors = vec![
            AppointmentFormError::MissingPatient,
            AppointmentFormError::DurationTooShort,
        ];

        modal.set_patient("p1");
        assert!(modal.field_error(AppointmentField::PatientId).is_none());
        assert!(modal
            .field_error(AppointmentField::DurationMinutes)
            .is_some());

        modal.set_duration_minutes(30);
        assert!(modal.field_errors.is_empty());
    }

    #[test]
    fn test_setters_update_the_draft() {
        let mut modal = AppointmentModal::create(draft());
        modal.set_dentist("d2");
        modal.set_status(AppointmentStatus::Confirmed);
        modal.set_notes("revisión");

        assert_eq!(modal.draft.dentist_id, "d2");
        assert_eq!(modal.draft.status, Some(AppointmentStatus::Confirmed));
        assert_eq!(modal.draft.notes, "revisión");
    }
}
