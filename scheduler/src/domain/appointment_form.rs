//! Appointment form domain logic.
//!
//! This module contains the business rules for the create/edit appointment
//! form: draft construction, field validation, and assembly of the payload
//! sent to the clinic API. The UI should only handle presentation concerns,
//! while all validation rules are handled here.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use shared::{Appointment, AppointmentPayload, AppointmentStatus};
use thiserror::Error;

/// Minimum appointment length accepted by the clinic, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 15;
/// Duration preselected when a new appointment form opens.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    PatientId,
    DentistId,
    StartTime,
    DurationMinutes,
    Status,
}

/// Field-scoped validation failures for the appointment form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentFormError {
    #[error("Debe seleccionar un paciente")]
    MissingPatient,
    #[error("Debe seleccionar un dentista")]
    MissingDentist,
    #[error("La fecha y hora son requeridas")]
    MissingStartTime,
    #[error("La duración debe ser al menos 15 minutos")]
    DurationTooShort,
    #[error("El estado es requerido")]
    MissingStatus,
}

impl AppointmentFormError {
    /// The form field this error is scoped to.
    pub fn field(&self) -> AppointmentField {
        match self {
            AppointmentFormError::MissingPatient => AppointmentField::PatientId,
            AppointmentFormError::MissingDentist => AppointmentField::DentistId,
            AppointmentFormError::MissingStartTime => AppointmentField::StartTime,
            AppointmentFormError::DurationTooShort => AppointmentField::DurationMinutes,
            AppointmentFormError::MissingStatus => AppointmentField::Status,
        }
    }
}

/// Editable buffer behind one create/edit modal instance.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub dentist_id: String,
    pub start_time: Option<NaiveDateTime>,
    pub duration_minutes: u32,
    pub status: Option<AppointmentStatus>,
    pub notes: String,
}

impl AppointmentDraft {
    /// Draft for a create intent seeded from a grid slot: the slot's exact
    /// day and hour with minutes and seconds zeroed.
    pub fn for_slot(day: NaiveDate, hour: u32) -> Self {
        Self {
            patient_id: String::new(),
            dentist_id: String::new(),
            start_time: day.and_hms_opt(hour, 0, 0),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            status: Some(AppointmentStatus::Scheduled),
            notes: String::new(),
        }
    }

    /// Draft for a create intent opened without a slot, seeded with the
    /// given moment truncated to minute precision.
    pub fn for_time(moment: NaiveDateTime) -> Self {
        Self {
            patient_id: String::new(),
            dentist_id: String::new(),
            start_time: truncate_to_minute(moment),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            status: Some(AppointmentStatus::Scheduled),
            notes: String::new(),
        }
    }

    /// Draft for an edit intent, pre-filled from the existing appointment.
    /// The start time is presented truncated to minute precision.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            patient_id: appointment.patient_id.clone(),
            dentist_id: appointment.dentist_id.clone(),
            start_time: truncate_to_minute(appointment.start_time),
            duration_minutes: appointment.duration_minutes,
            status: Some(appointment.status),
            notes: appointment.notes.clone().unwrap_or_default(),
        }
    }
}

fn truncate_to_minute(moment: NaiveDateTime) -> Option<NaiveDateTime> {
    moment.with_second(0).and_then(|t| t.with_nanosecond(0))
}

/// Outcome of validating a draft. `payload` is populated only when every
/// rule passes; an invalid draft never reaches the clinic API.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<AppointmentFormError>,
    pub payload: Option<AppointmentPayload>,
}

/// Validate a draft against the submission rules.
///
/// All rules are checked so that every failing field gets its own scoped
/// message at once, rather than stopping at the first failure.
pub fn validate_draft(draft: &AppointmentDraft) -> AppointmentFormValidation {
    let mut errors = Vec::new();

    if draft.patient_id.trim().is_empty() {
        errors.push(AppointmentFormError::MissingPatient);
    }
    if draft.dentist_id.trim().is_empty() {
        errors.push(AppointmentFormError::MissingDentist);
    }
    if draft.start_time.is_none() {
        errors.push(AppointmentFormError::MissingStartTime);
    }
    if draft.duration_minutes < MIN_DURATION_MINUTES {
        errors.push(AppointmentFormError::DurationTooShort);
    }
    if draft.status.is_none() {
        errors.push(AppointmentFormError::MissingStatus);
    }

    let payload = match (errors.is_empty(), draft.start_time, draft.status) {
        (true, Some(start_time), Some(status)) => Some(AppointmentPayload {
            patient_id: draft.patient_id.trim().to_string(),
            dentist_id: draft.dentist_id.trim().to_string(),
            start_time,
            duration_minutes: draft.duration_minutes,
            status,
            notes: match draft.notes.trim() {
                "" => None,
                notes => Some(notes.to_string()),
            },
        }),
        _ => None,
    };

    AppointmentFormValidation {
        is_valid: errors.is_empty(),
        errors,
        payload,
    }
}
