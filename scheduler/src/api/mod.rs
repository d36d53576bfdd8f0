//! # Clinic API Ports
//!
//! This module defines the collaborator interface between the scheduling
//! view-model and the clinic's remote CRUD API.
//!
//! The trait abstracts away the transport (HTTP/JSON in production), allowing
//! the session to be exercised against any implementation without
//! modification. Tenant scoping, authorization, and timeouts are the
//! collaborator's responsibility; the view-model imposes none itself.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Appointment, AppointmentPayload, Patient, Staff};

pub mod memory;

pub use memory::InMemoryClinicApi;

/// Interface to appointment persistence and directory lookups.
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// List the appointments whose start date falls within the inclusive
    /// date range, for the caller's tenant.
    async fn fetch_appointments_by_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Appointment>>;

    /// Persist a new appointment. Returns the stored entity including its
    /// server-assigned id and denormalized display names.
    async fn create_appointment(&self, payload: AppointmentPayload) -> Result<Appointment>;

    /// Replace every writable field of an existing appointment (full
    /// replace, not a partial patch).
    async fn update_appointment(&self, id: &str, payload: AppointmentPayload)
        -> Result<Appointment>;

    /// Delete an appointment. An unknown id is reported as a failure.
    async fn delete_appointment(&self, id: &str) -> Result<()>;

    /// Patients offered in the appointment form's selection field.
    async fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Dentists offered in the appointment form's selection field.
    async fn list_dentists(&self) -> Result<Vec<Staff>>;
}
