//! In-memory implementation of the clinic API.
//!
//! Mirrors the observable behavior of the remote collaborator: ids are
//! assigned server-side, reads carry denormalized patient and dentist names,
//! and writes against unknown ids fail. Failure injection and call counters
//! let tests drive the session through its error paths.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use log::debug;
use shared::{Appointment, AppointmentPayload, Patient, Staff};
use uuid::Uuid;

use super::ClinicApi;

#[derive(Debug, Default)]
struct Inner {
    appointments: Vec<Appointment>,
    patients: Vec<Patient>,
    dentists: Vec<Staff>,
    fail_fetch: bool,
    fail_mutations: bool,
    fail_lookups: bool,
    fetch_calls: u32,
    create_calls: u32,
    update_calls: u32,
    delete_calls: u32,
}

/// Clinic API backed by plain vectors behind a mutex.
#[derive(Debug, Default)]
pub struct InMemoryClinicApi {
    inner: Mutex<Inner>,
}

impl InMemoryClinicApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance pre-populated with directory records.
    pub fn with_directory(patients: Vec<Patient>, dentists: Vec<Staff>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                patients,
                dentists,
                ..Inner::default()
            }),
        }
    }

    /// Insert an appointment directly, bypassing the create path.
    pub fn seed_appointment(&self, appointment: Appointment) {
        self.inner.lock().unwrap().appointments.push(appointment);
    }

    /// Snapshot of the stored appointments, in insertion order.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.inner.lock().unwrap().appointments.clone()
    }

    /// Make subsequent range fetches fail.
    pub fn set_fail_fetch(&self, fail: bool) {
        self.inner.lock().unwrap().fail_fetch = fail;
    }

    /// Make subsequent create/update/delete calls fail.
    pub fn set_fail_mutations(&self, fail: bool) {
        self.inner.lock().unwrap().fail_mutations = fail;
    }

    /// Make subsequent patient/dentist listings fail.
    pub fn set_fail_lookups(&self, fail: bool) {
        self.inner.lock().unwrap().fail_lookups = fail;
    }

    pub fn fetch_calls(&self) -> u32 {
        self.inner.lock().unwrap().fetch_calls
    }

    pub fn create_calls(&self) -> u32 {
        self.inner.lock().unwrap().create_calls
    }

    pub fn update_calls(&self) -> u32 {
        self.inner.lock().unwrap().update_calls
    }

    pub fn delete_calls(&self) -> u32 {
        self.inner.lock().unwrap().delete_calls
    }
}

/// Denormalized display names for a stored appointment, looked up from the
/// directory the way the read API joins them in.
fn display_names(inner: &Inner, payload: &AppointmentPayload) -> (Option<String>, Option<String>) {
    let patient_name = inner
        .patients
        .iter()
        .find(|patient| patient.id == payload.patient_id)
        .map(Patient::display_name);
    let dentist_name = inner
        .dentists
        .iter()
        .find(|dentist| dentist.id == payload.dentist_id)
        .map(|dentist| format!("{} {}", dentist.first_name, dentist.last_name));
    (patient_name, dentist_name)
}

#[async_trait]
impl ClinicApi for InMemoryClinicApi {
    async fn fetch_appointments_by_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Appointment>> {
        let mut inner = self.inner.lock().unwrap();
        inner.fetch_calls += 1;
        if inner.fail_fetch {
            bail!("network error");
        }

        let matches: Vec<Appointment> = inner
            .appointments
            .iter()
            .filter(|appointment| {
                let date = appointment.start_time.date();
                date >= start_date && date <= end_date
            })
            .cloned()
            .collect();
        debug!(
            "📦 In-memory fetch {} to {} returned {} appointments",
            start_date,
            end_date,
            matches.len()
        );
        Ok(matches)
    }

    async fn create_appointment(&self, payload: AppointmentPayload) -> Result<Appointment> {
        let mut inner = self.inner.lock().unwrap();
        inner.create_calls += 1;
        if inner.fail_mutations {
            bail!("rejected by server");
        }

        let now = Local::now().naive_local();
        let (patient_name, dentist_name) = display_names(&inner, &payload);
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            patient_id: payload.patient_id,
            dentist_id: payload.dentist_id,
            start_time: payload.start_time,
            duration_minutes: payload.duration_minutes,
            status: payload.status,
            notes: payload.notes,
            patient_name,
            dentist_name,
            created_at: Some(now),
            updated_at: Some(now),
        };
        inner.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: &str,
        payload: AppointmentPayload,
    ) -> Result<Appointment> {
        let mut inner = self.inner.lock().unwrap();
        inner.update_calls += 1;
        if inner.fail_mutations {
            bail!("rejected by server");
        }

        let (patient_name, dentist_name) = display_names(&inner, &payload);
        let Some(appointment) = inner
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
        else {
            bail!("Appointment not found");
        };

        appointment.patient_id = payload.patient_id;
        appointment.dentist_id = payload.dentist_id;
        appointment.start_time = payload.start_time;
        appointment.duration_minutes = payload.duration_minutes;
        appointment.status = payload.status;
        appointment.notes = payload.notes;
        appointment.patient_name = patient_name;
        appointment.dentist_name = dentist_name;
        appointment.updated_at = Some(Local::now().naive_local());
        Ok(appointment.clone())
    }

    async fn delete_appointment(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_calls += 1;
        if inner.fail_mutations {
            bail!("rejected by server");
        }

        let Some(index) = inner
            .appointments
            .iter()
            .position(|appointment| appointment.id == id)
        else {
            bail!("Appointment not found");
        };
        inner.appointments.remove(index);
        Ok(())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_lookups {
            bail!("network error");
        }
        Ok(inner.patients.clone())
    }

    async fn list_dentists(&self) -> Result<Vec<Staff>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_lookups {
            bail!("network error");
        }
        Ok(inner.dentists.clone())
    }
}
