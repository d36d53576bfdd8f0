//! # Calendar Session
//!
//! This module is the single controller entry point for one open calendar
//! view, interfacing with the clinic API to fetch and mutate appointments.
//!
//! ## Key Operations:
//! - `load_week()` - fetch the visible week and replace the cache
//! - `previous_week()` / `next_week()` / `today()` - navigate and refresh
//! - `click_slot()` / `click_appointment()` - resolve grid clicks into
//!   create or edit intents
//! - `submit()` - validate and persist the open modal's draft
//! - `request_delete()` / `confirm_delete()` - the confirmed delete flow
//!
//! ## Purpose:
//! All mutations of the session state are routed through the methods here,
//! ensuring consistent error handling: remote failures become a single
//! user-facing message, a failed load keeps the previous collection, and a
//! stale load response is discarded by its generation tag.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{debug, error, info, warn};
use shared::Appointment;

use crate::api::ClinicApi;
use crate::domain::appointment_form::{self, AppointmentDraft};
use crate::domain::calendar::{self, WeekGrid};
use crate::domain::commands::appointments::{WeekLoadTicket, WeekRangeQuery};
use crate::state::{AppointmentModal, CalendarState, ModalIntent, ModalState};

/// One open calendar view: week navigation state, the appointment cache,
/// the modal state, and the clinic API the view talks to.
pub struct CalendarSession<A: ClinicApi> {
    api: A,

    pub calendar: CalendarState,
    pub modals: ModalState,

    /// One-shot success feedback from the last mutation
    pub info_message: Option<String>,

    /// User-visible failure from the last collaborator call
    pub error_message: Option<String>,
}

impl<A: ClinicApi> CalendarSession<A> {
    /// Create a session anchored on the current week. The caller triggers
    /// the initial `load_week()` once the view is ready.
    pub fn new(api: A) -> Self {
        Self::with_state(api, CalendarState::new())
    }

    /// Create a session anchored on the week containing `date`.
    pub fn with_anchor(api: A, date: NaiveDate) -> Self {
        Self::with_state(api, CalendarState::with_anchor(date))
    }

    fn with_state(api: A, calendar: CalendarState) -> Self {
        Self {
            api,
            calendar,
            modals: ModalState::new(),
            info_message: None,
            error_message: None,
        }
    }

    /// The collaborator handle, for callers that share it with other views.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The derived weekly grid for the current anchor and cache.
    pub fn week_grid(&self) -> WeekGrid {
        calendar::generate_week_grid(self.calendar.week_anchor, &self.calendar.appointments)
    }

    /// The open modal, if any.
    pub fn modal_mut(&mut self) -> Option<&mut AppointmentModal> {
        self.modals.active.as_mut()
    }

    /// Close the open modal without submitting.
    pub fn close_modal(&mut self) {
        self.modals.close();
    }

    /// Register a new week load and return its ticket.
    pub fn begin_week_load(&mut self) -> WeekLoadTicket {
        let (start_date, end_date) = calendar::week_range(self.calendar.week_anchor);
        let generation = self.calendar.begin_load();
        info!(
            "🗓️ Loading appointments {} to {} (generation {})",
            start_date, end_date, generation
        );
        WeekLoadTicket {
            generation,
            query: WeekRangeQuery {
                start_date,
                end_date,
            },
        }
    }

    /// Apply a load response. Responses from superseded loads are discarded;
    /// a failed load keeps the previous collection in place.
    pub fn apply_week_load(&mut self, ticket: WeekLoadTicket, result: Result<Vec<Appointment>>) {
        if !self.calendar.is_current_generation(ticket.generation) {
            warn!(
                "⚠️ Discarding stale load response (generation {}, latest {})",
                ticket.generation,
                self.calendar.latest_generation()
            );
            return;
        }

        self.calendar.loading = false;
        match result {
            Ok(appointments) => {
                info!(
                    "🗓️ Loaded {} appointments for week of {}",
                    appointments.len(),
                    self.calendar.week_anchor
                );
                self.calendar.appointments = appointments;
                self.error_message = None;
            }
            Err(e) => {
                error!("❌ Failed to load appointments: {}", e);
                self.error_message = Some(format!("Error al cargar citas: {}", e));
            }
        }
    }

    /// Fetch the visible week and replace the cache with the result.
    pub async fn load_week(&mut self) {
        let ticket = self.begin_week_load();
        let result = self
            .api
            .fetch_appointments_by_range(ticket.query.start_date, ticket.query.end_date)
            .await;
        self.apply_week_load(ticket, result);
    }

    /// Navigate one week back and refresh.
    pub async fn previous_week(&mut self) {
        self.calendar.navigate_to_previous_week();
        self.load_week().await;
    }

    /// Navigate one week forward and refresh.
    pub async fn next_week(&mut self) {
        self.calendar.navigate_to_next_week();
        self.load_week().await;
    }

    /// Jump back to the current week and refresh.
    pub async fn today(&mut self) {
        self.calendar.navigate_to_today();
        self.load_week().await;
    }

    /// Click on a grid cell. An empty cell opens a create modal seeded with
    /// the cell's day and hour; an occupied cell ignores the click, since
    /// clicks on its entries are routed through [`Self::click_appointment`].
    pub async fn click_slot(&mut self, day: NaiveDate, hour: u32) {
        if !calendar::slot_appointments(day, hour, &self.calendar.appointments).is_empty() {
            debug!("📅 Slot {} {:02}:00 is occupied, ignoring click", day, hour);
            return;
        }
        info!("📅 Opening create modal for slot {} {:02}:00", day, hour);
        self.open_modal(AppointmentModal::create(AppointmentDraft::for_slot(day, hour)))
            .await;
    }

    /// Open a create modal without a slot, seeded with the current time.
    pub async fn new_appointment(&mut self) {
        info!("📅 Opening create modal from the toolbar");
        self.open_modal(AppointmentModal::create(AppointmentDraft::for_time(
            Local::now().naive_local(),
        )))
        .await;
    }

    /// Click on an appointment entry: opens an edit modal pre-filled from
    /// the cached entity.
    pub async fn click_appointment(&mut self, appointment_id: &str) {
        let Some(appointment) = self
            .calendar
            .appointments
            .iter()
            .find(|appointment| appointment.id == appointment_id)
            .cloned()
        else {
            warn!(
                "⚠️ Clicked appointment {} is not in the current week cache",
                appointment_id
            );
            return;
        };

        info!("📅 Opening edit modal for appointment {}", appointment_id);
        self.open_modal(AppointmentModal::edit(
            appointment.id.clone(),
            AppointmentDraft::from_appointment(&appointment),
        ))
        .await;
    }

    async fn open_modal(&mut self, modal: AppointmentModal) {
        self.modals.open(modal);
        self.load_modal_lookups().await;
    }

    /// Reload the patient and dentist selection lists. A failed lookup
    /// leaves its list empty and the modal open.
    async fn load_modal_lookups(&mut self) {
        let patients = self.api.list_patients().await;
        let dentists = self.api.list_dentists().await;

        let Some(modal) = self.modals.active.as_mut() else {
            return;
        };
        match patients {
            Ok(patients) => modal.patients = patients,
            Err(e) => warn!("⚠️ Failed to load patients: {}", e),
        }
        match dentists {
            Ok(dentists) => modal.dentists = dentists,
            Err(e) => warn!("⚠️ Failed to load dentists: {}", e),
        }
    }

    /// Submit the open modal's draft. An invalid draft is rejected with
    /// field-scoped errors and never reaches the clinic API; a remote
    /// failure keeps the modal open with its draft intact.
    pub async fn submit(&mut self) {
        let (intent, payload) = {
            let Some(modal) = self.modals.active.as_mut() else {
                warn!("⚠️ Submit requested with no open modal");
                return;
            };

            let validation = appointment_form::validate_draft(&modal.draft);
            let Some(payload) = validation.payload else {
                info!(
                    "📋 Rejecting submission with {} validation errors",
                    validation.errors.len()
                );
                modal.field_errors = validation.errors;
                return;
            };

            modal.field_errors = Vec::new();
            modal.submit_error = None;
            modal.submitting = true;
            (modal.intent.clone(), payload)
        };

        let result = match &intent {
            ModalIntent::Create => self.api.create_appointment(payload).await,
            ModalIntent::Edit { appointment_id } => {
                self.api.update_appointment(appointment_id, payload).await
            }
        };

        match result {
            Ok(saved) => {
                info!("✅ Saved appointment {}", saved.id);
                self.modals.close();
                self.info_message = Some(
                    match intent {
                        ModalIntent::Create => "Cita creada exitosamente",
                        ModalIntent::Edit { .. } => "Cita actualizada exitosamente",
                    }
                    .to_string(),
                );
                self.load_week().await;
            }
            Err(e) => {
                error!("❌ Failed to save appointment: {}", e);
                if let Some(modal) = self.modals.active.as_mut() {
                    modal.submitting = false;
                    modal.submit_error = Some(format!("Error al guardar cita: {}", e));
                }
            }
        }
    }

    /// Ask for confirmation before deleting. No collaborator call happens
    /// until [`Self::confirm_delete`] is invoked.
    pub fn request_delete(&mut self, appointment_id: &str) {
        info!(
            "🗑️ Delete requested for appointment {}, awaiting confirmation",
            appointment_id
        );
        self.modals.pending_delete = Some(appointment_id.to_string());
    }

    /// Abandon the pending delete.
    pub fn cancel_delete(&mut self) {
        if self.modals.pending_delete.take().is_some() {
            info!("🗑️ Delete cancelled");
        }
    }

    /// Execute the pending delete. On failure the collection is left
    /// unchanged and a user-visible error is surfaced.
    pub async fn confirm_delete(&mut self) {
        let Some(appointment_id) = self.modals.pending_delete.take() else {
            warn!("⚠️ Delete confirmation with no pending delete");
            return;
        };

        match self.api.delete_appointment(&appointment_id).await {
            Ok(()) => {
                info!("✅ Deleted appointment {}", appointment_id);
                self.info_message = Some("Cita eliminada exitosamente".to_string());
                self.load_week().await;
            }
            Err(e) => {
                error!("❌ Failed to delete appointment {}: {}", appointment_id, e);
                self.error_message = Some(format!("Error al eliminar cita: {}", e));
            }
        }
    }
}
