//! # Domain Module
//!
//! Contains the business logic of the appointment calendar.
//!
//! This module encapsulates the rules that define how appointments are
//! placed on the weekly grid, how weeks are navigated, and how form input
//! is validated. It operates independently of any UI framework and of the
//! transport behind the clinic API.
//!
//! ## Module Organization
//!
//! - **calendar**: week normalization, the fixed 7×12 time grid, and slot
//!   placement of appointments
//! - **appointment_form**: form drafts, field validation, and payload
//!   construction for create/edit submissions
//! - **commands**: internal command/query types used by the session
//!
//! ## Business Rules
//!
//! - The visible grid always covers Monday through Sunday, 08:00–19:00
//! - An appointment occupies the single cell matching its local calendar
//!   date and truncated hour; duration is display metadata only
//! - Appointments starting outside the visible hours are not displayed
//! - Submissions must name a patient, a dentist, a start time, a status,
//!   and a duration of at least 15 minutes

pub mod appointment_form;
pub mod calendar;
pub mod commands;
