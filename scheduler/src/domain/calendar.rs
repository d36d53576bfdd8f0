//! Calendar domain logic for the appointment scheduler.
//!
//! This module contains all business logic related to the weekly time grid:
//! week normalization, date calculations, and the placement of appointments
//! into (day, hour) slots. The UI should only handle presentation concerns,
//! while all grid computations and date rules are handled here.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use shared::Appointment;

/// First hour of the visible grid, inclusive.
pub const GRID_START_HOUR: u32 = 8;
/// Last hour of the visible grid, inclusive.
pub const GRID_END_HOUR: u32 = 19;

/// A single (day, hour) slot of the weekly grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub hour: u32,
    /// Appointments placed in this slot, in the order the server returned them
    pub appointments: Vec<Appointment>,
}

/// One day column of the weekly grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub cells: Vec<GridCell>,
}

/// The weekly grid derived from a Monday anchor and the loaded appointments.
///
/// Always 7 days × 12 hours. Recomputed whenever the anchor or the
/// appointment collection changes; never stored or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid {
    pub week_start: NaiveDate,
    pub days: Vec<GridDay>,
}

impl WeekGrid {
    /// Look up a single cell by calendar date and hour.
    pub fn cell(&self, date: NaiveDate, hour: u32) -> Option<&GridCell> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .and_then(|day| day.cells.iter().find(|cell| cell.hour == hour))
    }
}

/// Normalize any date to the Monday of its week.
///
/// Follows the ISO week convention: a Sunday moves back six days, any other
/// day moves back to the preceding (or same) Monday.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven consecutive calendar dates starting at the week anchor.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|offset| anchor + Duration::days(offset)).collect()
}

/// The visible hours of the grid, 08:00 through 19:00.
pub fn grid_hours() -> Vec<u32> {
    (GRID_START_HOUR..=GRID_END_HOUR).collect()
}

/// Inclusive date range queried for one week of appointments.
pub fn week_range(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    (anchor, anchor + Duration::days(6))
}

/// Appointments belonging to the (day, hour) slot.
///
/// An appointment matches when its start falls on the same calendar date and
/// its truncated hour equals `hour`; the minute offset within the hour does
/// not matter. Source order is preserved.
pub fn slot_appointments(day: NaiveDate, hour: u32, appointments: &[Appointment]) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| {
            appointment.start_time.date() == day && appointment.start_time.hour() == hour
        })
        .cloned()
        .collect()
}

/// Build the full weekly grid for an anchor and the loaded appointments.
///
/// Appointments whose start hour lies outside the visible range are simply
/// not placed anywhere; this is a display omission, not an error.
pub fn generate_week_grid(anchor: NaiveDate, appointments: &[Appointment]) -> WeekGrid {
    let days = week_days(anchor)
        .into_iter()
        .map(|date| GridDay {
            date,
            cells: grid_hours()
                .into_iter()
                .map(|hour| GridCell {
                    hour,
                    appointments: slot_appointments(date, hour, appointments),
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    let placed: usize = days
        .iter()
        .flat_map(|day| day.cells.iter())
        .map(|cell| cell.appointments.len())
        .sum();
    log::debug!(
        "🗓️ Generated grid for week of {}: {} of {} appointments visible",
        anchor,
        placed,
        appointments.len()
    );

    WeekGrid {
        week_start: anchor,
        days,
    }
}

/// Whether the date is today in clinic-local time.
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

/// Label for an hour row, e.g. "08:00".
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Time-of-day label for an appointment entry, e.g. "09:30".
pub fn format_slot_time(start_time: &NaiveDateTime) -> String {
    format!("{:02}:{:02}", start_time.hour(), start_time.minute())
}

/// Long-form date for the week header, e.g. "11 de marzo de 2024".
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Header text for the visible week, e.g.
/// "11 de marzo de 2024 - 17 de marzo de 2024".
pub fn format_week_range(anchor: NaiveDate) -> String {
    let (start, end) = week_range(anchor);
    format!("{} - {}", format_display_date(start), format_display_date(end))
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "mes inválido",
    }
}
