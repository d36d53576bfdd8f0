//! # Calendar State Module
//!
//! This module contains all state related to the calendar view and week
//! navigation.
//!
//! ## Responsibilities:
//! - Week anchor navigation (previous/next/today)
//! - The appointment cache for the visible week
//! - Load generation tracking for stale-response detection
//!
//! ## Purpose:
//! This isolates calendar-specific state management, making it possible to
//! test week navigation and cache behavior independently of the session.

use chrono::{Duration, Local, NaiveDate};
use shared::Appointment;

use crate::domain::calendar;

/// Week navigation and appointment cache for the calendar view.
///
/// The anchor is always the Monday of the displayed week. The appointment
/// collection is replaced wholesale by each successful load; there is no
/// incremental merge.
#[derive(Debug)]
pub struct CalendarState {
    /// Monday of the week currently displayed
    pub week_anchor: NaiveDate,

    /// Appointments for the visible week
    pub appointments: Vec<Appointment>,

    /// Whether a week load is currently in flight
    pub loading: bool,

    /// Latest load generation handed out. Responses tagged with an older
    /// generation are stale and must not be applied.
    issued_generation: u64,
}

impl CalendarState {
    /// Create calendar state anchored on the current week.
    pub fn new() -> Self {
        Self::with_anchor(Local::now().date_naive())
    }

    /// Create calendar state anchored on the week containing `date`.
    pub fn with_anchor(date: NaiveDate) -> Self {
        Self {
            week_anchor: calendar::monday_of(date),
            appointments: Vec::new(),
            loading: false,
            issued_generation: 0,
        }
    }

    /// Navigate to the previous week.
    pub fn navigate_to_previous_week(&mut self) {
        self.week_anchor -= Duration::days(7);
        log::info!("📅 Navigated to previous week: {}", self.week_anchor);
    }

    /// Navigate to the next week.
    pub fn navigate_to_next_week(&mut self) {
        self.week_anchor += Duration::days(7);
        log::info!("📅 Navigated to next week: {}", self.week_anchor);
    }

    /// Jump back to the week containing today.
    pub fn navigate_to_today(&mut self) {
        self.week_anchor = calendar::monday_of(Local::now().date_naive());
        log::info!("📅 Navigated to current week: {}", self.week_anchor);
    }

    /// Register a new load and return its generation tag.
    pub fn begin_load(&mut self) -> u64 {
        self.issued_generation += 1;
        self.loading = true;
        self.issued_generation
    }

    /// Whether a response with this generation is still the latest issued.
    pub fn is_current_generation(&self, generation: u64) -> bool {
        generation == self.issued_generation
    }

    /// The generation of the most recently issued load.
    pub fn latest_generation(&self) -> u64 {
        self.issued_generation
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_is_normalized_to_monday() {
        // 2024-03-14 is a Thursday
        let state = CalendarState::with_anchor(date(2024, 3, 14));
        assert_eq!(state.week_anchor, date(2024, 3, 11));

        let state = CalendarState::new();
        assert_eq!(state.week_anchor.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_next_then_previous_returns_to_start() {
        let mut state = CalendarState::with_anchor(date(2024, 3, 11));
        state.navigate_to_next_week();
        assert_eq!(state.week_anchor, date(2024, 3, 18));
        state.navigate_to_previous_week();
        assert_eq!(state.week_anchor, date(2024, 3, 11));
    }

    #[test]
    fn test_today_resets_anchor() {
        let mut state = CalendarState::with_anchor(date(2020, 1, 6));
        state.navigate_to_today();
        assert_eq!(
            state.week_anchor,
            calendar::monday_of(Local::now().date_naive())
        );
    }

    #[test]
    fn test_generations_increase_and_supersede() {
        let mut state = CalendarState::with_anchor(date(2024, 3, 11));
        let first = state.begin_load();
        assert!(state.loading);
        assert!(state.is_current_generation(first));

        let second = state.begin_load();
        assert_eq!(second, first + 1);
        assert!(!state.is_current_generation(first));
        assert!(state.is_current_generation(second));
        assert_eq!(state.latest_generation(), second);
    }
}
