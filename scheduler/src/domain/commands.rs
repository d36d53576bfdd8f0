//! Domain-level command and query types.
//!
//! These structs are used by the calendar session internally and are **not**
//! exposed over any public API. The clinic collaborator consumes the wire
//! DTOs defined in the `shared` crate; the session maps between the two.

pub mod appointments {
    use chrono::NaiveDate;

    /// Date window covered by one weekly load. Both endpoints inclusive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WeekRangeQuery {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    /// Ticket identifying one issued load of the week's appointments.
    ///
    /// Each load is tagged with a monotonically increasing generation; when
    /// a response arrives it is applied only if its generation is still the
    /// latest issued. Responses from superseded loads are discarded instead
    /// of overwriting newer data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WeekLoadTicket {
        pub generation: u64,
        pub query: WeekRangeQuery,
    }
}
