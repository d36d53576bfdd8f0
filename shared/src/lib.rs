use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{NaiveDate, NaiveDateTime};

/// A scheduled visit as exchanged with the clinic API.
///
/// `patient_name` and `dentist_name` are denormalized display fields filled
/// in by the read API from the patient and staff records; they are never
/// authoritative and never sent back on writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Server-assigned id, immutable after creation
    pub id: String,
    pub patient_id: String,
    pub dentist_id: String,
    /// Start of the visit in clinic-local time, minute precision
    pub start_time: NaiveDateTime,
    /// Length of the visit in minutes (minimum 15, booked in steps of 15)
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub dentist_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Request body for creating or fully replacing an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    pub patient_id: String,
    pub dentist_id: String,
    pub start_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fixed status taxonomy for appointments. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Every status, in the order the calendar legend displays them.
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    /// Wire value used by the clinic API.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::InProgress => "IN_PROGRESS",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::NoShow => "NO_SHOW",
        }
    }

    /// Label shown to the user for this status.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Programada",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::InProgress => "En Progreso",
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::NoShow => "No Asistió",
        }
    }

    /// Color tag used to tint calendar entries and legend chips.
    pub fn color_tag(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "blue",
            AppointmentStatus::Confirmed => "green",
            AppointmentStatus::InProgress => "yellow",
            AppointmentStatus::Completed => "gray",
            AppointmentStatus::Cancelled => "red",
            AppointmentStatus::NoShow => "orange",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A patient record, used to populate the appointment form's selection field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Patient {
    /// Name shown in selection lists.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A staff record. Only dentists are offered in the appointment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub specialty: String,
    pub license_number: String,
    pub hire_date: NaiveDate,
    pub active: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Staff {
    /// Name shown in selection lists, including the specialty.
    pub fn display_name(&self) -> String {
        format!("{} {} - {}", self.first_name, self.last_name, self.specialty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_appointment() -> Appointment {
        Appointment {
            id: "a1".to_string(),
            patient_id: "p1".to_string(),
            dentist_id: "d1".to_string(),
            start_time: NaiveDate::from_ymd_opt(2024, 3, 11)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            duration_minutes: 30,
            status: AppointmentStatus::Scheduled,
            notes: None,
            patient_name: Some("Ana Pérez".to_string()),
            dentist_name: Some("Luis García".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_appointment_serializes_with_camel_case_wire_names() {
        let value = serde_json::to_value(sample_appointment()).unwrap();

        assert_eq!(value["patientId"], "p1");
        assert_eq!(value["dentistId"], "d1");
        assert_eq!(value["startTime"], "2024-03-11T09:30:00");
        assert_eq!(value["durationMinutes"], 30);
        assert_eq!(value["status"], "SCHEDULED");
        assert_eq!(value["patientName"], "Ana Pérez");
    }

    #[test]
    fn test_appointment_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "a2",
            "patientId": "p1",
            "dentistId": "d1",
            "startTime": "2024-03-11T10:00:00",
            "durationMinutes": 45,
            "status": "CONFIRMED"
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.notes, None);
        assert_eq!(appointment.patient_name, None);
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::InProgress).unwrap(),
            "IN_PROGRESS"
        );
        assert_eq!(
            serde_json::to_value(AppointmentStatus::NoShow).unwrap(),
            "NO_SHOW"
        );
        assert_eq!(
            serde_json::from_str::<AppointmentStatus>("\"CANCELLED\"").unwrap(),
            AppointmentStatus::Cancelled
        );
    }

    #[test]
    fn test_status_display_metadata() {
        assert_eq!(AppointmentStatus::ALL.len(), 6);
        assert_eq!(AppointmentStatus::Scheduled.label(), "Programada");
        assert_eq!(AppointmentStatus::NoShow.label(), "No Asistió");
        assert_eq!(AppointmentStatus::InProgress.color_tag(), "yellow");
        assert_eq!(AppointmentStatus::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn test_display_names() {
        let patient = Patient {
            id: "p1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            phone: "600111222".to_string(),
            email: "ana@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(patient.display_name(), "Ana Pérez");

        let dentist = Staff {
            id: "d1".to_string(),
            first_name: "Luis".to_string(),
            last_name: "García".to_string(),
            phone: "600333444".to_string(),
            email: "luis@example.com".to_string(),
            specialty: "ORTODONCIA".to_string(),
            license_number: "COL-123".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2018, 1, 8).unwrap(),
            active: true,
            user_id: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(dentist.display_name(), "Luis García - ORTODONCIA");
    }
}
