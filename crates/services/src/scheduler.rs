//! Appointment booking stub.
//!
//! Issues a confirmation ID and echoes the requested slot back. There is
//! no calendar backend; every request succeeds.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A request to book an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub specialty: String,
    pub patient_name: String,
    pub preferred_time: String,
    pub location: String,
}

/// Confirmation for a booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentConfirmation {
    pub confirmation_id: String,
    pub time: String,
    pub location: String,
}

/// Book an appointment, returning a fresh confirmation.
pub fn book(request: AppointmentRequest) -> AppointmentConfirmation {
    let confirmation_id = Uuid::new_v4().to_string();

    info!(
        specialty = %request.specialty,
        time = %request.preferred_time,
        confirmation_id = %confirmation_id,
        "Booked appointment"
    );

    AppointmentConfirmation {
        confirmation_id,
        time: request.preferred_time,
        location: request.location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AppointmentRequest {
        AppointmentRequest {
            specialty: "pulmonology".into(),
            patient_name: "Alex Doe".into(),
            preferred_time: "2026-08-12T09:30".into(),
            location: "Main clinic".into(),
        }
    }

    #[test]
    fn test_confirmation_echoes_slot() {
        let confirmation = book(request());
        assert_eq!(confirmation.time, "2026-08-12T09:30");
        assert_eq!(confirmation.location, "Main clinic");
    }

    #[test]
    fn test_confirmation_id_is_a_uuid() {
        let confirmation = book(request());
        Uuid::parse_str(&confirmation.confirmation_id).unwrap();
    }

    #[test]
    fn test_confirmation_ids_unique() {
        let a = book(request());
        let b = book(request());
        assert_ne!(a.confirmation_id, b.confirmation_id);
    }
}
