use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking intent as submitted by the patient. Validated, then discarded
/// once the stored record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub preferred_date: String,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

/// Confirmation and cancellation are handled by staff out of band, so the
/// only state a stored record ever holds is "chờ xác nhận".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "chờ xác nhận")]
    PendingConfirmation,
}

/// Accepted booking. `service` is the service title denormalized at creation
/// time; later catalog changes do not retroactively affect stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub reference: String,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub preferred_date: String,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub status: String,
    pub message: String,
    pub booking_reference: String,
    pub estimated_callback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub total: usize,
    pub bookings: Vec<BookingRecord>,
}
