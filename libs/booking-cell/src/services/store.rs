use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::models::{BookingRecord, BookingRequest, BookingStatus};

// Sequence numbers start above this base so the first booking of a process
// reads as 1001. The counter is the store size, not persisted state:
// references repeat across process restarts.
const SEQUENCE_BASE: usize = 1000;

/// Append-only, in-memory sequence of accepted bookings, scoped to one
/// running process. No update or delete operation exists.
pub struct BookingStore {
    records: Mutex<Vec<BookingRecord>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Builds and appends the record for a validated request. The size read,
    /// reference computation, and append run under a single lock acquisition
    /// so concurrent submissions cannot observe the same sequence number.
    pub fn append(
        &self,
        request: &BookingRequest,
        service_title: &str,
        created_at: DateTime<Utc>,
    ) -> BookingRecord {
        let mut records = self.records.lock().expect("booking store lock poisoned");

        let sequence_number = records.len() + SEQUENCE_BASE + 1;
        let record = BookingRecord {
            reference: booking_reference(&request.patient_name, sequence_number),
            patient_name: request.patient_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            service: service_title.to_string(),
            preferred_date: request.preferred_date.clone(),
            preferred_time: request.preferred_time.clone(),
            notes: request.notes.clone(),
            status: BookingStatus::PendingConfirmation,
            created_at,
        };

        records.push(record.clone());
        record
    }

    /// Every stored record, in insertion order.
    pub fn snapshot(&self) -> Vec<BookingRecord> {
        self.records
            .lock()
            .expect("booking store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .expect("booking store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable reference `DL-<prefix>-<sequence>`. The prefix is the
/// first two characters of the patient name, upper-cased; a name shorter
/// than two characters contributes what it has and is never an error.
pub fn booking_reference(patient_name: &str, sequence_number: usize) -> String {
    let prefix: String = patient_name.chars().take(2).collect();
    format!("DL-{}-{}", prefix.to_uppercase(), sequence_number)
}
