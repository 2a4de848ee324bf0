use std::sync::Arc;

use tracing::info;

use catalog_cell::Catalog;
use shared_utils::Clock;

use crate::error::BookingError;
use crate::models::{BookingListResponse, BookingRecord, BookingRequest};
use crate::services::store::BookingStore;
use crate::services::validation;

/// Owns the booking pipeline: field validation, service resolution against
/// the catalog, reference generation, and the append to the in-memory store.
/// Shared behind an `Arc` as the booking routes' state.
pub struct BookingService {
    catalog: Arc<Catalog>,
    store: BookingStore,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            store: BookingStore::new(),
            clock,
        }
    }

    pub fn create_booking(&self, request: &BookingRequest) -> Result<BookingRecord, BookingError> {
        validation::validate_booking_request(request)?;

        let service = self
            .catalog
            .service(&request.service_id)
            .map_err(|_| BookingError::InvalidService)?;

        let record = self
            .store
            .append(request, &service.title, self.clock.now());

        info!(
            "Đặt lịch mới: {} - {} cho {}",
            record.reference, record.patient_name, record.service
        );

        Ok(record)
    }

    /// Every stored booking in insertion order, with the running total.
    pub fn list_bookings(&self) -> BookingListResponse {
        let bookings = self.store.snapshot();
        BookingListResponse {
            total: bookings.len(),
            bookings,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }
}
