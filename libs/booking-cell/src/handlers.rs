use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::error::BookingError;
use crate::models::{BookingRequest, BookingResponse};
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<Value>, AppError> {
    let record = service.create_booking(&request).map_err(|e| match e {
        BookingError::InvalidService => {
            AppError::BadRequest("Dịch vụ không hợp lệ".to_string())
        }
        BookingError::Validation { .. } => AppError::ValidationError(e.to_string()),
    })?;

    let response = BookingResponse {
        status: "thành công".to_string(),
        message: "Yêu cầu đặt lịch của bạn đã được ghi nhận. Nhân viên sẽ liên hệ trong vòng 2 giờ để xác nhận.".to_string(),
        booking_reference: record.reference,
        estimated_callback: "Trong vòng 2 giờ làm việc".to_string(),
    };

    Ok(Json(json!(response)))
}

/// Every stored booking in insertion order. Unauthenticated: confirmation is
/// a staff workflow handled out of band.
#[axum::debug_handler]
pub async fn list_bookings(State(service): State<Arc<BookingService>>) -> Json<Value> {
    Json(json!(service.list_bookings()))
}
