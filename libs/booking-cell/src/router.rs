use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::booking::BookingService;

pub fn booking_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/book", post(handlers::create_booking))
        .route("/bookings", get(handlers::list_bookings))
        .with_state(service)
}
