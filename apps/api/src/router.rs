use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use booking_cell::{booking_routes, BookingService};
use catalog_cell::{catalog_routes, Catalog};

pub fn create_router(catalog: Arc<Catalog>, booking: Arc<BookingService>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/api", catalog_routes(catalog).merge(booking_routes(booking)))
}

/// Liveness probe.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "hoạt động",
        "service": "Phòng Khám Tâm Thần Kinh API",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
