use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::services::catalog::Catalog;

#[axum::debug_handler]
pub async fn get_doctor_profile(State(catalog): State<Arc<Catalog>>) -> Json<Value> {
    Json(json!(catalog.profile()))
}

#[axum::debug_handler]
pub async fn list_services(State(catalog): State<Arc<Catalog>>) -> Json<Value> {
    Json(json!(catalog.services()))
}

#[axum::debug_handler]
pub async fn get_service(
    State(catalog): State<Arc<Catalog>>,
    Path(service_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = catalog
        .service(&service_id)
        .map_err(|_| AppError::NotFound("Không tìm thấy dịch vụ".to_string()))?;

    Ok(Json(json!(service)))
}

#[axum::debug_handler]
pub async fn list_testimonials(State(catalog): State<Arc<Catalog>>) -> Json<Value> {
    Json(json!(catalog.testimonials()))
}

#[axum::debug_handler]
pub async fn get_clinic_info(State(catalog): State<Arc<Catalog>>) -> Json<Value> {
    Json(json!(catalog.clinic()))
}
