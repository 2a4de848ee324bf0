use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::catalog::Catalog;

pub fn catalog_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/profile", get(handlers::get_doctor_profile))
        .route("/services", get(handlers::list_services))
        .route("/services/{service_id}", get(handlers::get_service))
        .route("/testimonials", get(handlers::list_testimonials))
        .route("/clinic", get(handlers::get_clinic_info))
        .with_state(catalog)
}
