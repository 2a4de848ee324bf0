//! Endpoint integration tests: the assembled router driven request by
//! request, no live server required.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use booking_cell::BookingService;
use catalog_cell::Catalog;
use phong_kham_api::router::create_router;
use shared_utils::test_utils::fixed_clock;

fn test_app() -> Router {
    let catalog = Arc::new(Catalog::seeded());
    let booking = Arc::new(BookingService::new(Arc::clone(&catalog), fixed_clock()));
    create_router(catalog, booking)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn booking_body(patient_name: &str, service_id: &str) -> Value {
    json!({
        "patient_name": patient_name,
        "email": "an@example.com",
        "phone": "0901234567",
        "service_id": service_id,
        "preferred_date": "2026-01-10",
    })
}

#[tokio::test]
async fn health_check_reports_running_service() {
    let app = test_app();

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "hoạt động");
    assert_eq!(body["service"], "Phòng Khám Tâm Thần Kinh API");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn profile_endpoint_returns_the_doctor() {
    let app = test_app();

    let (status, body) = get(&app, "/api/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "BS. Lê Quang Vy");
    assert_eq!(body["credentials"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn services_endpoint_lists_the_catalog_in_order() {
    let app = test_app();

    let (status, body) = get(&app, "/api/services").await;

    assert_eq!(status, StatusCode::OK);
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 6);
    assert_eq!(services[0]["id"], "srv_consult");
    assert_eq!(services[5]["id"], "srv_child");
}

#[tokio::test]
async fn service_lookup_returns_catalog_fields() {
    let app = test_app();

    let (status, body) = get(&app, "/api/services/srv_sleep").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Điều Trị Rối Loạn Giấc Ngủ");
    assert_eq!(body["duration_minutes"], 45);
}

#[tokio::test]
async fn unknown_service_lookup_is_a_404() {
    let app = test_app();

    let (status, body) = get(&app, "/api/services/srv_missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Không tìm thấy dịch vụ");
}

#[tokio::test]
async fn testimonials_endpoint_lists_all_with_valid_ratings() {
    let app = test_app();

    let (status, body) = get(&app, "/api/testimonials").await;

    assert_eq!(status, StatusCode::OK);
    let testimonials = body.as_array().unwrap();
    assert_eq!(testimonials.len(), 10);
    for testimonial in testimonials {
        let rating = testimonial["rating"].as_u64().unwrap();
        assert!((1..=5).contains(&rating));
    }
}

#[tokio::test]
async fn clinic_endpoint_returns_contact_info() {
    let app = test_app();

    let (status, body) = get(&app, "/api/clinic").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "lienhe@phongkhamtamthan.vn");
    assert_eq!(body["hours"]["sunday"], "Nghỉ");
}

#[tokio::test]
async fn first_booking_of_the_process_gets_reference_dl_an_1001() {
    let app = test_app();

    let (status, body) = post_json(&app, "/api/book", booking_body("An Nguyen", "srv_consult")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "thành công");
    assert_eq!(body["booking_reference"], "DL-AN-1001");
    assert_eq!(body["estimated_callback"], "Trong vòng 2 giờ làm việc");
    assert!(body["message"].as_str().unwrap().contains("2 giờ"));
}

#[tokio::test]
async fn booking_an_unknown_service_is_rejected_and_not_stored() {
    let app = test_app();

    let (status, body) =
        post_json(&app, "/api/book", booking_body("An Nguyen", "srv_does_not_exist")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dịch vụ không hợp lệ");

    let (status, body) = get(&app, "/api/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn booking_with_invalid_fields_is_rejected() {
    let app = test_app();

    let mut body = booking_body("A", "srv_consult");
    body["phone"] = json!("123");

    let (status, body) = post_json(&app, "/api/book", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("patient_name"));
}

#[tokio::test]
async fn bookings_listing_keeps_creation_order() {
    let app = test_app();

    post_json(&app, "/api/book", booking_body("An Nguyen", "srv_consult")).await;
    post_json(&app, "/api/book", booking_body("Binh Tran", "srv_sleep")).await;

    let (status, body) = get(&app, "/api/bookings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings[0]["reference"], "DL-AN-1001");
    assert_eq!(bookings[0]["service"], "Khám Tư Vấn Tâm Thần");
    assert_eq!(bookings[0]["status"], "chờ xác nhận");
    assert_eq!(bookings[1]["reference"], "DL-BI-1002");
    assert_eq!(bookings[1]["service"], "Điều Trị Rối Loạn Giấc Ngủ");
}
