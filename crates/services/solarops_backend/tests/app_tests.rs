#![cfg(feature = "calendar")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use solarops_backend::{build_app, AppState};
use solarops_config::{AppConfig, CalendarConfig, ServerConfig};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_config(store_path: &Path, use_calendar: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
        },
        use_calendar,
        calendar: Some(CalendarConfig {
            store_path: Some(store_path.to_string_lossy().into_owned()),
            ..Default::default()
        }),
        logging: None,
    })
}

fn create_test_app(store_path: &Path, use_calendar: bool) -> Router {
    let state = AppState::new(create_test_config(store_path, use_calendar)).unwrap();
    build_app(&state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(&dir.path().join("calendar.json"), true);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Welcome to the Solar Detailing Customer API" })
    );
}

#[tokio::test]
async fn test_calendar_is_mounted_under_api() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(&dir.path().join("calendar.json"), true);

    let request = Request::builder()
        .uri("/api/appointments/available/2099-01-05")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_slots"].as_array().unwrap().len(), 14);

    let request = Request::builder()
        .uri("/appointments/available/2099-01-05")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_through_full_stack() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("calendar.json");
    let app = create_test_app(&store_path, true);

    let request = Request::builder()
        .method("POST")
        .uri("/api/appointments/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "contact_id": "ghl-7", "start_time_iso": "2099-01-05T10:00:00-08:00" })
                .to_string(),
        ))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(std::fs::read_to_string(&store_path)
        .unwrap()
        .contains("ghl-7"));
}

#[tokio::test]
async fn test_disabled_calendar_answers_503() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(&dir.path().join("calendar.json"), false);

    let request = Request::builder()
        .uri("/api/appointments/2099-01-05")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(&dir.path().join("calendar.json"), true);

    let preflight = |origin: &str| {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/appointments/book")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );

    let response = app.oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[test]
fn test_invalid_calendar_settings_fail_at_startup() {
    let config = Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: Vec::new(),
        },
        use_calendar: true,
        calendar: Some(CalendarConfig {
            business_start_hour: Some(22),
            ..Default::default()
        }),
        logging: None,
    });

    let err = AppState::new(config).err().unwrap();
    assert!(err.to_string().contains("business hours"));
}
