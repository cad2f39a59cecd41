mod common;

use axum::http::{Method, StatusCode};
use common::{read_json, TestApp};

#[tokio::test]
async fn readiness_reports_database_up() {
    let app = TestApp::new().await;

    let (status, body) = read_json(app.request(Method::GET, "/health/ready", None).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn liveness_and_version_respond() {
    let app = TestApp::new().await;

    let (status, body) = read_json(app.request(Method::GET, "/health/live", None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["alive"], true);

    let (status, body) =
        read_json(app.request(Method::GET, "/health/version", None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_lists_inbound_order_paths() {
    let app = TestApp::new().await;

    let (status, body) =
        read_json(app.request(Method::GET, "/api-docs/openapi.json", None).await).await;

    assert_eq!(status, StatusCode::OK);
    let path = &body["paths"]["/api/v1/inboundOrders"];
    assert!(path["post"].is_object());
    assert!(path["get"].is_object());
}
