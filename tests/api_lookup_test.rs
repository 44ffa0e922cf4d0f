use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use isbn_ranges::infrastructure::AppState;
use isbn_ranges::ranges::builtin_table;
use isbn_ranges::server;

// Helper to build the router over the built-in table
fn setup_app() -> Router {
    server::build_router(AppState::new(builtin_table()), &[])
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_reports_range_source() {
    let (status, body) = get_json(setup_app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ranges"]["source"], "built-in");
    assert_eq!(body["ranges"]["message_date"], "2025-10-06");
    assert_eq!(body["ranges"]["max_group_len"], 5);
    assert!(body["ranges"]["groups"].as_u64().unwrap() > 200);
}

#[tokio::test]
async fn test_lookup_isbn_splits_parts() {
    let (status, body) = get_json(setup_app(), "/api/isbn/2-07-036002-4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn13"], "9782070360024");
    assert_eq!(body["isbn10"], "2070360024");
    assert_eq!(body["hyphenated"], "978-2-07-036002-4");
    assert_eq!(body["parts"]["prefix"], "978");
    assert_eq!(body["parts"]["group"], "2");
    assert_eq!(body["parts"]["agency"], "French language");
}

#[tokio::test]
async fn test_lookup_isbn_malformed_is_unprocessable() {
    let (status, body) = get_json(setup_app(), "/api/isbn/978-2-07-036002-5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Check digit"));

    let (status, _) = get_json(setup_app(), "/api/isbn/12345").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_lookup_isbn_outside_table_is_not_found() {
    // 979-0 is not a registration group
    let (status, _) = get_json(setup_app(), "/api/isbn/9790123456785").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_group() {
    let (status, body) = get_json(setup_app(), "/api/groups/978/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agency"], "French language");
    assert_eq!(body["ranges"][0]["low"], "00");
    assert_eq!(body["ranges"][0]["high"], "19");

    let (status, body) = get_json(setup_app(), "/api/groups/978/99902").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranges"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_group_errors() {
    let (status, _) = get_json(setup_app(), "/api/groups/978/77777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(setup_app(), "/api/groups/977/2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown ISBN prefix: 977");
}
