//! Router-level tests against the in-memory backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hah_admin::backend::{BackendCall, MemoryBackend};
use hah_admin::models::{AppState, ProductRef, Token};
use hah_admin::routes::build_router;

fn app(backend: &Arc<MemoryBackend>) -> Router {
    build_router(AppState::new(backend.clone(), backend.clone(), "/token".into()))
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn new_form_preselects_first_product() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend).oneshot(get("/token/new")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains(r#"<option value="1" selected>CLASSIC</option>"#));
    assert!(html.contains(r#"<option value="2">GOLD</option>"#));
    assert!(!html.contains(r#"id="token-id""#));
    assert!(!backend.calls().iter().any(|c| matches!(c, BackendCall::FetchToken(_))));
}

#[tokio::test]
async fn edit_form_shows_stored_token() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let id = backend.insert_token(Token {
        client_account_name: "acme".into(),
        iin: Some("400000".into()),
        product: Some(ProductRef { id: 3 }),
        ..Default::default()
    });

    let resp = app(&backend)
        .oneshot(get(&format!("/token/{}/edit", id)))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains(r#"id="token-id""#));
    assert!(html.contains(r#"value="acme""#));
    assert!(html.contains(r#"value="400000""#));
    assert!(html.contains(r#"<option value="3" selected>PLATINUM</option>"#));
    assert!(backend.calls().contains(&BackendCall::FetchToken(id)));
}

#[tokio::test]
async fn edit_form_rejects_non_numeric_id() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend).oneshot(get("/token/abc/edit")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn edit_form_for_missing_token_shows_error() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend).oneshot(get("/token/41/edit")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Token 41 not found"));
}

#[tokio::test]
async fn create_redirects_to_list() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend)
        .oneshot(post_form(
            "/token/new",
            "clientAccountName=globex&clientId=42&iin=&type=VISA&token.id=2",
        ))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/token");

    let stored = backend.token(1).expect("token created");
    assert_eq!(stored.client_account_name, "globex");
    assert_eq!(stored.iin, None);
    assert_eq!(stored.product_id(), Some(2));
}

#[tokio::test]
async fn create_with_blank_name_rerenders_with_error() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend)
        .oneshot(post_form("/token/new", "clientAccountName=&name=Draft&token.id=3"))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(resp).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains(r#"value="Draft""#));
    assert!(html.contains(r#"<option value="3" selected>PLATINUM</option>"#));
    assert!(!backend
        .calls()
        .iter()
        .any(|c| matches!(c, BackendCall::CreateToken(_) | BackendCall::UpdateToken(_))));
}

#[tokio::test]
async fn update_keeps_route_id() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let id = backend.insert_token(Token {
        client_account_name: "acme".into(),
        product: Some(ProductRef { id: 1 }),
        ..Default::default()
    });

    let resp = app(&backend)
        .oneshot(post_form(
            &format!("/token/{}/edit", id),
            "id=999&clientAccountName=acme2&token.id=2",
        ))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = backend.token(id).unwrap();
    assert_eq!(stored.client_account_name, "acme2");
    assert_eq!(stored.product_id(), Some(2));
    assert!(backend.token(999).is_none());
}

#[tokio::test]
async fn backend_failure_rerenders_with_message() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let router = app(&backend);
    backend.set_unavailable(true);

    let resp = router
        .oneshot(post_form("/token/new", "clientAccountName=globex&token.id=1"))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let html = body_text(resp).await;
    assert!(html.contains("HTTP 503"));
    assert!(html.contains(r#"value="globex""#));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let backend = Arc::new(MemoryBackend::with_sample_products());
    let resp = app(&backend).oneshot(get("/static/styles.css")).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");
}
