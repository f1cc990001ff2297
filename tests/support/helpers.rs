// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;

use super::mocks;
use profile_slugs::application::ports::{time::Clock, util::SlugGenerator};
use profile_slugs::application::services::ApplicationServices;
use profile_slugs::domain::profile::ProfileSlugRepository;
use profile_slugs::infrastructure::{
    repositories::InMemoryProfileSlugRepository, util::AsciiSlugGenerator,
};
use profile_slugs::presentation::http::{routes, state::HttpState};

pub fn build_services_with(
    repo: Arc<dyn ProfileSlugRepository>,
    slugger: Arc<dyn SlugGenerator>,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    ApplicationServices::new(repo, clock, slugger)
}

pub fn build_services() -> ApplicationServices {
    build_services_with(
        Arc::new(InMemoryProfileSlugRepository::new()),
        Arc::new(AsciiSlugGenerator),
    )
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(build_services())
}

pub fn make_test_router_with(services: ApplicationServices) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services),
    };
    routes::build_router(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
