// src/presentation/http/routes.rs
use crate::presentation::http::controllers::slugs;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Router with a permissive CORS policy.
pub fn build_router(state: HttpState) -> Router {
    router_with_cors(state, AllowOrigin::from(Any))
}

/// Router restricted to `allowed_origins`. Invalid entries are skipped; when
/// none remain, cross-origin requests are refused rather than opened up.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    router_with_cors(state, origin_list(allowed_origins))
}

fn router_with_cors(state: HttpState, allow_origin: AllowOrigin) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/slugs/preview", post(slugs::preview_slug))
        .route(
            "/api/v1/profiles/{kind}/{id}/slug",
            get(slugs::get_profile_slug)
                .post(slugs::claim_slug)
                .delete(slugs::release_slug),
        )
        .route(
            "/api/v1/profiles/{kind}/by-slug/{slug}",
            get(slugs::resolve_slug),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allow_origin))
        .layer(Extension(state))
}

fn origin_list(allowed_origins: &[String]) -> AllowOrigin {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) if value != "*" => Some(value),
            _ => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("no valid CORS origins configured; cross-origin requests will be refused");
    }
    AllowOrigin::list(origins)
}

fn cors_layer(allow_origin: AllowOrigin) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
