use crate::application::{
    ApplicationResult,
    commands::slugs::{ClaimSlugCommand, ReleaseSlugCommand},
    dto::{ProfileSlugDto, SlugPreviewDto},
    queries::slugs::{PreviewSlugQuery, ProfilePathQuery, ResolveSlugQuery},
};
use crate::domain::profile::ProfileKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

fn parse_kind(raw: &str) -> ApplicationResult<ProfileKind> {
    Ok(raw.parse::<ProfileKind>()?)
}

pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TitleRequest>,
) -> Json<SlugPreviewDto> {
    Json(
        state
            .services
            .slug_queries
            .preview_slug(PreviewSlugQuery {
                title: payload.title,
            }),
    )
}

pub async fn claim_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, profile_id)): Path<(String, i64)>,
    Json(payload): Json<TitleRequest>,
) -> HttpResult<Json<ProfileSlugDto>> {
    let kind = parse_kind(&kind).into_http()?;
    state
        .services
        .slug_commands
        .claim_slug(ClaimSlugCommand {
            kind,
            profile_id,
            title: payload.title,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_profile_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, profile_id)): Path<(String, i64)>,
) -> HttpResult<Json<ProfileSlugDto>> {
    let kind = parse_kind(&kind).into_http()?;
    state
        .services
        .slug_queries
        .profile_path(ProfilePathQuery { kind, profile_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn release_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, profile_id)): Path<(String, i64)>,
) -> HttpResult<Json<ProfileSlugDto>> {
    let kind = parse_kind(&kind).into_http()?;
    state
        .services
        .slug_commands
        .release_slug(ReleaseSlugCommand { kind, profile_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn resolve_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, slug)): Path<(String, String)>,
) -> HttpResult<Json<ProfileSlugDto>> {
    let kind = parse_kind(&kind).into_http()?;
    state
        .services
        .slug_queries
        .resolve_slug(ResolveSlugQuery { kind, slug })
        .await
        .into_http()
        .map(Json)
}
