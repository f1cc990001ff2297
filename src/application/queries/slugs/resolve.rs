use super::SlugQueryService;
use crate::{
    application::{
        dto::ProfileSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        profile::{ProfileKind, ProfilePath},
        slug::Slug,
    },
};

pub struct ResolveSlugQuery {
    pub kind: ProfileKind,
    pub slug: String,
}

impl SlugQueryService {
    pub async fn resolve_slug(&self, query: ResolveSlugQuery) -> ApplicationResult<ProfileSlugDto> {
        let kind = query.kind;
        let slug = Slug::new(query.slug)?;
        let id = self
            .repo
            .find_by_slug(kind, &slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))?;

        Ok(ProfileSlugDto::new(id, ProfilePath::new(kind, slug)))
    }
}
