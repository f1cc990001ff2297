use super::SlugQueryService;
use crate::{
    application::{
        dto::ProfileSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{ProfileId, ProfileKind, ProfilePath},
};

pub struct ProfilePathQuery {
    pub kind: ProfileKind,
    pub profile_id: i64,
}

impl SlugQueryService {
    pub async fn profile_path(&self, query: ProfilePathQuery) -> ApplicationResult<ProfileSlugDto> {
        let kind = query.kind;
        let id = ProfileId::new(query.profile_id)?;
        let slug = self
            .repo
            .slug_for(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} {id} has no slug")))?;

        Ok(ProfileSlugDto::new(id, ProfilePath::new(kind, slug)))
    }
}
