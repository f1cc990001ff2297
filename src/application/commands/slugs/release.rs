// src/application/commands/slugs/release.rs
use super::SlugCommandService;
use crate::{
    application::{
        dto::ProfileSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{ProfileId, ProfileKind, ProfilePath},
};

pub struct ReleaseSlugCommand {
    pub kind: ProfileKind,
    pub profile_id: i64,
}

impl SlugCommandService {
    pub async fn release_slug(
        &self,
        command: ReleaseSlugCommand,
    ) -> ApplicationResult<ProfileSlugDto> {
        let kind = command.kind;
        let id = ProfileId::new(command.profile_id)?;

        let released = self
            .repo
            .release(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} {id} has no slug")))?;

        tracing::info!(%kind, profile_id = %id, slug = %released, "slug released");
        Ok(ProfileSlugDto::new(id, ProfilePath::new(kind, released)))
    }
}
