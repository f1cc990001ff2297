use super::SlugCommandService;
use crate::{
    application::{
        dto::ProfileSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        profile::{ProfileId, ProfileKind, ProfilePath, ProfileTitle},
    },
};

/// Attempts before a claim that keeps losing races gives up.
const MAX_CLAIM_ATTEMPTS: usize = 8;

pub struct ClaimSlugCommand {
    pub kind: ProfileKind,
    pub profile_id: i64,
    pub title: String,
}

impl ClaimSlugCommand {
    pub fn builder() -> ClaimSlugCommandBuilder {
        ClaimSlugCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct ClaimSlugCommandBuilder {
    kind: Option<ProfileKind>,
    profile_id: Option<i64>,
    title: Option<String>,
}

impl ClaimSlugCommandBuilder {
    pub fn kind(mut self, kind: ProfileKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn profile_id(mut self, profile_id: i64) -> Self {
        self.profile_id = Some(profile_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Result<ClaimSlugCommand, &'static str> {
        Ok(ClaimSlugCommand {
            kind: self.kind.ok_or("kind is required")?,
            profile_id: self.profile_id.ok_or("profile_id is required")?,
            title: self.title.ok_or("title is required")?,
        })
    }
}

impl SlugCommandService {
    /// Allocate a unique slug for the profile and record it, replacing any
    /// slug the profile held before.
    pub async fn claim_slug(&self, command: ClaimSlugCommand) -> ApplicationResult<ProfileSlugDto> {
        let kind = command.kind;
        let id = ProfileId::new(command.profile_id)?;
        let title = ProfileTitle::new(command.title)?;

        for attempt in 1..=MAX_CLAIM_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(kind, &title, Some(id))
                .await?;

            // Another claim may take the candidate between lookup and assign.
            match self.repo.assign(kind, id, slug.clone()).await {
                Ok(()) => {
                    tracing::info!(%kind, profile_id = %id, %slug, "slug claimed");
                    return Ok(ProfileSlugDto::new(id, ProfilePath::new(kind, slug)));
                }
                Err(DomainError::Conflict(_)) => {
                    tracing::debug!(
                        %kind,
                        profile_id = %id,
                        %slug,
                        attempt,
                        "slug taken concurrently"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::warn!(%kind, profile_id = %id, title = %title, "slug claim attempts exhausted");
        Err(ApplicationError::conflict(format!(
            "could not claim a unique {kind} slug for {title}"
        )))
    }
}
